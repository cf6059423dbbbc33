//! The filter/sort pipeline over the catalog.
//!
//! A pure function chain: each stage narrows the candidate set, then a
//! stable sort orders the survivors. No stage errors and nothing is
//! cached, so the pipeline is safe to re-run on every keystroke or
//! selection change.

use crate::browse::{FilterCriteria, MissingValuePolicy, SortKey};
use crate::catalog::Product;
use std::cmp::Ordering;

impl FilterCriteria {
    /// Apply the criteria to a product list, returning matches in sort
    /// order.
    ///
    /// Stage order: search, category, sub-category, size, material,
    /// price range, then sort. Ties under the sort key keep their
    /// relative order from the input list.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let mut matched: Vec<&Product> = products
            .iter()
            .filter(|p| self.matches_search(p))
            .filter(|p| self.matches_category(p))
            .filter(|p| self.matches_sub_category(p))
            .filter(|p| self.matches_size(p))
            .filter(|p| self.matches_material(p))
            .filter(|p| self.matches_price(p))
            .collect();

        if self.missing_values == MissingValuePolicy::Exclude {
            match self.sort {
                SortKey::Newest | SortKey::Oldest => matched.retain(|p| p.created_at.is_some()),
                SortKey::PriceAsc | SortKey::PriceDesc => matched.retain(|p| p.price.is_some()),
                SortKey::NameAsc | SortKey::NameDesc => {}
            }
        }

        self.sort_matched(&mut matched);
        matched
    }

    /// Case-insensitive substring match against the product name.
    /// An empty search string matches everything.
    fn matches_search(&self, product: &Product) -> bool {
        if self.search.is_empty() {
            return true;
        }
        product
            .name
            .to_lowercase()
            .contains(&self.search.to_lowercase())
    }

    /// Empty selection = pass-through, not "match nothing".
    fn matches_category(&self, product: &Product) -> bool {
        self.categories.is_empty() || self.categories.contains(&product.category)
    }

    fn matches_sub_category(&self, product: &Product) -> bool {
        self.sub_categories.is_empty() || self.sub_categories.contains(&product.sub_category)
    }

    /// At-least-one-match semantics: the product passes when any of its
    /// sizes is selected, not only when all of them are.
    fn matches_size(&self, product: &Product) -> bool {
        self.sizes.is_empty() || product.sizes.iter().any(|s| self.sizes.contains(s))
    }

    /// A product without a material only passes an empty selection.
    fn matches_material(&self, product: &Product) -> bool {
        if self.materials.is_empty() {
            return true;
        }
        product
            .material
            .as_ref()
            .is_some_and(|m| self.materials.contains(m))
    }

    /// Inclusive on both ends. A missing price counts as zero under
    /// `TreatAsZero` and fails the range under `Exclude`.
    fn matches_price(&self, product: &Product) -> bool {
        let Some((min, max)) = self.price_range else {
            return true;
        };
        let cents = match (product.price, self.missing_values) {
            (Some(price), _) => price.amount_cents,
            (None, MissingValuePolicy::TreatAsZero) => 0,
            (None, MissingValuePolicy::Exclude) => return false,
        };
        cents >= min.amount_cents && cents <= max.amount_cents
    }

    fn sort_matched(&self, matched: &mut [&Product]) {
        // Vec::sort_by is stable; equal keys keep input order.
        match self.sort {
            SortKey::Newest => matched.sort_by(|a, b| created_ts(b).cmp(&created_ts(a))),
            SortKey::Oldest => matched.sort_by(|a, b| created_ts(a).cmp(&created_ts(b))),
            SortKey::PriceAsc => matched.sort_by(|a, b| price_cents(a).cmp(&price_cents(b))),
            SortKey::PriceDesc => matched.sort_by(|a, b| price_cents(b).cmp(&price_cents(a))),
            SortKey::NameAsc => matched.sort_by(|a, b| compare_names(a, b)),
            SortKey::NameDesc => matched.sort_by(|a, b| compare_names(b, a)),
        }
    }
}

fn price_cents(product: &Product) -> i64 {
    product.price.map(|m| m.amount_cents).unwrap_or(0)
}

fn created_ts(product: &Product) -> i64 {
    product.created_at.unwrap_or(0)
}

fn compare_names(a: &Product, b: &Product) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}
