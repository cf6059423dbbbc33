//! Filter criteria types.

use crate::ids::Size;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Sort options for the product grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortKey {
    /// Sort by newest first.
    #[default]
    Newest,
    /// Sort by oldest first.
    Oldest,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by name A-Z.
    NameAsc,
    /// Sort by name Z-A.
    NameDesc,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Newest => "Newest",
            SortKey::Oldest => "Oldest",
            SortKey::PriceAsc => "Price Low-High",
            SortKey::PriceDesc => "Price High-Low",
            SortKey::NameAsc => "Name A-Z",
            SortKey::NameDesc => "Name Z-A",
        }
    }

    /// Parse a sort key string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "newest" => Some(SortKey::Newest),
            "oldest" => Some(SortKey::Oldest),
            "price-asc" => Some(SortKey::PriceAsc),
            "price-desc" => Some(SortKey::PriceDesc),
            "name-asc" => Some(SortKey::NameAsc),
            "name-desc" => Some(SortKey::NameDesc),
            _ => None,
        }
    }
}

/// How products missing a price or creation date behave during
/// range-filtering and sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MissingValuePolicy {
    /// Treat the missing value as zero (free / earliest).
    #[default]
    TreatAsZero,
    /// Exclude incomplete records from price filters and from sorts
    /// that need the missing field.
    Exclude,
}

/// User-selected constraints for the catalog page.
///
/// Rebuilt per view session, never persisted. Empty selection sets are
/// pass-through (no filtering), not "match nothing".
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FilterCriteria {
    /// Selected categories.
    pub categories: Vec<String>,
    /// Selected sub-categories.
    pub sub_categories: Vec<String>,
    /// Selected sizes.
    pub sizes: Vec<Size>,
    /// Selected materials.
    pub materials: Vec<String>,
    /// Inclusive price range; `None` means no price constraint.
    pub price_range: Option<(Money, Money)>,
    /// Free-text search against product names.
    pub search: String,
    /// Sort order applied after filtering.
    pub sort: SortKey,
    /// Policy for records missing a price or date.
    pub missing_values: MissingValuePolicy,
}

impl FilterCriteria {
    /// Create criteria with no constraints (matches the whole catalog).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search string.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Add a category to the selection.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }

    /// Add a sub-category to the selection.
    pub fn with_sub_category(mut self, sub_category: impl Into<String>) -> Self {
        self.sub_categories.push(sub_category.into());
        self
    }

    /// Add a size to the selection.
    pub fn with_size(mut self, size: impl Into<Size>) -> Self {
        self.sizes.push(size.into());
        self
    }

    /// Add a material to the selection.
    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.materials.push(material.into());
        self
    }

    /// Set the inclusive price range.
    pub fn with_price_range(mut self, min: Money, max: Money) -> Self {
        self.price_range = Some((min, max));
        self
    }

    /// Set the sort order.
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Set the missing-value policy.
    pub fn with_missing_values(mut self, policy: MissingValuePolicy) -> Self {
        self.missing_values = policy;
        self
    }

    /// Toggle a selection value: remove it if present, add it otherwise.
    ///
    /// Matches the checkbox behavior of the filter sidebar.
    pub fn toggle_category(&mut self, category: &str) {
        toggle(&mut self.categories, category.to_string());
    }

    /// Toggle a sub-category selection.
    pub fn toggle_sub_category(&mut self, sub_category: &str) {
        toggle(&mut self.sub_categories, sub_category.to_string());
    }

    /// Toggle a size selection.
    pub fn toggle_size(&mut self, size: &Size) {
        toggle(&mut self.sizes, size.clone());
    }

    /// Toggle a material selection.
    pub fn toggle_material(&mut self, material: &str) {
        toggle(&mut self.materials, material.to_string());
    }

    /// Clear every selection, keeping search and sort.
    pub fn clear_filters(&mut self) {
        self.categories.clear();
        self.sub_categories.clear();
        self.sizes.clear();
        self.materials.clear();
        self.price_range = None;
    }
}

fn toggle<T: PartialEq>(selection: &mut Vec<T>, value: T) {
    if let Some(pos) = selection.iter().position(|v| v == &value) {
        selection.remove(pos);
    } else {
        selection.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_round_trip() {
        for key in [
            SortKey::Newest,
            SortKey::Oldest,
            SortKey::PriceAsc,
            SortKey::PriceDesc,
            SortKey::NameAsc,
            SortKey::NameDesc,
        ] {
            assert_eq!(SortKey::from_str(key.as_str()), Some(key));
        }
        assert_eq!(SortKey::from_str("relevance"), None);
    }

    #[test]
    fn test_toggle_selection() {
        let mut criteria = FilterCriteria::new();
        criteria.toggle_category("Men");
        assert_eq!(criteria.categories, vec!["Men"]);

        criteria.toggle_category("Men");
        assert!(criteria.categories.is_empty());
    }

    #[test]
    fn test_clear_filters_keeps_search_and_sort() {
        let mut criteria = FilterCriteria::new()
            .with_search("shirt")
            .with_sort(SortKey::PriceAsc)
            .with_category("Men");

        criteria.clear_filters();
        assert!(criteria.categories.is_empty());
        assert_eq!(criteria.search, "shirt");
        assert_eq!(criteria.sort, SortKey::PriceAsc);
    }
}
