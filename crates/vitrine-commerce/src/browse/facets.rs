//! Facet extraction for the filter sidebar.

use crate::catalog::Product;
use crate::ids::Size;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Distinct filterable values over a product list, plus price bounds.
///
/// Values keep first-seen order so the sidebar renders stably across
/// re-runs. Products missing a price count as zero for the bounds.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FacetSummary {
    /// Distinct categories.
    pub categories: Vec<String>,
    /// Distinct sub-categories.
    pub sub_categories: Vec<String>,
    /// Distinct sizes.
    pub sizes: Vec<Size>,
    /// Distinct materials (products without one contribute nothing).
    pub materials: Vec<String>,
    /// Lowest price across the list.
    pub min_price: Option<Money>,
    /// Highest price across the list.
    pub max_price: Option<Money>,
}

impl FacetSummary {
    /// Collect facets from a product list.
    pub fn from_products(products: &[Product]) -> Self {
        let mut summary = Self::default();

        for product in products {
            push_unique(&mut summary.categories, product.category.clone());
            push_unique(&mut summary.sub_categories, product.sub_category.clone());
            for size in &product.sizes {
                if !summary.sizes.contains(size) {
                    summary.sizes.push(size.clone());
                }
            }
            if let Some(material) = &product.material {
                push_unique(&mut summary.materials, material.clone());
            }
        }

        if !products.is_empty() {
            let currency = products
                .iter()
                .find_map(|p| p.price.map(|m| m.currency))
                .unwrap_or(Currency::USD);
            let cents = |p: &Product| p.price.map(|m| m.amount_cents).unwrap_or(0);

            let min = products.iter().map(cents).min().unwrap_or(0);
            let max = products.iter().map(cents).max().unwrap_or(0);
            summary.min_price = Some(Money::new(min, currency));
            summary.max_price = Some(Money::new(max, currency));
        }

        summary
    }
}

fn push_unique(values: &mut Vec<String>, value: String) {
    if !values.contains(&value) {
        values.push(value);
    }
}
