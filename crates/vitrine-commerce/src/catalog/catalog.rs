//! The pre-seeded product catalog.

use crate::catalog::Product;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// An ordered, read-only sequence of products.
///
/// The catalog is loaded once at session start from a static product
/// source and never mutated afterwards. Lookup misses are a normal
/// outcome (the view renders a not-found state), never an error.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from a pre-seeded product list.
    ///
    /// The input order is preserved; it is the tie-break order for
    /// stable sorting in the browse pipeline.
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Get a product by ID.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// All products, in seed order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Iterate over all products.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lookup() {
        let catalog = Catalog::from_products(vec![
            Product::new("p1", "Classic Shirt", "Women", "Topwear"),
            Product::new("p2", "Wool Pant", "Men", "Bottomwear"),
        ]);

        assert_eq!(catalog.len(), 2);
        assert!(catalog.get(&ProductId::new("p2")).is_some());
        assert!(catalog.get(&ProductId::new("missing")).is_none());
    }

    #[test]
    fn test_catalog_preserves_seed_order() {
        let catalog = Catalog::from_products(vec![
            Product::new("b", "Second", "Men", "Topwear"),
            Product::new("a", "First", "Men", "Topwear"),
        ]);

        let ids: Vec<&str> = catalog.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }
}
