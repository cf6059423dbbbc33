//! Denormalized product details stored on a cart line.

use crate::catalog::Product;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Display details copied from the catalog when an item is first added.
///
/// The snapshot is decoupled from later catalog changes: repeat adds of
/// the same (product, size) key never refresh it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ItemSnapshot {
    /// Product name at add time.
    pub name: String,
    /// Unit price at add time.
    pub price: Option<Money>,
    /// Primary display image at add time.
    pub image: Option<String>,
    /// Description at add time.
    pub description: Option<String>,
}

impl ItemSnapshot {
    /// Create a snapshot with a name and price.
    pub fn new(name: impl Into<String>, price: Option<Money>) -> Self {
        Self {
            name: name.into(),
            price,
            image: None,
            description: None,
        }
    }

    /// Capture a snapshot from a catalog product.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price,
            image: product.primary_image().map(String::from),
            description: product.description.clone(),
        }
    }

    /// Set the display image.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_snapshot_from_product() {
        let product = Product::new("p1", "Classic Shirt", "Women", "Topwear")
            .with_price(Money::new(2500, Currency::USD))
            .with_image("https://img.example/shirt.jpg")
            .with_description("A classic.");

        let snapshot = ItemSnapshot::from_product(&product);
        assert_eq!(snapshot.name, "Classic Shirt");
        assert_eq!(snapshot.price.unwrap().amount_cents, 2500);
        assert_eq!(snapshot.image.as_deref(), Some("https://img.example/shirt.jpg"));
    }
}
