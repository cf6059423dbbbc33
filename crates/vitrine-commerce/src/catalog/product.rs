//! Product types.

use crate::ids::{ProductId, Size};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are read-only to the storefront core: the identifier is
/// unique across the catalog and immutable for the lifetime of the
/// session. Price and creation date are optional because seeded records
/// occasionally lack them; how such records sort and range-filter is
/// decided by the browse pipeline, not here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Full description.
    pub description: Option<String>,
    /// Unit price.
    pub price: Option<Money>,
    /// Category (e.g., "Men").
    pub category: String,
    /// Sub-category (e.g., "Topwear").
    pub sub_category: String,
    /// Sizes this product is available in.
    pub sizes: Vec<Size>,
    /// Material (e.g., "Wool").
    pub material: Option<String>,
    /// Unix timestamp of creation.
    pub created_at: Option<i64>,
    /// Image URLs; the first entry is the primary display image.
    pub images: Vec<String>,
}

impl Product {
    /// Create a new product with the required display fields.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: impl Into<String>,
        sub_category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            price: None,
            category: category.into(),
            sub_category: sub_category.into(),
            sizes: Vec::new(),
            material: None,
            created_at: None,
            images: Vec::new(),
        }
    }

    /// Set the unit price.
    pub fn with_price(mut self, price: Money) -> Self {
        self.price = Some(price);
        self
    }

    /// Set the available sizes.
    pub fn with_sizes(mut self, sizes: impl IntoIterator<Item = impl Into<Size>>) -> Self {
        self.sizes = sizes.into_iter().map(Into::into).collect();
        self
    }

    /// Set the material.
    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = Some(material.into());
        self
    }

    /// Set the creation timestamp.
    pub fn with_created_at(mut self, ts: i64) -> Self {
        self.created_at = Some(ts);
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add an image URL.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.images.push(url.into());
        self
    }

    /// Get the primary display image, if any.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Check whether the product is offered in the given size.
    pub fn has_size(&self, size: &Size) -> bool {
        self.sizes.contains(size)
    }
}
