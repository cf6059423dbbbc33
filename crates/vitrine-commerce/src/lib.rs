//! Storefront domain types and logic for Vitrine.
//!
//! This crate provides the logical core of a client-side storefront:
//!
//! - **Catalog**: the pre-seeded, read-only product list
//! - **Browse**: the filter/sort/search pipeline over the catalog
//! - **Cart**: the session cart store keyed by (product, size)
//! - **Checkout**: form collection, validation, and the local order record
//!
//! # Example
//!
//! ```rust
//! use vitrine_commerce::prelude::*;
//!
//! let catalog = Catalog::from_products(vec![
//!     Product::new("p1", "Classic Shirt", "Women", "Topwear")
//!         .with_price(Money::new(2500, Currency::USD))
//!         .with_sizes(["S", "M"]),
//! ]);
//!
//! // Browse
//! let criteria = FilterCriteria::new().with_search("shirt");
//! let shown = criteria.apply(catalog.products());
//! assert_eq!(shown.len(), 1);
//!
//! // Cart
//! let mut cart = CartStore::new();
//! let product = shown[0];
//! cart.add_item(
//!     product.id.clone(),
//!     Size::new("M"),
//!     ItemSnapshot::from_product(product),
//! );
//! assert_eq!(cart.item_count(), 1);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod browse;
pub mod cart;
pub mod catalog;
pub mod checkout;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Product};

    // Browse
    pub use crate::browse::{FacetSummary, FilterCriteria, MissingValuePolicy, SortKey};

    // Cart
    pub use crate::cart::{CartLine, CartStore, ItemSnapshot};

    // Checkout
    pub use crate::checkout::{
        CheckoutForm, Coordinates, Country, Order, OrderInvoice, OrderLine, PaymentMethod,
    };
}
