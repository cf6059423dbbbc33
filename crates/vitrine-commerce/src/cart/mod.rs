//! Shopping cart module.
//!
//! Contains the cart store, its line items, and the denormalized
//! product snapshot captured at add time.

mod cart;
mod snapshot;

pub use cart::{CartLine, CartStore};
pub use snapshot::ItemSnapshot;
