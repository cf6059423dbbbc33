//! Checkout module.
//!
//! Contains the checkout form and its validation, payment method
//! selection, and the locally-completed order record.

mod form;
mod order;
mod payment;

pub use form::{is_valid_email, CheckoutForm, Coordinates, Country};
pub use order::{Order, OrderInvoice, OrderLine};
pub use payment::PaymentMethod;
