//! External-service ports.
//!
//! The storefront consumes result values from these collaborators and
//! nothing else: calls fire only on explicit user action, are never
//! retried automatically, and have no cancellation semantics. A second
//! identical action issues a new, independent call.

use std::cell::RefCell;
use thiserror::Error;
use vitrine_commerce::checkout::{Coordinates, Country, OrderInvoice};

/// A failed external call.
///
/// One shape for every port: the storefront only ever turns these into
/// a transient notification, so no structured taxonomy is needed.
#[derive(Error, Debug)]
#[error("{0}")]
pub struct PortError(pub String);

impl PortError {
    /// Create a port error with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Resolves device coordinates to a display address.
pub trait ReverseGeocoder {
    /// Resolve coordinates to a single display address string.
    fn resolve(&self, coords: Coordinates) -> Result<String, PortError>;
}

/// Supplies the canonical country catalog for the checkout selector.
pub trait CountrySource {
    /// The country list, in display order.
    fn countries(&self) -> Vec<Country>;
}

/// Delivers the order-confirmation invoice.
///
/// Best effort: a failure still lets the order complete locally.
pub trait OrderDispatcher {
    /// Attempt delivery of the invoice.
    fn dispatch(&self, invoice: &OrderInvoice) -> Result<(), PortError>;
}

/// A fixed country list for tests and the demo tool.
#[derive(Debug, Clone)]
pub struct StaticCountries {
    countries: Vec<Country>,
}

impl StaticCountries {
    /// Create a source over the given list.
    pub fn new(countries: Vec<Country>) -> Self {
        Self { countries }
    }
}

impl Default for StaticCountries {
    fn default() -> Self {
        Self::new(vec![
            Country::new("PK", "Pakistan"),
            Country::new("US", "United States"),
            Country::new("GB", "United Kingdom"),
            Country::new("DE", "Germany"),
            Country::new("FR", "France"),
            Country::new("JP", "Japan"),
        ])
    }
}

impl CountrySource for StaticCountries {
    fn countries(&self) -> Vec<Country> {
        self.countries.clone()
    }
}

/// A dispatcher that records every invoice it is handed.
#[derive(Debug, Default)]
pub struct RecordingDispatcher {
    sent: RefCell<Vec<OrderInvoice>>,
}

impl RecordingDispatcher {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Invoices dispatched so far.
    pub fn sent(&self) -> Vec<OrderInvoice> {
        self.sent.borrow().clone()
    }
}

impl OrderDispatcher for RecordingDispatcher {
    fn dispatch(&self, invoice: &OrderInvoice) -> Result<(), PortError> {
        self.sent.borrow_mut().push(invoice.clone());
        Ok(())
    }
}

/// A dispatcher that always fails delivery.
#[derive(Debug, Default)]
pub struct FailingDispatcher;

impl OrderDispatcher for FailingDispatcher {
    fn dispatch(&self, _invoice: &OrderInvoice) -> Result<(), PortError> {
        Err(PortError::new("invoice delivery failed"))
    }
}

/// A geocoder that returns a fixed address for any coordinates.
#[derive(Debug, Clone)]
pub struct FixedGeocoder {
    address: String,
}

impl FixedGeocoder {
    /// Create a geocoder answering with the given address.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

impl ReverseGeocoder for FixedGeocoder {
    fn resolve(&self, _coords: Coordinates) -> Result<String, PortError> {
        Ok(self.address.clone())
    }
}

/// A geocoder that always fails.
#[derive(Debug, Default)]
pub struct FailingGeocoder;

impl ReverseGeocoder for FailingGeocoder {
    fn resolve(&self, _coords: Coordinates) -> Result<String, PortError> {
        Err(PortError::new("reverse geocoding failed"))
    }
}
