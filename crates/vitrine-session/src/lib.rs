//! Session layer for Vitrine.
//!
//! Ties the storefront core together for one UI session: the
//! explicitly-constructed session store object, the external-service
//! ports it consumes, transient notifications, structured action
//! logging, and store configuration.
//!
//! # Example
//!
//! ```rust
//! use vitrine_auth::{MemorySessionStore, SimulatedExchange, SimulatedIdentityProvider};
//! use vitrine_commerce::prelude::*;
//! use vitrine_session::{
//!     FixedGeocoder, RecordingDispatcher, SessionLogger, SessionPorts, StaticCountries,
//!     StoreConfig, StorefrontSession,
//! };
//!
//! let catalog = Catalog::from_products(vec![
//!     Product::new("p1", "Classic Shirt", "Women", "Topwear")
//!         .with_price(Money::new(2500, Currency::USD))
//!         .with_sizes(["S", "M"]),
//! ]);
//!
//! let ports = SessionPorts {
//!     identity: Box::new(SimulatedIdentityProvider::new()),
//!     exchange: Box::new(SimulatedExchange::new()),
//!     session_store: Box::new(MemorySessionStore::new("vitrine.user")),
//!     geocoder: Box::new(FixedGeocoder::new("12 Mall Road, Lahore")),
//!     countries: Box::new(StaticCountries::default()),
//!     dispatcher: Box::new(RecordingDispatcher::new()),
//! };
//!
//! let mut session = StorefrontSession::new(catalog, StoreConfig::default(), ports)
//!     .with_logger(SessionLogger::disabled());
//! session.add_to_cart(&ProductId::new("p1"), Size::new("M"));
//! assert_eq!(session.cart().item_count(), 1);
//! ```

mod config;
mod error;
mod log;
mod notify;
mod ports;
mod session;

pub use config::StoreConfig;
pub use error::SessionError;
pub use log::{LogEntry, LogFormat, LogLevel, SessionLogger};
pub use notify::{Notice, NoticeLevel};
pub use ports::{
    CountrySource, FailingDispatcher, FailingGeocoder, FixedGeocoder, OrderDispatcher, PortError,
    RecordingDispatcher, ReverseGeocoder, StaticCountries,
};
pub use session::{OrderOutcome, SessionPorts, StorefrontSession};
