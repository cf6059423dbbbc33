//! Store configuration.

use serde::{Deserialize, Serialize};
use vitrine_commerce::money::{Currency, Money};

/// Storefront configuration, fixed for the lifetime of a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Display and settlement currency.
    pub currency: Currency,
    /// Flat delivery fee added to every order.
    pub delivery_fee: Money,
    /// Well-known key the persisted user record lives under.
    pub session_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            currency: Currency::USD,
            delivery_fee: Money::new(1000, Currency::USD),
            session_key: "vitrine.user".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.currency, Currency::USD);
        assert_eq!(config.delivery_fee.amount_cents, 1000);
        assert_eq!(config.session_key, "vitrine.user");
    }
}
