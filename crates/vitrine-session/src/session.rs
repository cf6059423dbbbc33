//! The session store object.
//!
//! One `StorefrontSession` per UI session: constructed explicitly at
//! session start, passed by reference to consumers, torn down at
//! session end. No ambient global lookup. The cart dies with the
//! session; the signed-in user survives only through the session store
//! port.

use crate::config::StoreConfig;
use crate::error::SessionError;
use crate::log::SessionLogger;
use crate::notify::Notice;
use crate::ports::{CountrySource, OrderDispatcher, ReverseGeocoder};
use vitrine_auth::{CredentialExchange, IdentityProvider, SessionStore, UserRecord};
use vitrine_commerce::browse::{FacetSummary, FilterCriteria};
use vitrine_commerce::cart::{CartStore, ItemSnapshot};
use vitrine_commerce::catalog::{Catalog, Product};
use vitrine_commerce::checkout::{
    CheckoutForm, Coordinates, Country, Order, PaymentMethod,
};
use vitrine_commerce::ids::{ProductId, Size};

/// External collaborators, injected at session start.
///
/// Boxed traits so the simulated implementations swap out for real
/// ones without touching the session.
pub struct SessionPorts {
    /// Email/password directory.
    pub identity: Box<dyn IdentityProvider>,
    /// OAuth code exchange.
    pub exchange: Box<dyn CredentialExchange>,
    /// Persistence for the signed-in user.
    pub session_store: Box<dyn SessionStore>,
    /// Coordinates-to-address resolution.
    pub geocoder: Box<dyn ReverseGeocoder>,
    /// Country catalog for the checkout selector.
    pub countries: Box<dyn CountrySource>,
    /// Order-confirmation delivery.
    pub dispatcher: Box<dyn OrderDispatcher>,
}

impl std::fmt::Debug for SessionPorts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionPorts").finish_non_exhaustive()
    }
}

/// Result of placing an order.
///
/// The order always completes locally; `invoice_sent` records whether
/// the best-effort confirmation dispatch succeeded.
#[derive(Debug, Clone)]
pub struct OrderOutcome {
    /// The locally-completed order.
    pub order: Order,
    /// Whether the confirmation invoice was delivered.
    pub invoice_sent: bool,
}

/// The authoritative state for one storefront session.
#[derive(Debug)]
pub struct StorefrontSession {
    catalog: Catalog,
    cart: CartStore,
    user: Option<UserRecord>,
    config: StoreConfig,
    ports: SessionPorts,
    notices: Vec<Notice>,
    logger: SessionLogger,
}

impl StorefrontSession {
    /// Start a session over a pre-seeded catalog.
    pub fn new(catalog: Catalog, config: StoreConfig, ports: SessionPorts) -> Self {
        let logger = SessionLogger::new(generate_session_id());
        logger.info(
            "session.start",
            "session started",
            &[("products", catalog.len().to_string())],
        );
        Self {
            catalog,
            cart: CartStore::new(),
            user: None,
            config,
            ports,
            notices: Vec::new(),
            logger,
        }
    }

    /// Replace the logger (tests, alternate formats).
    pub fn with_logger(mut self, logger: SessionLogger) -> Self {
        self.logger = logger;
        self
    }

    // --- catalog ---

    /// The catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Look up a product; `None` renders as the not-found view state.
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.catalog.get(id)
    }

    /// Run the filter/sort pipeline over the catalog.
    pub fn browse(&self, criteria: &FilterCriteria) -> Vec<&Product> {
        criteria.apply(self.catalog.products())
    }

    /// Facets for the filter sidebar.
    pub fn facets(&self) -> FacetSummary {
        FacetSummary::from_products(self.catalog.products())
    }

    // --- cart ---

    /// The cart, read-only; mutations go through the session.
    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Add one unit of (product, size) to the cart.
    ///
    /// An unselected size or an unknown product id surfaces a notice
    /// and leaves the cart untouched.
    pub fn add_to_cart(&mut self, product_id: &ProductId, size: Size) -> bool {
        if size.is_empty() {
            self.notices.push(Notice::error("Please select a size."));
            return false;
        }
        let Some(product) = self.catalog.get(product_id) else {
            self.logger.warn(
                "cart.add",
                "unknown product",
                &[("product", product_id.to_string())],
            );
            self.notices.push(Notice::error("Product not found."));
            return false;
        };

        let snapshot = ItemSnapshot::from_product(product);
        self.cart.add_item(product_id.clone(), size.clone(), snapshot);
        self.logger.info(
            "cart.add",
            "item added",
            &[
                ("product", product_id.to_string()),
                ("size", size.to_string()),
                ("items", self.cart.item_count().to_string()),
            ],
        );
        true
    }

    /// Remove the cart line for (product, size).
    pub fn remove_from_cart(&mut self, product_id: &ProductId, size: &Size) -> bool {
        let removed = self.cart.remove_item(product_id, size);
        if removed {
            self.logger.info(
                "cart.remove",
                "item removed",
                &[
                    ("product", product_id.to_string()),
                    ("size", size.to_string()),
                ],
            );
        }
        removed
    }

    /// Increase the quantity of a cart line by one.
    pub fn increase_quantity(&mut self, product_id: &ProductId, size: &Size) -> bool {
        self.cart.increase_quantity(product_id, size)
    }

    /// Decrease the quantity of a cart line by one, floored at 1.
    pub fn decrease_quantity(&mut self, product_id: &ProductId, size: &Size) -> bool {
        self.cart.decrease_quantity(product_id, size)
    }

    // --- auth ---

    /// The signed-in user, if any.
    pub fn user(&self) -> Option<&UserRecord> {
        self.user.as_ref()
    }

    /// Load a persisted user at session start, if one exists.
    pub fn restore(&mut self) -> bool {
        match self.ports.session_store.load() {
            Some(user) => {
                self.logger.info(
                    "auth.restore",
                    "session restored",
                    &[("user", user.id.to_string())],
                );
                self.user = Some(user);
                true
            }
            None => false,
        }
    }

    /// Sign in with email and password.
    pub fn sign_in(&mut self, email: &str, password: &str) -> Result<(), SessionError> {
        let result = self.ports.identity.sign_in(email, password);
        self.finish_auth(result, "auth.sign_in", "Login successful!")
    }

    /// Register a new account.
    pub fn sign_up(&mut self, name: &str, email: &str, password: &str) -> Result<(), SessionError> {
        let result = self.ports.identity.sign_up(name, email, password);
        self.finish_auth(result, "auth.sign_up", "Sign up successful!")
    }

    /// Finish an OAuth redirect by exchanging the authorization code.
    pub fn complete_oauth(&mut self, code: &str) -> Result<(), SessionError> {
        let result = self
            .ports
            .exchange
            .exchange(code)
            .map(|profile| profile.into_user());
        self.finish_auth(result, "auth.oauth", "Login successful!")
    }

    fn finish_auth(
        &mut self,
        result: Result<UserRecord, vitrine_auth::AuthError>,
        action: &str,
        success_message: &str,
    ) -> Result<(), SessionError> {
        match result {
            Ok(user) => {
                self.ports.session_store.save(&user);
                self.logger
                    .info(action, "signed in", &[("user", user.id.to_string())]);
                self.user = Some(user);
                self.notices.push(Notice::success(success_message));
                Ok(())
            }
            Err(err) => {
                let err = SessionError::from(err);
                self.logger
                    .error(action, "sign-in failed", &[("error", err.to_string())]);
                self.notices.push(Notice::error(err.user_message()));
                Err(err)
            }
        }
    }

    /// Sign out: forget the user locally and clear the persisted record.
    pub fn logout(&mut self) {
        self.ports.session_store.clear();
        if self.user.take().is_some() {
            self.logger.info("auth.logout", "signed out", &[]);
        }
    }

    // --- checkout ---

    /// Countries for the checkout selector.
    pub fn countries(&self) -> Vec<Country> {
        self.ports.countries.countries()
    }

    /// Resolve device coordinates to a display address.
    ///
    /// Failure surfaces a notice and leaves the form untouched; the
    /// call is not retried automatically.
    pub fn resolve_address(&mut self, coords: Coordinates) -> Result<String, SessionError> {
        match self.ports.geocoder.resolve(coords) {
            Ok(address) => {
                self.notices
                    .push(Notice::success("Address fetched from your location!"));
                self.logger.info("checkout.geocode", "address resolved", &[]);
                Ok(address)
            }
            Err(err) => {
                self.logger.error(
                    "checkout.geocode",
                    "reverse geocoding failed",
                    &[("error", err.to_string())],
                );
                self.notices
                    .push(Notice::error("Could not retrieve address from location."));
                Err(err.into())
            }
        }
    }

    /// Place the order.
    ///
    /// Validation runs synchronously and blocks progression; once it
    /// passes the order completes locally no matter what the
    /// confirmation dispatch does. Dispatch failure degrades to an
    /// error notice, never a rollback. The cart is left as-is, matching
    /// the explicit-removal lifecycle.
    pub fn place_order(
        &mut self,
        form: &CheckoutForm,
        payment: Option<PaymentMethod>,
    ) -> Result<OrderOutcome, SessionError> {
        let order = self
            .build_order(form, payment)
            .inspect_err(|err| {
                self.notices.push(Notice::error(err.user_message()));
                self.logger.warn(
                    "checkout.submit",
                    "order rejected",
                    &[("error", err.to_string())],
                );
            })?;

        let invoice = order.invoice();
        let invoice_sent = match self.ports.dispatcher.dispatch(&invoice) {
            Ok(()) => {
                self.notices
                    .push(Notice::success("Order placed! Invoice sent to your email."));
                true
            }
            Err(err) => {
                self.logger.error(
                    "checkout.dispatch",
                    "invoice delivery failed",
                    &[("order", order.id.to_string()), ("error", err.to_string())],
                );
                self.notices.push(Notice::error(
                    "Order placed, but failed to send invoice email.",
                ));
                false
            }
        };

        self.logger.info(
            "checkout.submit",
            "order placed",
            &[
                ("order", order.id.to_string()),
                ("total", order.grand_total.display_amount()),
                ("invoice_sent", invoice_sent.to_string()),
            ],
        );

        Ok(OrderOutcome {
            order,
            invoice_sent,
        })
    }

    fn build_order(
        &self,
        form: &CheckoutForm,
        payment: Option<PaymentMethod>,
    ) -> Result<Order, SessionError> {
        if self.cart.is_empty() {
            return Err(vitrine_commerce::CommerceError::EmptyCart.into());
        }
        form.validate()?;
        let payment = payment.ok_or_else(|| {
            vitrine_commerce::CommerceError::Validation(
                "Please select a payment method.".to_string(),
            )
        })?;
        let order = Order::from_cart(
            &self.cart,
            form,
            payment,
            self.config.currency,
            self.config.delivery_fee,
        )?;
        Ok(order)
    }

    // --- notices ---

    /// Drain accumulated notices for display.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// The store configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }
}

/// Generate a session ID from the clock.
fn generate_session_id() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    format!("sess_{:x}", ts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{
        FailingDispatcher, FailingGeocoder, FixedGeocoder, RecordingDispatcher, StaticCountries,
    };
    use crate::notify::NoticeLevel;
    use vitrine_auth::{MemorySessionStore, SimulatedExchange, SimulatedIdentityProvider};
    use vitrine_commerce::money::{Currency, Money};

    fn usd(cents: i64) -> Money {
        Money::new(cents, Currency::USD)
    }

    fn catalog() -> Catalog {
        Catalog::from_products(vec![
            Product::new("p1", "Classic Shirt", "Women", "Topwear")
                .with_price(usd(2500))
                .with_sizes(["S", "M"])
                .with_image("https://img.example/shirt.jpg"),
            Product::new("p2", "Wool Pant", "Men", "Bottomwear")
                .with_price(usd(4000))
                .with_sizes(["L"]),
        ])
    }

    fn ports() -> SessionPorts {
        SessionPorts {
            identity: Box::new(SimulatedIdentityProvider::new()),
            exchange: Box::new(SimulatedExchange::new()),
            session_store: Box::new(MemorySessionStore::new("vitrine.user")),
            geocoder: Box::new(FixedGeocoder::new("12 Mall Road, Lahore, Pakistan")),
            countries: Box::new(StaticCountries::default()),
            dispatcher: Box::new(RecordingDispatcher::new()),
        }
    }

    fn session() -> StorefrontSession {
        StorefrontSession::new(catalog(), StoreConfig::default(), ports())
            .with_logger(SessionLogger::disabled())
    }

    fn filled_form() -> CheckoutForm {
        CheckoutForm {
            name: "Jane Doe".to_string(),
            phone: "+92 300 1234567".to_string(),
            email: "jane@example.com".to_string(),
            address: "12 Mall Road".to_string(),
            country: Some(Country::new("PK", "Pakistan")),
            state: "Punjab".to_string(),
            city: "Lahore".to_string(),
            zip: "54000".to_string(),
            ..CheckoutForm::default()
        }
    }

    #[test]
    fn test_add_to_cart_snapshots_product() {
        let mut session = session();
        assert!(session.add_to_cart(&ProductId::new("p1"), Size::new("M")));

        let line = session
            .cart()
            .get(&ProductId::new("p1"), &Size::new("M"))
            .unwrap();
        assert_eq!(line.details.name, "Classic Shirt");
        assert_eq!(line.details.price.unwrap().amount_cents, 2500);
        assert_eq!(
            line.details.image.as_deref(),
            Some("https://img.example/shirt.jpg")
        );
    }

    #[test]
    fn test_add_unknown_product_is_a_notice_not_a_mutation() {
        let mut session = session();
        assert!(!session.add_to_cart(&ProductId::new("ghost"), Size::new("M")));
        assert!(session.cart().is_empty());

        let notices = session.take_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Error);
    }

    #[test]
    fn test_add_without_size_is_blocked() {
        let mut session = session();
        assert!(!session.add_to_cart(&ProductId::new("p1"), Size::new("")));
        assert!(session.cart().is_empty());
        assert!(session.take_notices()[0].message.contains("size"));
    }

    #[test]
    fn test_browse_delegates_to_pipeline() {
        let session = session();
        let criteria = FilterCriteria::new().with_search("pant");
        let shown = session.browse(&criteria);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].id.as_str(), "p2");
    }

    #[test]
    fn test_sign_in_and_logout() {
        let mut session = session();
        session.sign_in("jane@example.com", "secret1").unwrap();
        assert_eq!(session.user().unwrap().name, "jane");

        session.logout();
        assert!(session.user().is_none());
        // The persisted record is gone too.
        assert!(!session.restore());
    }

    #[test]
    fn test_sign_in_validation_failure_emits_notice() {
        let mut session = session();
        let err = session.sign_in("jane@example.com", "abc").unwrap_err();
        assert!(err.is_validation());
        assert!(session.user().is_none());

        let notices = session.take_notices();
        assert!(notices[0].message.contains("at least 6"));
    }

    #[test]
    fn test_oauth_exchange_failure_leaves_state_intact() {
        let mut session = StorefrontSession::new(
            catalog(),
            StoreConfig::default(),
            SessionPorts {
                exchange: Box::new(SimulatedExchange::failing()),
                ..ports()
            },
        )
        .with_logger(SessionLogger::disabled());

        session.add_to_cart(&ProductId::new("p1"), Size::new("M"));
        assert!(session.complete_oauth("4/0AXcode").is_err());

        // Local state never rolls back because of an external failure.
        assert!(session.user().is_none());
        assert_eq!(session.cart().item_count(), 1);
    }

    #[test]
    fn test_restore_round_trip() {
        let store = MemorySessionStore::new("vitrine.user");
        let user = UserRecord::email_user(
            vitrine_commerce::ids::UserId::new("u1"),
            "Jane",
            "jane@example.com",
        );
        store.save(&user);

        let mut session = StorefrontSession::new(
            catalog(),
            StoreConfig::default(),
            SessionPorts {
                session_store: Box::new(store),
                ..ports()
            },
        )
        .with_logger(SessionLogger::disabled());

        assert!(session.restore());
        assert_eq!(session.user().unwrap().email, "jane@example.com");
    }

    #[test]
    fn test_place_order_happy_path() {
        let mut session = session();
        session.add_to_cart(&ProductId::new("p1"), Size::new("M"));
        session.increase_quantity(&ProductId::new("p1"), &Size::new("M"));

        let outcome = session
            .place_order(&filled_form(), Some(PaymentMethod::CashOnDelivery))
            .unwrap();

        assert!(outcome.invoice_sent);
        // 2 * 2500 + 1000 delivery fee
        assert_eq!(outcome.order.grand_total.amount_cents, 6000);
    }

    #[test]
    fn test_place_order_with_empty_cart_is_rejected() {
        let mut session = session();
        let err = session
            .place_order(&filled_form(), Some(PaymentMethod::Card))
            .unwrap_err();
        assert_eq!(err.user_message(), "Your cart is empty.");
    }

    #[test]
    fn test_place_order_requires_payment_method() {
        let mut session = session();
        session.add_to_cart(&ProductId::new("p1"), Size::new("M"));

        let err = session.place_order(&filled_form(), None).unwrap_err();
        assert!(err.user_message().contains("payment method"));
        assert!(err.is_validation());
    }

    #[test]
    fn test_dispatch_failure_still_completes_order() {
        let mut session = StorefrontSession::new(
            catalog(),
            StoreConfig::default(),
            SessionPorts {
                dispatcher: Box::new(FailingDispatcher),
                ..ports()
            },
        )
        .with_logger(SessionLogger::disabled());

        session.add_to_cart(&ProductId::new("p1"), Size::new("M"));
        let outcome = session
            .place_order(&filled_form(), Some(PaymentMethod::Card))
            .unwrap();

        assert!(!outcome.invoice_sent);
        let notices = session.take_notices();
        let last = notices.last().unwrap();
        assert_eq!(last.level, NoticeLevel::Error);
        assert!(last.message.contains("Order placed"));
    }

    #[test]
    fn test_resolve_address_failure_is_a_notice() {
        let mut session = StorefrontSession::new(
            catalog(),
            StoreConfig::default(),
            SessionPorts {
                geocoder: Box::new(FailingGeocoder),
                ..ports()
            },
        )
        .with_logger(SessionLogger::disabled());

        assert!(session.resolve_address(Coordinates::new(31.5, 74.3)).is_err());
        let notices = session.take_notices();
        assert!(notices[0].message.contains("Could not retrieve address"));
    }

    #[test]
    fn test_take_notices_drains() {
        let mut session = session();
        session.add_to_cart(&ProductId::new("ghost"), Size::new("M"));
        assert_eq!(session.take_notices().len(), 1);
        assert!(session.take_notices().is_empty());
    }
}
