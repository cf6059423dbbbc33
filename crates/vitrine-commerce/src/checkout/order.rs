//! Order types.

use crate::cart::CartStore;
use crate::checkout::{CheckoutForm, PaymentMethod};
use crate::error::CommerceError;
use crate::ids::OrderId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A line on a completed order: the display name and quantity captured
/// from the cart at submit time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    /// Product name from the cart snapshot.
    pub name: String,
    /// Size label.
    pub size: String,
    /// Quantity ordered.
    pub quantity: u32,
    /// Unit price from the cart snapshot.
    pub unit_price: Option<Money>,
}

impl OrderLine {
    /// Short summary for the invoice, e.g. "Classic Shirt (x2)".
    pub fn summary(&self) -> String {
        format!("{} (x{})", self.name, self.quantity)
    }
}

/// A locally-completed order.
///
/// The order exists as soon as validation passes; confirmation dispatch
/// is best-effort and never rolls it back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Recipient full name.
    pub recipient: String,
    /// Recipient email.
    pub email: String,
    /// Ordered items.
    pub lines: Vec<OrderLine>,
    /// Item total before shipping.
    pub item_total: Money,
    /// Flat delivery fee.
    pub shipping_fee: Money,
    /// Grand total charged.
    pub grand_total: Money,
    /// Single-line shipping address.
    pub shipping_address: String,
    /// Chosen payment method.
    pub payment: PaymentMethod,
    /// Optional order notes.
    pub notes: Option<String>,
    /// Location note, if the user shared a location.
    pub location_note: Option<String>,
    /// Unix timestamp of creation.
    pub created_at: i64,
}

impl Order {
    /// Assemble an order from the cart and a validated checkout form.
    ///
    /// Fails on an empty cart, a form that does not validate, or a
    /// money overflow; otherwise the order completes locally no matter
    /// what later dispatch does.
    pub fn from_cart(
        cart: &CartStore,
        form: &CheckoutForm,
        payment: PaymentMethod,
        currency: Currency,
        shipping_fee: Money,
    ) -> Result<Self, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        form.validate()?;

        let lines: Vec<OrderLine> = cart
            .lines()
            .iter()
            .map(|l| OrderLine {
                name: l.details.name.clone(),
                size: l.size.as_str().to_string(),
                quantity: l.quantity,
                unit_price: l.details.price,
            })
            .collect();

        let item_total = cart.subtotal(currency);
        let grand_total = item_total
            .try_add(&shipping_fee)
            .ok_or(CommerceError::Overflow)?;

        Ok(Self {
            id: OrderId::generate(),
            recipient: form.name.clone(),
            email: form.email.trim().to_string(),
            lines,
            item_total,
            shipping_fee,
            grand_total,
            shipping_address: form.one_line_address(),
            payment,
            notes: if form.notes.is_empty() {
                None
            } else {
                Some(form.notes.clone())
            },
            location_note: form.location_note(),
            created_at: current_timestamp(),
        })
    }

    /// Total item count across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Build the confirmation invoice for dispatch.
    pub fn invoice(&self) -> OrderInvoice {
        OrderInvoice {
            to_email: self.email.clone(),
            to_name: self.recipient.clone(),
            order_total: self.grand_total.display_amount(),
            order_items: self
                .lines
                .iter()
                .map(OrderLine::summary)
                .collect::<Vec<_>>()
                .join(", "),
            shipping_address: self.shipping_address.clone(),
            payment_method: self.payment.as_str().to_string(),
            user_location: self
                .location_note
                .clone()
                .unwrap_or_else(|| "Not provided".to_string()),
        }
    }
}

/// The flat field set handed to the confirmation dispatcher.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderInvoice {
    /// Recipient email.
    pub to_email: String,
    /// Recipient name.
    pub to_name: String,
    /// Grand total, formatted without symbol.
    pub order_total: String,
    /// Item summaries, comma-joined.
    pub order_items: String,
    /// Single-line shipping address.
    pub shipping_address: String,
    /// Payment method code.
    pub payment_method: String,
    /// Location note or "Not provided".
    pub user_location: String,
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::ItemSnapshot;
    use crate::checkout::Country;
    use crate::ids::{ProductId, Size};

    fn usd(cents: i64) -> Money {
        Money::new(cents, Currency::USD)
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

    fn cart_with_items() -> CartStore {
        let mut cart = CartStore::new();
        cart.add_item(
            ProductId::new("p1"),
            Size::new("M"),
            ItemSnapshot::new("Classic Shirt", Some(usd(2500))),
        );
        cart.increase_quantity(&ProductId::new("p1"), &Size::new("M"));
        cart.add_item(
            ProductId::new("p2"),
            Size::new("L"),
            ItemSnapshot::new("Wool Pant", Some(usd(4000))),
        );
        cart
    }

    #[test]
    fn test_order_totals() {
        let order = Order::from_cart(
            &cart_with_items(),
            &filled_form(),
            PaymentMethod::CashOnDelivery,
            Currency::USD,
            usd(1000),
        )
        .unwrap();

        assert_eq!(order.item_total.amount_cents, 9000); // 2*2500 + 4000
        assert_eq!(order.grand_total.amount_cents, 10000);
        assert_eq!(order.item_count(), 3);
    }

    #[test]
    fn test_empty_cart_is_rejected() {
        let result = Order::from_cart(
            &CartStore::new(),
            &filled_form(),
            PaymentMethod::Card,
            Currency::USD,
            usd(1000),
        );
        assert!(matches!(result, Err(CommerceError::EmptyCart)));
    }

    #[test]
    fn test_invalid_form_blocks_order() {
        let mut form = filled_form();
        form.zip = String::new();

        let result = Order::from_cart(
            &cart_with_items(),
            &form,
            PaymentMethod::Card,
            Currency::USD,
            usd(1000),
        );
        assert!(matches!(result, Err(CommerceError::Validation(_))));
    }

    #[test]
    fn test_invoice_fields() {
        let order = Order::from_cart(
            &cart_with_items(),
            &filled_form(),
            PaymentMethod::Easypaisa,
            Currency::USD,
            usd(1000),
        )
        .unwrap();

        let invoice = order.invoice();
        assert_eq!(invoice.to_email, "jane@example.com");
        assert_eq!(invoice.order_total, "100.00");
        assert_eq!(invoice.order_items, "Classic Shirt (x2), Wool Pant (x1)");
        assert_eq!(invoice.payment_method, "Easypaisa");
        assert_eq!(invoice.user_location, "Not provided");
    }
}
