//! Payment method selection.

use serde::{Deserialize, Serialize};

/// Payment methods offered at checkout.
///
/// Selection only: no payment is processed. The chosen method travels
/// on the order record and the confirmation invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Cash on delivery.
    CashOnDelivery,
    /// Easypaisa wallet.
    Easypaisa,
    /// JazzCash wallet.
    JazzCash,
    /// Direct bank transfer.
    BankTransfer,
    /// Credit or debit card.
    Card,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::CashOnDelivery => "COD",
            PaymentMethod::Easypaisa => "Easypaisa",
            PaymentMethod::JazzCash => "JazzCash",
            PaymentMethod::BankTransfer => "BankTransfer",
            PaymentMethod::Card => "Card",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::CashOnDelivery => "Cash on Delivery",
            PaymentMethod::Easypaisa => "Easypaisa",
            PaymentMethod::JazzCash => "JazzCash",
            PaymentMethod::BankTransfer => "Bank Transfer",
            PaymentMethod::Card => "Credit/Debit Card",
        }
    }

    /// Parse a payment method string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "COD" => Some(PaymentMethod::CashOnDelivery),
            "Easypaisa" => Some(PaymentMethod::Easypaisa),
            "JazzCash" => Some(PaymentMethod::JazzCash),
            "BankTransfer" => Some(PaymentMethod::BankTransfer),
            "Card" => Some(PaymentMethod::Card),
            _ => None,
        }
    }

    /// All methods, in display order.
    pub fn all() -> &'static [PaymentMethod] {
        &[
            PaymentMethod::CashOnDelivery,
            PaymentMethod::Easypaisa,
            PaymentMethod::JazzCash,
            PaymentMethod::BankTransfer,
            PaymentMethod::Card,
        ]
    }
}
