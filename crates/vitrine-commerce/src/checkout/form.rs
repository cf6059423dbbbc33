//! Checkout form collection and validation.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// A country as presented in the checkout selector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Country {
    /// ISO country code (e.g., "PK").
    pub code: String,
    /// Display name (e.g., "Pakistan").
    pub name: String,
}

impl Country {
    /// Create a country entry.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// Device coordinates from the location button.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

impl Coordinates {
    /// Create a coordinate pair.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Short display form, five decimal places.
    pub fn display(&self) -> String {
        format!("{:.5}, {:.5}", self.lat, self.lon)
    }
}

/// The shipping/contact form collected before placing an order.
///
/// Validation is synchronous and runs before any external call; a
/// failure blocks progression and no partial submission is accepted.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CheckoutForm {
    /// Recipient full name.
    pub name: String,
    /// Phone number.
    pub phone: String,
    /// Email address for the confirmation invoice.
    pub email: String,
    /// Street address.
    pub address: String,
    /// Selected country.
    pub country: Option<Country>,
    /// State or province.
    pub state: String,
    /// City.
    pub city: String,
    /// Zip or postal code.
    pub zip: String,
    /// Optional order notes.
    pub notes: String,
    /// Device location, if the user fetched it.
    pub location: Option<Coordinates>,
    /// Resolved location label (city/region/country), if known.
    pub location_label: Option<String>,
}

impl CheckoutForm {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the form.
    ///
    /// Check order matches the submit handler: email present, then all
    /// required fields, then email shape. The first failure wins and is
    /// returned as a user-facing validation message.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.email.trim().is_empty() {
            return Err(CommerceError::Validation(
                "Please enter a valid email address.".to_string(),
            ));
        }
        if self.name.is_empty()
            || self.phone.is_empty()
            || self.address.is_empty()
            || self.country.is_none()
            || self.state.is_empty()
            || self.city.is_empty()
            || self.zip.is_empty()
        {
            return Err(CommerceError::Validation(
                "Please fill in all required fields.".to_string(),
            ));
        }
        if !is_valid_email(self.email.trim()) {
            return Err(CommerceError::Validation(
                "Please enter a valid email address.".to_string(),
            ));
        }
        Ok(())
    }

    /// Single-line shipping address for the invoice.
    pub fn one_line_address(&self) -> String {
        let country = self
            .country
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or_default();
        format!(
            "{}, {}, {}, {}, {}",
            self.address, self.city, self.state, country, self.zip
        )
    }

    /// Location note for the invoice: resolved label plus coordinates
    /// when available.
    pub fn location_note(&self) -> Option<String> {
        match (&self.location_label, &self.location) {
            (Some(label), Some(coords)) => Some(format!("{} ({})", label, coords.display())),
            (Some(label), None) => Some(label.clone()),
            (None, Some(coords)) => Some(coords.display()),
            (None, None) => None,
        }
    }
}

/// Email shape check: one `@` with non-empty sides, no whitespace, and
/// a dot inside the domain with non-empty sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rfind('.') {
        Some(pos) => pos > 0 && pos < domain.len() - 1,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_valid_form_passes() {
        assert!(filled_form().validate().is_ok());
    }

    #[test]
    fn test_empty_email_is_reported_first() {
        let mut form = filled_form();
        form.email = "  ".to_string();
        form.name = String::new();

        let err = form.validate().unwrap_err();
        assert!(err.to_string().contains("valid email"));
    }

    #[test]
    fn test_missing_required_field_blocks() {
        let mut form = filled_form();
        form.city = String::new();

        let err = form.validate().unwrap_err();
        assert!(err.to_string().contains("required fields"));
    }

    #[test]
    fn test_malformed_email_blocks() {
        let mut form = filled_form();
        form.email = "jane@nodot".to_string();

        let err = form.validate().unwrap_err();
        assert!(err.to_string().contains("valid email"));
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@mail.example.com"));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("two@@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a b@c.co"));
    }

    #[test]
    fn test_one_line_address() {
        let form = filled_form();
        assert_eq!(
            form.one_line_address(),
            "12 Mall Road, Lahore, Punjab, Pakistan, 54000"
        );
    }

    #[test]
    fn test_location_note() {
        let mut form = filled_form();
        assert_eq!(form.location_note(), None);

        form.location = Some(Coordinates::new(31.5204, 74.3587));
        assert_eq!(form.location_note().unwrap(), "31.52040, 74.35870");

        form.location_label = Some("Lahore, Punjab, Pakistan".to_string());
        assert_eq!(
            form.location_note().unwrap(),
            "Lahore, Punjab, Pakistan (31.52040, 74.35870)"
        );
    }
}
