//! Credential ports and their simulated implementations.
//!
//! The storefront never bakes a fabricated backend into its contract:
//! sign-in, sign-up, and the OAuth code exchange are ports, and the
//! `Simulated*` types are the in-repo implementations a real backend
//! replaces.

use crate::error::AuthError;
use crate::user::{current_timestamp, email_local_part, Provider, UserRecord};
use serde::{Deserialize, Serialize};
use vitrine_commerce::checkout::is_valid_email;
use vitrine_commerce::ids::UserId;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// The identity record an OAuth provider returns for an exchanged code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthProfile {
    /// Provider-scoped user ID.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Avatar URL.
    pub picture: Option<String>,
}

impl AuthProfile {
    /// Convert to the session user record.
    pub fn into_user(self) -> UserRecord {
        UserRecord {
            id: UserId::new(self.id),
            name: self.name,
            email: self.email,
            picture: self.picture,
            provider: Provider::Google,
            login_time: current_timestamp(),
        }
    }
}

/// Exchanges an opaque authorization artifact for a user identity.
///
/// Any failure collapses into the single `AuthError::ExchangeFailed`
/// signal; the caller shows a notification and retries only on a new
/// explicit user action.
pub trait CredentialExchange {
    /// Exchange an authorization code for a profile.
    fn exchange(&self, code: &str) -> Result<AuthProfile, AuthError>;
}

/// Email/password sign-in and sign-up.
pub trait IdentityProvider {
    /// Sign an existing user in.
    fn sign_in(&self, email: &str, password: &str) -> Result<UserRecord, AuthError>;

    /// Register a new user.
    fn sign_up(&self, name: &str, email: &str, password: &str) -> Result<UserRecord, AuthError>;
}

/// Validate sign-in/sign-up input before any port call.
///
/// `name` is `None` for sign-in. The first failure wins: missing
/// fields, then email shape, then password length.
pub fn validate_credentials(
    name: Option<&str>,
    email: &str,
    password: &str,
) -> Result<(), AuthError> {
    let name_missing = name.is_some_and(str::is_empty);
    if email.is_empty() || password.is_empty() || name_missing {
        return Err(AuthError::Validation("Please fill all fields.".to_string()));
    }
    if !is_valid_email(email) {
        return Err(AuthError::Validation(
            "Please enter a valid email address.".to_string(),
        ));
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AuthError::Validation(format!(
            "Password must be at least {} characters.",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}

/// A simulated OAuth exchange that fabricates a profile from the code.
///
/// Stands in for the real provider round trip during development; swap
/// a real implementation in behind the same trait.
#[derive(Debug, Clone, Default)]
pub struct SimulatedExchange {
    /// When set, every exchange fails with the single error signal.
    pub fail: bool,
}

impl SimulatedExchange {
    /// Create an exchange that always succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an exchange that always fails.
    pub fn failing() -> Self {
        Self { fail: true }
    }
}

impl CredentialExchange for SimulatedExchange {
    fn exchange(&self, code: &str) -> Result<AuthProfile, AuthError> {
        if self.fail || code.is_empty() {
            return Err(AuthError::ExchangeFailed);
        }
        Ok(AuthProfile {
            id: format!("google_{}", current_timestamp()),
            name: "Google User".to_string(),
            email: "user@gmail.com".to_string(),
            picture: None,
        })
    }
}

/// A simulated directory that fabricates accounts on the spot.
///
/// Sign-in derives the display name from the email local part; sign-up
/// uses the supplied name. IDs come from the clock, like the mocked
/// backend it stands in for.
#[derive(Debug, Clone, Default)]
pub struct SimulatedIdentityProvider;

impl SimulatedIdentityProvider {
    /// Create the simulated directory.
    pub fn new() -> Self {
        Self
    }

    fn fabricate_id() -> UserId {
        UserId::new(format!("{}", current_timestamp()))
    }
}

impl IdentityProvider for SimulatedIdentityProvider {
    fn sign_in(&self, email: &str, password: &str) -> Result<UserRecord, AuthError> {
        validate_credentials(None, email, password)?;
        Ok(UserRecord::email_user(
            Self::fabricate_id(),
            email_local_part(email),
            email,
        ))
    }

    fn sign_up(&self, name: &str, email: &str, password: &str) -> Result<UserRecord, AuthError> {
        validate_credentials(Some(name), email, password)?;
        Ok(UserRecord::email_user(Self::fabricate_id(), name, email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_uses_email_prefix_as_name() {
        let provider = SimulatedIdentityProvider::new();
        let user = provider.sign_in("jane@example.com", "secret1").unwrap();
        assert_eq!(user.name, "jane");
        assert_eq!(user.email, "jane@example.com");
        assert_eq!(user.provider, Provider::Email);
    }

    #[test]
    fn test_sign_up_uses_supplied_name() {
        let provider = SimulatedIdentityProvider::new();
        let user = provider
            .sign_up("Jane Doe", "jane@example.com", "secret1")
            .unwrap();
        assert_eq!(user.name, "Jane Doe");
    }

    #[test]
    fn test_validation_order() {
        let err = validate_credentials(Some(""), "jane@example.com", "secret1").unwrap_err();
        assert!(err.to_string().contains("fill all fields"));

        let err = validate_credentials(None, "not-an-email", "secret1").unwrap_err();
        assert!(err.to_string().contains("valid email"));

        let err = validate_credentials(None, "jane@example.com", "short").unwrap_err();
        assert!(err.to_string().contains("at least 6"));
    }

    #[test]
    fn test_short_password_rejected_before_port() {
        let provider = SimulatedIdentityProvider::new();
        let err = provider.sign_in("jane@example.com", "abc").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_simulated_exchange() {
        let exchange = SimulatedExchange::new();
        let profile = exchange.exchange("4/0AX4code").unwrap();
        let user = profile.into_user();
        assert_eq!(user.provider, Provider::Google);

        assert!(matches!(
            SimulatedExchange::failing().exchange("4/0AX4code"),
            Err(AuthError::ExchangeFailed)
        ));
        assert!(matches!(
            exchange.exchange(""),
            Err(AuthError::ExchangeFailed)
        ));
    }
}
