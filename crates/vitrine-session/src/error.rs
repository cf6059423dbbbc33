//! Session error types.

use crate::ports::PortError;
use thiserror::Error;
use vitrine_auth::AuthError;
use vitrine_commerce::CommerceError;

/// Errors surfaced by session operations.
///
/// None is fatal: every variant degrades to a transient notification
/// and the user can retry the originating action.
#[derive(Error, Debug)]
pub enum SessionError {
    /// A commerce-layer failure (validation, not-found, money).
    #[error(transparent)]
    Commerce(#[from] CommerceError),

    /// An auth-layer failure.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// An external call failed.
    #[error("external call failed: {0}")]
    Port(#[from] PortError),
}

impl SessionError {
    /// The transient-notification string the view shows for this error.
    pub fn user_message(&self) -> String {
        match self {
            SessionError::Commerce(CommerceError::Validation(msg)) => msg.clone(),
            SessionError::Commerce(CommerceError::EmptyCart) => "Your cart is empty.".to_string(),
            SessionError::Commerce(CommerceError::ProductNotFound(_)) => {
                "Product not found.".to_string()
            }
            SessionError::Commerce(_) => "Something went wrong. Please try again.".to_string(),
            SessionError::Auth(AuthError::Validation(msg)) => msg.clone(),
            SessionError::Auth(AuthError::ExchangeFailed) => {
                "Login failed. Please try again.".to_string()
            }
            SessionError::Auth(_) => "Authentication failed. Please try again.".to_string(),
            SessionError::Port(_) => "Something went wrong. Please try again.".to_string(),
        }
    }

    /// Whether this is a synchronous validation failure (blocks the
    /// action before any external call).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SessionError::Commerce(CommerceError::Validation(_))
                | SessionError::Auth(AuthError::Validation(_))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_passes_through() {
        let err = SessionError::from(CommerceError::Validation(
            "Please fill in all required fields.".to_string(),
        ));
        assert_eq!(err.user_message(), "Please fill in all required fields.");
        assert!(err.is_validation());
    }

    #[test]
    fn test_exchange_failure_message() {
        let err = SessionError::from(AuthError::ExchangeFailed);
        assert!(err.user_message().contains("try again"));
        assert!(!err.is_validation());
    }
}
