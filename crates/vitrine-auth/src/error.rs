//! Authentication errors.

use thiserror::Error;

/// Authentication error type.
#[derive(Error, Debug)]
pub enum AuthError {
    /// A sign-in/sign-up field failed validation.
    #[error("{0}")]
    Validation(String),

    /// The credential exchange with the external provider failed.
    ///
    /// A single signal: callers show a notification and leave local
    /// state untouched; no structured taxonomy exists at this boundary.
    #[error("credential exchange failed")]
    ExchangeFailed,

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for AuthError {
    fn from(e: serde_json::Error) -> Self {
        AuthError::Serialization(e.to_string())
    }
}

impl AuthError {
    /// Check if this is a validation failure (blocks progression,
    /// nothing was attempted externally).
    pub fn is_validation(&self) -> bool {
        matches!(self, AuthError::Validation(_))
    }
}
