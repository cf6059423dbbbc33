//! User types.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use vitrine_commerce::ids::UserId;

/// Which flow produced the identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Provider {
    /// Email/password form.
    #[default]
    Email,
    /// Google OAuth redirect.
    Google,
}

impl Provider {
    /// Get provider as string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Email => "email",
            Provider::Google => "google",
        }
    }
}

impl FromStr for Provider {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(Provider::Email),
            "google" => Ok(Provider::Google),
            _ => Err(()),
        }
    }
}

/// The signed-in user as held by the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserRecord {
    /// User ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Avatar URL, when the provider supplies one.
    pub picture: Option<String>,
    /// Which flow produced this record.
    pub provider: Provider,
    /// Unix timestamp of sign-in.
    pub login_time: i64,
}

impl UserRecord {
    /// Create a record for an email-flow user.
    pub fn email_user(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            picture: None,
            provider: Provider::Email,
            login_time: current_timestamp(),
        }
    }

    /// Display name with the email local part as fallback.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            email_local_part(&self.email)
        } else {
            &self.name
        }
    }
}

/// The part of an email address before the `@`.
pub fn email_local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

/// Get current Unix timestamp.
pub(crate) fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
