//! Transient user-facing notifications.
//!
//! Every failure in the storefront degrades to one of these; none is
//! fatal. The session accumulates them and the view drains the queue
//! after each action.

use serde::{Deserialize, Serialize};

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoticeLevel {
    /// Neutral information.
    Info,
    /// A completed action.
    Success,
    /// A failed action the user may retry.
    Error,
}

/// A transient notification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notice {
    /// Severity.
    pub level: NoticeLevel,
    /// User-facing message.
    pub message: String,
}

impl Notice {
    /// Create an info notice.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    /// Create a success notice.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    /// Create an error notice.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}
