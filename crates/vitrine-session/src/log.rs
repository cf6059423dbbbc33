//! Structured logging for storefront actions.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Log level for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default)]
pub enum LogFormat {
    /// JSON format (for log aggregation).
    #[default]
    Json,
    /// Human-readable format (for development).
    Human,
}

/// A structured log entry.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    /// Log level.
    pub level: LogLevel,
    /// The storefront action (e.g., "cart.add").
    pub action: String,
    /// Log message.
    pub message: String,
    /// Session ID for correlation.
    pub session_id: String,
    /// Additional structured fields.
    #[serde(flatten)]
    pub fields: HashMap<String, serde_json::Value>,
}

impl LogEntry {
    /// Format as JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }

    /// Format as human-readable string.
    pub fn to_human(&self) -> String {
        let mut s = format!("[{}] {} {}", self.level, self.action, self.message);
        if !self.fields.is_empty() {
            s.push_str(" | ");
            let mut fields: Vec<String> = self
                .fields
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            fields.sort();
            s.push_str(&fields.join(" "));
        }
        s
    }
}

/// Structured logger with session context.
///
/// Emits one line per storefront mutation to stderr, tagged with the
/// session ID so interleaved sessions stay distinguishable.
#[derive(Debug, Clone)]
pub struct SessionLogger {
    session_id: String,
    min_level: LogLevel,
    format: LogFormat,
    enabled: bool,
}

impl SessionLogger {
    /// Create a logger for a session.
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            min_level: LogLevel::Info,
            format: LogFormat::Json,
            enabled: true,
        }
    }

    /// A logger that swallows everything (tests).
    pub fn disabled() -> Self {
        let mut logger = Self::new("disabled");
        logger.enabled = false;
        logger
    }

    /// Set minimum log level.
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set output format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Log at info level.
    pub fn info(&self, action: &str, message: &str, fields: &[(&str, String)]) {
        self.log(LogLevel::Info, action, message, fields);
    }

    /// Log at warn level.
    pub fn warn(&self, action: &str, message: &str, fields: &[(&str, String)]) {
        self.log(LogLevel::Warn, action, message, fields);
    }

    /// Log at error level.
    pub fn error(&self, action: &str, message: &str, fields: &[(&str, String)]) {
        self.log(LogLevel::Error, action, message, fields);
    }

    fn log(&self, level: LogLevel, action: &str, message: &str, fields: &[(&str, String)]) {
        if !self.enabled || level < self.min_level {
            return;
        }

        let entry = LogEntry {
            level,
            action: action.to_string(),
            message: message.to_string(),
            session_id: self.session_id.clone(),
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), serde_json::json!(v)))
                .collect(),
        };

        let output = match self.format {
            LogFormat::Json => entry.to_json(),
            LogFormat::Human => entry.to_human(),
        };
        eprintln!("{}", output);
    }

    /// Get the session ID.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_json_shape() {
        let entry = LogEntry {
            level: LogLevel::Info,
            action: "cart.add".to_string(),
            message: "item added".to_string(),
            session_id: "sess_1".to_string(),
            fields: [("product".to_string(), serde_json::json!("p1"))]
                .into_iter()
                .collect(),
        };

        let json: serde_json::Value = serde_json::from_str(&entry.to_json()).unwrap();
        assert_eq!(json["level"], "info");
        assert_eq!(json["action"], "cart.add");
        assert_eq!(json["product"], "p1");
    }

    #[test]
    fn test_entry_human_shape() {
        let entry = LogEntry {
            level: LogLevel::Error,
            action: "order.dispatch".to_string(),
            message: "delivery failed".to_string(),
            session_id: "sess_1".to_string(),
            fields: HashMap::new(),
        };
        assert_eq!(entry.to_human(), "[ERROR] order.dispatch delivery failed");
    }

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Warn < LogLevel::Error);
    }
}
