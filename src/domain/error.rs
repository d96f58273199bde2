//! Domain error types

use thiserror::Error;

/// Error when parsing a notification type string
#[derive(Debug, Clone, Error)]
#[error("Invalid notification type: \"{input}\". Valid types are: success, failed, pending")]
pub struct InvalidNotificationTypeError {
    pub input: String,
}

/// Error when the notifier's `-list` output cannot be read
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListParseError {
    #[error("Expected 5 tab-separated fields on line {line}, found {found}")]
    FieldCount { line: usize, found: usize },

    #[error("Invalid delivery timestamp \"{value}\": {reason}")]
    Timestamp { value: String, reason: String },
}
