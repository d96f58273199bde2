//! Notification outcome type value object

use std::str::FromStr;

use crate::domain::error::InvalidNotificationTypeError;

/// Outcome of the run being reported, used to pick the content image.
///
/// Parsed case-insensitively from `success`, `failed` or `pending`; the CLI's
/// `--type` goes through the same [`FromStr`] impl.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    Success,
    Failed,
    Pending,
}

impl NotificationType {
    /// File name of the bundled content image for this type
    pub const fn icon_file_name(&self) -> &'static str {
        match self {
            Self::Success => "Success.png",
            Self::Failed => "Failed.png",
            Self::Pending => "Pending.png",
        }
    }
}

impl FromStr for NotificationType {
    type Err = InvalidNotificationTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "success" => Ok(Self::Success),
            "failed" => Ok(Self::Failed),
            "pending" => Ok(Self::Pending),
            _ => Err(InvalidNotificationTypeError {
                input: s.to_string(),
            }),
        }
    }
}
