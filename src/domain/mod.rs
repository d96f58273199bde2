//! Domain layer - Core business logic
//!
//! Contains value objects, parsing of the notifier's output, and domain errors.
//! This layer has no dependencies on external systems.

pub mod error;
pub mod notification;

// Re-export common types
pub use error::*;
pub use notification::{
    IconSet, Listing, NotificationRecord, NotificationRequest, NotificationType, ALL_GROUPS,
};
