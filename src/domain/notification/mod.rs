//! Notification domain module

mod icon;
mod listing;
mod notification_type;
mod request;

pub use icon::{IconSet, BUNDLED_ICONS_DIR, GUARD_ICON_FILE, NOTIFY_ICON_FILE};
pub use listing::{
    Listing, NotificationRecord, DELIVERED_AT_FORMAT, LIST_HEADER, NULL_TOKEN,
};
pub use notification_type::NotificationType;
pub use request::{NotificationRequest, ALL_GROUPS};
