//! Bundled icon assets

use std::path::{Path, PathBuf};

use super::notification_type::NotificationType;

/// Directory holding the icons shipped with the crate
pub const BUNDLED_ICONS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/icons");

/// App icon passed with every message
pub const GUARD_ICON_FILE: &str = "Guard.png";

/// Content image used when no notification type is given
pub const NOTIFY_ICON_FILE: &str = "Notify.png";

/// Resolves icon paths inside an icons directory.
///
/// Path resolution is pure: no file system access happens here, the
/// notifier binary reports missing images itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSet {
    dir: PathBuf,
}

impl IconSet {
    /// Icons bundled with the crate
    pub fn bundled() -> Self {
        Self::new(BUNDLED_ICONS_DIR)
    }

    /// Icons from a custom directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The icons directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path passed as `-appIcon`
    pub fn guard(&self) -> PathBuf {
        self.dir.join(GUARD_ICON_FILE)
    }

    /// Path passed as `-contentImage` for the given type
    pub fn icon(&self, kind: Option<NotificationType>) -> PathBuf {
        let file_name = match kind {
            Some(kind) => kind.icon_file_name(),
            None => NOTIFY_ICON_FILE,
        };
        self.dir.join(file_name)
    }
}

impl Default for IconSet {
    fn default() -> Self {
        Self::bundled()
    }
}
