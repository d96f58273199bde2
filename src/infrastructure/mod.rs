//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces: the tokio
//! subprocess runner and binary lookup.

pub mod binary;
pub mod process;

// Re-export adapters
pub use binary::{locate_binary, BIN_ENV_VAR, DEFAULT_BIN_PATH};
pub use process::ProcessRunner;

use std::path::PathBuf;

use crate::application::NotifierClient;
use crate::domain::notification::IconSet;

/// Create a client for the binary found via `TERMINAL_NOTIFIER_BIN` or the
/// default location, with the bundled icons
pub fn create_client() -> NotifierClient<ProcessRunner> {
    create_client_with(None, None)
}

/// Create a client with an explicit binary path and icons directory.
///
/// A missing `bin_path` falls back to [`locate_binary`], a missing
/// `icons_dir` to the bundled icons.
pub fn create_client_with(
    bin_path: Option<&str>,
    icons_dir: Option<&str>,
) -> NotifierClient<ProcessRunner> {
    let bin_path = bin_path.map(PathBuf::from).unwrap_or_else(locate_binary);
    let icons = icons_dir.map(IconSet::new).unwrap_or_default();

    NotifierClient::new(bin_path, ProcessRunner::new()).with_icons(icons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn explicit_values_win() {
        let client = create_client_with(Some("/my/custom/bin"), Some("/my/icons"));

        assert_eq!(client.bin_path(), Path::new("/my/custom/bin"));
        assert_eq!(client.icons(), &IconSet::new("/my/icons"));
    }

    #[test]
    fn client_uses_bundled_icons_by_default() {
        let client = create_client();
        assert_eq!(client.icons(), &IconSet::bundled());
    }
}
