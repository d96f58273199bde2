//! Locating the terminal-notifier binary

use std::env;
use std::path::{Path, PathBuf};

/// Default location of the notifier binary
pub const DEFAULT_BIN_PATH: &str = "/usr/local/bin/terminal-notifier";

/// Environment variable overriding the binary path
pub const BIN_ENV_VAR: &str = "TERMINAL_NOTIFIER_BIN";

/// The binary path from the environment, if set and non-empty
pub fn env_override() -> Option<String> {
    non_empty(env::var(BIN_ENV_VAR).ok())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Pick the override when present, else the default location
pub fn resolve_bin_path(override_path: Option<&str>) -> PathBuf {
    PathBuf::from(override_path.unwrap_or(DEFAULT_BIN_PATH))
}

/// Binary path from `TERMINAL_NOTIFIER_BIN`, falling back to the default.
///
/// The path is not checked here; a missing binary surfaces when it is run.
pub fn locate_binary() -> PathBuf {
    resolve_bin_path(env_override().as_deref())
}

/// Whether `path` is a regular file with an execute bit set
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// Whether `path` is a regular file
#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    path.is_file()
}
