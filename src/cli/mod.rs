//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, and the command runner.

pub mod app;
pub mod args;
pub mod presenter;

// Re-export commonly used types
pub use app::{run, EXIT_ERROR, EXIT_SUCCESS};
pub use args::{Cli, Commands};
pub use presenter::Presenter;
