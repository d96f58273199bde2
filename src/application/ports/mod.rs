//! Port interfaces (traits) for external systems
//!
//! The runner trait is the boundary between the application
//! and infrastructure layers.

pub mod runner;

// Re-export common types
pub use runner::{CommandOutput, CommandRunner, ExecuteError};
