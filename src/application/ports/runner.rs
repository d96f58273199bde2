//! Subprocess runner port interface

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised while starting the notifier binary
#[derive(Debug, Clone, Error)]
pub enum ExecuteError {
    #[error("terminal-notifier not found at {}", .0.display())]
    BinaryNotFound(PathBuf),

    #[error("Failed to run terminal-notifier: {0}")]
    SpawnFailed(String),
}

/// Captured result of a finished child process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Standard output, decoded lossily as UTF-8
    pub stdout: String,
    /// Exit code, `None` when the child was killed by a signal
    pub status_code: Option<i32>,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status_code == Some(0)
    }
}

/// Port for running an external program to completion
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args` and wait for it to exit.
    ///
    /// A non-zero exit is not an error here; callers inspect
    /// `CommandOutput::status_code` themselves.
    async fn run(&self, program: &Path, args: &[String]) -> Result<CommandOutput, ExecuteError>;

    /// Whether `program` is an executable file
    fn is_executable(&self, program: &Path) -> bool;
}

/// Blanket implementation for boxed runner types
#[async_trait]
impl CommandRunner for Box<dyn CommandRunner> {
    async fn run(&self, program: &Path, args: &[String]) -> Result<CommandOutput, ExecuteError> {
        self.as_ref().run(program, args).await
    }

    fn is_executable(&self, program: &Path) -> bool {
        self.as_ref().is_executable(program)
    }
}
