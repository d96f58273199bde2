//! tokio subprocess runner adapter

use std::io::ErrorKind;
use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{CommandOutput, CommandRunner, ExecuteError};

use crate::infrastructure::binary::is_executable;

/// Runs programs as child processes, capturing stdout.
///
/// stdin is closed and stderr goes to this process's stderr, so only the
/// child's stdout is returned.
pub struct ProcessRunner;

impl ProcessRunner {
    /// Create a new process runner
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, program: &Path, args: &[String]) -> Result<CommandOutput, ExecuteError> {
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound | ErrorKind::PermissionDenied => {
                    ExecuteError::BinaryNotFound(program.to_path_buf())
                }
                _ => ExecuteError::SpawnFailed(e.to_string()),
            })?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            status_code: output.status.code(),
        })
    }

    fn is_executable(&self, program: &Path) -> bool {
        is_executable(program)
    }
}
