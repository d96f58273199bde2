//! Notifier client use cases

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};
use thiserror::Error;

use crate::domain::error::ListParseError;
use crate::domain::notification::{
    IconSet, Listing, NotificationRequest, NotificationType, ALL_GROUPS,
};

use super::ports::{CommandRunner, ExecuteError};

/// Errors from notifier client operations
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Execute(#[from] ExecuteError),

    #[error("Unexpected terminal-notifier list output: {0}")]
    ListParse(#[from] ListParseError),

    #[error("Failed to echo terminal-notifier output: {0}")]
    Echo(#[from] io::Error),
}

/// Client for the terminal-notifier binary.
///
/// Every operation runs the binary exactly once and waits for it to exit.
/// The binary's exit status is only logged: callers always get whatever it
/// printed on stdout, which may be empty.
pub struct NotifierClient<R>
where
    R: CommandRunner,
{
    bin_path: PathBuf,
    icons: IconSet,
    runner: R,
}

impl<R> NotifierClient<R>
where
    R: CommandRunner,
{
    /// Create a client for the binary at `bin_path`, using the bundled icons
    pub fn new(bin_path: impl Into<PathBuf>, runner: R) -> Self {
        Self {
            bin_path: bin_path.into(),
            icons: IconSet::bundled(),
            runner,
        }
    }

    /// Use icons from another directory
    pub fn with_icons(mut self, icons: IconSet) -> Self {
        self.icons = icons;
        self
    }

    pub fn bin_path(&self) -> &Path {
        &self.bin_path
    }

    pub fn icons(&self) -> &IconSet {
        &self.icons
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Whether the configured binary is an executable file
    pub fn available(&self) -> bool {
        self.runner.is_executable(&self.bin_path)
    }

    /// Full argument vector for a request, icon flags included
    pub fn build_args(&self, request: &NotificationRequest) -> Vec<String> {
        let mut args = request.to_args();

        if request.has_message() {
            args.push("-appIcon".to_string());
            args.push(self.icons.guard().to_string_lossy().into_owned());
            args.push("-contentImage".to_string());
            args.push(
                self.icons
                    .icon(request.notification_type)
                    .to_string_lossy()
                    .into_owned(),
            );
        }

        args
    }

    /// Run the binary for `request` and return its stdout.
    ///
    /// With `verbose` set the output is also echoed to this process's stdout.
    pub async fn execute(
        &self,
        verbose: bool,
        request: &NotificationRequest,
    ) -> Result<String, ClientError> {
        let args = self.build_args(request);
        debug!("Running {} {:?}", self.bin_path.display(), args);

        let output = self.runner.run(&self.bin_path, &args).await?;

        if !output.success() {
            // Inherited behavior: the exit status is not an error
            warn!(
                "{} exited with status {:?}",
                self.bin_path.display(),
                output.status_code
            );
        }

        if verbose {
            echo(&mut io::stdout().lock(), &output.stdout)?;
        }

        Ok(output.stdout)
    }

    /// Post `message` with the remaining options from `request`
    pub async fn notify(
        &self,
        message: impl Into<String>,
        request: NotificationRequest,
    ) -> Result<String, ClientError> {
        self.execute(false, &request.with_message(message)).await
    }

    /// Post a message with the success icon
    pub async fn success(
        &self,
        message: impl Into<String>,
        request: NotificationRequest,
    ) -> Result<String, ClientError> {
        self.notify(message, request.with_type(NotificationType::Success))
            .await
    }

    /// Post a message with the failed icon
    pub async fn failed(
        &self,
        message: impl Into<String>,
        request: NotificationRequest,
    ) -> Result<String, ClientError> {
        self.notify(message, request.with_type(NotificationType::Failed))
            .await
    }

    /// Post a message with the pending icon
    pub async fn pending(
        &self,
        message: impl Into<String>,
        request: NotificationRequest,
    ) -> Result<String, ClientError> {
        self.notify(message, request.with_type(NotificationType::Pending))
            .await
    }

    /// Remove the notifications of `group`
    pub async fn remove(&self, group: &str) -> Result<String, ClientError> {
        self.execute(false, &NotificationRequest::remove(group)).await
    }

    /// Remove every notification
    pub async fn remove_all(&self) -> Result<String, ClientError> {
        self.remove(ALL_GROUPS).await
    }

    /// List the notifications of `group`
    pub async fn list(&self, group: &str) -> Result<Listing, ClientError> {
        let raw = self.execute(false, &NotificationRequest::list(group)).await?;
        Ok(Listing::parse(&raw, group)?)
    }

    /// List every notification
    pub async fn list_all(&self) -> Result<Listing, ClientError> {
        self.list(ALL_GROUPS).await
    }

    /// The binary's own usage text
    pub async fn help(&self) -> Result<String, ClientError> {
        self.execute(false, &NotificationRequest::help()).await
    }
}

fn echo<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    out.write_all(text.as_bytes())?;
    out.flush()
}
