//! Main app runner

use std::process::ExitCode;

use crate::application::ports::CommandRunner;
use crate::application::{ClientError, NotifierClient};
use crate::domain::notification::Listing;
use crate::infrastructure::create_client_with;

use super::args::{Cli, Commands};
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;

/// Run the parsed command line.
///
/// `--bin` wins over `TERMINAL_NOTIFIER_BIN`, which wins over the default
/// location; `--icons-dir` replaces the bundled icons.
pub async fn run(cli: Cli) -> ExitCode {
    let presenter = Presenter::new();
    let client = create_client_with(cli.bin.as_deref(), cli.icons_dir.as_deref());

    run_client_command(&client, cli.command, cli.verbose, &presenter).await
}

/// Run a subcommand against `client`
pub async fn run_client_command<R: CommandRunner>(
    client: &NotifierClient<R>,
    command: Commands,
    verbose: bool,
    presenter: &Presenter,
) -> ExitCode {
    match dispatch(client, command, verbose, presenter).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

async fn dispatch<R: CommandRunner>(
    client: &NotifierClient<R>,
    command: Commands,
    verbose: bool,
    presenter: &Presenter,
) -> Result<u8, ClientError> {
    let raw = match command {
        Commands::Notify { message, kind } => {
            let (message, mut request) = message.into_parts();
            request.notification_type = kind;
            client.notify(message, request).await?
        }
        Commands::Success { message } => {
            let (message, request) = message.into_parts();
            client.success(message, request).await?
        }
        Commands::Failed { message } => {
            let (message, request) = message.into_parts();
            client.failed(message, request).await?
        }
        Commands::Pending { message } => {
            let (message, request) = message.into_parts();
            client.pending(message, request).await?
        }
        Commands::Remove { group } => client.remove(&group).await?,
        Commands::List { group, json } => {
            let listing = client.list(&group).await?;
            present_listing(&listing, json, presenter);
            return Ok(EXIT_SUCCESS);
        }
        Commands::NotifierHelp => {
            // Usage text is the whole point here, so print it unconditionally
            let usage = client.help().await?;
            presenter.output_raw(&usage);
            return Ok(EXIT_SUCCESS);
        }
        // Never spawns the binary
        Commands::Available => return Ok(check_available(client, presenter)),
    };

    if verbose {
        presenter.output_raw(&raw);
    }

    Ok(EXIT_SUCCESS)
}

fn present_listing(listing: &Listing, json: bool, presenter: &Presenter) {
    if json {
        match serde_json::to_string_pretty(listing) {
            Ok(text) => presenter.output(&text),
            Err(e) => presenter.error(&format!("Failed to encode listing: {}", e)),
        }
        return;
    }

    match listing {
        Listing::Empty => presenter.info("No notifications"),
        Listing::Many(records) if records.is_empty() => presenter.info("No notifications"),
        Listing::Single(record) => presenter.record(record),
        Listing::Many(records) => records.iter().for_each(|r| presenter.record(r)),
    }
}

fn check_available<R: CommandRunner>(client: &NotifierClient<R>, presenter: &Presenter) -> u8 {
    let path = client.bin_path().display().to_string();

    if client.available() {
        presenter.output(&path);
        EXIT_SUCCESS
    } else {
        presenter.warn(&format!("terminal-notifier is not executable at {}", path));
        EXIT_ERROR
    }
}
