//! terminal-notifier-guard CLI entry point

use std::process::ExitCode;

use clap::Parser;

use terminal_notifier_guard::cli::{run, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Log to stderr (run with `RUST_LOG=debug` to see the spawned command)
    env_logger::init();

    let cli = Cli::parse();
    run(cli).await
}
