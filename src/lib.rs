//! terminal-notifier-guard - Guard-style notifications through terminal-notifier
//!
//! This crate wraps the `terminal-notifier` command-line tool: it locates the
//! binary, turns notification options into flags, runs it once per call, and
//! parses its `-list` output into records.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Requests, notification types, icons, list parsing, and errors
//! - **Application**: The notifier client and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (tokio subprocess, binary lookup)
//! - **CLI**: Command-line interface, argument parsing, and output formatting
//!
//! # Example
//!
//! ```no_run
//! use terminal_notifier_guard::domain::NotificationRequest;
//! use terminal_notifier_guard::infrastructure::create_client;
//!
//! # async fn demo() -> Result<(), terminal_notifier_guard::application::ClientError> {
//! let client = create_client();
//! client
//!     .failed("3 examples, 1 failure", NotificationRequest::default().with_title("RSpec"))
//!     .await?;
//! let listing = client.list_all().await?;
//! println!("{} notifications shown", listing.len());
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
