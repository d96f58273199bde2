//! CLI presenter for output formatting

use std::io::{self, Write};

use colored::*;

use crate::domain::notification::{NotificationRecord, DELIVERED_AT_FORMAT, NULL_TOKEN};

/// Presenter for CLI output formatting
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output a line to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Output text to stdout as-is
    pub fn output_raw(&self, text: &str) {
        if let Err(e) = write_raw(&mut io::stdout().lock(), text) {
            log::warn!("Failed to write to stdout: {}", e);
        }
    }

    /// Print one listed notification
    pub fn record(&self, record: &NotificationRecord) {
        println!("{}", format_record(record));
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

fn write_raw<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    out.write_all(text.as_bytes())?;
    out.flush()
}

/// Format a record on one line, columns in `-list` order
pub fn format_record(record: &NotificationRecord) -> String {
    let field = |value: &Option<String>| value.clone().unwrap_or_else(|| NULL_TOKEN.to_string());

    format!(
        "{} {} | {} | {} | {}",
        record.delivered_at.format(DELIVERED_AT_FORMAT),
        field(&record.group).bold(),
        field(&record.title),
        field(&record.subtitle),
        field(&record.message),
    )
}
