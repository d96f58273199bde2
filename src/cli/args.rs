//! CLI argument definitions using Clap

use clap::{Args, Parser, Subcommand};

use crate::domain::notification::{NotificationRequest, NotificationType, ALL_GROUPS};

/// terminal-notifier-guard - Guard-style macOS notifications via terminal-notifier
#[derive(Parser, Debug)]
#[command(name = "terminal-notifier-guard")]
#[command(version)]
#[command(about = "Post, list and remove macOS notifications through terminal-notifier")]
#[command(long_about = None)]
pub struct Cli {
    /// Path to the terminal-notifier binary (overrides TERMINAL_NOTIFIER_BIN)
    #[arg(long, value_name = "PATH", global = true)]
    pub bin: Option<String>,

    /// Directory with Guard.png, Notify.png, Success.png, Failed.png and Pending.png
    #[arg(long, value_name = "DIR", global = true)]
    pub icons_dir: Option<String>,

    /// Print terminal-notifier's raw output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Post a notification
    Notify {
        #[command(flatten)]
        message: MessageArgs,

        /// Outcome type, selects the content image: success, failed or pending
        #[arg(long = "type", value_name = "TYPE")]
        kind: Option<NotificationType>,
    },
    /// Post a notification with the success image
    Success {
        #[command(flatten)]
        message: MessageArgs,
    },
    /// Post a notification with the failed image
    Failed {
        #[command(flatten)]
        message: MessageArgs,
    },
    /// Post a notification with the pending image
    Pending {
        #[command(flatten)]
        message: MessageArgs,
    },
    /// Remove the notifications of a group
    Remove {
        /// Group id, or ALL
        #[arg(default_value = ALL_GROUPS)]
        group: String,
    },
    /// List the notifications of a group
    List {
        /// Group id, or ALL
        #[arg(default_value = ALL_GROUPS)]
        group: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show terminal-notifier's own usage
    NotifierHelp,
    /// Check that the terminal-notifier binary is installed
    Available,
}

/// Message and options shared by the posting subcommands
#[derive(Args, Debug, Clone)]
pub struct MessageArgs {
    /// Notification body
    pub message: String,

    /// Notification title
    #[arg(short = 't', long)]
    pub title: Option<String>,

    /// Notification subtitle
    #[arg(short = 's', long)]
    pub subtitle: Option<String>,

    /// Group id, lets a later notification replace this one
    #[arg(short = 'g', long)]
    pub group: Option<String>,

    /// Sound name from /System/Library/Sounds
    #[arg(long)]
    pub sound: Option<String>,

    /// Bundle id of the app to activate on click
    #[arg(long, value_name = "BUNDLE_ID")]
    pub activate: Option<String>,

    /// Bundle id of the app posting the notification
    #[arg(long, value_name = "BUNDLE_ID")]
    pub sender: Option<String>,

    /// URL to open on click
    #[arg(long, value_name = "URL")]
    pub open: Option<String>,

    /// Shell command to run on click
    #[arg(long, value_name = "COMMAND")]
    pub execute: Option<String>,
}

impl MessageArgs {
    /// Split into the message and the remaining request options
    pub fn into_parts(self) -> (String, NotificationRequest) {
        let request = NotificationRequest {
            title: self.title,
            subtitle: self.subtitle,
            group: self.group,
            sound: self.sound,
            activate: self.activate,
            sender: self.sender,
            open: self.open,
            execute: self.execute,
            ..Default::default()
        };
        (self.message, request)
    }
}
