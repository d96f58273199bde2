//! CLI integration tests
//!
//! A shell script stands in for terminal-notifier: it records its arguments
//! to `args.txt` next to itself and prints canned output for `-list`,
//! `-remove` and `-help`. With `FAKE_NOTIFIER_NOTHING_SHOWN` set, `-list`
//! prints only the header line.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const FAKE_NOTIFIER: &str = r#"#!/bin/sh
printf '%s\n' "$@" > "$(dirname "$0")/args.txt"
case "$1" in
  -list)
    if [ -n "$FAKE_NOTIFIER_NOTHING_SHOWN" ]; then
      printf 'GroupID\tTitle\tSubtitle\tMessage\tDelivered At\n'
    elif [ "$2" = "ALL" ]; then
      printf 'GroupID\tTitle\tSubtitle\tMessage\tDelivered At\n'
      printf 'important stuff\tTerminal\t(null)\tExecute: rake spec\t2012-08-06 19:45:30 +0000\n'
      printf '(null)\t(null)\tSubtle\tBe subtle!\t2012-08-07 19:45:30 +0000\n'
    elif [ "$2" = "important stuff" ]; then
      printf 'GroupID\tTitle\tSubtitle\tMessage\tDelivered At\n'
      printf 'important stuff\tTerminal\t(null)\tExecute: rake spec\t2012-08-06 19:45:30 +0000\n'
    fi
    ;;
  -remove)
    echo "removed $2"
    ;;
  -help)
    echo "terminal-notifier (fake) usage"
    ;;
esac
"#;

struct Sandbox {
    dir: TempDir,
    bin: PathBuf,
}

impl Sandbox {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let bin = dir.path().join("terminal-notifier");
        fs::write(&bin, FAKE_NOTIFIER).expect("Failed to write fake notifier");
        fs::set_permissions(&bin, fs::Permissions::from_mode(0o755))
            .expect("Failed to chmod fake notifier");
        Self { dir, bin }
    }

    /// Command isolated from the user's environment
    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("terminal-notifier-guard").expect("binary built");
        cmd.env_remove("TERMINAL_NOTIFIER_BIN")
            .env_remove("FAKE_NOTIFIER_NOTHING_SHOWN");
        cmd
    }

    /// Command pointed at the fake notifier with fixed icons
    fn guard(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.arg("--bin").arg(&self.bin).args(["--icons-dir", "/icons"]);
        cmd
    }

    fn recorded_args(&self) -> Vec<String> {
        read_args(&self.dir.path().join("args.txt"))
    }
}

fn read_args(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("fake notifier was not run")
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn help_output() {
    Sandbox::new()
        .cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("notify"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("remove"))
        .stdout(predicate::str::contains("--bin"));
}

#[test]
fn version_output() {
    Sandbox::new()
        .cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn notify_passes_flags_and_icons() {
    let sandbox = Sandbox::new();

    sandbox
        .guard()
        .args(["notify", "ZOMG", "-g", "important stuff"])
        .assert()
        .success();

    assert_eq!(
        sandbox.recorded_args(),
        vec![
            "-message",
            "ZOMG",
            "-group",
            "important stuff",
            "-appIcon",
            "/icons/Guard.png",
            "-contentImage",
            "/icons/Notify.png",
        ]
    );
}

#[test]
fn notify_type_selects_content_image() {
    let sandbox = Sandbox::new();

    sandbox
        .guard()
        .args(["notify", "ZOMG", "--type", "success"])
        .assert()
        .success();

    assert_eq!(sandbox.recorded_args().last().unwrap(), "/icons/Success.png");
}

#[test]
fn typed_subcommands_select_content_image() {
    let sandbox = Sandbox::new();

    for (command, icon) in [
        ("failed", "/icons/Failed.png"),
        ("success", "/icons/Success.png"),
        ("pending", "/icons/Pending.png"),
    ] {
        sandbox.guard().args([command, "ZOMG"]).assert().success();

        let args = sandbox.recorded_args();
        assert_eq!(&args[..2], &["-message", "ZOMG"]);
        assert_eq!(args.last().unwrap(), icon);
    }
}

#[test]
fn env_override_locates_binary() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .env("TERMINAL_NOTIFIER_BIN", &sandbox.bin)
        .args(["remove", "g"])
        .assert()
        .success();

    assert_eq!(sandbox.recorded_args(), vec!["-remove", "g"]);
}

#[test]
fn remove_defaults_to_all() {
    let sandbox = Sandbox::new();

    sandbox.guard().arg("remove").assert().success();

    assert_eq!(sandbox.recorded_args(), vec!["-remove", "ALL"]);
}

#[test]
fn list_specific_group_prints_single_object() {
    let sandbox = Sandbox::new();

    let output = sandbox
        .guard()
        .args(["list", "important stuff", "--json"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(json.is_object());
    assert_eq!(json["group"], "important stuff");
    assert_eq!(json["title"], "Terminal");
    assert!(json["subtitle"].is_null());
    assert_eq!(json["message"], "Execute: rake spec");
    assert!(json["delivered_at"]
        .as_str()
        .unwrap()
        .starts_with("2012-08-06T19:45:30"));
}

#[test]
fn list_all_prints_array_in_order() {
    let sandbox = Sandbox::new();

    let output = sandbox
        .guard()
        .args(["list", "--json"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let records = json.as_array().expect("Expected a JSON array");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["group"], "important stuff");
    assert!(records[1]["group"].is_null());
    assert!(records[1]["title"].is_null());
    assert_eq!(records[1]["subtitle"], "Subtle");
    assert_eq!(sandbox.recorded_args(), vec!["-list", "ALL"]);
}

#[test]
fn list_unknown_group_is_empty() {
    let sandbox = Sandbox::new();

    sandbox
        .guard()
        .args(["list", "nothing here", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::diff("null\n"));

    sandbox
        .guard()
        .args(["list", "nothing here"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No notifications"));
}

#[test]
fn list_human_output() {
    let sandbox = Sandbox::new();

    sandbox
        .guard()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Execute: rake spec"))
        .stdout(predicate::str::contains("Be subtle!"))
        .stdout(predicate::str::contains("(null)"));
}

#[test]
fn notifier_help_prints_usage() {
    let sandbox = Sandbox::new();

    sandbox
        .guard()
        .arg("notifier-help")
        .assert()
        .success()
        .stdout(predicate::str::contains("terminal-notifier (fake) usage"));

    assert_eq!(sandbox.recorded_args(), vec!["-help"]);
}

#[test]
fn verbose_echoes_raw_output() {
    let sandbox = Sandbox::new();

    sandbox
        .guard()
        .args(["remove", "g"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    sandbox
        .guard()
        .args(["-v", "remove", "g"])
        .assert()
        .success()
        .stdout(predicate::str::diff("removed g\n"));
}

#[test]
fn missing_binary_error() {
    Sandbox::new()
        .cmd()
        .args(["--bin", "/nonexistent/terminal-notifier", "notify", "ZOMG"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn available_reports_binary() {
    let sandbox = Sandbox::new();

    sandbox
        .guard()
        .arg("available")
        .assert()
        .success()
        .stdout(predicate::str::contains("terminal-notifier"));

    sandbox
        .cmd()
        .args(["--bin", "/nonexistent/terminal-notifier", "available"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not executable"));
}

#[test]
fn invalid_type_is_usage_error() {
    Sandbox::new()
        .guard()
        .args(["notify", "ZOMG", "--type", "notify"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn bin_flag_wins_over_env() {
    let sandbox = Sandbox::new();

    sandbox
        .guard()
        .env("TERMINAL_NOTIFIER_BIN", "/nonexistent/terminal-notifier")
        .args(["remove", "flagged"])
        .assert()
        .success();

    assert_eq!(sandbox.recorded_args(), vec!["-remove", "flagged"]);
}

#[test]
fn empty_env_override_falls_back_to_default() {
    let output = Sandbox::new()
        .cmd()
        .env("TERMINAL_NOTIFIER_BIN", "")
        .arg("available")
        .output()
        .expect("failed to run binary");

    // Found or not, the default location is reported
    let text = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(text.contains("/usr/local/bin/terminal-notifier"), "{}", text);
}

#[test]
fn list_all_with_nothing_shown_is_empty_array() {
    let sandbox = Sandbox::new();

    sandbox
        .guard()
        .env("FAKE_NOTIFIER_NOTHING_SHOWN", "1")
        .args(["list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::diff("[]\n"));

    sandbox
        .guard()
        .env("FAKE_NOTIFIER_NOTHING_SHOWN", "1")
        .args(["list", "important stuff", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::diff("null\n"));
}

#[test]
fn unknown_subcommand_is_usage_error() {
    Sandbox::new()
        .cmd()
        .args(["config", "path"])
        .assert()
        .failure()
        .code(2);
}
