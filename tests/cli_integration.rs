//! Integration tests for the `todoflow` binary's startup path.
//!
//! The TUI needs a real terminal, so these only cover what happens before
//! it starts: argument parsing, logging setup and config loading.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Get the path to the built `todoflow` binary.
fn todoflow_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("todoflow");
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(todoflow_bin())
        .args(args)
        .output()
        .expect("failed to run todoflow")
}

#[test]
fn version_flag() {
    let out = run(&["--version"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("todoflow "), "unexpected: {}", stdout);
}

#[test]
fn help_lists_flags() {
    let out = run(&["--help"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--view"));
    assert!(stdout.contains("--log-file"));
}

#[test]
fn unknown_view_is_rejected() {
    let out = run(&["--view", "someday"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("unknown view"), "unexpected: {}", stderr);
}

#[test]
fn missing_config_file_fails_before_tui() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("missing.toml");
    let out = run(&["--config", path.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("error: could not read"), "unexpected: {}", stderr);
}

#[test]
fn malformed_config_fails_before_tui() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.toml");
    fs::write(&path, "[ui]\ndefault_view = \"someday\"\n").unwrap();
    let out = run(&["--config", path.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("error: could not parse"), "unexpected: {}", stderr);
}

#[test]
fn log_file_without_name_fails_before_tui() {
    let out = run(&["--log-file", "/"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.starts_with("error: invalid log file path"),
        "unexpected: {}",
        stderr
    );
}
