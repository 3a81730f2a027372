//! CLI integration tests.
//!
//! Each test runs the compiled binary with HOME pointed at a temp
//! directory, so the user's real config never leaks in.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn mindful_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mindful").unwrap();
    cmd.env("HOME", home.path());
    cmd
}

fn write_config(home: &TempDir, contents: &str) {
    let dir = home.path().join(".mindful");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.yaml"), contents).unwrap();
}

#[test]
fn test_sessions_lists_full_catalog() {
    let home = TempDir::new().unwrap();
    mindful_cmd(&home)
        .arg("sessions")
        .assert()
        .success()
        .stdout(predicate::str::contains("All (8 sessions)"))
        .stdout(predicate::str::contains("Morning Calm"))
        .stdout(predicate::str::contains("Full Body Relaxation"));
}

#[test]
fn test_ls_alias_matches_sessions() {
    let home = TempDir::new().unwrap();
    mindful_cmd(&home)
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("All (8 sessions)"));
}

#[test]
fn test_sessions_category_filter() {
    let home = TempDir::new().unwrap();
    mindful_cmd(&home)
        .args(["sessions", "--category", "breathing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Breathing (2 sessions)"))
        .stdout(predicate::str::contains("4-7-8 Breathing"))
        .stdout(predicate::str::contains("Morning Calm").not());
}

#[test]
fn test_sessions_json_output() {
    let home = TempDir::new().unwrap();
    let output = mindful_cmd(&home)
        .args(["sessions", "-o", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(parsed["count"], 8);
    assert_eq!(parsed["items"][0]["title"], "Morning Calm");
    assert_eq!(parsed["items"][0]["duration_seconds"], 600);
    assert_eq!(parsed["items"][4]["category"], "breathing");
}

#[test]
fn test_start_unknown_session_fails() {
    let home = TempDir::new().unwrap();
    mindful_cmd(&home)
        .args(["start", "nonexistent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not found"))
        .stderr(predicate::str::contains("nonexistent"));
}

#[test]
fn test_help_describes_the_tool() {
    let home = TempDir::new().unwrap();
    mindful_cmd(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("meditation"));
}

#[test]
fn test_completions_bash() {
    let home = TempDir::new().unwrap();
    mindful_cmd(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mindful"));
}

#[test]
fn test_completions_unknown_shell_fails() {
    let home = TempDir::new().unwrap();
    mindful_cmd(&home)
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not found"));
}

#[test]
fn test_invalid_config_is_rejected() {
    let home = TempDir::new().unwrap();
    write_config(&home, "ui: [unterminated");

    mindful_cmd(&home)
        .arg("sessions")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_catalog_override_replaces_builtins() {
    let home = TempDir::new().unwrap();
    write_config(
        &home,
        "catalog:\n  - id: 1\n    title: Evening Wind Down\n    duration_seconds: 300\n    category: meditation\n    icon: moon\n",
    );

    mindful_cmd(&home)
        .arg("sessions")
        .assert()
        .success()
        .stdout(predicate::str::contains("Evening Wind Down"))
        .stdout(predicate::str::contains("All (1 sessions)"))
        .stdout(predicate::str::contains("Morning Calm").not());
}

#[test]
fn test_duplicate_catalog_ids_are_rejected() {
    let home = TempDir::new().unwrap();
    write_config(
        &home,
        "catalog:\n  - id: 3\n    title: One\n    duration_seconds: 60\n    category: meditation\n    icon: sun\n  - id: 3\n    title: Two\n    duration_seconds: 60\n    category: breathing\n    icon: wind\n",
    );

    mindful_cmd(&home)
        .arg("sessions")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate session id"));
}

#[test]
fn test_version_flag() {
    let home = TempDir::new().unwrap();
    mindful_cmd(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mindful"));
}
