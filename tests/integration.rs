// Integration tests for the revscan CLI.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes and stdout/stderr output.

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the revscan binary.
fn revscan() -> Command {
    Command::cargo_bin("revscan").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    revscan()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("revscan"));
}

#[test]
fn cli_help_flag() {
    revscan()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("revenue potential"));
}

#[test]
fn analyze_requires_path() {
    revscan()
        .arg("analyze")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn suggest_requires_path() {
    revscan()
        .arg("suggest")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn trends_needs_no_path() {
    revscan()
        .arg("trends")
        .assert()
        .success()
        .stdout(predicate::str::contains("Trending Models"));
}

#[test]
fn quiet_conflicts_with_verbose() {
    revscan()
        .args(["trends", "--quiet", "--verbose"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
