//! Focused CLI argument parsing tests.

#![allow(deprecated)] // Command::cargo_bin is deprecated but replacement requires newer assert_cmd

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn campus(project: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("campus").unwrap();
    cmd.arg("--no-color")
        .arg("--project")
        .arg(project.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn version_command_succeeds() {
    let project = TempDir::new().unwrap();
    campus(&project)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("campus"));
}

#[test]
fn version_flag_shows_version() {
    Command::cargo_bin("campus")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("campus"));
}

#[test]
fn help_flag_shows_usage() {
    Command::cargo_bin("campus")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("role-based access"));
}

#[test]
fn check_requires_resource_and_action() {
    let project = TempDir::new().unwrap();
    campus(&project)
        .args(["check", "courses"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn check_help_shows_options() {
    Command::cargo_bin("campus")
        .unwrap()
        .args(["check", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--role"))
        .stdout(predicate::str::contains("--sub-role"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn route_requires_path() {
    let project = TempDir::new().unwrap();
    campus(&project)
        .arg("route")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn matrix_rejects_unknown_role_filter() {
    let project = TempDir::new().unwrap();
    campus(&project)
        .args(["matrix", "--role", "janitor"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --role"));
}

#[test]
fn config_show_rejects_unknown_format() {
    let project = TempDir::new().unwrap();
    campus(&project)
        .args(["config", "show", "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown format"));
}

#[test]
fn unknown_subcommand_fails() {
    Command::cargo_bin("campus")
        .unwrap()
        .arg("enroll")
        .assert()
        .failure();
}
