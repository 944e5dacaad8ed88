//! Integration tests for CLI commands.

#![allow(deprecated)] // Command::cargo_bin is deprecated but replacement requires newer assert_cmd

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn campus(project: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("campus").unwrap();
    cmd.arg("--no-color")
        .arg("--project")
        .arg(project.path())
        .env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Check
// ============================================================================

#[test]
fn check_allows_guest_lecturer_to_view_courses() {
    let project = TempDir::new().unwrap();
    campus(&project)
        .args([
            "check",
            "courses",
            "view",
            "--role",
            "professor",
            "--sub-role",
            "guest_lecturer",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("ALLOW"))
        .stdout(predicate::str::contains("guest-lecturer-read-courses"));
}

#[test]
fn check_denies_finance_admin_delete() {
    let project = TempDir::new().unwrap();
    campus(&project)
        .args([
            "check",
            "enrollments",
            "delete",
            "--role",
            "admin",
            "--sub-role",
            "finance_admin",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("DENY"))
        .stdout(predicate::str::contains("finance-admin-enrollments"));
}

#[test]
fn check_denies_visitor_without_role() {
    let project = TempDir::new().unwrap();
    campus(&project)
        .args(["check", "courses", "view"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DENY"))
        .stdout(predicate::str::contains("anonymous"));
}

#[test]
fn check_json_reports_decision() {
    let project = TempDir::new().unwrap();
    let output = campus(&project)
        .args(["check", "enrollments", "create", "--role", "student", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let decision: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(decision["actor"], "student");
    assert_eq!(decision["effect"], "allow");
    assert_eq!(decision["matched_rule"], "student-enrollments");
}

// ============================================================================
// Matrix
// ============================================================================

#[test]
fn matrix_lists_every_profile() {
    let project = TempDir::new().unwrap();
    campus(&project)
        .arg("matrix")
        .assert()
        .success()
        .stdout(predicate::str::contains("admin/super_admin"))
        .stdout(predicate::str::contains("professor/guest_lecturer"))
        .stdout(predicate::str::contains("(9 rows)"));
}

#[test]
fn matrix_json_for_students() {
    let project = TempDir::new().unwrap();
    let output = campus(&project)
        .args(["matrix", "--role", "student", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["actor"], "student");
    assert_eq!(
        rows[0]["permissions"]["enrollments"],
        serde_json::json!(["view", "create"])
    );
    assert_eq!(rows[0]["permissions"]["courses"], serde_json::json!([]));
}

#[test]
fn matrix_uses_configured_universe() {
    let project = TempDir::new().unwrap();
    fs::write(
        project.path().join("campus.toml"),
        "[matrix]\nresources = [\"courses\"]\nactions = [\"view\", \"delete\"]\n",
    )
    .unwrap();

    let output = campus(&project)
        .args(["matrix", "--role", "professor", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        rows[0]["permissions"],
        serde_json::json!({ "courses": ["view", "delete"] })
    );
}

// ============================================================================
// Route
// ============================================================================

#[test]
fn route_redirects_student_away_from_admin() {
    let project = TempDir::new().unwrap();
    campus(&project)
        .args(["route", "/admin/finance", "--role", "student"])
        .assert()
        .success()
        .stdout(predicate::str::contains("REDIRECT"))
        .stdout(predicate::str::contains("/student"));
}

#[test]
fn route_sends_visitor_to_login() {
    let project = TempDir::new().unwrap();
    campus(&project)
        .args(["route", "/messages"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/login"));
}

#[test]
fn route_allows_public_pages() {
    let project = TempDir::new().unwrap();
    campus(&project)
        .args(["route", "/signup"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ALLOW"));
}

#[test]
fn route_uses_configured_rules() {
    let project = TempDir::new().unwrap();
    fs::write(
        project.path().join("campus.toml"),
        r#"
[[routes]]
pattern = "/library/*"
roles = ["student"]
"#,
    )
    .unwrap();

    campus(&project)
        .args(["route", "/library/loans", "--role", "student"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ALLOW"))
        .stdout(predicate::str::contains("/library/*"));

    // The standard dashboard rules are replaced, not extended.
    campus(&project)
        .args(["route", "/student", "--role", "student"])
        .assert()
        .success()
        .stdout(predicate::str::contains("REDIRECT"));
}

// ============================================================================
// Hierarchy
// ============================================================================

#[test]
fn hierarchy_reports_every_chain_contained() {
    let project = TempDir::new().unwrap();
    campus(&project)
        .arg("hierarchy")
        .assert()
        .success()
        .stdout(predicate::str::contains("professor sub-roles"))
        .stdout(predicate::str::contains("admin sub-roles"))
        .stdout(predicate::str::contains("Every senior sub-role contains its juniors."));
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn config_show_text_defaults() {
    let project = TempDir::new().unwrap();
    campus(&project)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Campus Configuration"))
        .stdout(predicate::str::contains("standard dashboard routes"))
        .stdout(predicate::str::contains("not found, using defaults"));
}

#[test]
fn config_show_text_reports_project_file() {
    let project = TempDir::new().unwrap();
    fs::write(
        project.path().join("campus.toml"),
        "[project]\nname = \"riverside-high\"\n",
    )
    .unwrap();

    campus(&project)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("riverside-high"))
        .stdout(predicate::str::contains("campus.toml (found)"));
}

#[test]
fn config_show_toml_reflects_project_file() {
    let project = TempDir::new().unwrap();
    fs::write(
        project.path().join("campus.toml"),
        "[project]\nname = \"riverside-high\"\n\n[audit]\nenabled = false\n",
    )
    .unwrap();

    campus(&project)
        .args(["config", "show", "--format", "toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("name = \"riverside-high\""))
        .stdout(predicate::str::contains("enabled = false"));
}

#[test]
fn invalid_config_fails_every_command() {
    let project = TempDir::new().unwrap();
    fs::write(project.path().join("campus.toml"), "[matrix]\nactions = []\n").unwrap();

    campus(&project)
        .args(["check", "courses", "view", "--role", "student"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("matrix.actions"));
}
