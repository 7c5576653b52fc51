//! Integration tests for CLI commands.
//!
//! Each test works in its own temporary project directory.

#![allow(deprecated)] // Command::cargo_bin is deprecated but replacement requires newer assert_cmd

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn rolewright() -> Command {
    let mut cmd = Command::cargo_bin("rolewright").unwrap();
    cmd.arg("--no-color");
    cmd
}

fn init_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    rolewright()
        .args(["init", temp.path().to_str().unwrap()])
        .assert()
        .success();
    temp
}

fn project_arg(dir: &Path) -> &str {
    dir.to_str().unwrap()
}

// ============================================================================
// Version / Init
// ============================================================================

#[test]
fn version_shows_role_types() {
    rolewright()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rolewright"))
        .stdout(predicate::str::contains("lambda, rds, authorizer, composite"));
}

#[test]
fn init_writes_config_and_starter_policy() {
    let temp = init_project();

    assert!(temp.path().join("rolewright.toml").exists());
    assert!(temp.path().join("policies/lambda_policy.json").exists());
    assert!(temp.path().join(".gitignore").exists());
}

#[test]
fn init_twice_fails() {
    let temp = init_project();
    rolewright()
        .args(["init", project_arg(temp.path())])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

// ============================================================================
// Validate
// ============================================================================

#[test]
fn validate_starter_project_succeeds() {
    let temp = init_project();
    rolewright()
        .args(["validate", "--project", project_arg(temp.path())])
        .assert()
        .success()
        .stdout(predicate::str::contains("MyLambdaRole"));
}

#[test]
fn validate_uninitialized_project_fails() {
    let temp = TempDir::new().unwrap();
    rolewright()
        .args(["validate", "--project", project_arg(temp.path())])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not initialized"));
}

#[test]
fn validate_reports_missing_policy_file() {
    let temp = init_project();
    fs::remove_file(temp.path().join("policies/lambda_policy.json")).unwrap();

    rolewright()
        .args(["validate", "--project", project_arg(temp.path())])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Policy file lambda_policy.json not found",
        ));
}

#[test]
fn validate_reports_each_failure_once() {
    let temp = init_project();
    fs::remove_file(temp.path().join("policies/lambda_policy.json")).unwrap();

    let output = rolewright()
        .args(["validate", "--project", project_arg(temp.path())])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("lambda_policy.json not found").count(), 1);
    assert!(stderr.contains("1 of 1 role(s) failed validation"));
}

#[test]
fn validate_checks_secrets_section() {
    let temp = init_project();
    fs::write(
        temp.path().join("rolewright.local.toml"),
        r#"
[secrets]
auth_token = "token-0123456789"
db_username = "app"
db_password = "hunter22"
db_name = "oltp"
db_endpoint = "db.internal:5432"
bucket_name = "ingest-bucket"
"#,
    )
    .unwrap();

    rolewright()
        .args(["validate", "--project", project_arg(temp.path())])
        .assert()
        .success()
        .stdout(predicate::str::contains("6 value(s) for unique-secrets-name"))
        .stdout(predicate::str::contains("hunter22").not());

    fs::write(
        temp.path().join("rolewright.local.toml"),
        "[secrets]\nauth_token = \"short\"\n",
    )
    .unwrap();

    rolewright()
        .args(["validate", "--project", project_arg(temp.path())])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required property: dbUsername"));
}

#[test]
fn config_show_never_prints_secrets() {
    let temp = init_project();
    fs::write(
        temp.path().join("rolewright.local.toml"),
        "[secrets]\ndb_password = \"hunter22\"\n",
    )
    .unwrap();

    rolewright()
        .args([
            "config",
            "show",
            "--project",
            project_arg(temp.path()),
            "--format",
            "toml",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("hunter22").not());
}

#[test]
fn validate_rejects_unknown_role_type() {
    let temp = init_project();
    fs::write(
        temp.path().join("rolewright.toml"),
        "[[roles]]\nrole_type = \"ec2\"\n",
    )
    .unwrap();

    rolewright()
        .args(["validate", "--project", project_arg(temp.path())])
        .assert()
        .failure();
}

// ============================================================================
// Build
// ============================================================================

#[test]
fn build_json_outputs_complete_role() {
    let temp = init_project();

    let output = rolewright()
        .args([
            "build",
            "--project",
            project_arg(temp.path()),
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let roles: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let role = &roles[0];
    assert_eq!(role["name"], "MyLambdaRole");
    assert_eq!(role["tags"]["RoleName"], "MyLambdaRole");
    assert_eq!(role["tags"]["Project"], "OLTP Role");

    let sids: Vec<&str> = role["statements"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["Sid"].as_str().unwrap())
        .collect();
    assert_eq!(
        sids,
        vec![
            "LambdaBasicExecution",
            "LambdaBasicInvoke",
            "SecretRead",
            "VpcAccess"
        ]
    );
}

#[test]
fn build_text_shows_tables() {
    let temp = init_project();
    rolewright()
        .args(["build", "--project", project_arg(temp.path())])
        .assert()
        .success()
        .stdout(predicate::str::contains("MyLambdaRole"))
        .stdout(predicate::str::contains("secretsmanager:GetSecretValue"))
        .stdout(predicate::str::contains("Environment"));
}

#[test]
fn build_unknown_role_fails() {
    let temp = init_project();
    rolewright()
        .args([
            "build",
            "--project",
            project_arg(temp.path()),
            "--role",
            "NoSuchRole",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No role named 'NoSuchRole'"));
}

#[test]
fn build_malformed_policy_fails() {
    let temp = init_project();
    fs::write(temp.path().join("policies/lambda_policy.json"), "{ nope").unwrap();

    rolewright()
        .args(["build", "--project", project_arg(temp.path())])
        .assert()
        .failure()
        .stdout(predicate::str::contains("MyLambdaRole").not());
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn config_show_toml() {
    let temp = init_project();
    rolewright()
        .args([
            "config",
            "show",
            "--project",
            project_arg(temp.path()),
            "--format",
            "toml",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("[project]"))
        .stdout(predicate::str::contains("[[roles]]"));
}

#[test]
fn config_show_text_lists_roles() {
    let temp = init_project();
    rolewright()
        .args(["config", "show", "--project", project_arg(temp.path())])
        .assert()
        .success()
        .stdout(predicate::str::contains("MyLambdaRole"))
        .stdout(predicate::str::contains("lambda_policy.json"));
}
