//! Integration tests for the todosync CLI
//!
//! These run the real binary. Commands that talk to the server are pointed at
//! an unreachable address so they fail fast and deterministically.

use std::fs;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a todosync command with an isolated config
fn todosync(config: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("todosync"));
    cmd.arg("--config")
        .arg(config.path().join("config.toml"))
        .env_remove("TODOSYNC_BASE_URL")
        .env_remove("TODOSYNC_API_KEY");
    cmd
}

#[test]
fn test_version_flag() {
    let dir = TempDir::new().unwrap();
    todosync(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    todosync(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("lists"))
        .stdout(predicate::str::contains("task"))
        .stdout(predicate::str::contains("whoami"));
}

#[test]
fn test_version_command_json() {
    let dir = TempDir::new().unwrap();
    let output = todosync(&dir).args(["--json", "version"]).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_no_args_prints_hint() {
    let dir = TempDir::new().unwrap();
    todosync(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("todosync --help"));
}

#[test]
fn test_config_set_key_then_show() {
    let dir = TempDir::new().unwrap();
    todosync(&dir)
        .args(["config", "set-key", "super-secret"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved"));

    let content = fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(content.contains("super-secret"));

    todosync(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("api_key"))
        .stdout(predicate::str::contains("super-secret").not());
}

#[test]
fn test_config_set_url_json() {
    let dir = TempDir::new().unwrap();
    todosync(&dir)
        .args(["config", "set-url", "http://localhost:9/api/"])
        .assert()
        .success();

    let output = todosync(&dir).args(["--json", "config", "show"]).output().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["api"]["base_url"], "http://localhost:9/api/");
}

#[test]
fn test_invalid_filter_is_rejected() {
    let dir = TempDir::new().unwrap();
    todosync(&dir)
        .args(["tasks", "a", "--filter", "sometimes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid filter"));
}

#[test]
fn test_update_without_fields_fails() {
    let dir = TempDir::new().unwrap();
    todosync(&dir)
        .args(["task", "update", "a", "t1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to update"));
}

#[test]
fn test_unreachable_server_reports_error() {
    let dir = TempDir::new().unwrap();
    todosync(&dir)
        .args(["config", "set-url", "http://127.0.0.1:9/"])
        .assert()
        .success();

    todosync(&dir)
        .args(["--json", "lists"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"failed\""))
        .stderr(predicate::str::contains("Error:"));
}
