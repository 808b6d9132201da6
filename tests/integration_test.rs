use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("local-notify").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Local notification builder"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("local-notify").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("local-notify"));
}

#[test]
fn test_init_command() {
    let temp_dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("local-notify").unwrap();

    cmd.arg("init")
        .arg("--project")
        .arg(temp_dir.path())
        .assert()
        .success();

    // Check that config file was created
    assert!(temp_dir
        .path()
        .join(".local-notify/config.toml")
        .exists());
}

#[test]
fn test_init_refuses_overwrite_without_force() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("local-notify").unwrap();
    cmd.arg("init")
        .arg("--project")
        .arg(temp_dir.path())
        .assert()
        .success();

    let mut cmd = Command::cargo_bin("local-notify").unwrap();
    cmd.arg("init")
        .arg("--project")
        .arg(temp_dir.path())
        .assert()
        .failure();

    let mut cmd = Command::cargo_bin("local-notify").unwrap();
    cmd.arg("init")
        .arg("--force")
        .arg("--project")
        .arg(temp_dir.path())
        .assert()
        .success();
}

#[test]
fn test_build_from_stdin() {
    let temp_dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("local-notify").unwrap();

    cmd.arg("build")
        .arg("--project")
        .arg(temp_dir.path())
        .write_stdin(r#"{"id": 3, "title": "Meeting", "text": "Stand-up in 5"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\":\"Meeting\""))
        .stdout(predicate::str::contains("contentToken"))
        .stdout(predicate::str::contains("deleteToken"));
}

#[test]
fn test_build_is_the_default_command() {
    let temp_dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("local-notify").unwrap();

    cmd.arg("--project")
        .arg(temp_dir.path())
        .write_stdin(r#"{"id": 1, "title": "Ping", "text": "Pong"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"ticker\":\"Pong\""));
}

#[test]
fn test_build_no_clear_drops_delete_token() {
    let temp_dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("local-notify").unwrap();

    cmd.arg("build")
        .arg("--no-clear")
        .arg("--project")
        .arg(temp_dir.path())
        .write_stdin(r#"{"id": 5, "title": "Quiet"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("deleteToken").not())
        .stdout(predicate::str::contains("contentToken"));
}

#[test]
fn test_build_with_actions_wires_buttons() {
    let temp_dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("local-notify").unwrap();

    cmd.arg("build")
        .arg("--sequential-codes")
        .arg("--project")
        .arg(temp_dir.path())
        .write_stdin(
            r#"{"id": 4, "title": "Alarm", "actions": [
                {"id": "snooze", "title": "Snooze"},
                {"id": "dismiss", "title": "Dismiss"}
            ]}"#,
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("\"buttons\""))
        .stdout(predicate::str::contains("snooze"))
        .stdout(predicate::str::contains("dismiss"));
}

#[test]
fn test_build_from_file_pretty() {
    let temp_dir = TempDir::new().unwrap();
    let options_path = temp_dir.path().join("options.json");
    std::fs::write(
        &options_path,
        r#"{"id": 8, "title": "File", "text": "From disk"}"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("local-notify").unwrap();
    cmd.arg("build")
        .arg(&options_path)
        .arg("--pretty")
        .arg("--project")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"File\""));
}

#[test]
fn test_build_rejects_malformed_options() {
    let temp_dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("local-notify").unwrap();

    cmd.arg("build")
        .arg("--project")
        .arg(temp_dir.path())
        .write_stdin(r#"{"id": "not-a-number"}"#)
        .assert()
        .failure();
}

#[test]
fn test_validate_reports_options() {
    let temp_dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("local-notify").unwrap();

    cmd.arg("validate")
        .arg("--project")
        .arg(temp_dir.path())
        .write_stdin(r#"{"id": 9, "title": "Check", "actions": [{"id": "a", "title": "A"}]}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("Valid notification options"))
        .stdout(predicate::str::contains("Id: 9"))
        .stdout(predicate::str::contains("Actions: 1"));
}

#[test]
fn test_validate_rejects_bad_json() {
    let temp_dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("local-notify").unwrap();

    cmd.arg("validate")
        .arg("--project")
        .arg(temp_dir.path())
        .write_stdin("{not json")
        .assert()
        .failure();
}

#[test]
fn test_config_show() {
    let temp_dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("local-notify").unwrap();

    // First initialize config
    cmd.arg("init")
        .arg("--project")
        .arg(temp_dir.path())
        .assert()
        .success();

    // Then show config
    let mut cmd = Command::cargo_bin("local-notify").unwrap();
    cmd.arg("config")
        .arg("show")
        .arg("--project")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[handlers]"))
        .stdout(predicate::str::contains("clear-receiver"));
}

#[test]
fn test_config_set_and_get() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("local-notify").unwrap();
    cmd.arg("config")
        .arg("set")
        .arg("handlers.click")
        .arg("my-click")
        .arg("--project")
        .arg(temp_dir.path())
        .assert()
        .success();

    let mut cmd = Command::cargo_bin("local-notify").unwrap();
    cmd.arg("config")
        .arg("get")
        .arg("handlers.click")
        .arg("--project")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("my-click"));
}

#[test]
fn test_config_set_rejects_unknown_key() {
    let temp_dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("local-notify").unwrap();

    cmd.arg("config")
        .arg("set")
        .arg("unknown.key")
        .arg("value")
        .arg("--project")
        .arg(temp_dir.path())
        .assert()
        .failure();
}
