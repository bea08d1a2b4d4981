use assert_cmd::Command;
use predicates::prelude::*;

/// Test CLI help output
#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("world-clock-kiosk").unwrap();
    let assert = cmd.arg("--help").assert();

    assert.success();
}

/// Test CLI version output
#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("world-clock-kiosk").unwrap();
    let assert = cmd.arg("--version").assert();

    assert.success();
}

/// A single text frame lists the configured cities
#[test]
fn test_once_renders_roster() {
    let mut cmd = Command::cargo_bin("world-clock-kiosk").unwrap();
    let assert = cmd.arg("--once").assert();

    assert
        .success()
        .stdout(predicate::str::contains("WORLD CLOCK"))
        .stdout(predicate::str::contains("Vancouver"))
        .stdout(predicate::str::contains("Sri Lanka"));
}

/// A single JSON frame decodes and carries the full roster
#[test]
fn test_once_json_frame_shape() {
    let mut cmd = Command::cargo_bin("world-clock-kiosk").unwrap();
    let output = cmd.args(["--once", "--json"]).output().unwrap();

    assert!(output.status.success());

    let frame: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let records = frame["records"].as_array().unwrap();

    assert_eq!(records.len(), 7);
    assert!(frame["any_meeting_active"].is_boolean());
    assert!(records.iter().any(|r| r["city"] == "United Kingdom"));
    for record in records {
        assert!(record["hour"].as_u64().unwrap() <= 23);
        assert!(record["minute"].as_u64().unwrap() <= 59);
        assert!(record["second"].as_u64().unwrap() <= 59);
    }
}

/// Timezone override shows up in the frame header
#[test]
fn test_local_timezone_override() {
    let mut cmd = Command::cargo_bin("world-clock-kiosk").unwrap();
    let output = cmd
        .args(["--once", "--json", "--local-timezone", "Asia/Manila"])
        .output()
        .unwrap();

    assert!(output.status.success());

    let frame: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(frame["local_timezone"], "Asia/Manila");
}

/// An unknown timezone override fails at startup
#[test]
fn test_invalid_local_timezone_fails() {
    let mut cmd = Command::cargo_bin("world-clock-kiosk").unwrap();
    let assert = cmd.args(["--once", "--local-timezone", "Mars/Olympus_Mons"]).assert();

    assert.failure();
}
