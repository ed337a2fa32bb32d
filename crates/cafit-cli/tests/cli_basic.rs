//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against a temp-dir journal and
//! settings file, and verify outputs.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Run a CLI command against the given state directory and return output.
fn run_cli(dir: &Path, args: &[&str]) -> (String, String, i32) {
    let journal = dir.join("journal.json");
    let settings = dir.join("settings.toml");
    let output = Command::new("cargo")
        .args(["run", "-p", "cafit-cli", "--quiet", "--"])
        .args(["--journal", journal.to_str().unwrap()])
        .args(["--settings", settings.to_str().unwrap()])
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_log_then_status() {
    let dir = TempDir::new().unwrap();

    let (stdout, _, code) = run_cli(
        dir.path(),
        &["log", "--name", "Americano", "--caffeine", "150", "--brand", "Blue Bottle"],
    );
    assert_eq!(code, 0, "log failed");
    assert!(stdout.contains("Recorded: Americano(Blue Bottle)"));

    let (stdout, _, code) = run_cli(dir.path(), &["status", "--json"]);
    assert_eq!(code, 0, "status failed");
    let status: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(status["today_total_mg"], 150.0);
    assert!(status["current_mg"].as_f64().unwrap() > 149.0);
}

#[test]
fn test_status_with_empty_journal() {
    let dir = TempDir::new().unwrap();

    let (stdout, _, code) = run_cli(dir.path(), &["status", "--json"]);
    assert_eq!(code, 0, "status failed");
    let status: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(status["current_mg"], 0.0);
    assert_eq!(status["recommendation"], "SAFE");

    let (stdout, _, code) = run_cli(dir.path(), &["status"]);
    assert_eq!(code, 0, "status failed");
    assert!(stdout.contains("Safe: "));
}

#[test]
fn test_check_does_not_record() {
    let dir = TempDir::new().unwrap();

    let (stdout, _, code) = run_cli(
        dir.path(),
        &["check", "--name", "Espresso", "--caffeine", "75"],
    );
    assert_eq!(code, 0, "check failed");
    let check: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(check["after"]["today_total_mg"], 75.0);

    let (stdout, _, code) = run_cli(dir.path(), &["history"]);
    assert_eq!(code, 0, "history failed");
    assert!(stdout.contains("No intakes recorded."));
}

#[test]
fn test_check_over_the_daily_limit() {
    let dir = TempDir::new().unwrap();

    for _ in 0..2 {
        let (_, _, code) = run_cli(
            dir.path(),
            &["log", "--name", "Cold Brew", "--caffeine", "200"],
        );
        assert_eq!(code, 0, "log failed");
    }

    let (stdout, _, code) = run_cli(
        dir.path(),
        &["check", "--name", "Espresso", "--caffeine", "75"],
    );
    assert_eq!(code, 0, "check failed");
    let check: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(check["recommendation"], "DANGER");
    assert_eq!(check["is_safe"], false);
}

#[test]
fn test_log_rejects_negative_caffeine() {
    let dir = TempDir::new().unwrap();

    let (_, stderr, code) = run_cli(
        dir.path(),
        &["log", "--name", "Mystery", "--caffeine", "-10"],
    );
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_timeline_shape() {
    let dir = TempDir::new().unwrap();
    let (_, _, code) = run_cli(
        dir.path(),
        &["log", "--name", "Americano", "--caffeine", "150"],
    );
    assert_eq!(code, 0, "log failed");

    let (stdout, _, code) = run_cli(dir.path(), &["timeline", "--hours", "6"]);
    assert_eq!(code, 0, "timeline failed");
    let timeline: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(timeline["points"].as_array().unwrap().len(), 7);
}

#[test]
fn test_stats_daily_and_top() {
    let dir = TempDir::new().unwrap();
    let (_, _, code) = run_cli(
        dir.path(),
        &["log", "--name", "Green Tea", "--caffeine", "30", "--category", "tea"],
    );
    assert_eq!(code, 0, "log failed");

    let (stdout, _, code) = run_cli(dir.path(), &["stats", "daily", "--days", "3"]);
    assert_eq!(code, 0, "stats daily failed");
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["days"].as_array().unwrap().len(), 3);

    let (stdout, _, code) = run_cli(dir.path(), &["stats", "top"]);
    assert_eq!(code, 0, "stats top failed");
    let top: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(top[0]["beverage_name"], "Green Tea");
    assert_eq!(top[0]["count"], 1);
}

#[test]
fn test_settings_init_and_show() {
    let dir = TempDir::new().unwrap();

    let (stdout, _, code) = run_cli(dir.path(), &["settings", "init"]);
    assert_eq!(code, 0, "settings init failed");
    assert!(stdout.contains("Settings written to"));

    let (stdout, _, code) = run_cli(dir.path(), &["settings", "show"]);
    assert_eq!(code, 0, "settings show failed");
    assert!(stdout.contains("daily_limit_mg = 400"));

    // A second init must refuse to overwrite.
    let (_, stderr, code) = run_cli(dir.path(), &["settings", "init"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("already exists"));
}
