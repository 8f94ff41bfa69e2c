//! Integration tests for the tasklens CLI
//!
//! Every test runs the real binary against an isolated, empty config file
//! so the user's own settings never leak in.


use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper function to create a tasklens command
fn tasklens() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("tasklens"));
    cmd.env_remove("TASKLENS_CONFIG").env("NO_COLOR", "1");
    cmd
}

/// Helper to create a tasklens command using an empty config in `dir`
fn tasklens_in(dir: &Path) -> assert_cmd::Command {
    let config = dir.join("config.toml");
    if !config.exists() {
        fs::write(&config, "").unwrap();
    }
    let mut cmd = tasklens();
    cmd.arg("--config").arg(config);
    cmd
}

/// Helper to write an input file
fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

// =============================================================================
// BASICS
// =============================================================================

#[test]
fn test_version() {
    tasklens()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tasklens v"));
}

#[test]
fn test_version_json() {
    let output = tasklens().args(["--json", "version"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_no_command_prints_hint() {
    tasklens()
        .assert()
        .success()
        .stdout(predicate::str::contains("tasklens --help"));
}

#[test]
fn test_help_lists_commands() {
    tasklens()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("extract"))
        .stdout(predicate::str::contains("assess"))
        .stdout(predicate::str::contains("report"));
}

// =============================================================================
// EXTRACT
// =============================================================================

#[test]
fn test_extract_text_human() {
    let temp = TempDir::new().unwrap();
    let notes = write_file(
        temp.path(),
        "notes.txt",
        "Maya will draft the launch plan. We decided to migrate to the new vendor going forward.",
    );

    tasklens_in(temp.path())
        .arg("extract")
        .arg(&notes)
        .assert()
        .success()
        .stdout(predicate::str::contains("Tasks (1):"))
        .stdout(predicate::str::contains("draft the launch plan"))
        .stdout(predicate::str::contains("Decisions (1):"))
        .stdout(predicate::str::contains("to migrate to the new vendor"));
}

#[test]
fn test_extract_text_json() {
    let temp = TempDir::new().unwrap();
    let notes = write_file(
        temp.path(),
        "notes.txt",
        "The budget is assigned to Priya. Priya will send the budget by 2030-01-15.",
    );

    let output = tasklens_in(temp.path())
        .args(["--json", "extract"])
        .arg(&notes)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["metadata"]["segment_count"], 1);
    assert_eq!(json["metadata"]["oracle_used"], false);
    let tasks = json["tasks"].as_array().unwrap();
    let send = tasks.iter().find(|t| t["pattern_id"] == "task.will").unwrap();
    assert_eq!(send["text"], "send the budget by 2030-01-15");
    assert!(send["deadline"].as_str().unwrap().starts_with("2030-01-15T23:59:59"));
    assert!(json.get("assessed_tasks").is_none());
}

#[test]
fn test_extract_empty_input() {
    let temp = TempDir::new().unwrap();
    let notes = write_file(temp.path(), "empty.txt", "");

    tasklens_in(temp.path())
        .arg("extract")
        .arg(&notes)
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks or decisions found."));
}

#[test]
fn test_extract_segments() {
    let temp = TempDir::new().unwrap();
    let segments = write_file(
        temp.path(),
        "segments.json",
        r#"[
            {"speaker": "A", "start_time": 0.0, "end_time": 2.5, "text": "We need to book the venue."},
            {"speaker": "B", "start_time": 2.5, "end_time": 5.0, "text": "Agreed on a June date."}
        ]"#,
    );

    let output = tasklens_in(temp.path())
        .args(["--json", "extract", "--format", "segments"])
        .arg(&segments)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["metadata"]["segment_count"], 2);
    assert_eq!(json["tasks"][0]["text"], "book the venue");
    assert_eq!(json["decisions"][0]["text"], "a June date");
}

#[test]
fn test_extract_from_stdin() {
    let temp = TempDir::new().unwrap();
    tasklens_in(temp.path())
        .args(["extract", "-"])
        .write_stdin("Let's review the budget.")
        .assert()
        .success()
        .stdout(predicate::str::contains("review the budget"));
}

#[test]
fn test_extract_missing_file_fails() {
    let temp = TempDir::new().unwrap();
    tasklens_in(temp.path())
        .args(["extract", "does-not-exist.txt"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn test_extract_bad_segments_fails() {
    let temp = TempDir::new().unwrap();
    let bad = write_file(temp.path(), "bad.json", "{\"not\": \"a list\"}");
    tasklens_in(temp.path())
        .args(["extract", "--format", "segments"])
        .arg(&bad)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a JSON array of segments"));
}

// =============================================================================
// ASSESS
// =============================================================================

#[test]
fn test_assess_unowned_undated_task() {
    let temp = TempDir::new().unwrap();
    tasklens_in(temp.path())
        .args(["assess", "-d", "Finish the report"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Risk: 55/100 (Medium)"))
        .stdout(predicate::str::contains("No Assignee"))
        .stdout(predicate::str::contains("No Deadline"));
}

#[test]
fn test_assess_json_breakdown() {
    let temp = TempDir::new().unwrap();
    let output = tasklens_in(temp.path())
        .args(["--json", "assess", "-d", "Finish the report", "-a", "Alice", "--deadline", "2001-01-01"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["task"]["id"], "TSK-1");
    assert_eq!(json["assessment"]["score"], 35);
    assert_eq!(json["assessment"]["level"], "Medium");
    assert_eq!(json["assessment"]["breakdown"]["deadline_risk"], 35);
    assert_eq!(json["assessment"]["factors"][0]["name"], "Deadline Passed");
}

#[test]
fn test_assess_with_history_snapshot() {
    let temp = TempDir::new().unwrap();
    let history = write_file(
        temp.path(),
        "history.json",
        r#"[
            {"id": "OLD-1", "description": "Renew certificates", "status": "overdue", "assignee": "Alice"},
            {"id": "OLD-2", "description": "Rotate keys", "status": "overdue", "assignee": "Alice"},
            {"id": "OLD-3", "description": "Patch servers", "status": "overdue", "assignee": "Alice"}
        ]"#,
    );

    tasklens_in(temp.path())
        .args(["assess", "-d", "Finish the report", "-a", "Alice", "--deadline", "2099-12-31", "--history"])
        .arg(&history)
        .assert()
        .success()
        .stdout(predicate::str::contains("Risk: 10/100 (Low)"))
        .stdout(predicate::str::contains("Alice has missed deadlines on 3 previous task(s)."));
}

#[test]
fn test_assess_bad_deadline_fails() {
    let temp = TempDir::new().unwrap();
    tasklens_in(temp.path())
        .args(["assess", "-d", "Finish the report", "--deadline", "whenever"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot understand deadline"));
}

// =============================================================================
// CONFIG
// =============================================================================

#[test]
fn test_config_shows_source_and_defaults() {
    let temp = TempDir::new().unwrap();
    tasklens_in(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"))
        .stdout(predicate::str::contains("similarity_threshold = 0.7"));
}

#[test]
fn test_config_json_reflects_file() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "config.toml", "[risk]\nhistory_limit = 3\n");

    let output = tasklens_in(temp.path()).args(["--json", "config"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["config"]["risk"]["history_limit"], 3);
}

#[test]
fn test_invalid_config_fails() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "config.toml", "[risk]\nsimilarity_threshold = 2.0\n");

    tasklens_in(temp.path())
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("similarity threshold"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let temp = TempDir::new().unwrap();
    tasklens()
        .arg("--config")
        .arg(temp.path().join("absent.toml"))
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read config"));
}
