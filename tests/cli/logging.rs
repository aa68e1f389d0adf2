use crate::support::syllabus;
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Logging flag tests
// ============================================================================

#[test]
fn test_log_level_debug_writes_to_stderr_only() {
    let dir = tempdir().unwrap();

    syllabus(dir.path())
        .args(["--log-level", "debug", "export", "--target", "text"])
        .assert()
        .success()
        .stderr(predicate::str::contains("load_config"))
        .stdout(predicate::str::contains("load_config").not());
}

#[test]
fn test_default_level_hides_debug_messages() {
    let dir = tempdir().unwrap();

    syllabus(dir.path())
        .arg("render")
        .assert()
        .success()
        .stderr(predicate::str::contains("load_config").not());
}

#[test]
fn test_ignored_year_filter_is_warned() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("syllabus.json"),
        r#"{"referencesYearFilter": "lately"}"#,
    )
    .unwrap();

    syllabus(dir.path())
        .arg("render")
        .assert()
        .success()
        .stderr(predicate::str::contains("ignoring year filter"));
}

#[test]
fn test_log_json_emits_json_lines() {
    let dir = tempdir().unwrap();

    let output = syllabus(dir.path())
        .args(["--log-json", "--log-level", "debug", "render"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    let first = stderr.lines().next().unwrap();
    let value: serde_json::Value = serde_json::from_str(first).unwrap();
    assert!(value.get("level").is_some());
}
