use crate::support::{read_record, syllabus};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Init command tests
// ============================================================================

#[test]
fn test_init_writes_default_record() {
    let dir = tempdir().unwrap();

    syllabus(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized syllabus record"));

    let record = read_record(&dir.path().join("syllabus.json"));
    assert_eq!(record["courseCode"], "ICT 101");
    assert_eq!(record["terms"].as_array().unwrap().len(), 4);
    // Today's date is stamped in, e.g. "October 16, 2026"
    assert!(!record["dateRevised"].as_str().unwrap().is_empty());
}

#[test]
fn test_init_refuses_to_overwrite() {
    let dir = tempdir().unwrap();

    syllabus(dir.path()).arg("init").assert().success();

    syllabus(dir.path())
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    syllabus(dir.path())
        .args(["init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_init_custom_output_json() {
    let dir = tempdir().unwrap();

    syllabus(dir.path())
        .args(["--format", "json", "init", "--output", "records/ict101.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"ok\""))
        .stdout(predicate::str::contains("\"courseCode\": \"ICT 101\""));

    assert!(dir.path().join("records/ict101.json").exists());
    assert!(!dir.path().join("syllabus.json").exists());
}

#[test]
fn test_init_quiet_prints_nothing() {
    let dir = tempdir().unwrap();

    syllabus(dir.path())
        .args(["--quiet", "init"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_init_uses_configured_record_path() {
    let dir = tempdir().unwrap();
    crate::support::write_config(dir.path(), "[record]\npath = \"data/course.json\"\n");

    syllabus(dir.path()).arg("init").assert().success();

    assert!(dir.path().join("data/course.json").exists());
}
