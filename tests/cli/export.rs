use crate::support::{read_record, syllabus, write_config};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Export command tests
// ============================================================================

#[test]
fn test_export_text_default_name() {
    let dir = tempdir().unwrap();

    syllabus(dir.path())
        .args(["export", "--target", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported text to"));

    let text = fs::read_to_string(dir.path().join("ICT 101_syllabus.txt")).unwrap();
    assert!(text.starts_with("BUCAS GRANDE FOUNDATION COLLEGE\n"));
}

#[test]
fn test_export_json_is_importable_snapshot() {
    let dir = tempdir().unwrap();

    syllabus(dir.path())
        .args(["export", "--target", "json", "--output", "snap.json"])
        .assert()
        .success();

    let snapshot = read_record(&dir.path().join("snap.json"));
    assert_eq!(snapshot["institutionName"], "BUCAS GRANDE FOUNDATION COLLEGE");
    assert_eq!(snapshot["referencesYearFilter"], "2021+");
    assert_eq!(snapshot["terms"][2]["name"], "Pre-Final");

    syllabus(dir.path())
        .args(["render", "--input", "snap.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Course Code: ICT 101"));
}

#[test]
fn test_export_docx_writes_zip() {
    let dir = tempdir().unwrap();

    syllabus(dir.path())
        .args(["--format", "json", "export", "--target", "docx"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"target\": \"docx\""));

    let bytes = fs::read(dir.path().join("ICT 101_syllabus.docx")).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_export_uses_configured_output_dir() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), "[export]\noutput_dir = \"exports\"\nfont = \"Calibri\"\n");

    syllabus(dir.path())
        .args(["export", "--target", "docx"])
        .assert()
        .success();

    assert!(dir.path().join("exports/ICT 101_syllabus.docx").exists());
}

#[test]
fn test_export_reads_config_file_from_env() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("team.toml");
    fs::write(&config, "[export]\noutput_dir = \"shared\"\n").unwrap();

    syllabus(dir.path())
        .env("SYLLABUS_CONFIG", &config)
        .args(["export", "--target", "text"])
        .assert()
        .success();

    assert!(dir.path().join("shared/ICT 101_syllabus.txt").exists());
}

#[test]
fn test_export_unknown_target_is_usage_error() {
    let dir = tempdir().unwrap();

    syllabus(dir.path())
        .args(["export", "--target", "pdf"])
        .assert()
        .code(2);
}

#[test]
fn test_export_bad_config_fails() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), "[export\n");

    syllabus(dir.path())
        .args(["export", "--target", "text"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}
