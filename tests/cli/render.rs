use crate::support::syllabus;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Render command tests
// ============================================================================

#[test]
fn test_render_without_record_uses_defaults() {
    let dir = tempdir().unwrap();

    syllabus(dir.path())
        .arg("render")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "BUCAS GRANDE FOUNDATION COLLEGE\nC. TARUC STREET",
        ))
        .stdout(predicate::str::ends_with("\t\tBGFC School President"));
}

#[test]
fn test_render_missing_explicit_input_is_data_error() {
    let dir = tempdir().unwrap();

    syllabus(dir.path())
        .args(["render", "--input", "nope.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("nope.json"));
}

#[test]
fn test_render_malformed_input_json_envelope() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("bad.json"), "{ not json").unwrap();

    syllabus(dir.path())
        .args(["--format", "json", "render", "--input", "bad.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"import_error\""));
}

#[test]
fn test_render_to_file() {
    let dir = tempdir().unwrap();

    syllabus(dir.path())
        .args(["render", "--output", "out.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote out.txt"));

    let text = fs::read_to_string(dir.path().join("out.txt")).unwrap();
    assert!(text.starts_with("BUCAS GRANDE FOUNDATION COLLEGE\n"));
    assert!(!text.ends_with('\n'));
}

#[test]
fn test_render_json_wraps_text() {
    let dir = tempdir().unwrap();

    let output = syllabus(dir.path())
        .args(["--format", "json", "render"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let text = value["text"].as_str().unwrap();
    assert!(text.contains("Week-by-Week Outline\nPrelim\n"));
}

#[test]
fn test_render_reflects_working_record() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("syllabus.json"),
        r#"{"courseCode": "ICT 205", "referencesYearFilter": "2023"}"#,
    )
    .unwrap();

    syllabus(dir.path())
        .arg("render")
        .assert()
        .success()
        .stdout(predicate::str::contains("Course Code: ICT 205\n"))
        .stdout(predicate::str::contains(
            "References\n- ChatGPT Documentation (OpenAI)\n",
        ))
        .stdout(predicate::str::contains("Shelly").not());
}
