use crate::support::syllabus;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// References command tests
// ============================================================================

fn write_references(dir: &std::path::Path) {
    fs::write(
        dir.join("syllabus.json"),
        r#"{
  "referencesYearFilter": "2021+",
  "referencesList": [
    "Knuth, D. (1997). The Art of Computer Programming.",
    "Shelly, G. (2021). Discovering Computers.",
    "Course handouts",
    "Downey, A. (2023). Think Python."
  ]
}"#,
    )
    .unwrap();
}

#[test]
fn test_references_use_record_filter() {
    let dir = tempdir().unwrap();
    write_references(dir.path());

    syllabus(dir.path())
        .arg("references")
        .assert()
        .success()
        .stdout(
            "Shelly, G. (2021). Discovering Computers.\n\
             Course handouts\n\
             Downey, A. (2023). Think Python.\n",
        );
}

#[test]
fn test_references_filter_override() {
    let dir = tempdir().unwrap();
    write_references(dir.path());

    syllabus(dir.path())
        .args(["references", "--filter", "<=2000"])
        .assert()
        .success()
        .stdout(
            "Knuth, D. (1997). The Art of Computer Programming.\n\
             Course handouts\n",
        );

    syllabus(dir.path())
        .args(["references", "--filter", "2021-2022"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shelly"))
        .stdout(predicate::str::contains("Downey").not());
}

#[test]
fn test_references_blank_filter_lists_all() {
    let dir = tempdir().unwrap();
    write_references(dir.path());

    let output = syllabus(dir.path())
        .args(["references", "--filter", ""])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap().lines().count(), 4);
}

#[test]
fn test_references_bad_filter_override_is_usage_error() {
    let dir = tempdir().unwrap();
    write_references(dir.path());

    syllabus(dir.path())
        .args(["references", "--filter", "recent"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid year filter 'recent'"));
}

#[test]
fn test_references_json_includes_years() {
    let dir = tempdir().unwrap();
    write_references(dir.path());

    let output = syllabus(dir.path())
        .args(["--format", "json", "references"])
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["filter"], "2021+");
    assert_eq!(value["total"], 4);
    assert_eq!(value["references"][0]["year"], 2021);
    assert!(value["references"][1]["year"].is_null());
}
