use crate::support::syllabus;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Check command tests
// ============================================================================

#[test]
fn test_check_defaults_report_missing_revision_date() {
    let dir = tempdir().unwrap();

    syllabus(dir.path())
        .arg("check")
        .assert()
        .code(3)
        .stdout(predicate::str::contains("1 issue(s):"))
        .stdout(predicate::str::contains(
            "dateRevised: Date revised is required",
        ))
        .stdout(predicate::str::contains("Assessment total: 100%"))
        .stdout(predicate::str::contains(
            "References: 6 of 6 kept (year >= 2021)",
        ));
}

#[test]
fn test_check_after_init_passes() {
    let dir = tempdir().unwrap();

    syllabus(dir.path()).arg("init").assert().success();

    syllabus(dir.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Record is complete"));
}

#[test]
fn test_check_reports_remaining_percentage() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("syllabus.json"),
        r#"{"dateRevised": "August 14, 2025", "assessmentBreakdown": ["Quizzes – 20%", "Exams – 50.5%"]}"#,
    )
    .unwrap();

    syllabus(dir.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Assessment total: 70.5% (29.5% remaining)",
        ));
}

#[test]
fn test_check_json_report() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("syllabus.json"),
        r#"{"dateRevised": "", "referencesYearFilter": "soon", "missionBullets": []}"#,
    )
    .unwrap();

    let output = syllabus(dir.path())
        .args(["--format", "json", "check"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["valid"], false);
    let fields: Vec<&str> = report["issues"]
        .as_array()
        .unwrap()
        .iter()
        .map(|issue| issue["field"].as_str().unwrap())
        .collect();
    assert_eq!(
        fields,
        vec!["dateRevised", "missionBullets", "referencesYearFilter"]
    );
    assert_eq!(report["assessment"]["isValid"], true);
    // An unparseable filter keeps every reference
    assert_eq!(report["references"]["kept"], 6);

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("\"type\":\"invalid_record\""));
}

#[test]
fn test_check_flags_ignored_filter() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("syllabus.json"),
        r#"{"dateRevised": "August 14, 2025", "referencesYearFilter": "recent"}"#,
    )
    .unwrap();

    syllabus(dir.path())
        .arg("check")
        .assert()
        .code(3)
        .stdout(predicate::str::contains(
            "References: 6 of 6 kept (invalid filter, ignored)",
        ))
        .stdout(predicate::str::contains("(no filter)").not());
}

#[test]
fn test_check_blank_filter_reports_no_filter() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("syllabus.json"),
        r#"{"dateRevised": "August 14, 2025", "referencesYearFilter": ""}"#,
    )
    .unwrap();

    syllabus(dir.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("References: 6 of 6 kept (no filter)"));
}
