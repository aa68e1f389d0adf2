use crate::support::{read_record, syllabus};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Edit command tests
// ============================================================================

#[test]
fn test_edit_set_text_creates_working_record() {
    let dir = tempdir().unwrap();

    syllabus(dir.path())
        .args(["edit", "set", "courseTitle", "Living in the IT Era"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(set_text)"));

    let record = read_record(&dir.path().join("syllabus.json"));
    assert_eq!(record["courseTitle"], "Living in the IT Era");
    assert_eq!(record["courseCode"], "ICT 101");
}

#[test]
fn test_edit_set_list_replaces_items() {
    let dir = tempdir().unwrap();

    syllabus(dir.path())
        .args(["edit", "set", "teachingActivities", "Lectures", "Labs"])
        .assert()
        .success();

    let record = read_record(&dir.path().join("syllabus.json"));
    assert_eq!(
        record["teachingActivities"],
        serde_json::json!(["Lectures", "Labs"])
    );
}

#[test]
fn test_edit_list_items() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("syllabus.json");

    syllabus(dir.path())
        .args(["edit", "add", "referencesList", "Downey, A. (2023). Think Python."])
        .assert()
        .success();
    assert_eq!(read_record(&path)["referencesList"].as_array().unwrap().len(), 7);

    syllabus(dir.path())
        .args(["edit", "update", "referencesList", "0", "Replaced (2022)"])
        .assert()
        .success();
    assert_eq!(read_record(&path)["referencesList"][0], "Replaced (2022)");

    syllabus(dir.path())
        .args(["edit", "remove", "referencesList", "6"])
        .assert()
        .success();
    assert_eq!(read_record(&path)["referencesList"].as_array().unwrap().len(), 6);
}

#[test]
fn test_edit_out_of_range_leaves_file_untouched() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("syllabus.json");

    syllabus(dir.path()).arg("init").assert().success();
    let before = fs::read_to_string(&path).unwrap();

    syllabus(dir.path())
        .args(["edit", "remove", "missionBullets", "8"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "missionBullets index 8 is out of range (length 8)",
        ));

    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn test_edit_rows() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("syllabus.json");

    syllabus(dir.path())
        .args(["edit", "add-row", "final"])
        .assert()
        .success();
    let record = read_record(&path);
    assert_eq!(record["terms"][3]["rows"][3]["week"], "Week 4");
    assert_eq!(record["terms"][3]["rows"][3]["topics"], "");

    syllabus(dir.path())
        .args(["edit", "update-row", "final", "3", "topics", "Capstone defense"])
        .assert()
        .success();
    assert_eq!(
        read_record(&path)["terms"][3]["rows"][3]["topics"],
        "Capstone defense"
    );

    syllabus(dir.path())
        .args(["edit", "remove-row", "Pre-Final", "0"])
        .assert()
        .success();
    assert_eq!(
        read_record(&path)["terms"][2]["rows"].as_array().unwrap().len(),
        3
    );
}

#[test]
fn test_edit_unknown_field_is_usage_error() {
    let dir = tempdir().unwrap();

    syllabus(dir.path())
        .args(["edit", "add", "courseCode", "x"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown list field: courseCode"));
}

#[test]
fn test_edit_import_overlays_and_reset_restores() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("syllabus.json");
    fs::write(
        dir.path().join("patch.json"),
        r#"{"courseCode": "ICT 102", "effectivity": "A.Y: 2026-2027 2nd Semester"}"#,
    )
    .unwrap();

    syllabus(dir.path())
        .args(["edit", "import", "patch.json"])
        .assert()
        .success();
    let record = read_record(&path);
    assert_eq!(record["courseCode"], "ICT 102");
    assert_eq!(record["effectivity"], "A.Y: 2026-2027 2nd Semester");
    assert_eq!(record["institutionName"], "BUCAS GRANDE FOUNDATION COLLEGE");

    syllabus(dir.path())
        .args(["edit", "reset"])
        .assert()
        .success();
    assert_eq!(read_record(&path)["courseCode"], "ICT 101");
}

#[test]
fn test_edit_import_malformed_file_is_data_error() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("patch.json"), "[1, 2").unwrap();

    syllabus(dir.path())
        .args(["edit", "import", "patch.json"])
        .assert()
        .code(3);

    assert!(!dir.path().join("syllabus.json").exists());
}

#[test]
fn test_edit_explicit_input_file() {
    let dir = tempdir().unwrap();

    syllabus(dir.path())
        .args(["edit", "--input", "other.json", "set", "courseCode", "ICT 301"])
        .assert()
        .success();

    assert_eq!(
        read_record(&dir.path().join("other.json"))["courseCode"],
        "ICT 301"
    );
    assert!(!dir.path().join("syllabus.json").exists());
}
