//! Required-field checks for a complete, submission-ready record

use serde::Serialize;

use super::references::YearFilter;
use crate::record::{CurriculumRecord, ListField, TermName, TextField};

/// A single problem found in a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Dotted path of the offending field, e.g. `terms.0.rows.2.topics`
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

const REQUIRED_TEXT: [(TextField, &str); 18] = [
    (TextField::InstitutionName, "Institution name is required"),
    (TextField::InstitutionAddress, "Institution address is required"),
    (TextField::CourseCode, "Course code is required"),
    (TextField::CourseTitle, "Course title is required"),
    (TextField::CourseCredit, "Course credit is required"),
    (TextField::ContactHours, "Contact hours is required"),
    (TextField::VisionText, "Vision text is required"),
    (TextField::CourseDescription, "Course description is required"),
    (TextField::DateRevised, "Date revised is required"),
    (TextField::Effectivity, "Effectivity is required"),
    (TextField::PreparedByName, "Prepared by name is required"),
    (TextField::PreparedByTitle, "Prepared by title is required"),
    (TextField::ReviewedByName, "Reviewed by name is required"),
    (TextField::ReviewedByTitle, "Reviewed by title is required"),
    (TextField::NotedByName, "Noted by name is required"),
    (TextField::NotedByTitle, "Noted by title is required"),
    (TextField::ApprovedByName, "Approved by name is required"),
    (TextField::ApprovedByTitle, "Approved by title is required"),
];

const REQUIRED_LISTS: [(ListField, &str); 6] = [
    (ListField::MissionBullets, "At least one mission bullet is required"),
    (
        ListField::InstitutionObjectives,
        "At least one institution objective is required",
    ),
    (ListField::LearningOutcomes, "At least one learning outcome is required"),
    (
        ListField::TeachingActivities,
        "At least one teaching activity is required",
    ),
    (
        ListField::AssessmentBreakdown,
        "At least one assessment item is required",
    ),
    (ListField::ReferencesList, "At least one reference is required"),
];

const EMPTY_ITEM: &str = "String must contain at least 1 character(s)";

/// Check a record for missing required content.
///
/// Returns every issue found, in field order; an empty vector means the record
/// is complete. The assessment percentage total is advisory and not checked here.
pub fn validate_record(record: &CurriculumRecord) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for (field, message) in REQUIRED_TEXT {
        if field.get(record).is_empty() {
            issues.push(ValidationIssue::new(field.as_str(), message));
        }
    }

    for (field, message) in REQUIRED_LISTS {
        let items = field.get(record);
        if items.is_empty() {
            issues.push(ValidationIssue::new(field.as_str(), message));
        }
        for (index, item) in items.iter().enumerate() {
            if item.is_empty() {
                issues.push(ValidationIssue::new(
                    format!("{}.{}", field.as_str(), index),
                    EMPTY_ITEM,
                ));
            }
        }
    }

    check_terms(record, &mut issues);

    if let Err(e) = YearFilter::parse(&record.references_year_filter) {
        issues.push(ValidationIssue::new(
            TextField::ReferencesYearFilter.as_str(),
            e.to_string(),
        ));
    }

    issues
}

fn check_terms(record: &CurriculumRecord, issues: &mut Vec<ValidationIssue>) {
    let names: Vec<TermName> = record.terms.iter().map(|t| t.name).collect();
    if names != TermName::ALL {
        issues.push(ValidationIssue::new(
            "terms",
            "Terms must be Prelim, Midterm, Pre-Final, Final in that order",
        ));
    }

    for (term_index, term) in record.terms.iter().enumerate() {
        for (row_index, row) in term.rows.iter().enumerate() {
            let path = |column: &str| format!("terms.{term_index}.rows.{row_index}.{column}");
            if row.topics.is_empty() {
                issues.push(ValidationIssue::new(path("topics"), "Topics is required"));
            }
            if row.outcomes.is_empty() {
                issues.push(ValidationIssue::new(path("outcomes"), "Outcomes is required"));
            }
            if row.activities.is_empty() {
                issues.push(ValidationIssue::new(
                    path("activities"),
                    "Activities is required",
                ));
            }
        }
    }
}
