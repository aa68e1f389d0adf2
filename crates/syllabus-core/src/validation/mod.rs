//! Record validation: advisory percentage totals, reference year filtering,
//! and required-field checks

pub mod assessment;
pub mod references;
pub mod schema;

pub use assessment::{extract_percentage, validate_assessment_total, AssessmentValidation};
pub use references::{extract_year, filter_references_by_year, YearFilter};
pub use schema::{validate_record, ValidationIssue};
