//! Curriculum record model
//!
//! A record is built once (from defaults or an imported snapshot) and replaced
//! wholesale on every edit; see [`crate::edit`].

mod defaults;
pub mod fields;
pub mod patch;
pub mod types;

pub use fields::{ListField, RowField, TextField};
pub use patch::RecordPatch;
pub use types::{CurriculumRecord, TermBlock, TermName, WeekLabel, WeekRow};

/// Format a revision date the way the signature block prints it, e.g. "August 14, 2025"
pub fn format_revision_date(date: chrono::NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
