//! Curriculum record type definitions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SyllabusError};

/// One of the four academic periods, in calendar order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TermName {
    Prelim,
    Midterm,
    #[serde(rename = "Pre-Final")]
    PreFinal,
    Final,
}

impl TermName {
    /// The canonical term sequence of a syllabus
    pub const ALL: [TermName; 4] = [
        TermName::Prelim,
        TermName::Midterm,
        TermName::PreFinal,
        TermName::Final,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TermName::Prelim => "Prelim",
            TermName::Midterm => "Midterm",
            TermName::PreFinal => "Pre-Final",
            TermName::Final => "Final",
        }
    }
}

impl FromStr for TermName {
    type Err = SyllabusError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "prelim" => Ok(TermName::Prelim),
            "midterm" => Ok(TermName::Midterm),
            "pre-final" | "prefinal" => Ok(TermName::PreFinal),
            "final" => Ok(TermName::Final),
            other => Err(SyllabusError::invalid_field("term", other)),
        }
    }
}

impl fmt::Display for TermName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Week label of a row: imported snapshots may carry either a number or text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WeekLabel {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for WeekLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekLabel::Number(n) => write!(f, "{n}"),
            WeekLabel::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for WeekLabel {
    fn from(s: &str) -> Self {
        WeekLabel::Text(s.to_string())
    }
}

impl From<String> for WeekLabel {
    fn from(s: String) -> Self {
        WeekLabel::Text(s)
    }
}

impl From<u32> for WeekLabel {
    fn from(n: u32) -> Self {
        WeekLabel::Number(serde_json::Number::from(n))
    }
}

/// One week of the week-by-week outline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekRow {
    pub week: WeekLabel,
    pub topics: String,
    pub outcomes: String,
    pub activities: String,
}

impl WeekRow {
    pub fn new(
        week: impl Into<WeekLabel>,
        topics: impl Into<String>,
        outcomes: impl Into<String>,
        activities: impl Into<String>,
    ) -> Self {
        Self {
            week: week.into(),
            topics: topics.into(),
            outcomes: outcomes.into(),
            activities: activities.into(),
        }
    }

    /// An empty row labelled `Week {number}`
    pub fn blank(number: usize) -> Self {
        Self::new(format!("Week {number}"), "", "", "")
    }
}

/// A term and its ordered week rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermBlock {
    pub name: TermName,
    pub rows: Vec<WeekRow>,
}

impl TermBlock {
    pub fn new(name: TermName, rows: Vec<WeekRow>) -> Self {
        Self { name, rows }
    }
}

/// The full structured syllabus value consumed by the formatter.
///
/// Field names serialize in camelCase so snapshots stay interchangeable
/// with the web editor's JSON export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurriculumRecord {
    pub institution_name: String,
    pub institution_address: String,

    pub course_code: String,
    pub course_title: String,
    pub course_credit: String,
    pub contact_hours: String,
    pub prerequisite: String,

    pub vision_text: String,
    pub mission_bullets: Vec<String>,
    pub institution_objectives: Vec<String>,

    pub course_description: String,
    pub learning_outcomes: Vec<String>,

    /// Prelim, Midterm, Pre-Final, Final in that order
    pub terms: Vec<TermBlock>,

    pub teaching_activities: Vec<String>,
    /// Items such as "Major Exams – 40%"
    pub assessment_breakdown: Vec<String>,

    /// Applied to `references_list` at render time, e.g. "2021+"
    pub references_year_filter: String,
    pub references_list: Vec<String>,

    pub date_revised: String,
    pub effectivity: String,

    pub prepared_by_name: String,
    pub prepared_by_title: String,
    pub reviewed_by_name: String,
    pub reviewed_by_title: String,
    pub noted_by_name: String,
    pub noted_by_title: String,
    pub approved_by_name: String,
    pub approved_by_title: String,
}

impl CurriculumRecord {
    /// Find the block for a term
    pub fn term(&self, name: TermName) -> Option<&TermBlock> {
        self.terms.iter().find(|t| t.name == name)
    }

    /// Index of the block for a term
    pub fn term_index(&self, name: TermName) -> Option<usize> {
        self.terms.iter().position(|t| t.name == name)
    }
}
