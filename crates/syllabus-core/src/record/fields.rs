//! Addressable record fields, named by their camelCase snapshot keys

use std::fmt;
use std::str::FromStr;

use super::types::{CurriculumRecord, WeekRow};
use crate::error::{Result, SyllabusError};

macro_rules! record_field_enum {
    (
        $(#[$meta:meta])*
        $name:ident($context:literal) -> $ty:ty {
            $($variant:ident => $key:literal, $field:ident;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// Snapshot key of this field
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $key,)+
                }
            }

            pub fn get(self, record: &CurriculumRecord) -> &$ty {
                match self {
                    $($name::$variant => &record.$field,)+
                }
            }

            pub fn get_mut(self, record: &mut CurriculumRecord) -> &mut $ty {
                match self {
                    $($name::$variant => &mut record.$field,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = SyllabusError;

            fn from_str(s: &str) -> Result<Self> {
                let wanted = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|field| field.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| SyllabusError::invalid_field($context, wanted))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

record_field_enum! {
    /// Single-line or narrative text fields
    TextField("text") -> String {
        InstitutionName => "institutionName", institution_name;
        InstitutionAddress => "institutionAddress", institution_address;
        CourseCode => "courseCode", course_code;
        CourseTitle => "courseTitle", course_title;
        CourseCredit => "courseCredit", course_credit;
        ContactHours => "contactHours", contact_hours;
        Prerequisite => "prerequisite", prerequisite;
        VisionText => "visionText", vision_text;
        CourseDescription => "courseDescription", course_description;
        ReferencesYearFilter => "referencesYearFilter", references_year_filter;
        DateRevised => "dateRevised", date_revised;
        Effectivity => "effectivity", effectivity;
        PreparedByName => "preparedByName", prepared_by_name;
        PreparedByTitle => "preparedByTitle", prepared_by_title;
        ReviewedByName => "reviewedByName", reviewed_by_name;
        ReviewedByTitle => "reviewedByTitle", reviewed_by_title;
        NotedByName => "notedByName", noted_by_name;
        NotedByTitle => "notedByTitle", noted_by_title;
        ApprovedByName => "approvedByName", approved_by_name;
        ApprovedByTitle => "approvedByTitle", approved_by_title;
    }
}

record_field_enum! {
    /// Ordered string lists
    ListField("list") -> Vec<String> {
        MissionBullets => "missionBullets", mission_bullets;
        InstitutionObjectives => "institutionObjectives", institution_objectives;
        LearningOutcomes => "learningOutcomes", learning_outcomes;
        TeachingActivities => "teachingActivities", teaching_activities;
        AssessmentBreakdown => "assessmentBreakdown", assessment_breakdown;
        ReferencesList => "referencesList", references_list;
    }
}

/// Columns of a week row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowField {
    Week,
    Topics,
    Outcomes,
    Activities,
}

impl RowField {
    pub const ALL: [RowField; 4] = [
        RowField::Week,
        RowField::Topics,
        RowField::Outcomes,
        RowField::Activities,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RowField::Week => "week",
            RowField::Topics => "topics",
            RowField::Outcomes => "outcomes",
            RowField::Activities => "activities",
        }
    }

    /// Write a value into this column; week labels are stored as text
    pub fn set(self, row: &mut WeekRow, value: String) {
        match self {
            RowField::Week => row.week = value.into(),
            RowField::Topics => row.topics = value,
            RowField::Outcomes => row.outcomes = value,
            RowField::Activities => row.activities = value,
        }
    }
}

impl FromStr for RowField {
    type Err = SyllabusError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        RowField::ALL
            .iter()
            .copied()
            .find(|field| field.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SyllabusError::invalid_field("row", wanted))
    }
}

impl fmt::Display for RowField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
