//! Partial records for JSON import
//!
//! An imported snapshot may carry any subset of the record's keys. Present keys
//! replace the base value wholesale; absent keys keep it. Unknown keys are ignored.

use serde::Deserialize;

use super::types::{CurriculumRecord, TermBlock};

macro_rules! record_patch {
    ($($field:ident: $ty:ty,)+) => {
        /// A record with every field optional
        #[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
        #[serde(default, rename_all = "camelCase")]
        pub struct RecordPatch {
            $(pub $field: Option<$ty>,)+
        }

        impl RecordPatch {
            /// Overlay present fields onto `base`
            pub fn apply(self, mut base: CurriculumRecord) -> CurriculumRecord {
                $(
                    if let Some(value) = self.$field {
                        base.$field = value;
                    }
                )+
                base
            }

            /// Number of keys carried by this patch
            pub fn len(&self) -> usize {
                [$(self.$field.is_some(),)+].iter().filter(|present| **present).count()
            }

            pub fn is_empty(&self) -> bool {
                self.len() == 0
            }
        }
    };
}

record_patch! {
    institution_name: String,
    institution_address: String,
    course_code: String,
    course_title: String,
    course_credit: String,
    contact_hours: String,
    prerequisite: String,
    vision_text: String,
    mission_bullets: Vec<String>,
    institution_objectives: Vec<String>,
    course_description: String,
    learning_outcomes: Vec<String>,
    terms: Vec<TermBlock>,
    teaching_activities: Vec<String>,
    assessment_breakdown: Vec<String>,
    references_year_filter: String,
    references_list: Vec<String>,
    date_revised: String,
    effectivity: String,
    prepared_by_name: String,
    prepared_by_title: String,
    reviewed_by_name: String,
    reviewed_by_title: String,
    noted_by_name: String,
    noted_by_title: String,
    approved_by_name: String,
    approved_by_title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_patch_keeps_base_fields() {
        let patch: RecordPatch = serde_json::from_str(
            r#"{"courseCode": "ICT 102", "missionBullets": ["Only one;"], "unknownKey": 5}"#,
        )
        .unwrap();
        assert_eq!(patch.len(), 2);

        let base = CurriculumRecord::default();
        let merged = patch.apply(base.clone());
        assert_eq!(merged.course_code, "ICT 102");
        assert_eq!(merged.mission_bullets, vec!["Only one;".to_string()]);
        assert_eq!(merged.course_title, base.course_title);
        assert_eq!(merged.terms, base.terms);
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let patch: RecordPatch = serde_json::from_str("{}").unwrap();
        assert!(patch.is_empty());
        let base = CurriculumRecord::default();
        assert_eq!(patch.apply(base.clone()), base);
    }

    #[test]
    fn test_full_snapshot_round_trips_through_patch() {
        let mut original = CurriculumRecord::default();
        original.date_revised = "Aug. 14, 2025".to_string();
        let json = serde_json::to_string(&original).unwrap();

        let patch: RecordPatch = serde_json::from_str(&json).unwrap();
        assert_eq!(patch.len(), 27);

        let mut other_base = CurriculumRecord::default();
        other_base.course_code = "OTHER".to_string();
        assert_eq!(patch.apply(other_base), original);
    }
}
