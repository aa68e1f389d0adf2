//! Canonical text layout
//!
//! Every export derives from this line sequence, so its bytes are a compatibility
//! contract: pasted copies and the rich document both mirror it.

use serde::Serialize;

use crate::record::CurriculumRecord;
use crate::validation::filter_references_by_year;

/// Section separator: 40 underscores
pub const SEPARATOR: &str = "________________________________________";

/// Column header of every term's week table
pub const WEEK_TABLE_HEADER: &str = "Week\tTopics\tIntended Learning Outcomes\tActivities / Assessment";

pub const MISSION_CAPTION: &str = "To provide academic and operational excellence vis-a-vis:";
pub const OBJECTIVES_CAPTION: &str = "BGFC shall:";
pub const OUTCOMES_CAPTION: &str = "By the end of the semester, students will be able to:";

/// What a rendered line represents; drives styling in the rich document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Title,
    Address,
    Field,
    Heading,
    Caption,
    Body,
    Bullet,
    Numbered,
    Term,
    TableHeader,
    TableRow,
    Separator,
    /// The single-space line between references and the footer
    Spacer,
    Blank,
    SignatureName,
    SignatureTitle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    pub kind: LineKind,
    pub text: String,
}

impl Line {
    fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Tab-separated columns of this line
    pub fn columns(&self) -> Vec<&str> {
        self.text.split('\t').collect()
    }
}

struct LineWriter {
    lines: Vec<Line>,
}

impl LineWriter {
    fn push(&mut self, kind: LineKind, text: impl Into<String>) {
        self.lines.push(Line::new(kind, text));
    }

    fn blank(&mut self) {
        self.push(LineKind::Blank, "");
    }

    fn separator(&mut self) {
        self.push(LineKind::Separator, SEPARATOR);
    }

    fn bullets(&mut self, items: &[String]) {
        for item in items {
            self.push(LineKind::Bullet, format!("- {item}"));
        }
    }
}

/// Render a record into its typed line sequence
pub fn build_lines(record: &CurriculumRecord) -> Vec<Line> {
    let mut out = LineWriter { lines: Vec::new() };

    out.push(LineKind::Title, record.institution_name.as_str());
    out.push(LineKind::Address, record.institution_address.as_str());
    out.blank();

    out.push(LineKind::Field, format!("Course Code: {}", record.course_code));
    out.push(LineKind::Field, format!("Course Credit: {}", record.course_credit));
    out.push(LineKind::Field, format!("Contact Hours: {}", record.contact_hours));
    out.push(LineKind::Field, format!("Prerequisite: {}", record.prerequisite));
    out.blank();

    out.push(LineKind::Heading, "VISION");
    out.push(LineKind::Body, record.vision_text.as_str());
    out.blank();

    out.push(LineKind::Heading, "MISSION");
    out.push(LineKind::Caption, MISSION_CAPTION);
    out.bullets(&record.mission_bullets);
    out.blank();

    out.push(LineKind::Heading, "OBJECTIVES");
    out.push(LineKind::Caption, OBJECTIVES_CAPTION);
    out.bullets(&record.institution_objectives);
    out.separator();

    out.push(LineKind::Heading, "Course Description");
    out.push(LineKind::Body, record.course_description.as_str());
    out.separator();

    out.push(LineKind::Heading, "Course Learning Outcomes");
    out.push(LineKind::Caption, OUTCOMES_CAPTION);
    for (index, outcome) in record.learning_outcomes.iter().enumerate() {
        out.push(LineKind::Numbered, format!("{}. {}", index + 1, outcome));
    }
    out.separator();

    out.push(LineKind::Heading, "Week-by-Week Outline");
    for term in &record.terms {
        out.push(LineKind::Term, term.name.as_str());
        out.push(LineKind::TableHeader, WEEK_TABLE_HEADER);
        for row in &term.rows {
            out.push(
                LineKind::TableRow,
                format!(
                    "{}\t{}\t{}\t{}",
                    row.week, row.topics, row.outcomes, row.activities
                ),
            );
        }
        out.separator();
    }

    out.push(LineKind::Heading, "Teaching & Learning Activities");
    out.bullets(&record.teaching_activities);
    out.separator();

    out.push(LineKind::Heading, "Assessment Breakdown");
    out.bullets(&record.assessment_breakdown);

    out.push(LineKind::Heading, "References");
    let references =
        filter_references_by_year(&record.references_list, &record.references_year_filter);
    out.bullets(&references);

    out.push(LineKind::Spacer, " ");

    out.push(LineKind::Field, format!("Date Revised: {}", record.date_revised));
    out.blank();
    out.push(LineKind::Field, format!("Effectivity: {}", record.effectivity));
    out.blank();

    signatures(&mut out, record);

    out.lines
}

fn signatures(out: &mut LineWriter, record: &CurriculumRecord) {
    out.push(
        LineKind::SignatureName,
        format!("Prepared by: {}", record.prepared_by_name),
    );
    out.push(
        LineKind::SignatureTitle,
        format!("\t\t{}", record.prepared_by_title),
    );
    out.blank();
    out.push(
        LineKind::SignatureName,
        format!("Reviewed by: {}", record.reviewed_by_name),
    );
    out.push(
        LineKind::SignatureTitle,
        format!("\t\t{}", record.reviewed_by_title),
    );
    out.blank();
    out.push(
        LineKind::SignatureName,
        format!("Noted by:      {}", record.noted_by_name),
    );
    out.push(
        LineKind::SignatureTitle,
        format!("\t            {}", record.noted_by_title),
    );
    out.blank();
    out.push(
        LineKind::SignatureName,
        format!("Approved by: {} ", record.approved_by_name),
    );
    out.push(
        LineKind::SignatureTitle,
        format!("\t\t{}", record.approved_by_title),
    );
}

/// Render a record into the canonical text: lines joined by `\n`, no trailing newline
pub fn build_final_text(record: &CurriculumRecord) -> String {
    let lines = build_lines(record);
    let texts: Vec<&str> = lines.iter().map(|line| line.text.as_str()).collect();
    texts.join("\n")
}
