//! Logical content tree for the word-processor export
//!
//! Built by walking the canonical line list, so the document never drifts from
//! the text. The one addition is the course title, which the text omits. The container encoding lives with the binary's DOCX emitter.

use serde::Serialize;

use super::text::{build_lines, Line, LineKind};
use crate::record::CurriculumRecord;

/// Landscape letter, in twips
pub const PAGE_WIDTH: u32 = 15840;
pub const PAGE_HEIGHT: u32 = 12240;
pub const PAGE_MARGIN: u32 = 720;

/// Font sizes in half-points
const SIZE_TITLE: usize = 32;
const SIZE_HEADING: usize = 24;
const SIZE_BODY: usize = 22;

/// Spacing after a paragraph, in twips
const AFTER_ITEM: u32 = 60;
const AFTER_LINE: u32 = 120;
const AFTER_SECTION: u32 = 240;

const PREREQUISITE_PREFIX: &str = "Prerequisite: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
}

pub const DEFAULT_FONT: &str = "Arial";

/// Styling knobs supplied by configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentStyle {
    pub font: String,
}

impl Default for DocumentStyle {
    fn default() -> Self {
        Self {
            font: DEFAULT_FONT.to_string(),
        }
    }
}

/// One paragraph; multi-column lines keep their cells separate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    pub kind: LineKind,
    pub columns: Vec<String>,
    pub bold: bool,
    /// Half-points
    pub size: usize,
    pub alignment: Alignment,
    /// Twips
    pub spacing_after: u32,
}

impl Paragraph {
    /// Cell text joined back with tabs
    pub fn text(&self) -> String {
        self.columns.join("\t")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSetup {
    pub width: u32,
    pub height: u32,
    pub margin: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentTree {
    pub font: String,
    pub page: PageSetup,
    pub paragraphs: Vec<Paragraph>,
}

/// Build the document tree for a record
pub fn build_document(record: &CurriculumRecord, style: &DocumentStyle) -> DocumentTree {
    let mut paragraphs = Vec::new();
    for line in build_lines(record) {
        let after_prerequisite =
            line.kind == LineKind::Field && line.text.starts_with(PREREQUISITE_PREFIX);
        paragraphs.extend(paragraph_for(&line));

        // The course title is only printed in the document
        if after_prerequisite {
            paragraphs.push(Paragraph {
                kind: LineKind::Field,
                columns: vec![format!("Course Title: {}", record.course_title)],
                bold: false,
                size: SIZE_BODY,
                alignment: Alignment::Left,
                spacing_after: AFTER_SECTION,
            });
        }
    }

    DocumentTree {
        font: style.font.clone(),
        page: PageSetup {
            width: PAGE_WIDTH,
            height: PAGE_HEIGHT,
            margin: PAGE_MARGIN,
        },
        paragraphs,
    }
}

fn paragraph_for(line: &Line) -> Option<Paragraph> {
    let (bold, size, alignment, spacing_after) = match line.kind {
        LineKind::Blank | LineKind::Spacer => return None,
        LineKind::Title => (true, SIZE_TITLE, Alignment::Center, AFTER_SECTION),
        LineKind::Address => (false, SIZE_HEADING, Alignment::Center, AFTER_SECTION),
        LineKind::Heading | LineKind::Term => (true, SIZE_HEADING, Alignment::Left, AFTER_LINE),
        LineKind::TableHeader => (true, SIZE_BODY, Alignment::Left, AFTER_LINE),
        LineKind::Separator => (false, SIZE_BODY, Alignment::Center, AFTER_SECTION),
        LineKind::Body => (false, SIZE_BODY, Alignment::Left, AFTER_SECTION),
        LineKind::Bullet | LineKind::Numbered | LineKind::TableRow | LineKind::SignatureName => {
            (false, SIZE_BODY, Alignment::Left, AFTER_ITEM)
        }
        LineKind::Field | LineKind::Caption | LineKind::SignatureTitle => {
            (false, SIZE_BODY, Alignment::Left, AFTER_LINE)
        }
    };

    let text = match line.text.strip_prefix("- ") {
        Some(item) if line.kind == LineKind::Bullet => format!("• {item}"),
        _ => line.text.clone(),
    };

    let columns = if line.kind == LineKind::TableRow || line.kind == LineKind::TableHeader {
        text.split('\t').map(str::to_string).collect()
    } else {
        vec![text]
    };

    Some(Paragraph {
        kind: line.kind,
        columns,
        bold,
        size,
        alignment,
        spacing_after,
    })
}
