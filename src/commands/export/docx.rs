//! Word document encoding
//!
//! Maps each paragraph of the document tree onto a docx-rs paragraph. Table
//! cells are written as tab-separated runs so the layout matches the text.

use std::io::Cursor;

use docx_rs::{AlignmentType, Docx, LineSpacing, PageMargin, Paragraph, Run, RunFonts};

use syllabus_core::error::{Result, SyllabusError};
use syllabus_core::render::{self, Alignment, DocumentTree};

/// Encode a document tree as a .docx archive
pub fn encode(tree: &DocumentTree) -> Result<Vec<u8>> {
    let margin = i32::try_from(tree.page.margin).unwrap_or(720);

    let mut docx = Docx::new()
        .page_size(tree.page.width, tree.page.height)
        .page_margin(
            PageMargin::new()
                .top(margin)
                .bottom(margin)
                .left(margin)
                .right(margin),
        );

    for paragraph in &tree.paragraphs {
        docx = docx.add_paragraph(paragraph_for(paragraph, &tree.font));
    }

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| SyllabusError::export("docx", e))?;

    Ok(buffer.into_inner())
}

fn paragraph_for(source: &render::Paragraph, font: &str) -> Paragraph {
    let mut run = Run::new()
        .size(source.size)
        .fonts(RunFonts::new().ascii(font).hi_ansi(font).cs(font));
    if source.bold {
        run = run.bold();
    }

    for (index, cell) in source.columns.iter().enumerate() {
        if index > 0 {
            run = run.add_tab();
        }
        run = add_text_with_tabs(run, cell);
    }

    let alignment = match source.alignment {
        Alignment::Left => AlignmentType::Left,
        Alignment::Center => AlignmentType::Center,
    };

    Paragraph::new()
        .add_run(run)
        .align(alignment)
        .line_spacing(LineSpacing::new().after(source.spacing_after))
}

/// Signature titles carry leading tabs inside a single column
fn add_text_with_tabs(mut run: Run, text: &str) -> Run {
    for (index, piece) in text.split('\t').enumerate() {
        if index > 0 {
            run = run.add_tab();
        }
        if !piece.is_empty() {
            run = run.add_text(piece);
        }
    }
    run
}
