//! Rendering: the canonical text and the document tree derived from it

pub mod document;
pub mod text;

pub use document::{build_document, Alignment, DocumentStyle, DocumentTree, PageSetup, Paragraph};
pub use text::{build_final_text, build_lines, Line, LineKind, SEPARATOR};
