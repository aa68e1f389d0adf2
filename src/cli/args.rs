//! Argument structures for the record commands

use std::path::PathBuf;

use clap::{Args, ValueEnum};

/// Arguments for the init command.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Where to write the snapshot (default: configured record path)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Overwrite an existing snapshot
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the render command.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Record snapshot to read (default: configured record path)
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Write the text to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Export targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportTarget {
    /// Canonical plain text
    Text,
    /// JSON snapshot of the record
    Json,
    /// Word document
    Docx,
}

impl ExportTarget {
    pub fn extension(self) -> &'static str {
        match self {
            ExportTarget::Text => "txt",
            ExportTarget::Json => "json",
            ExportTarget::Docx => "docx",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExportTarget::Text => "text",
            ExportTarget::Json => "json",
            ExportTarget::Docx => "docx",
        }
    }
}

/// Arguments for the export command.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export target
    #[arg(long, short, value_enum)]
    pub target: ExportTarget,

    /// Record snapshot to read (default: configured record path)
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Output file (default: {output_dir}/{courseCode}_syllabus.{ext})
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Arguments for the check command.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Record snapshot to read (default: configured record path)
    #[arg(long, short)]
    pub input: Option<PathBuf>,
}

/// Arguments for the references command.
#[derive(Args, Debug)]
pub struct ReferencesArgs {
    /// Record snapshot to read (default: configured record path)
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Year filter overriding the record's own (e.g. 2021+, 2020-2023, >=2022, <=2019, 2021)
    #[arg(long, short)]
    pub filter: Option<String>,
}
