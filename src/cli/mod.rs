//! CLI argument parsing for syllabus
//!
//! Supports global flags: --config, --format, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod edit;
pub mod format;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{CheckArgs, ExportArgs, ExportTarget, InitArgs, ReferencesArgs, RenderArgs};
pub use edit::{EditArgs, EditCommands};
pub use syllabus_core::format::OutputFormat;

/// Syllabus - build BGFC course syllabi from a JSON record
#[derive(Parser, Debug)]
#[command(name = "syllabus")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (default: platform config dir, or $SYLLABUS_CONFIG_DIR)
    #[arg(long, global = true, env = "SYLLABUS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (human, json)
    #[arg(long, global = true, default_value = "human", value_parser = parse::parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the built-in ICT 101 record as a new working snapshot
    Init(InitArgs),

    /// Print the canonical syllabus text
    Render(RenderArgs),

    /// Export the syllabus as text, JSON, or a Word document
    Export(ExportArgs),

    /// Check the record for missing content and report advisory totals
    Check(CheckArgs),

    /// List references after year filtering
    References(ReferencesArgs),

    /// Edit the working record in place
    Edit(EditArgs),
}
