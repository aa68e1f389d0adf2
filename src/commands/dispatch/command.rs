//! Command trait and context for dispatching commands

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::debug;

use crate::cli::Cli;
use syllabus_core::config::GeneratorConfig;
use syllabus_core::error::Result;
use syllabus_core::record::CurriculumRecord;
use syllabus_core::snapshot::load_record;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: GeneratorConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: GeneratorConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// The record file a command works on: `--input`, else the configured path
    pub fn record_path(&self, input: Option<&Path>) -> PathBuf {
        input
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.config.record.path.clone())
    }

    /// Load the record a read-only command renders.
    ///
    /// An explicit `--input` must exist. The configured working record falls
    /// back to the built-in defaults when it has not been created yet.
    pub fn load_record(&self, input: Option<&Path>) -> Result<CurriculumRecord> {
        if let Some(path) = input {
            return load_record(path);
        }

        let path = &self.config.record.path;
        if path.exists() {
            load_record(path)
        } else {
            debug!(path = %path.display(), "no working record, using defaults");
            Ok(CurriculumRecord::default())
        }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("syllabus {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Builds BGFC course syllabi from a JSON record.");
        println!();
        println!("Run `syllabus --help` for usage information.");
        Ok(())
    }
}
