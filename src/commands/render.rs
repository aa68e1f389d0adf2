//! `syllabus render` command - print the canonical text
//!
//! Stdout carries the exact text, without a trailing newline, so it can be
//! piped straight into a clipboard tool.

use std::fs;
use std::io::{self, Write};
use std::time::Instant;

use crate::cli::RenderArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::status;
use syllabus_core::error::{Result, SyllabusError};
use syllabus_core::render::build_final_text;
use syllabus_core::trace_time;

/// Execute the render command
pub fn execute(ctx: &CommandContext, args: &RenderArgs) -> Result<()> {
    let record = ctx.load_record(args.input.as_deref())?;

    let start = Instant::now();
    let text = build_final_text(&record);
    trace_time!(start, "build_final_text", bytes = text.len());

    if let Some(path) = &args.output {
        fs::write(path, &text).map_err(|e| SyllabusError::export(path.display(), e))?;
        status!(ctx.cli, "Wrote {}", path.display());
        return Ok(());
    }

    match ctx.cli.format {
        crate::cli::OutputFormat::Json => {
            let output = serde_json::json!({ "text": text });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        crate::cli::OutputFormat::Human => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
