//! `syllabus export` command - write the syllabus to a file
//!
//! Targets:
//! - text: the canonical text, byte-for-byte
//! - json: a snapshot that `edit import` and the web form both read
//! - docx: a Word document built from the document tree

mod docx;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::cli::{ExportArgs, ExportTarget};
use crate::commands::dispatch::CommandContext;
use crate::commands::status;
use crate::output_by_format_result;
use syllabus_core::error::{Result, SyllabusError};
use syllabus_core::record::CurriculumRecord;
use syllabus_core::render::{build_document, build_final_text, DocumentStyle};
use syllabus_core::snapshot::{default_export_name, to_json_snapshot};
use syllabus_core::trace_time;

/// Execute the export command
pub fn execute(ctx: &CommandContext, args: &ExportArgs) -> Result<()> {
    let record = ctx.load_record(args.input.as_deref())?;
    let path = output_path(ctx, args, &record);

    let start = Instant::now();
    let bytes = encode(ctx, args.target, &record)?;
    trace_time!(start, "encode_export", target = args.target.as_str());

    write_export(&path, &bytes, args.target)?;

    output_by_format_result!(ctx.cli.format,
        json => {
            let output = serde_json::json!({
                "status": "ok",
                "target": args.target.as_str(),
                "path": path.display().to_string(),
                "bytes": bytes.len(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), SyllabusError>(())
        },
        human => {
            status!(ctx.cli, "Exported {} to {}", args.target.as_str(), path.display());
        }
    )?;

    Ok(())
}

fn output_path(ctx: &CommandContext, args: &ExportArgs, record: &CurriculumRecord) -> PathBuf {
    match &args.output {
        Some(path) => path.clone(),
        None => ctx
            .config
            .export
            .output_dir
            .join(default_export_name(record, args.target.extension())),
    }
}

fn encode(ctx: &CommandContext, target: ExportTarget, record: &CurriculumRecord) -> Result<Vec<u8>> {
    match target {
        ExportTarget::Text => Ok(build_final_text(record).into_bytes()),
        ExportTarget::Json => Ok(to_json_snapshot(record)?.into_bytes()),
        ExportTarget::Docx => {
            let style = DocumentStyle {
                font: ctx.config.export.font.clone(),
            };
            docx::encode(&build_document(record, &style))
        }
    }
}

fn write_export(path: &Path, bytes: &[u8], target: ExportTarget) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| SyllabusError::export(target.as_str(), e))?;
    }
    fs::write(path, bytes)
        .map_err(|e| SyllabusError::export(target.as_str(), format!("{}: {}", path.display(), e)))
}
