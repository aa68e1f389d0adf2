//! `syllabus edit` command - apply one edit to the working record
//!
//! The record is read, edited, and written back to the same file. A missing
//! file starts from the built-in defaults, so `edit` works before `init`.

use std::path::Path;

use tracing::debug;

use crate::cli::parse::AnyField;
use crate::cli::{EditArgs, EditCommands};
use crate::commands::dispatch::CommandContext;
use crate::commands::status;
use crate::output_by_format_result;
use syllabus_core::bail_usage;
use syllabus_core::edit::{apply_edit, Edit};
use syllabus_core::error::{Result, SyllabusError};
use syllabus_core::record::CurriculumRecord;
use syllabus_core::snapshot::{load_record, read_patch, save_record};

/// Execute the edit command
pub fn execute(ctx: &CommandContext, args: &EditArgs) -> Result<()> {
    let path = ctx.record_path(args.input.as_deref());
    let record = load_or_default(&path)?;

    let edit = to_edit(&args.command)?;
    let name = edit.name();
    let edited = apply_edit(&record, edit)?;
    save_record(&path, &edited)?;

    output_by_format_result!(ctx.cli.format,
        json => {
            let output = serde_json::json!({
                "status": "ok",
                "edit": name,
                "path": path.display().to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), SyllabusError>(())
        },
        human => {
            status!(ctx.cli, "Updated {} ({})", path.display(), name);
        }
    )?;

    Ok(())
}

fn load_or_default(path: &Path) -> Result<CurriculumRecord> {
    if path.exists() {
        load_record(path)
    } else {
        debug!(path = %path.display(), "record file missing, editing defaults");
        Ok(CurriculumRecord::default())
    }
}

fn to_edit(command: &EditCommands) -> Result<Edit> {
    let edit = match command {
        EditCommands::Set { field, values } => match field {
            AnyField::Text(field) => match values.as_slice() {
                [value] => Edit::SetText {
                    field: *field,
                    value: value.clone(),
                },
                _ => bail_usage!(format!(
                    "{} takes exactly one value, got {}",
                    field,
                    values.len()
                )),
            },
            AnyField::List(field) => Edit::SetList {
                field: *field,
                items: values.clone(),
            },
        },
        EditCommands::Add { field, value } => Edit::AddItem {
            field: *field,
            value: value.clone(),
        },
        EditCommands::Update {
            field,
            index,
            value,
        } => Edit::UpdateItem {
            field: *field,
            index: *index,
            value: value.clone(),
        },
        EditCommands::Remove { field, index } => Edit::RemoveItem {
            field: *field,
            index: *index,
        },
        EditCommands::AddRow { term } => Edit::AddRow { term: *term },
        EditCommands::UpdateRow {
            term,
            row,
            column,
            value,
        } => Edit::UpdateRow {
            term: *term,
            row: *row,
            field: *column,
            value: value.clone(),
        },
        EditCommands::RemoveRow { term, row } => Edit::RemoveRow {
            term: *term,
            row: *row,
        },
        EditCommands::Reset => Edit::Reset,
        EditCommands::Import { file } => Edit::Import(read_patch(file)?),
    };
    Ok(edit)
}
