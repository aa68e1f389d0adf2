//! `syllabus init` command - write a fresh working record
//!
//! The snapshot is the built-in ICT 101 record with today's date stamped
//! into `dateRevised`. An existing file is only replaced with `--force`.

use chrono::Local;

use crate::cli::InitArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::status;
use crate::output_by_format_result;
use syllabus_core::bail_usage;
use syllabus_core::error::{Result, SyllabusError};
use syllabus_core::record::{format_revision_date, CurriculumRecord};
use syllabus_core::snapshot::save_record;

/// Execute the init command
pub fn execute(ctx: &CommandContext, args: &InitArgs) -> Result<()> {
    let path = ctx.record_path(args.output.as_deref());

    if path.exists() && !args.force {
        bail_usage!(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        ));
    }

    let record = CurriculumRecord {
        date_revised: format_revision_date(Local::now().date_naive()),
        ..Default::default()
    };
    save_record(&path, &record)?;

    output_by_format_result!(ctx.cli.format,
        json => {
            let output = serde_json::json!({
                "status": "ok",
                "path": path.display().to_string(),
                "courseCode": record.course_code,
                "dateRevised": record.date_revised,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), SyllabusError>(())
        },
        human => {
            status!(ctx.cli, "Initialized syllabus record at {}", path.display());
        }
    )?;

    Ok(())
}
