//! `syllabus references` command - list references after year filtering
//!
//! `--filter` replaces the record's own expression for this listing only and,
//! unlike the record's filter, is rejected when it cannot be parsed.

use crate::cli::ReferencesArgs;
use crate::commands::dispatch::CommandContext;
use crate::output_by_format_result;
use syllabus_core::error::{Result, SyllabusError};
use syllabus_core::validation::{extract_year, filter_references_by_year, YearFilter};

/// Execute the references command
pub fn execute(ctx: &CommandContext, args: &ReferencesArgs) -> Result<()> {
    let record = ctx.load_record(args.input.as_deref())?;

    let expr = match &args.filter {
        Some(expr) => {
            YearFilter::parse(expr)?;
            expr.as_str()
        }
        None => record.references_year_filter.as_str(),
    };
    let kept = filter_references_by_year(&record.references_list, expr);

    output_by_format_result!(ctx.cli.format,
        json => {
            let references: Vec<_> = kept
                .iter()
                .map(|reference| {
                    serde_json::json!({
                        "reference": reference,
                        "year": extract_year(reference),
                    })
                })
                .collect();
            let output = serde_json::json!({
                "filter": expr,
                "total": record.references_list.len(),
                "references": references,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), SyllabusError>(())
        },
        human => {
            for reference in &kept {
                println!("{}", reference);
            }
        }
    )?;

    Ok(())
}
