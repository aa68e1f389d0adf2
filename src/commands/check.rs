//! `syllabus check` command - report missing content and advisory totals
//!
//! Exits with the data error code when required content is missing. The
//! assessment total and the reference filter result are informational.

use serde::Serialize;

use crate::cli::{CheckArgs, OutputFormat};
use crate::commands::dispatch::CommandContext;
use syllabus_core::error::{Result, SyllabusError};
use syllabus_core::record::CurriculumRecord;
use syllabus_core::validation::{
    filter_references_by_year, validate_assessment_total, validate_record, AssessmentValidation,
    ValidationIssue, YearFilter,
};

#[derive(Debug, Serialize)]
struct ReferenceSummary {
    filter: String,
    kept: usize,
    total: usize,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    valid: bool,
    issues: Vec<ValidationIssue>,
    assessment: AssessmentValidation,
    references: ReferenceSummary,
}

fn build_report(record: &CurriculumRecord) -> CheckReport {
    let issues = validate_record(record);
    let kept = filter_references_by_year(&record.references_list, &record.references_year_filter);

    CheckReport {
        valid: issues.is_empty(),
        issues,
        assessment: validate_assessment_total(&record.assessment_breakdown),
        references: ReferenceSummary {
            filter: record.references_year_filter.clone(),
            kept: kept.len(),
            total: record.references_list.len(),
        },
    }
}

/// Execute the check command
pub fn execute(ctx: &CommandContext, args: &CheckArgs) -> Result<()> {
    let record = ctx.load_record(args.input.as_deref())?;
    let report = build_report(&record);

    match ctx.cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Human => print_human(ctx, &report),
    }

    if report.issues.is_empty() {
        Ok(())
    } else {
        Err(SyllabusError::InvalidRecord {
            count: report.issues.len(),
        })
    }
}

fn print_human(ctx: &CommandContext, report: &CheckReport) {
    if report.issues.is_empty() {
        println!("Record is complete");
    } else {
        println!("{} issue(s):", report.issues.len());
        for issue in &report.issues {
            println!("  {}: {}", issue.field, issue.message);
        }
    }

    if ctx.cli.quiet {
        return;
    }

    let assessment = &report.assessment;
    if assessment.is_valid {
        println!("Assessment total: {}%", assessment.total);
    } else if assessment.remaining > 0.0 {
        println!(
            "Assessment total: {}% ({}% remaining)",
            assessment.total, assessment.remaining
        );
    } else {
        println!(
            "Assessment total: {}% (over by {}%)",
            assessment.total, -assessment.remaining
        );
    }

    let references = &report.references;
    match YearFilter::parse(&references.filter) {
        Ok(Some(filter)) => println!(
            "References: {} of {} kept ({})",
            references.kept, references.total, filter
        ),
        Ok(None) => println!(
            "References: {} of {} kept (no filter)",
            references.kept, references.total
        ),
        Err(_) => println!(
            "References: {} of {} kept (invalid filter, ignored)",
            references.kept, references.total
        ),
    }
}
