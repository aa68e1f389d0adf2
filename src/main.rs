//! Syllabus - BGFC course syllabus generator
//!
//! Edits a curriculum record stored as a JSON snapshot and renders it as the
//! college's canonical text, a JSON snapshot, or a Word document.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use syllabus_core::error::{ExitCode as SyllabusExitCode, SyllabusError};
use syllabus_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return report_parse_error(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => exit_with(SyllabusExitCode::Success),
        Err(e) => {
            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }
            exit_with(e.exit_code())
        }
    }
}

fn exit_with(code: SyllabusExitCode) -> ExitCode {
    ExitCode::from(code as u8)
}

/// Clap fails before `Cli.format` exists, so a JSON caller is detected from
/// the raw arguments and still gets the error envelope.
fn report_parse_error(err: clap::Error) -> ExitCode {
    let informational = matches!(
        err.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    );
    if informational || !wants_json(env::args().skip(1)) {
        err.exit();
    }

    let error = usage_error_from(&err);
    eprintln!("{}", error.to_json());
    exit_with(error.exit_code())
}

fn usage_error_from(err: &clap::Error) -> SyllabusError {
    match err.kind() {
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::MissingSubcommand
        | ErrorKind::ArgumentConflict => SyllabusError::UsageError(err.to_string()),
        _ => SyllabusError::Other(err.to_string()),
    }
}

fn wants_json(args: impl IntoIterator<Item = String>) -> bool {
    let args: Vec<String> = args.into_iter().collect();
    args.iter().enumerate().any(|(i, arg)| {
        arg == "--format=json"
            || (arg == "--format" && args.get(i + 1).is_some_and(|v| v == "json"))
    })
}
