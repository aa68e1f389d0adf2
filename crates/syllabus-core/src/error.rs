//! Error types and exit codes for the syllabus generator
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, bad edit addresses)
//! - 3: Data error (invalid record, unreadable snapshot)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the `syllabus` binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid record or snapshot (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while editing, validating or exporting a syllabus
#[derive(Error, Debug)]
pub enum SyllabusError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("unknown {context} field: {name}")]
    InvalidField { context: String, name: String },

    #[error("{context} index {index} is out of range (length {len})")]
    IndexOutOfRange {
        context: String,
        index: usize,
        len: usize,
    },

    #[error("invalid year filter '{expr}': {reason}")]
    InvalidFilterExpression { expr: String, reason: String },

    // Data errors (exit code 3)
    #[error("record has {count} validation issue(s)")]
    InvalidRecord { count: usize },

    #[error("failed to import {path:?}: {reason}")]
    Import { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("failed to export {target}: {reason}")]
    Export { target: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl SyllabusError {
    /// Create an error for an unknown field name
    pub fn invalid_field(context: &str, name: impl std::fmt::Display) -> Self {
        SyllabusError::InvalidField {
            context: context.to_string(),
            name: name.to_string(),
        }
    }

    /// Create an error for an index past the end of a list
    pub fn out_of_range(context: impl std::fmt::Display, index: usize, len: usize) -> Self {
        SyllabusError::IndexOutOfRange {
            context: context.to_string(),
            index,
            len,
        }
    }

    /// Create an error for an unparseable year filter expression
    pub fn invalid_filter(expr: &str, reason: impl std::fmt::Display) -> Self {
        SyllabusError::InvalidFilterExpression {
            expr: expr.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for a snapshot that could not be read or parsed
    pub fn import(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        SyllabusError::Import {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for an export target that could not be produced
    pub fn export(target: impl std::fmt::Display, reason: impl std::fmt::Display) -> Self {
        SyllabusError::Export {
            target: target.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            SyllabusError::UnknownFormat(_)
            | SyllabusError::UsageError(_)
            | SyllabusError::InvalidField { .. }
            | SyllabusError::IndexOutOfRange { .. }
            | SyllabusError::InvalidFilterExpression { .. } => ExitCode::Usage,

            SyllabusError::InvalidRecord { .. } | SyllabusError::Import { .. } => ExitCode::Data,

            SyllabusError::Export { .. }
            | SyllabusError::Io(_)
            | SyllabusError::Json(_)
            | SyllabusError::Toml(_)
            | SyllabusError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            SyllabusError::UnknownFormat(_) => "unknown_format",
            SyllabusError::UsageError(_) => "usage_error",
            SyllabusError::InvalidField { .. } => "invalid_field",
            SyllabusError::IndexOutOfRange { .. } => "index_out_of_range",
            SyllabusError::InvalidFilterExpression { .. } => "invalid_filter_expression",
            SyllabusError::InvalidRecord { .. } => "invalid_record",
            SyllabusError::Import { .. } => "import_error",
            SyllabusError::Export { .. } => "export_error",
            SyllabusError::Io(_) => "io_error",
            SyllabusError::Json(_) => "json_error",
            SyllabusError::Toml(_) => "toml_error",
            SyllabusError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for syllabus operations
pub type Result<T> = std::result::Result<T, SyllabusError>;
