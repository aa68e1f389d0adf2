//! Edit subcommands
//!
//! Fields are addressed by their snapshot keys (`courseCode`, `missionBullets`, ...).
//! Item and row indices are 0-based, matching the paths `check` reports.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use syllabus_core::record::{ListField, RowField, TermName};

use super::parse::{parse_any_field, parse_list_field, parse_row_field, parse_term, AnyField};

/// Arguments for the edit command.
#[derive(Args, Debug)]
pub struct EditArgs {
    /// Record snapshot to edit (default: configured record path)
    #[arg(long, short, global = true)]
    pub input: Option<PathBuf>,

    #[command(subcommand)]
    pub command: EditCommands,
}

#[derive(Subcommand, Debug)]
pub enum EditCommands {
    /// Set a text field, or replace a whole list with the given items
    Set {
        /// Field key
        #[arg(value_parser = parse_any_field)]
        field: AnyField,

        /// New value (several values for a list field)
        #[arg(num_args = 0..)]
        values: Vec<String>,
    },

    /// Append an item to a list field
    Add {
        #[arg(value_parser = parse_list_field)]
        field: ListField,

        value: String,
    },

    /// Replace one item of a list field
    Update {
        #[arg(value_parser = parse_list_field)]
        field: ListField,

        index: usize,

        value: String,
    },

    /// Remove one item of a list field
    Remove {
        #[arg(value_parser = parse_list_field)]
        field: ListField,

        index: usize,
    },

    /// Append a blank week row to a term
    AddRow {
        #[arg(value_parser = parse_term)]
        term: TermName,
    },

    /// Set one column of a week row
    UpdateRow {
        #[arg(value_parser = parse_term)]
        term: TermName,

        row: usize,

        /// Column: week, topics, outcomes, or activities
        #[arg(value_parser = parse_row_field)]
        column: RowField,

        value: String,
    },

    /// Remove a week row from a term
    RemoveRow {
        #[arg(value_parser = parse_term)]
        term: TermName,

        row: usize,
    },

    /// Replace the record with the built-in defaults
    Reset,

    /// Overlay the fields of a JSON snapshot onto the record
    Import {
        /// Snapshot file
        file: PathBuf,
    },
}
