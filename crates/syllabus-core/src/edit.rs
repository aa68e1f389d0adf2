//! Record edits
//!
//! Every edit produces a new record; the input is never mutated. Indices are
//! checked, so an edit addressing a missing item or row fails instead of
//! silently growing or ignoring the list.

use tracing::debug;

use crate::error::Result;
use crate::record::{CurriculumRecord, ListField, RecordPatch, RowField, TermName, TextField, WeekRow};
use crate::{bail_out_of_range, bail_usage};

/// A single user edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    SetText {
        field: TextField,
        value: String,
    },
    SetList {
        field: ListField,
        items: Vec<String>,
    },
    UpdateItem {
        field: ListField,
        index: usize,
        value: String,
    },
    AddItem {
        field: ListField,
        value: String,
    },
    RemoveItem {
        field: ListField,
        index: usize,
    },
    UpdateRow {
        term: TermName,
        row: usize,
        field: RowField,
        value: String,
    },
    /// Append a blank row labelled "Week {n+1}"
    AddRow {
        term: TermName,
    },
    RemoveRow {
        term: TermName,
        row: usize,
    },
    /// Back to the built-in record
    Reset,
    /// Overlay the fields present in an imported snapshot
    Import(RecordPatch),
}

impl Edit {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Edit::SetText { .. } => "set_text",
            Edit::SetList { .. } => "set_list",
            Edit::UpdateItem { .. } => "update_item",
            Edit::AddItem { .. } => "add_item",
            Edit::RemoveItem { .. } => "remove_item",
            Edit::UpdateRow { .. } => "update_row",
            Edit::AddRow { .. } => "add_row",
            Edit::RemoveRow { .. } => "remove_row",
            Edit::Reset => "reset",
            Edit::Import(_) => "import",
        }
    }
}

/// Apply an edit, returning the edited record
pub fn apply_edit(record: &CurriculumRecord, edit: Edit) -> Result<CurriculumRecord> {
    debug!(edit = edit.name(), "apply_edit");

    let mut next = record.clone();
    match edit {
        Edit::SetText { field, value } => *field.get_mut(&mut next) = value,
        Edit::SetList { field, items } => *field.get_mut(&mut next) = items,
        Edit::UpdateItem {
            field,
            index,
            value,
        } => {
            let items = field.get_mut(&mut next);
            let len = items.len();
            match items.get_mut(index) {
                Some(item) => *item = value,
                None => bail_out_of_range!(field, index, len),
            }
        }
        Edit::AddItem { field, value } => field.get_mut(&mut next).push(value),
        Edit::RemoveItem { field, index } => {
            let items = field.get_mut(&mut next);
            if index >= items.len() {
                bail_out_of_range!(field, index, items.len());
            }
            items.remove(index);
        }
        Edit::UpdateRow {
            term,
            row,
            field,
            value,
        } => {
            let rows = term_rows(&mut next, term)?;
            let len = rows.len();
            match rows.get_mut(row) {
                Some(target) => field.set(target, value),
                None => bail_out_of_range!(format!("{term} row"), row, len),
            }
        }
        Edit::AddRow { term } => {
            let rows = term_rows(&mut next, term)?;
            rows.push(WeekRow::blank(rows.len() + 1));
        }
        Edit::RemoveRow { term, row } => {
            let rows = term_rows(&mut next, term)?;
            if row >= rows.len() {
                bail_out_of_range!(format!("{term} row"), row, rows.len());
            }
            rows.remove(row);
        }
        Edit::Reset => return Ok(CurriculumRecord::default()),
        Edit::Import(patch) => return Ok(patch.apply(next)),
    }

    Ok(next)
}

fn term_rows(record: &mut CurriculumRecord, term: TermName) -> Result<&mut Vec<WeekRow>> {
    match record.term_index(term) {
        Some(index) => Ok(&mut record.terms[index].rows),
        None => bail_usage!(format!("record has no {term} term")),
    }
}
