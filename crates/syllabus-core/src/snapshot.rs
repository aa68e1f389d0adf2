//! JSON snapshots of a record
//!
//! Snapshots use the camelCase keys of the web form, so files move freely
//! between the two. Import is a shallow overlay: keys absent from the file keep
//! the base record's value.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, SyllabusError};
use crate::record::{CurriculumRecord, RecordPatch};

/// Pretty-printed JSON (2-space indent) of a record
pub fn to_json_snapshot(record: &CurriculumRecord) -> Result<String> {
    Ok(serde_json::to_string_pretty(record)?)
}

/// Parse snapshot text into the fields it carries
///
/// `source` names the snapshot in error messages.
pub fn parse_patch(text: &str, source: impl Into<PathBuf>) -> Result<RecordPatch> {
    let patch: RecordPatch =
        serde_json::from_str(text).map_err(|e| SyllabusError::import(source, e))?;
    debug!(fields = patch.len(), "parsed snapshot");
    Ok(patch)
}

/// Parse snapshot text and overlay it on `base`
pub fn parse_snapshot(
    text: &str,
    base: &CurriculumRecord,
    source: impl Into<PathBuf>,
) -> Result<CurriculumRecord> {
    Ok(parse_patch(text, source)?.apply(base.clone()))
}

/// Read a snapshot file without applying it
pub fn read_patch(path: &Path) -> Result<RecordPatch> {
    let text = fs::read_to_string(path).map_err(|e| SyllabusError::import(path, e))?;
    parse_patch(&text, path)
}

/// Read a snapshot file, overlaying it on the built-in defaults
pub fn load_record(path: &Path) -> Result<CurriculumRecord> {
    Ok(read_patch(path)?.apply(CurriculumRecord::default()))
}

/// Write a record snapshot, creating parent directories as needed
pub fn save_record(path: &Path, record: &CurriculumRecord) -> Result<()> {
    let json = to_json_snapshot(record)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| SyllabusError::export(path.display(), e))?;
    }
    fs::write(path, json).map_err(|e| SyllabusError::export(path.display(), e))?;
    debug!(path = %path.display(), "saved record");
    Ok(())
}

/// Default export file name, e.g. `ICT 101_syllabus.docx`
pub fn default_export_name(record: &CurriculumRecord, extension: &str) -> String {
    format!("{}_syllabus.{}", record.course_code, extension)
}
