use syllabus_core::format::OutputFormat;
use syllabus_core::record::{ListField, RowField, TermName, TextField};

/// Parse the global output format
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse a list field from its snapshot key
pub fn parse_list_field(s: &str) -> std::result::Result<ListField, String> {
    s.parse::<ListField>().map_err(|e| e.to_string())
}

/// Parse a term name
pub fn parse_term(s: &str) -> std::result::Result<TermName, String> {
    s.parse::<TermName>().map_err(|e| e.to_string())
}

/// Parse a week-row column
pub fn parse_row_field(s: &str) -> std::result::Result<RowField, String> {
    s.parse::<RowField>().map_err(|e| e.to_string())
}

/// A field addressed by `edit set`: either a text field or a whole list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnyField {
    Text(TextField),
    List(ListField),
}

/// Parse any record field from its snapshot key
pub fn parse_any_field(s: &str) -> std::result::Result<AnyField, String> {
    if let Ok(field) = s.parse::<TextField>() {
        return Ok(AnyField::Text(field));
    }
    s.parse::<ListField>()
        .map(AnyField::List)
        .map_err(|_| format!("unknown field: {}", s.trim()))
}
