use chrono::NaiveDate;
use serde_json::Value;

use crate::error::{Result, ResumeError};

/// Bytes offered to the external download collaborator, together with the
/// dated filename they should be saved under.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportPayload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Filename for an export taken on the given calendar date.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("resume_data_{}.json", date.format("%Y-%m-%d"))
}

/// Parses externally supplied bytes into a JSON document.
///
/// This is the one place malformed input surfaces as an error; callers keep
/// their state untouched when it does.
pub fn parse_import(bytes: &[u8]) -> Result<Value> {
    let text = std::str::from_utf8(bytes)
        .map_err(|error| ResumeError::MalformedDocument(error.to_string()))?;
    serde_json::from_str(text).map_err(|error| ResumeError::MalformedDocument(error.to_string()))
}
