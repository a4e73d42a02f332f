//! CSV header normalization.

use ::csv::StringRecord;
use rowmap_model::validate_columns;

use crate::error::{IngestError, Result};

/// Normalizes a header value by trimming whitespace and a leading BOM.
pub(crate) fn normalize_header(value: &str) -> String {
    value.trim_start_matches('\u{feff}').trim().to_string()
}

/// Turns a header record into validated column names.
///
/// A record with no fields, or a single empty field, means the input had no
/// header row at all.
pub(crate) fn header_columns(record: &StringRecord) -> Result<Vec<String>> {
    let names: Vec<String> = record.iter().map(normalize_header).collect();
    if names.iter().all(String::is_empty) && names.len() <= 1 {
        return Err(IngestError::MissingHeader);
    }
    Ok(validate_columns(names)?)
}
