//! Forward-only CSV cursor.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use ::csv::{Reader, ReaderBuilder, StringRecord, Trim};
use rowmap_core::MapTo;
use rowmap_model::{Cell, RowSource, SourceError, Value};

use super::header::header_columns;
use crate::error::{IngestError, Result};
use crate::options::CsvOptions;

/// Reads rows from CSV input with a single header row.
///
/// Fields arrive as [`Value::Text`]; the mapper parses them into each
/// member's kind. An empty field, or one listed in
/// [`CsvOptions::null_tokens`], is a null cell.
#[derive(Debug)]
pub struct CsvCursor<R> {
    reader: Reader<R>,
    columns: Vec<String>,
    options: CsvOptions,
    record: StringRecord,
    position: usize,
}

impl CsvCursor<File> {
    /// Opens a CSV file.
    pub fn from_path(path: impl AsRef<Path>, options: &CsvOptions) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| IngestError::open(path.to_path_buf(), e))?;
        tracing::debug!(path = %path.display(), "Opened CSV file");
        Self::from_reader(file, options)
    }
}

impl<R: Read> CsvCursor<R> {
    /// Wraps any reader. The header row is read immediately.
    pub fn from_reader(input: R, options: &CsvOptions) -> Result<Self> {
        let trim = if options.trim { Trim::All } else { Trim::None };
        let mut reader = ReaderBuilder::new()
            .delimiter(options.delimiter)
            .has_headers(true)
            .flexible(true)
            .trim(trim)
            .from_reader(input);
        let columns = header_columns(reader.headers()?)?;
        Ok(Self {
            reader,
            columns,
            options: options.clone(),
            record: StringRecord::new(),
            position: 0,
        })
    }

    /// Number of data rows read so far.
    pub fn position(&self) -> usize {
        self.position
    }

    fn cell(&self, field: &str) -> Cell {
        if self.options.is_null(field) {
            None
        } else {
            Some(Value::Text(field.to_string()))
        }
    }
}

impl<R: Read> RowSource for CsvCursor<R> {
    fn columns(&self) -> &[String] {
        &self.columns
    }

    fn next_cells(&mut self) -> std::result::Result<Option<Vec<Cell>>, SourceError> {
        let more = self
            .reader
            .read_record(&mut self.record)
            .map_err(IngestError::from)?;
        if !more {
            return Ok(None);
        }
        self.position += 1;
        if self.record.len() != self.columns.len() {
            return Err(SourceError::Width {
                row: self.position,
                expected: self.columns.len(),
                found: self.record.len(),
            });
        }
        let cells = self.record.iter().map(|field| self.cell(field)).collect();
        Ok(Some(cells))
    }
}

impl<R: Read> MapTo for CsvCursor<R> {
    type Source = Self;

    fn into_row_source(self) -> Self {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor<'a>(input: &'a str, options: &CsvOptions) -> CsvCursor<&'a [u8]> {
        CsvCursor::from_reader(input.as_bytes(), options).unwrap()
    }

    #[test]
    fn test_reads_header_and_rows() {
        let mut rows = cursor("Id,Zip\n1,34567\n2,\n", &CsvOptions::default());
        assert_eq!(rows.columns(), ["Id", "Zip"]);
        assert_eq!(
            rows.next_cells().unwrap(),
            Some(vec![Some(Value::from("1")), Some(Value::from("34567"))])
        );
        assert_eq!(rows.next_cells().unwrap(), Some(vec![Some(Value::from("2")), None]));
        assert_eq!(rows.next_cells().unwrap(), None);
        assert_eq!(rows.position(), 2);
    }

    #[test]
    fn test_quoted_empty_field_is_null() {
        let mut rows = cursor("Id,Note\n1,\"\"\n", &CsvOptions::default());
        assert_eq!(rows.next_cells().unwrap(), Some(vec![Some(Value::from("1")), None]));
    }

    #[test]
    fn test_custom_delimiter_and_tokens() {
        let options = CsvOptions::new().with_delimiter(b';').with_null_token("NA");
        let mut rows = cursor("Id; Zip\n1; NA\n", &options);
        assert_eq!(rows.columns(), ["Id", "Zip"]);
        assert_eq!(rows.next_cells().unwrap(), Some(vec![Some(Value::from("1")), None]));
    }

    #[test]
    fn test_untrimmed_fields_keep_spaces() {
        let options = CsvOptions::new().with_trim(false);
        let mut rows = cursor("Id,Name\n1, Ann \n", &options);
        assert_eq!(
            rows.next_cells().unwrap(),
            Some(vec![Some(Value::from("1")), Some(Value::from(" Ann "))])
        );
    }

    #[test]
    fn test_short_row_is_width_error() {
        let mut rows = cursor("Id,Zip\n1\n", &CsvOptions::default());
        assert!(matches!(
            rows.next_cells(),
            Err(SourceError::Width {
                row: 1,
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn test_empty_input_has_no_header() {
        let result = CsvCursor::from_reader("".as_bytes(), &CsvOptions::default());
        assert!(matches!(result, Err(IngestError::MissingHeader)));
    }
}
