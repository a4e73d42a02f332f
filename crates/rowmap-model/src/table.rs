#![deny(unsafe_code)]

use crate::error::{ModelError, Result, SourceError};
use crate::row::{Row, validate_columns};
use crate::source::{RowCursor, RowSource};
use crate::value::{Cell, Value};

/// A fully materialized table: column names declared once, rows of cells.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawTable")]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

/// Unchecked serde form of [`Table`].
#[derive(serde::Deserialize)]
struct RawTable {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl TryFrom<RawTable> for Table {
    type Error = ModelError;

    fn try_from(raw: RawTable) -> Result<Self> {
        let mut table = Table::new(raw.columns)?;
        for cells in raw.rows {
            table.push_row(cells)?;
        }
        Ok(table)
    }
}

impl Table {
    pub fn new<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            columns: validate_columns(columns)?,
            rows: Vec::new(),
        })
    }

    pub fn push_row(&mut self, cells: Vec<Cell>) -> Result<()> {
        if cells.len() != self.columns.len() {
            return Err(ModelError::WidthMismatch {
                expected: self.columns.len(),
                found: cells.len(),
            });
        }
        self.rows.push(cells);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|column| column.eq_ignore_ascii_case(name))
    }

    /// Extracts one row with its column names attached.
    pub fn row(&self, index: usize) -> Option<Row> {
        let cells = self.rows.get(index)?;
        Some(self.extract(cells))
    }

    /// Iterates the rows as a [`RowSource`].
    pub fn rows(&self) -> TableRows<'_> {
        TableRows {
            table: self,
            next: 0,
        }
    }

    /// Rows whose cell in `column` equals `value`.
    ///
    /// Integer cells match integer probes of any width. Null cells never match.
    pub fn select(&self, column: &str, value: &Value) -> Result<Vec<Row>> {
        let idx = self
            .column_index(column)
            .ok_or_else(|| ModelError::UnknownColumn {
                name: column.to_string(),
            })?;
        Ok(self
            .rows
            .iter()
            .filter(|cells| {
                cells[idx]
                    .as_ref()
                    .is_some_and(|cell| cell.loosely_equals(value))
            })
            .map(|cells| self.extract(cells))
            .collect())
    }

    /// Converts the table into a forward-only cursor that owns its rows.
    pub fn into_cursor(self) -> RowCursor<std::vec::IntoIter<Vec<Cell>>> {
        RowCursor::new(self.columns, self.rows)
    }

    fn extract(&self, cells: &[Cell]) -> Row {
        // Columns were validated on construction and widths on push.
        Row::from_validated(self.columns.clone(), cells.to_vec())
    }
}

/// Borrowing row iterator over a [`Table`].
#[derive(Debug, Clone)]
pub struct TableRows<'a> {
    table: &'a Table,
    next: usize,
}

impl RowSource for TableRows<'_> {
    fn columns(&self) -> &[String] {
        &self.table.columns
    }

    fn next_cells(&mut self) -> std::result::Result<Option<Vec<Cell>>, SourceError> {
        let Some(cells) = self.table.rows.get(self.next) else {
            return Ok(None);
        };
        self.next += 1;
        Ok(Some(cells.clone()))
    }
}
