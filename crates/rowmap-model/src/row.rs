//! A single extracted row of named cells.

use crate::error::{ModelError, Result};
use crate::ids::ColumnName;
use crate::lookup::CaseInsensitiveMap;
use crate::value::{Cell, Value};

/// Ordered `(column, cell)` pairs for one logical record.
///
/// Column names are unique under case-insensitive comparison.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawRow")]
pub struct Row {
    columns: Vec<String>,
    cells: Vec<Cell>,
}

/// Unchecked serde form of [`Row`].
#[derive(serde::Deserialize)]
struct RawRow {
    columns: Vec<String>,
    cells: Vec<Cell>,
}

impl TryFrom<RawRow> for Row {
    type Error = ModelError;

    fn try_from(raw: RawRow) -> Result<Self> {
        Row::from_parts(raw.columns, raw.cells)
    }
}

impl Row {
    pub fn builder() -> RowBuilder {
        RowBuilder::default()
    }

    /// Builds a row from parallel column and cell vectors.
    pub fn from_parts(columns: Vec<String>, cells: Vec<Cell>) -> Result<Self> {
        let columns = validate_columns(columns)?;
        if columns.len() != cells.len() {
            return Err(ModelError::WidthMismatch {
                expected: columns.len(),
                found: cells.len(),
            });
        }
        Ok(Self { columns, cells })
    }

    pub(crate) fn from_validated(columns: Vec<String>, cells: Vec<Cell>) -> Self {
        Self { columns, cells }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Looks up a cell by column name, ignoring ASCII case.
    ///
    /// Returns `None` when the column is absent and `Some(&None)` when the
    /// column holds the null marker.
    pub fn cell(&self, name: &str) -> Option<&Cell> {
        self.columns
            .iter()
            .position(|column| column.eq_ignore_ascii_case(name))
            .map(|idx| &self.cells[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Value>)> + '_ {
        self.columns
            .iter()
            .zip(&self.cells)
            .map(|(name, cell)| (name.as_str(), cell.as_ref()))
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<Cell>) {
        (self.columns, self.cells)
    }
}

/// Incremental [`Row`] construction.
#[derive(Debug, Default)]
pub struct RowBuilder {
    columns: Vec<String>,
    cells: Vec<Cell>,
}

impl RowBuilder {
    pub fn value(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.cell(name, Some(value.into()))
    }

    pub fn null(self, name: impl Into<String>) -> Self {
        self.cell(name, None)
    }

    pub fn cell(mut self, name: impl Into<String>, cell: Cell) -> Self {
        self.columns.push(name.into());
        self.cells.push(cell);
        self
    }

    pub fn build(self) -> Result<Row> {
        Row::from_parts(self.columns, self.cells)
    }
}

/// Trims column names and rejects empty or case-insensitive duplicates.
pub fn validate_columns<I, S>(columns: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = CaseInsensitiveMap::new();
    let mut out = Vec::new();
    for column in columns {
        let name = ColumnName::new(column)?.into_string();
        if !seen.insert(&name, ()) {
            return Err(ModelError::DuplicateColumn { name });
        }
        out.push(name);
    }
    Ok(out)
}
