//! The uniform row-source interface consumed by the mapper.
//!
//! Three shapes implement it in this crate:
//!
//! - [`RowCursor`]: forward-only cursor over any iterator of cell vectors
//! - [`TableRows`](crate::TableRows): borrowing iteration over a [`Table`](crate::Table)
//! - [`SingleRow`]: one extracted [`Row`], yielded once
//!
//! Storage-backed cursors (CSV, DataFrames) live in `rowmap-ingest`.

use crate::error::SourceError;
use crate::row::Row;
use crate::value::Cell;

/// A producer of rows that share one column list.
///
/// Every call to [`next_cells`](RowSource::next_cells) yields one cell per
/// column, in column order, until the source is exhausted.
pub trait RowSource {
    /// Column names, in cell order.
    fn columns(&self) -> &[String];

    /// Pulls the next row. `Ok(None)` marks the end of the source.
    fn next_cells(&mut self) -> Result<Option<Vec<Cell>>, SourceError>;
}

impl<S: RowSource + ?Sized> RowSource for &mut S {
    fn columns(&self) -> &[String] {
        (**self).columns()
    }

    fn next_cells(&mut self) -> Result<Option<Vec<Cell>>, SourceError> {
        (**self).next_cells()
    }
}

/// Forward-only cursor over successive rows.
///
/// Each row's width is checked against the column list as it is pulled.
#[derive(Debug)]
pub struct RowCursor<I> {
    columns: Vec<String>,
    rows: I,
    position: usize,
}

impl<I> RowCursor<I>
where
    I: Iterator<Item = Vec<Cell>>,
{
    pub fn new<R>(columns: Vec<String>, rows: R) -> Self
    where
        R: IntoIterator<IntoIter = I>,
    {
        Self {
            columns,
            rows: rows.into_iter(),
            position: 0,
        }
    }

    /// Number of rows pulled so far.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl<I> RowSource for RowCursor<I>
where
    I: Iterator<Item = Vec<Cell>>,
{
    fn columns(&self) -> &[String] {
        &self.columns
    }

    fn next_cells(&mut self) -> Result<Option<Vec<Cell>>, SourceError> {
        let Some(cells) = self.rows.next() else {
            return Ok(None);
        };
        self.position += 1;
        if cells.len() != self.columns.len() {
            return Err(SourceError::Width {
                row: self.position,
                expected: self.columns.len(),
                found: cells.len(),
            });
        }
        Ok(Some(cells))
    }
}

/// A single extracted row presented as a one-row source.
#[derive(Debug)]
pub struct SingleRow<'a> {
    row: &'a Row,
    done: bool,
}

impl<'a> SingleRow<'a> {
    pub fn new(row: &'a Row) -> Self {
        Self { row, done: false }
    }
}

impl RowSource for SingleRow<'_> {
    fn columns(&self) -> &[String] {
        self.row.columns()
    }

    fn next_cells(&mut self) -> Result<Option<Vec<Cell>>, SourceError> {
        if self.done {
            return Ok(None);
        }
        self.done = true;
        Ok(Some(self.row.cells().to_vec()))
    }
}
