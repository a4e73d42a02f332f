//! Error types for the row and table model.

use thiserror::Error;

/// Errors raised while building rows and tables.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A column name was empty or only whitespace.
    #[error("column name must not be empty")]
    EmptyColumnName,

    /// Two columns share a name under case-insensitive comparison.
    #[error("duplicate column '{name}'")]
    DuplicateColumn { name: String },

    /// A row does not have one cell per declared column.
    #[error("row has {found} cells but {expected} columns are declared")]
    WidthMismatch { expected: usize, found: usize },

    /// A lookup named a column the table does not have.
    #[error("column '{name}' not found")]
    UnknownColumn { name: String },
}

/// Errors reported by a row source while producing rows.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source produced a row whose width differs from its column list.
    #[error("row {row} has {found} cells but the source declares {expected} columns")]
    Width {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The storage behind the source failed (I/O, parsing, driver errors).
    #[error("row source failed: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SourceError {
    /// Wraps an adapter-specific error.
    pub fn backend<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Backend(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
