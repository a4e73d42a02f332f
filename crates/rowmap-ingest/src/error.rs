//! Error types for row-source ingestion.

use std::path::PathBuf;

use rowmap_model::{ModelError, SourceError};
use thiserror::Error;

/// Errors that can occur while opening or reading a row source.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV input.
    #[error("failed to parse CSV: {0}")]
    Csv(#[from] ::csv::Error),

    /// CSV input has no header row.
    #[error("CSV input has no header row")]
    MissingHeader,

    /// Header names are empty or repeated.
    #[error("invalid CSV header: {0}")]
    Header(#[from] ModelError),

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl IngestError {
    pub(crate) fn open(path: PathBuf, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileRead { path, source: err }
        }
    }
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

impl From<IngestError> for SourceError {
    fn from(err: IngestError) -> Self {
        SourceError::backend(err)
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
