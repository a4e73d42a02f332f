//! Error types for value coercion and row mapping.

use rowmap_model::{SourceError, ValueKind};
use thiserror::Error;

/// A non-null value could not be converted to a member's declared kind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    /// No conversion exists between the two kinds.
    #[error("cannot convert {from} to {to}")]
    Unsupported { from: ValueKind, to: ValueKind },

    /// The conversion exists but this value cannot be represented.
    #[error("cannot convert '{value}' to {to}: {reason}")]
    Invalid {
        value: String,
        to: ValueKind,
        reason: String,
    },
}

impl ConvertError {
    pub(crate) fn invalid(value: impl ToString, to: ValueKind, reason: impl Into<String>) -> Self {
        Self::Invalid {
            value: value.to_string(),
            to,
            reason: reason.into(),
        }
    }
}

/// Errors surfaced by the mapping entry points.
#[derive(Debug, Error)]
pub enum MapError {
    /// A cell value could not be coerced into its member's type.
    #[error("column '{column}' cannot be assigned to member '{member}': {source}")]
    Conversion {
        column: String,
        member: &'static str,
        #[source]
        source: ConvertError,
    },

    /// A source column has no member (only with `strict_columns`).
    #[error("column '{column}' has no matching member on {record}")]
    UnmatchedColumn {
        column: String,
        record: &'static str,
    },

    /// The row source failed while producing rows.
    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Result type for mapping operations.
pub type Result<T> = std::result::Result<T, MapError>;
