//! Row and table model for the rowmap workspace.
//!
//! - **value**: typed cell values and their kinds; `Option<Value>` is a cell
//! - **row**: a single extracted row of named cells
//! - **table**: a fully materialized table
//! - **source**: the `RowSource` interface every row shape implements

pub mod error;
pub mod ids;
pub mod lookup;
pub mod row;
pub mod source;
pub mod table;
pub mod value;

pub use error::{ModelError, Result, SourceError};
pub use ids::ColumnName;
pub use lookup::CaseInsensitiveMap;
pub use row::{Row, RowBuilder, validate_columns};
pub use source::{RowCursor, RowSource, SingleRow};
pub use table::{Table, TableRows};
pub use value::{Cell, Value, ValueKind};

// Re-exported so callers can build values without naming the crates.
pub use chrono::{NaiveDate, NaiveDateTime};
pub use rust_decimal::Decimal;
