//! Row sources backed by real storage.
//!
//! # Features
//!
//! - **CSV Cursor**: forward-only reading of delimited text with a header row;
//!   empty fields become null cells and everything else arrives as text
//! - **DataFrame Rows**: row-by-row access to a Polars `DataFrame`, with
//!   `AnyValue` cells converted to typed values
//!
//! Both implement `RowSource` and `MapTo`, so they plug straight into the
//! mapper.
//!
//! # Example
//!
//! ```ignore
//! use rowmap_core::MapTo;
//! use rowmap_ingest::{CsvCursor, CsvOptions};
//!
//! let cursor = CsvCursor::from_path("customers.csv", &CsvOptions::default())?;
//! let customers: Vec<Customer> = cursor.map_to()?;
//! ```

mod csv;
mod error;
mod frame;
mod options;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::CsvCursor;

// === DataFrames ===
pub use frame::{FrameRows, any_to_value};

// === Options ===
pub use options::CsvOptions;
