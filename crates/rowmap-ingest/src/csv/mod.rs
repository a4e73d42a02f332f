//! CSV row sources.

mod header;
mod reader;

pub use reader::CsvCursor;
