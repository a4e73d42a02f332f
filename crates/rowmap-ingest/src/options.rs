//! CSV reading options.

use serde::{Deserialize, Serialize};

/// Options for [`CsvCursor`](crate::CsvCursor).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvOptions {
    /// Field delimiter.
    /// Default: `b','`.
    pub delimiter: u8,

    /// Field values that also count as null, besides the empty field.
    ///
    /// Compared after trimming surrounding whitespace, case-sensitively.
    /// Default: none.
    pub null_tokens: Vec<String>,

    /// Trim whitespace around headers and fields.
    /// Default: true.
    pub trim: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            null_tokens: Vec::new(),
            trim: true,
        }
    }
}

impl CsvOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_null_token(mut self, token: impl Into<String>) -> Self {
        self.null_tokens.push(token.into());
        self
    }

    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    pub(crate) fn is_null(&self, field: &str) -> bool {
        if field.is_empty() {
            return true;
        }
        let trimmed = field.trim();
        self.null_tokens.iter().any(|token| token == trimmed)
    }
}
