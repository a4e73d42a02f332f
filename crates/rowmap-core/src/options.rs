//! Configuration options for row mapping.

use serde::{Deserialize, Serialize};

/// Options controlling how rows are mapped onto records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapOptions {
    /// Replace null cells with fixed or caller-supplied defaults.
    ///
    /// When off, nullable members and `Option<String>` are left as `None`
    /// and everything else takes its type's zero value.
    /// Default: true.
    pub null_overrides: bool,

    /// Treat a source column with no matching member as an error instead
    /// of skipping it.
    /// Default: false.
    pub strict_columns: bool,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            null_overrides: true,
            strict_columns: false,
        }
    }
}

impl MapOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_null_overrides(mut self, enable: bool) -> Self {
        self.null_overrides = enable;
        self
    }

    pub fn with_strict_columns(mut self, enable: bool) -> Self {
        self.strict_columns = enable;
        self
    }
}
