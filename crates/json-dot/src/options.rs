//! Per-document configuration.
//!
//! Options can be built in code or loaded from TOML:
//!
//! ```toml
//! index-overflow = "pad-with-null"
//! max-pad = 100
//! indent = 4
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DocumentError;

/// What `set` does with a literal index past the append position.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum IndexOverflow {
    /// Fail with `INDEX_OUT_OF_BOUNDS`.
    #[default]
    Reject,
    /// Fill the gap with nulls, then append.
    PadWithNull,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct DocumentOptions {
    pub index_overflow: IndexOverflow,
    /// Widest gap of nulls `PadWithNull` may fill in one write.
    pub max_pad: usize,
    /// Spaces per nesting level in pretty output.
    pub indent: usize,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            index_overflow: IndexOverflow::default(),
            max_pad: default_max_pad(),
            indent: default_indent(),
        }
    }
}

fn default_max_pad() -> usize {
    10_000
}

fn default_indent() -> usize {
    2
}

impl DocumentOptions {
    pub fn from_toml_str(text: &str) -> Result<Self, DocumentError> {
        toml::from_str(text).map_err(|e| DocumentError::Config(e.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    pub fn with_index_overflow(mut self, index_overflow: IndexOverflow) -> Self {
        self.index_overflow = index_overflow;
        self
    }

    pub fn with_max_pad(mut self, max_pad: usize) -> Self {
        self.max_pad = max_pad;
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
