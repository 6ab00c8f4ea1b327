//! Symbology Document
//!
//! Raw JSON-LD documents and the sources they are read from

use crate::error::{Error, Result};
use serde_json::Value;
use std::path::Path;

/// Section the symbol table is extracted from
pub const FRAMEWORK_SECTION: &str = "Universal Symbology Framework";

/// Parsed reference document
///
/// The JSON-LD structure is kept as-is; only the parts the symbol table
/// needs are ever inspected.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbologyDocument {
    root: Value,
}

impl SymbologyDocument {
    /// Parse document text
    ///
    /// # Errors
    /// - `Error::Parse` when `content` is not valid JSON
    pub fn from_json_str(source_id: &str, content: &str) -> Result<Self> {
        let root = serde_json::from_str(content).map_err(|e| Error::Parse {
            source_id: source_id.to_string(),
            message: e.to_string(),
        })?;

        Ok(Self { root })
    }

    /// Wrap an already parsed value
    #[must_use]
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// Return the underlying JSON value
    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.root
    }

    /// Iterate over the `hasSection` entries (empty when absent)
    pub fn sections(&self) -> impl Iterator<Item = &Value> {
        self.root
            .get("hasSection")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
    }

    /// Find a section by exact name
    #[must_use]
    pub fn find_section(&self, name: &str) -> Option<&Value> {
        self.sections()
            .find(|section| section.get("name").and_then(Value::as_str) == Some(name))
    }
}

/// Source of raw document text, keyed by document identifier
#[cfg_attr(test, mockall::automock)]
pub trait DocumentSource {
    /// Read the document identified by `source_id`
    ///
    /// # Errors
    /// - `Error::Load` when the document cannot be read
    fn read(&self, source_id: &str) -> Result<String>;
}

/// Reads documents from the filesystem, treating identifiers as paths
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSource;

impl DocumentSource for FileSource {
    fn read(&self, source_id: &str) -> Result<String> {
        std::fs::read_to_string(Path::new(source_id)).map_err(|e| Error::Load {
            source_id: source_id.to_string(),
            message: e.to_string(),
        })
    }
}
