//! Character Profiler
//!
//! Binds a symbology document from a [`SymbologyCache`] to the resolvers

use super::{profile_character, Character, Profile};
use crate::error::Result;
use crate::symbology::{SymbolTable, SymbologyCache, SymbologyDocument};
use std::sync::Arc;

/// Profiles characters against one symbology document
#[derive(Debug, Clone)]
pub struct CharacterProfiler {
    source_id: String,
    document: Arc<SymbologyDocument>,
    table: Arc<SymbolTable>,
}

impl CharacterProfiler {
    /// Create a profiler, loading the document through the cache
    ///
    /// # Errors
    /// - Document load or parse failure
    pub fn new(cache: &SymbologyCache, source_id: &str) -> Result<Self> {
        let loaded = cache.load(source_id)?;

        Ok(Self {
            source_id: source_id.to_string(),
            document: loaded.document,
            table: loaded.table,
        })
    }

    /// Document identifier
    #[must_use]
    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    /// Loaded document
    #[must_use]
    pub fn document(&self) -> &SymbologyDocument {
        &self.document
    }

    /// Derived symbol table
    #[must_use]
    pub fn symbols(&self) -> &SymbolTable {
        &self.table
    }

    /// Generate the symbolic profile of a character
    #[must_use]
    pub fn profile_character(&self, character: &Character) -> Profile {
        profile_character(&self.table, character)
    }
}
