//! Symbology Cache
//!
//! Read-through cache of documents and their derived symbol tables, keyed by
//! document identifier. Each identifier is read and derived at most once;
//! population re-checks under the write lock so racing callers share one
//! result.

use super::document::{DocumentSource, FileSource, SymbologyDocument};
use super::table::SymbolTable;
use crate::error::{handle_lock_poison, Result};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};
use tracing::{debug, info};

/// Document and symbol table for one identifier
#[derive(Debug, Clone)]
pub struct LoadedSymbology {
    /// Raw document
    pub document: Arc<SymbologyDocument>,
    /// Derived symbol table
    pub table: Arc<SymbolTable>,
}

/// Document and symbol table cache
pub struct SymbologyCache {
    source: Box<dyn DocumentSource + Send + Sync>,
    documents: RwLock<HashMap<String, Arc<SymbologyDocument>>>,
    tables: RwLock<HashMap<String, Arc<SymbolTable>>>,
}

impl SymbologyCache {
    /// Create a cache reading documents from the filesystem
    #[must_use]
    pub fn new() -> Self {
        Self::with_source(FileSource)
    }

    /// Create a cache with a custom document source
    #[must_use]
    pub fn with_source(source: impl DocumentSource + Send + Sync + 'static) -> Self {
        Self {
            source: Box::new(source),
            documents: RwLock::new(HashMap::new()),
            tables: RwLock::new(HashMap::new()),
        }
    }

    /// Load a document and its symbol table
    ///
    /// # Errors
    /// - Source read failure (`Error::Load`)
    /// - Invalid JSON (`Error::Parse`)
    /// - Poisoned cache lock (`Error::Cache`)
    pub fn load(&self, source_id: &str) -> Result<LoadedSymbology> {
        let document = self.document(source_id)?;
        let table = self.table(source_id, &document)?;

        Ok(LoadedSymbology { document, table })
    }

    /// Return the cached document, reading it on first request
    pub fn document(&self, source_id: &str) -> Result<Arc<SymbologyDocument>> {
        {
            let documents = self.documents.read().map_err(handle_lock_poison)?;
            if let Some(document) = documents.get(source_id) {
                debug!(source_id = %source_id, "Symbology document cache hit");
                return Ok(Arc::clone(document));
            }
        }

        let mut documents = self.documents.write().map_err(handle_lock_poison)?;
        if let Some(document) = documents.get(source_id) {
            return Ok(Arc::clone(document));
        }

        info!(source_id = %source_id, "Loading symbology document");
        let content = self.source.read(source_id)?;
        let document = Arc::new(SymbologyDocument::from_json_str(source_id, &content)?);
        documents.insert(source_id.to_string(), Arc::clone(&document));

        Ok(document)
    }

    fn table(&self, source_id: &str, document: &SymbologyDocument) -> Result<Arc<SymbolTable>> {
        {
            let tables = self.tables.read().map_err(handle_lock_poison)?;
            if let Some(table) = tables.get(source_id) {
                debug!(source_id = %source_id, "Symbol table cache hit");
                return Ok(Arc::clone(table));
            }
        }

        let mut tables = self.tables.write().map_err(handle_lock_poison)?;
        if let Some(table) = tables.get(source_id) {
            return Ok(Arc::clone(table));
        }

        let table = Arc::new(SymbolTable::from_document(document));
        tables.insert(source_id.to_string(), Arc::clone(&table));

        Ok(table)
    }

    /// Check if a document is cached
    #[must_use]
    pub fn contains_document(&self, source_id: &str) -> bool {
        self.documents
            .read()
            .map(|documents| documents.contains_key(source_id))
            .unwrap_or(false)
    }

    /// Check if a symbol table is cached
    #[must_use]
    pub fn contains_table(&self, source_id: &str) -> bool {
        self.tables
            .read()
            .map(|tables| tables.contains_key(source_id))
            .unwrap_or(false)
    }

    /// Number of cached documents
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.read().map(|d| d.len()).unwrap_or(0)
    }

    /// Check if nothing is cached
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached document and table
    pub fn clear(&self) -> Result<()> {
        self.documents.write().map_err(handle_lock_poison)?.clear();
        self.tables.write().map_err(handle_lock_poison)?.clear();
        debug!("Symbology cache cleared");
        Ok(())
    }
}

impl Default for SymbologyCache {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SymbologyCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymbologyCache")
            .field("documents", &self.len())
            .finish_non_exhaustive()
    }
}
