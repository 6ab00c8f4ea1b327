//! Symbology - Reference Document Loading
//!
//! Reads JSON-LD symbology documents and flattens the
//! "Universal Symbology Framework" section into a [`SymbolTable`].
//!
//! # Overview
//!
//! - [`SymbologyDocument`]: the parsed document, kept verbatim
//! - [`SymbolTable`]: elements, modalities and zodiac signs plus the fixed
//!   geometric and narrative symbols
//! - [`SymbologyCache`]: reads and derives each document at most once
//!
//! # Example
//!
//! ```rust,ignore
//! use sigil_core::symbology::SymbologyCache;
//!
//! let cache = SymbologyCache::new();
//! let loaded = cache.load("data/universal-symbology.jsonld")?;
//! println!("{} symbols", loaded.table.len());
//! ```

mod cache;
mod document;
mod table;

pub use cache::{LoadedSymbology, SymbologyCache};
pub use document::{DocumentSource, FileSource, SymbologyDocument, FRAMEWORK_SECTION};
pub use table::{Symbol, SymbolTable, GEOMETRIC_SYMBOLS, NARRATIVE_SYMBOLS};

#[cfg(test)]
pub(crate) use document::MockDocumentSource;
