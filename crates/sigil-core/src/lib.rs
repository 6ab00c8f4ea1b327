//! Sigil Core - Symbology Engine
//!
//! This crate turns a structured character description into a symbolic
//! profile, including:
//! - Symbology: loading JSON-LD reference documents and deriving symbol tables
//! - Cache: at-most-once loading per document identifier
//! - Profile: rule-table resolution of core, personality, role, astrological
//!   and name symbols, composed into a symbolic representation
//!
//! # Example
//!
//! ```rust,ignore
//! use sigil_core::{Character, CharacterProfiler, SymbologyCache};
//!
//! let cache = SymbologyCache::new();
//! let profiler = CharacterProfiler::new(&cache, "data/universal-symbology.jsonld")?;
//! let character = Character::default()
//!     .with_origin("Celestial")
//!     .with_traits(["Brave", "Wise"]);
//! println!("{}", profiler.profile_character(&character).symbolic_representation);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod profile;
pub mod symbology;

pub use error::{Error, Result};
pub use profile::{
    format_symbolic_representation, profile_character, render_symbol_list,
    resolve_astrological_profile, resolve_core_symbol, resolve_name_symbol,
    resolve_personality_symbols, resolve_role_symbol, AstrologicalData, AstrologicalProfile,
    Character, CharacterProfiler, NameData, Profile,
};
pub use symbology::{
    DocumentSource, FileSource, LoadedSymbology, Symbol, SymbolTable, SymbologyCache,
    SymbologyDocument, FRAMEWORK_SECTION, GEOMETRIC_SYMBOLS, NARRATIVE_SYMBOLS,
};
