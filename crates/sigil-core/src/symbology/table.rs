//! Symbol Table
//!
//! Flattens the framework section of a [`SymbologyDocument`] into name → symbol
//! mappings, then layers the fixed geometric and narrative symbols on top.

use super::document::{SymbologyDocument, FRAMEWORK_SECTION};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Base geometric symbols (name, description)
pub const GEOMETRIC_SYMBOLS: &[(&str, &str)] = &[
    ("Point", "Existence, Origin, Singularity"),
    ("Line", "Connection, Continuity, Direction"),
    ("Angle", "Intersection, Divergence, Relationship"),
    ("Curve", "Change, Fluidity, Transformation"),
    ("Circle", "Unity, Wholeness, Cycles"),
    ("Triangle", "Stability, Harmony, Balance"),
    ("Square", "Structure, Order, Foundation"),
    ("Spiral", "Growth, Evolution, Expansion"),
    ("Wave", "Vibration, Energy, Frequency"),
];

/// Role and name symbols (name, description)
pub const NARRATIVE_SYMBOLS: &[(&str, &str)] = &[
    ("SwordSymbol", "Symbol for a Warrior"),
    ("StarSymbol", "Symbol for a Mage or Star"),
    ("SunSymbol", "Symbol for Sun"),
];

/// Symbol descriptor
///
/// Zodiac signs carry `element` and `modality`; every other field of the
/// source entry is kept in `attributes`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Symbol {
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Element (zodiac signs)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
    /// Modality (zodiac signs)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modality: Option<String>,
    /// Remaining source fields
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Symbol {
    /// Create a symbol with a fixed name and description
    #[must_use]
    pub fn fixed(name: &str, description: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            description: Some(description.to_string()),
            ..Self::default()
        }
    }

    /// Build a symbol from a document entry (`None` unless it is an object)
    ///
    /// Known fields are only taken when they are strings; anything else
    /// stays in `attributes`.
    #[must_use]
    pub fn from_entry(entry: &Value) -> Option<Self> {
        let mut attributes = entry.as_object()?.clone();
        let mut take = |key: &str| {
            if attributes.get(key).is_some_and(Value::is_string) {
                attributes
                    .remove(key)
                    .and_then(|v| v.as_str().map(str::to_string))
            } else {
                None
            }
        };

        let name = take("name");
        let description = take("description");
        let element = take("element");
        let modality = take("modality");

        Some(Self {
            name,
            description,
            element,
            modality,
            attributes,
        })
    }

    /// Return the display name, if any
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Concept group kinds understood by the extractor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConceptKind {
    Element,
    Modality,
    Astrological,
}

impl ConceptKind {
    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "ElementGroup" => Some(Self::Element),
            "ModalityGroup" => Some(Self::Modality),
            "AstrologicalIntegration" => Some(Self::Astrological),
            _ => None,
        }
    }

    /// Field holding the group's entries
    const fn list_field(self) -> &'static str {
        match self {
            Self::Element => "hasElement",
            Self::Modality => "hasModality",
            Self::Astrological => "hasZodiacSign",
        }
    }

    /// Entry field used as the table key
    const fn key_field(self) -> &'static str {
        match self {
            Self::Element | Self::Astrological => "name",
            Self::Modality => "modalityType",
        }
    }
}

/// Flattened symbol lookup table
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SymbolTable {
    symbols: BTreeMap<String, Symbol>,
    zodiac: BTreeMap<String, Symbol>,
}

impl SymbolTable {
    /// Create an empty table (no supplemental symbols)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the table for a document
    ///
    /// Elements are keyed by name, modalities by `modalityType` and zodiac
    /// signs by name. The fixed symbols are applied last and replace any
    /// document entry with the same name.
    #[must_use]
    pub fn from_document(document: &SymbologyDocument) -> Self {
        let mut table = Self::new();

        match document.find_section(FRAMEWORK_SECTION) {
            Some(framework) => table.extract_framework(framework),
            None => warn!("Section not found: {}", FRAMEWORK_SECTION),
        }

        table.apply_supplemental();

        debug!(
            "Derived symbol table: {} symbols, {} zodiac signs",
            table.symbols.len(),
            table.zodiac.len()
        );
        table
    }

    fn extract_framework(&mut self, framework: &Value) {
        let groups = framework
            .get("hasConcept")
            .and_then(Value::as_array)
            .into_iter()
            .flatten();

        for group in groups {
            let Some(kind) = group
                .get("@type")
                .and_then(Value::as_str)
                .and_then(ConceptKind::from_tag)
            else {
                continue;
            };

            let entries = group
                .get(kind.list_field())
                .and_then(Value::as_array)
                .into_iter()
                .flatten();

            for entry in entries {
                let key = entry.get(kind.key_field()).and_then(Value::as_str);
                let (Some(key), Some(symbol)) = (key, Symbol::from_entry(entry)) else {
                    warn!(
                        "Skipping {} entry without '{}'",
                        kind.list_field(),
                        kind.key_field()
                    );
                    continue;
                };

                let key = key.to_string();
                match kind {
                    ConceptKind::Astrological => {
                        self.zodiac.insert(key, symbol);
                    }
                    ConceptKind::Element | ConceptKind::Modality => {
                        self.symbols.insert(key, symbol);
                    }
                }
            }
        }
    }

    fn apply_supplemental(&mut self) {
        for (name, description) in GEOMETRIC_SYMBOLS.iter().chain(NARRATIVE_SYMBOLS) {
            self.insert(*name, Symbol::fixed(name, description));
        }
    }

    /// Insert or replace a symbol, returning the previous entry
    pub fn insert(&mut self, key: impl Into<String>, symbol: Symbol) -> Option<Symbol> {
        self.symbols.insert(key.into(), symbol)
    }

    /// Insert or replace a zodiac sign, returning the previous entry
    pub fn insert_zodiac(&mut self, sign: impl Into<String>, symbol: Symbol) -> Option<Symbol> {
        self.zodiac.insert(sign.into(), symbol)
    }

    /// Look up a symbol by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Symbol> {
        self.symbols.get(key)
    }

    /// Check if a symbol key exists
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.symbols.contains_key(key)
    }

    /// Look up a zodiac sign
    #[must_use]
    pub fn zodiac_sign(&self, sign: &str) -> Option<&Symbol> {
        self.zodiac.get(sign)
    }

    /// Iterate over symbols in key order
    pub fn symbols(&self) -> impl Iterator<Item = (&str, &Symbol)> {
        self.symbols.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over zodiac signs in name order
    pub fn zodiac(&self) -> impl Iterator<Item = (&str, &Symbol)> {
        self.zodiac.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of symbols (zodiac signs excluded)
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if the table holds no symbols
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Number of zodiac signs
    #[must_use]
    pub fn zodiac_len(&self) -> usize {
        self.zodiac.len()
    }
}

#[cfg(test)]
mod tests;
