//! Profile Resolver
//!
//! Per-attribute symbol resolution and composition into a [`Profile`]

use super::rules::{
    self, DEFAULT_NAME_SYMBOL, NAME_MEANING_SYMBOLS, ROLE_SYMBOLS, TRAIT_SYMBOLS, UNKNOWN_ASTROLOGY,
    UNKNOWN_ROLE,
};
use super::Character;
use crate::symbology::{Symbol, SymbolTable};
use serde::{Deserialize, Serialize};

/// Astrological part of a profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AstrologicalProfile {
    /// Sign name
    pub sign: String,
    /// Element (absent when the sign record has none)
    pub element: Option<String>,
    /// Modality (absent when the sign record has none)
    pub modality: Option<String>,
}

impl AstrologicalProfile {
    /// Sentinel for missing or unrecognized signs
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            sign: UNKNOWN_ASTROLOGY.to_string(),
            element: Some(UNKNOWN_ASTROLOGY.to_string()),
            modality: Some(UNKNOWN_ASTROLOGY.to_string()),
        }
    }

    /// Check if this is the unknown sentinel
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        *self == Self::unknown()
    }
}

/// Symbolic profile of a character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Core symbol
    #[serde(rename = "Core")]
    pub core: String,
    /// Personality symbols, in trait order
    #[serde(rename = "Personality")]
    pub personality: Vec<String>,
    /// Role symbol
    #[serde(rename = "Role")]
    pub role: String,
    /// Astrological profile
    #[serde(rename = "Astrology")]
    pub astrology: AstrologicalProfile,
    /// Name symbol
    #[serde(rename = "Name")]
    pub name: String,
    /// Composite expression of all symbols
    #[serde(rename = "Symbolic_Representation")]
    pub symbolic_representation: String,
}

/// Rendering of an absent element or modality
const ABSENT: &str = "None";

fn symbol_name(table: &SymbolTable, key: &str) -> Option<String> {
    table
        .get(key)
        .and_then(Symbol::display_name)
        .map(str::to_string)
}

/// Resolve the core symbol
///
/// "Brave" wins over a Celestial origin; everything else is a Point.
#[must_use]
pub fn resolve_core_symbol(table: &SymbolTable, character: &Character) -> String {
    let key = rules::core_symbol_key(character);
    symbol_name(table, key).unwrap_or_else(|| key.to_string())
}

/// Resolve personality symbols in trait order
///
/// Unmapped traits, and traits whose symbol is missing from the table, are
/// dropped. Duplicates are kept.
#[must_use]
pub fn resolve_personality_symbols(table: &SymbolTable, character: &Character) -> Vec<String> {
    character
        .personality_traits
        .iter()
        .filter_map(|t| rules::lookup(TRAIT_SYMBOLS, t))
        .filter(|symbol| table.contains(symbol))
        .map(str::to_string)
        .collect()
}

/// Resolve the role symbol (`UnknownRole` when unmapped)
#[must_use]
pub fn resolve_role_symbol(table: &SymbolTable, character: &Character) -> String {
    let key = character
        .role
        .as_deref()
        .and_then(|role| rules::lookup(ROLE_SYMBOLS, role))
        .unwrap_or(UNKNOWN_ROLE);

    symbol_name(table, key).unwrap_or_else(|| UNKNOWN_ROLE.to_string())
}

/// Resolve the zodiac sign's element and modality
#[must_use]
pub fn resolve_astrological_profile(
    table: &SymbolTable,
    character: &Character,
) -> AstrologicalProfile {
    character
        .zodiac_sign()
        .and_then(|sign| table.zodiac_sign(sign).map(|info| (sign, info)))
        .map_or_else(AstrologicalProfile::unknown, |(sign, info)| {
            AstrologicalProfile {
                sign: sign.to_string(),
                element: info.element.clone(),
                modality: info.modality.clone(),
            }
        })
}

/// Resolve the name symbol (`DefaultNameSymbol` when unmapped)
#[must_use]
pub fn resolve_name_symbol(table: &SymbolTable, character: &Character) -> String {
    let key = character
        .name_meaning()
        .and_then(|meaning| rules::lookup(NAME_MEANING_SYMBOLS, meaning))
        .unwrap_or(DEFAULT_NAME_SYMBOL);

    symbol_name(table, key).unwrap_or_else(|| DEFAULT_NAME_SYMBOL.to_string())
}

/// Render a symbol list as `['A', 'B']`
///
/// Quotes and backslashes inside names are backslash-escaped.
#[must_use]
pub fn render_symbol_list(symbols: &[String]) -> String {
    let mut out = String::from("[");
    for (i, symbol) in symbols.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push('\'');
        for c in symbol.chars() {
            if c == '\'' || c == '\\' {
                out.push('\\');
            }
            out.push(c);
        }
        out.push('\'');
    }
    out.push(']');
    out
}

/// Compose the symbolic representation
///
/// `Encapsulate(Superimpose(<core>, <personality>), <role>) AdjacentTo(<element>, <modality>) Enclose(<name>)`
#[must_use]
pub fn format_symbolic_representation(
    core: &str,
    personality: &[String],
    role: &str,
    astrology: &AstrologicalProfile,
    name: &str,
) -> String {
    format!(
        "Encapsulate(Superimpose({core}, {personality}), {role}) AdjacentTo({element}, {modality}) Enclose({name})",
        personality = render_symbol_list(personality),
        element = astrology.element.as_deref().unwrap_or(ABSENT),
        modality = astrology.modality.as_deref().unwrap_or(ABSENT),
    )
}

/// Build the full profile of a character
#[must_use]
pub fn profile_character(table: &SymbolTable, character: &Character) -> Profile {
    let core = resolve_core_symbol(table, character);
    let personality = resolve_personality_symbols(table, character);
    let role = resolve_role_symbol(table, character);
    let astrology = resolve_astrological_profile(table, character);
    let name = resolve_name_symbol(table, character);

    let symbolic_representation =
        format_symbolic_representation(&core, &personality, &role, &astrology, &name);

    Profile {
        core,
        personality,
        role,
        astrology,
        name,
        symbolic_representation,
    }
}
