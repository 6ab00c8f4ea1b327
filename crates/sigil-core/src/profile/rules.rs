//! Mapping Rules
//!
//! Fixed rule tables used by the resolvers. Each table is a list of
//! (input, symbol key) pairs; adding a rule means adding a row.

use super::Character;

/// Personality trait → symbol key
pub const TRAIT_SYMBOLS: &[(&str, &str)] = &[
    ("Brave", "Triangle"),
    ("Wise", "Spiral"),
    ("Mysterious", "Wave"),
    ("Compassionate", "Circle"),
    ("Leader", "Angle"),
];

/// Role → symbol key
pub const ROLE_SYMBOLS: &[(&str, &str)] = &[("Warrior", "SwordSymbol"), ("Mage", "StarSymbol")];

/// Name meaning → symbol key
pub const NAME_MEANING_SYMBOLS: &[(&str, &str)] = &[("Star", "StarSymbol"), ("Sun", "SunSymbol")];

/// Role symbol for unmapped roles
pub const UNKNOWN_ROLE: &str = "UnknownRole";

/// Name symbol for unmapped name meanings
pub const DEFAULT_NAME_SYMBOL: &str = "DefaultNameSymbol";

/// Sign, element and modality for unknown zodiac signs
pub const UNKNOWN_ASTROLOGY: &str = "Unknown";

/// Core symbol when no core rule matches
pub const DEFAULT_CORE_SYMBOL: &str = "Point";

/// Condition of a core symbol rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreCondition {
    /// Trait list contains the value
    HasTrait(&'static str),
    /// Origin equals the value
    Origin(&'static str),
}

impl CoreCondition {
    /// Check the condition against a character
    #[must_use]
    pub fn matches(&self, character: &Character) -> bool {
        match self {
            Self::HasTrait(name) => character.has_trait(name),
            Self::Origin(origin) => character.origin.as_deref() == Some(*origin),
        }
    }
}

/// Core symbol rules, highest priority first
pub const CORE_RULES: &[(CoreCondition, &str)] = &[
    (CoreCondition::HasTrait("Brave"), "Triangle"),
    (CoreCondition::Origin("Celestial"), "Circle"),
];

/// Look up a key in a rule table
#[must_use]
pub fn lookup(rules: &[(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    rules
        .iter()
        .find(|(input, _)| *input == key)
        .map(|(_, symbol)| *symbol)
}

/// Symbol key of the first matching core rule, or the default
#[must_use]
pub fn core_symbol_key(character: &Character) -> &'static str {
    CORE_RULES
        .iter()
        .find(|(condition, _)| condition.matches(character))
        .map_or(DEFAULT_CORE_SYMBOL, |(_, symbol)| *symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(lookup(TRAIT_SYMBOLS, "Wise"), Some("Spiral"));
        assert_eq!(lookup(ROLE_SYMBOLS, "Warrior"), Some("SwordSymbol"));
        assert_eq!(lookup(NAME_MEANING_SYMBOLS, "Sun"), Some("SunSymbol"));
        assert_eq!(lookup(ROLE_SYMBOLS, "warrior"), None);
        assert_eq!(lookup(TRAIT_SYMBOLS, ""), None);
    }

    #[test]
    fn test_core_condition_matches() {
        let character = Character::default()
            .with_origin("Celestial")
            .with_traits(["Wise"]);

        assert!(CoreCondition::Origin("Celestial").matches(&character));
        assert!(!CoreCondition::Origin("Abyssal").matches(&character));
        assert!(CoreCondition::HasTrait("Wise").matches(&character));
        assert!(!CoreCondition::HasTrait("Brave").matches(&character));
    }

    #[test]
    fn test_core_rule_priority() {
        let both = Character::default()
            .with_origin("Celestial")
            .with_traits(["Brave"]);
        assert_eq!(core_symbol_key(&both), "Triangle");

        let celestial = Character::default().with_origin("Celestial");
        assert_eq!(core_symbol_key(&celestial), "Circle");

        assert_eq!(core_symbol_key(&Character::default()), DEFAULT_CORE_SYMBOL);
    }

    #[test]
    fn test_rule_tables_have_unique_inputs() {
        for rules in [TRAIT_SYMBOLS, ROLE_SYMBOLS, NAME_MEANING_SYMBOLS] {
            let mut inputs: Vec<_> = rules.iter().map(|(input, _)| *input).collect();
            inputs.sort_unstable();
            inputs.dedup();
            assert_eq!(inputs.len(), rules.len());
        }
    }
}
