//! Character Description
//!
//! Input record as supplied by callers (JSON with PascalCase keys)

use serde::{Deserialize, Serialize};

/// Astrological input data
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AstrologicalData {
    /// Zodiac sign name (e.g., "Aries")
    #[serde(default)]
    pub zodiac_sign: Option<String>,
}

/// Name input data
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NameData {
    /// Meaning of the character's name (e.g., "Star")
    #[serde(default)]
    pub name_meaning: Option<String>,
}

/// Character description
///
/// All fields are optional; absent values resolve to defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Character {
    /// Name
    #[serde(default)]
    pub name: Option<String>,
    /// Origin (e.g., "Celestial")
    #[serde(default)]
    pub origin: Option<String>,
    /// Role (e.g., "Mage")
    #[serde(default)]
    pub role: Option<String>,
    /// Personality traits, in priority order
    #[serde(default)]
    pub personality_traits: Vec<String>,
    /// Abilities (informational)
    #[serde(default)]
    pub abilities: Vec<String>,
    /// Goals (informational)
    #[serde(default)]
    pub goals: Vec<String>,
    /// Astrological data
    #[serde(default)]
    pub astrological_data: Option<AstrologicalData>,
    /// Name data
    #[serde(default)]
    pub name_data: Option<NameData>,
}

impl Character {
    /// Set the name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the origin
    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Set the role
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Set the personality traits
    #[must_use]
    pub fn with_traits<I, S>(mut self, traits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.personality_traits = traits.into_iter().map(Into::into).collect();
        self
    }

    /// Set the zodiac sign
    #[must_use]
    pub fn with_zodiac_sign(mut self, sign: impl Into<String>) -> Self {
        self.astrological_data = Some(AstrologicalData {
            zodiac_sign: Some(sign.into()),
        });
        self
    }

    /// Set the name meaning
    #[must_use]
    pub fn with_name_meaning(mut self, meaning: impl Into<String>) -> Self {
        self.name_data = Some(NameData {
            name_meaning: Some(meaning.into()),
        });
        self
    }

    /// Check if the character has a trait (exact match)
    #[must_use]
    pub fn has_trait(&self, name: &str) -> bool {
        self.personality_traits.iter().any(|t| t == name)
    }

    /// Return the zodiac sign, if any
    #[must_use]
    pub fn zodiac_sign(&self) -> Option<&str> {
        self.astrological_data
            .as_ref()
            .and_then(|a| a.zodiac_sign.as_deref())
    }

    /// Return the name meaning, if any
    #[must_use]
    pub fn name_meaning(&self) -> Option<&str> {
        self.name_data
            .as_ref()
            .and_then(|n| n.name_meaning.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full() {
        let character: Character = serde_json::from_str(
            r#"{
                "Name": "Astra",
                "Origin": "Celestial",
                "Role": "Mage",
                "PersonalityTraits": ["Brave", "Wise", "Mysterious"],
                "Abilities": ["Starlight Magic", "Prophecy"],
                "Goals": ["Uncover the secrets of the cosmos"],
                "AstrologicalData": { "ZodiacSign": "Aries" },
                "NameData": { "NameMeaning": "Star" }
            }"#,
        )
        .unwrap();

        assert_eq!(character.name.as_deref(), Some("Astra"));
        assert_eq!(character.origin.as_deref(), Some("Celestial"));
        assert_eq!(character.role.as_deref(), Some("Mage"));
        assert_eq!(character.personality_traits.len(), 3);
        assert_eq!(character.abilities.len(), 2);
        assert_eq!(character.zodiac_sign(), Some("Aries"));
        assert_eq!(character.name_meaning(), Some("Star"));
    }

    #[test]
    fn test_deserialize_empty() {
        let character: Character = serde_json::from_str("{}").unwrap();
        assert_eq!(character, Character::default());
        assert!(character.personality_traits.is_empty());
        assert!(character.zodiac_sign().is_none());
        assert!(character.name_meaning().is_none());
    }

    #[test]
    fn test_deserialize_ignores_unknown_keys() {
        let character: Character = serde_json::from_str(
            r#"{ "Role": "Warrior", "Height": 180, "AstrologicalData": {} }"#,
        )
        .unwrap();
        assert_eq!(character.role.as_deref(), Some("Warrior"));
        assert!(character.zodiac_sign().is_none());
    }

    #[test]
    fn test_builders() {
        let character = Character::default()
            .with_name("Sol")
            .with_traits(["Leader", "Brave"])
            .with_zodiac_sign("Leo")
            .with_name_meaning("Sun");

        assert!(character.has_trait("Brave"));
        assert!(!character.has_trait("brave"));
        assert_eq!(character.zodiac_sign(), Some("Leo"));
        assert_eq!(character.name_meaning(), Some("Sun"));
    }

    #[test]
    fn test_serialize_keys() {
        let character = Character::default().with_role("Mage");
        let json = serde_json::to_value(&character).unwrap();
        assert_eq!(json["Role"], "Mage");
        assert!(json.get("PersonalityTraits").is_some());
    }
}
