use super::*;
use serde_json::json;

fn framework_document(concepts: Value) -> SymbologyDocument {
    SymbologyDocument::from_value(json!({
        "@context": { "@vocab": "https://schema.org/" },
        "hasSection": [
            { "name": "Introduction" },
            { "name": FRAMEWORK_SECTION, "hasConcept": concepts }
        ]
    }))
}

fn sample_document() -> SymbologyDocument {
    framework_document(json!([
        {
            "@type": "ElementGroup",
            "hasElement": [
                { "name": "Fire", "description": "Energy, Passion, Transformation" },
                { "name": "Water", "description": "Emotion, Intuition, Flow" }
            ]
        },
        {
            "@type": "ModalityGroup",
            "hasModality": [
                { "name": "Initiating", "modalityType": "Cardinal" },
                { "name": "Sustaining", "modalityType": "Fixed" }
            ]
        },
        {
            "@type": "AstrologicalIntegration",
            "hasZodiacSign": [
                { "name": "Aries", "element": "Fire", "modality": "Cardinal" },
                { "name": "Leo", "element": "Fire", "modality": "Fixed" }
            ]
        }
    ]))
}

#[test]
fn test_extract_elements() {
    let table = SymbolTable::from_document(&sample_document());

    let fire = table.get("Fire").unwrap();
    assert_eq!(fire.display_name(), Some("Fire"));
    assert_eq!(
        fire.description.as_deref(),
        Some("Energy, Passion, Transformation")
    );
    assert!(table.contains("Water"));
}

#[test]
fn test_extract_modalities_keyed_by_type() {
    let table = SymbolTable::from_document(&sample_document());

    let cardinal = table.get("Cardinal").unwrap();
    assert_eq!(cardinal.display_name(), Some("Initiating"));
    assert_eq!(
        cardinal.attributes.get("modalityType"),
        Some(&json!("Cardinal"))
    );
    assert!(table.get("Initiating").is_none());
}

#[test]
fn test_extract_zodiac() {
    let table = SymbolTable::from_document(&sample_document());

    assert_eq!(table.zodiac_len(), 2);
    let aries = table.zodiac_sign("Aries").unwrap();
    assert_eq!(aries.element.as_deref(), Some("Fire"));
    assert_eq!(aries.modality.as_deref(), Some("Cardinal"));

    // Signs live only in the zodiac mapping
    assert!(table.get("Aries").is_none());
}

#[test]
fn test_supplemental_always_present() {
    let table = SymbolTable::from_document(&SymbologyDocument::from_value(json!({})));

    for (name, description) in GEOMETRIC_SYMBOLS.iter().chain(NARRATIVE_SYMBOLS) {
        let symbol = table.get(name).unwrap();
        assert_eq!(symbol.display_name(), Some(*name));
        assert_eq!(symbol.description.as_deref(), Some(*description));
    }
    assert_eq!(table.len(), 12);
    assert_eq!(table.zodiac_len(), 0);
}

#[test]
fn test_supplemental_overrides_document() {
    let document = framework_document(json!([
        {
            "@type": "ElementGroup",
            "hasElement": [
                { "name": "Circle", "description": "Document circle" },
                { "name": "StarSymbol", "description": "Document star", "glyph": "*" }
            ]
        }
    ]));
    let table = SymbolTable::from_document(&document);

    let circle = table.get("Circle").unwrap();
    assert_eq!(circle.description.as_deref(), Some("Unity, Wholeness, Cycles"));

    let star = table.get("StarSymbol").unwrap();
    assert_eq!(star.description.as_deref(), Some("Symbol for a Mage or Star"));
    assert!(star.attributes.is_empty());
}

#[test]
fn test_missing_framework_section() {
    let document = SymbologyDocument::from_value(json!({
        "hasSection": [{ "name": "Introduction" }]
    }));
    let table = SymbolTable::from_document(&document);

    assert_eq!(table.len(), GEOMETRIC_SYMBOLS.len() + NARRATIVE_SYMBOLS.len());
    assert_eq!(table.zodiac_len(), 0);
}

#[test]
fn test_unknown_groups_and_bad_entries_skipped() {
    let document = framework_document(json!([
        { "@type": "DualityGroup", "hasElement": [{ "name": "Ignored" }] },
        { "hasElement": [{ "name": "Untagged" }] },
        {
            "@type": "ElementGroup",
            "hasElement": [
                { "description": "No name" },
                "not an object",
                { "name": 42 },
                { "name": "Aether" }
            ]
        },
        { "@type": "ModalityGroup", "hasModality": [{ "name": "NoType" }] }
    ]));
    let table = SymbolTable::from_document(&document);

    assert!(table.get("Ignored").is_none());
    assert!(table.get("Untagged").is_none());
    assert!(table.get("NoType").is_none());
    assert!(table.contains("Aether"));
    assert_eq!(table.len(), 13);
}

#[test]
fn test_zodiac_missing_fields() {
    let document = framework_document(json!([
        {
            "@type": "AstrologicalIntegration",
            "hasZodiacSign": [{ "name": "Ophiuchus", "element": null }]
        }
    ]));
    let table = SymbolTable::from_document(&document);

    let sign = table.zodiac_sign("Ophiuchus").unwrap();
    assert!(sign.element.is_none());
    assert!(sign.modality.is_none());
}

#[test]
fn test_derivation_is_deterministic() {
    let first = SymbolTable::from_document(&sample_document());
    let second = SymbolTable::from_document(&sample_document());
    assert_eq!(first, second);
}

#[test]
fn test_symbol_from_entry() {
    let symbol = Symbol::from_entry(&json!({
        "@type": "ZodiacSign",
        "name": "Aries",
        "element": "Fire",
        "modality": ["Cardinal"]
    }))
    .unwrap();

    assert_eq!(symbol.name.as_deref(), Some("Aries"));
    assert_eq!(symbol.element.as_deref(), Some("Fire"));
    assert!(symbol.modality.is_none());
    assert_eq!(symbol.attributes.get("modality"), Some(&json!(["Cardinal"])));
    assert_eq!(symbol.attributes.get("@type"), Some(&json!("ZodiacSign")));

    assert!(Symbol::from_entry(&json!("Aries")).is_none());
}

#[test]
fn test_symbols_sorted() {
    let table = SymbolTable::from_document(&sample_document());
    let keys: Vec<_> = table.symbols().map(|(k, _)| k).collect();
    let mut sorted = keys.clone();
    sorted.sort_unstable();
    assert_eq!(keys, sorted);
}
