//! Profile command
//!
//! `sigil profile <CHARACTER>` - Print a character's symbolic profile

use anyhow::{Context, Result};
use sigil_core::{Character, CharacterProfiler, Profile, SymbologyCache};
use std::path::Path;
use tracing::info;

/// Run profile command
pub fn run(character_path: &Path, document: &str, json: bool) -> Result<()> {
    let character = read_character(character_path)?;

    let cache = SymbologyCache::new();
    let profiler = CharacterProfiler::new(&cache, document)
        .with_context(|| format!("Failed to load symbology document {document}"))?;

    let profile = profiler.profile_character(&character);
    info!(core = %profile.core, role = %profile.role, "Profiled character");

    if json {
        let output =
            serde_json::to_string_pretty(&profile).context("Failed to serialize profile")?;
        println!("{output}");
    } else {
        print!("{}", render_report(&character, &profile));
    }

    Ok(())
}

/// Read a character description from a JSON file
pub fn read_character(path: &Path) -> Result<Character> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read character file {:?}", path))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse character file {:?}", path))
}

/// Render the human-readable profile report
pub fn render_report(character: &Character, profile: &Profile) -> String {
    let name = character.name.as_deref().unwrap_or("Unnamed");
    let astrology = &profile.astrology;

    format!(
        "--- Character Profile for: {name} ---\n\
         \n\
         Core Symbol: {core}\n\
         Personality Symbols: {personality}\n\
         Role Symbol: {role}\n\
         Name Symbol: {name_symbol}\n\
         \n\
         Astrological Profile:\n\
         \x20 Sign: {sign}\n\
         \x20 Element: {element}\n\
         \x20 Modality: {modality}\n\
         \n\
         --- Combined Symbolic Representation ---\n\
         {representation}\n\
         \n\
         --- End of Profile ---\n",
        core = profile.core,
        personality = profile.personality.join(", "),
        role = profile.role,
        name_symbol = profile.name,
        sign = astrology.sign,
        element = astrology.element.as_deref().unwrap_or("None"),
        modality = astrology.modality.as_deref().unwrap_or("None"),
        representation = profile.symbolic_representation,
    )
}
