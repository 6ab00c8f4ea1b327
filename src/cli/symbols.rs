//! Symbols command
//!
//! `sigil symbols` - List the symbol table derived from a document

use anyhow::{Context, Result};
use sigil_core::{SymbolTable, SymbologyCache};

/// Run symbols command
pub fn run(document: &str) -> Result<()> {
    let cache = SymbologyCache::new();
    let loaded = cache
        .load(document)
        .with_context(|| format!("Failed to load symbology document {document}"))?;

    print!("{}", render_table(&loaded.table));
    Ok(())
}

/// Render symbols and zodiac signs as an aligned listing
pub fn render_table(table: &SymbolTable) -> String {
    let mut out = format!("\nSymbols ({}):\n", table.len());
    for (key, symbol) in table.symbols() {
        out.push_str(&format!(
            "  {:12} {}\n",
            key,
            symbol.description.as_deref().unwrap_or("-")
        ));
    }

    if table.zodiac_len() > 0 {
        out.push_str(&format!("\nZodiac ({}):\n", table.zodiac_len()));
        for (sign, info) in table.zodiac() {
            out.push_str(&format!(
                "  {:12} {} / {}\n",
                sign,
                info.element.as_deref().unwrap_or("None"),
                info.modality.as_deref().unwrap_or("None")
            ));
        }
    }

    out
}
