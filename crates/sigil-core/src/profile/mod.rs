//! Profile - Character Symbol Resolution
//!
//! Maps a [`Character`] onto a [`SymbolTable`](crate::SymbolTable) using fixed
//! rule tables and composes the results into a [`Profile`].
//!
//! Every resolver is a pure function of the table and the character; unknown
//! traits, roles, signs and name meanings fall back to defaults instead of
//! failing.

mod character;
mod profiler;
mod resolver;
pub mod rules;

pub use character::{AstrologicalData, Character, NameData};
pub use profiler::CharacterProfiler;
pub use resolver::{
    format_symbolic_representation, profile_character, render_symbol_list,
    resolve_astrological_profile, resolve_core_symbol, resolve_name_symbol,
    resolve_personality_symbols, resolve_role_symbol, AstrologicalProfile, Profile,
};
