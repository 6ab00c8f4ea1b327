//! Application configuration
//!
//! Configuration types and layered loading for the CLI.

mod config;
mod loader;

pub use self::config::AppConfig;
pub use loader::load_config;
