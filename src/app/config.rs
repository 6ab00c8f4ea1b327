//! Configuration types

use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub symbology: SymbologyConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub bench: BenchConfig,
}

/// Reference document settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbologyConfig {
    /// Path of the symbology document
    #[serde(default = "default_document")]
    pub document: String,
}

impl Default for SymbologyConfig {
    fn default() -> Self {
        Self {
            document: default_document(),
        }
    }
}

fn default_document() -> String {
    "data/universal-symbology.jsonld".to_string()
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when RUST_LOG is unset
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

fn default_filter() -> String {
    "sigil=info,sigil_core=info".to_string()
}

/// Benchmark settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Profiler constructions per run (first one is cold)
    #[serde(default = "default_iterations")]
    pub iterations: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: default_iterations(),
        }
    }
}

fn default_iterations() -> usize {
    10
}
