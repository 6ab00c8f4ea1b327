//! Error types for sigil-core

use thiserror::Error;

/// Core error type
#[derive(Debug, Error)]
pub enum Error {
    /// Reference document could not be read
    #[error("failed to load symbology document {source_id}: {message}")]
    Load {
        /// Document identifier
        source_id: String,
        /// Underlying failure
        message: String,
    },

    /// Reference document is not valid JSON
    #[error("failed to parse symbology document {source_id}: {message}")]
    Parse {
        /// Document identifier
        source_id: String,
        /// Parser message
        message: String,
    },

    /// Cache lock failure
    #[error("cache error: {0}")]
    Cache(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Handle RwLock poison errors consistently
pub(crate) fn handle_lock_poison<T>(e: std::sync::PoisonError<T>) -> Error {
    Error::Cache(format!("Lock poisoned: {}", e))
}
