//! Error types
//!
//! Matching itself never fails: an unresolvable place is a data outcome.
//! These errors only come from building the engine (bad reference data or
//! bad thresholds) and from reading reference data off disk.

use thiserror::Error;

/// Engine error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed reference data or match configuration, reported at load time.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result alias
pub type Result<T> = std::result::Result<T, Error>;
