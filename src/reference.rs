//! Reference data selection
//!
//! Explicit file, then the configured file, then the built-in table.

use crate::error::{CountryMatchError, Result};
use country_match_common::CountryMatchingMap;
use sha2::{Digest, Sha256};
use std::path::Path;

pub fn load_reference(path: Option<&Path>) -> Result<CountryMatchingMap> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(CountryMatchError::FileNotFound(path.display().to_string()));
            }
            let map = CountryMatchingMap::from_file(path)?;
            tracing::info!(path = %path.display(), countries = map.len(), "reference data loaded");
            Ok(map)
        }
        None => {
            let map = CountryMatchingMap::builtin()?;
            tracing::debug!(countries = map.len(), "using built-in reference data");
            Ok(map)
        }
    }
}

/// SHA-256 of the canonical JSON form, hex encoded.
///
/// Stable across runs: countries and historical names serialize in key order.
pub fn reference_digest(map: &CountryMatchingMap) -> Result<String> {
    let bytes = serde_json::to_vec(map)?;
    Ok(hex::encode(Sha256::digest(&bytes)))
}
