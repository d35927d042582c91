//! Batch input files
//!
//! - `.txt`: one place per line, blank lines skipped
//! - anything else: JSON array of place strings or `{ place, context }` records

use crate::error::{CountryMatchError, Result};
use country_match_common::PlaceInput;
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawInput {
    Place(String),
    Record(PlaceInput),
}

pub fn read_inputs(path: &Path) -> Result<Vec<PlaceInput>> {
    if !path.exists() {
        return Err(CountryMatchError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;

    let is_text = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("txt"))
        .unwrap_or(false);

    let inputs = if is_text {
        parse_text_inputs(&content)
    } else {
        parse_json_inputs(&content)?
    };
    tracing::info!(path = %path.display(), count = inputs.len(), "inputs loaded");
    Ok(inputs)
}

pub fn parse_text_inputs(content: &str) -> Vec<PlaceInput> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(PlaceInput::new)
        .collect()
}

pub fn parse_json_inputs(content: &str) -> Result<Vec<PlaceInput>> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    if !value.is_array() {
        return Err(CountryMatchError::InvalidInput(
            "expected a JSON array of places".to_string(),
        ));
    }

    let raw: Vec<RawInput> = serde_json::from_value(value)?;
    Ok(raw
        .into_iter()
        .map(|r| match r {
            RawInput::Place(place) => PlaceInput::new(place),
            RawInput::Record(input) => input,
        })
        .collect())
}
