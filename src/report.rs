//! Batch report file

use crate::batch::BatchOutput;
use crate::error::Result;
use country_match_common::{PlaceInput, PlaceWithCountry, ProcessingMetadata, UnresolvedLocation};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    /// RFC 3339, UTC
    pub generated_at: String,
    pub reference_digest: String,
    pub reference_countries: usize,
    pub metadata: ProcessingMetadata,
    pub places: Vec<PlaceWithCountry>,
    pub unresolved: Vec<UnresolvedLocation>,
}

impl BatchReport {
    pub fn new(
        inputs: &[PlaceInput],
        output: BatchOutput,
        reference_digest: String,
        reference_countries: usize,
    ) -> Self {
        let places = inputs
            .iter()
            .zip(&output.results)
            .map(|(input, result)| PlaceWithCountry::from_result(&input.place, result))
            .collect();

        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            reference_digest,
            reference_countries,
            metadata: output.report.metadata,
            places,
            unresolved: output.report.unresolved,
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, self)?;
        tracing::info!(path = %path.display(), "report written");
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}
