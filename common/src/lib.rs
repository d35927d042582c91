//! Country Match engine
//!
//! Resolves free-text genealogical place names to ISO2 country codes.
//! Pure library: no I/O beyond loading a reference file, no global state.

pub mod aggregator;
pub mod config;
pub mod error;
pub mod historical;
pub mod normalizer;
pub mod orchestrator;
pub mod reference;
pub mod similarity;
pub mod strategy;
pub mod types;

pub use aggregator::{aggregate, AggregateReport, Aggregator, ProcessingMetadata, UnresolvedLocation};
pub use config::MatchConfig;
pub use error::{Error, Result};
pub use normalizer::normalize_place;
pub use orchestrator::{CountryMatcher, MatchState, MatchTrace};
pub use reference::{CountryMatchingData, CountryMatchingMap, ReferenceData, YearRange};
pub use types::{
    Alternative, ConfidenceBand, MatchDetails, MatchMethod, MatchResult, PlaceContext, PlaceInput,
    PlaceWithCountry, ResolvedCountry,
};
