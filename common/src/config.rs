//! Match thresholds
//!
//! Defaults are inferred from the confidence bands and still need tuning
//! against real reference data.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Tunable thresholds and bonuses for the strategy cascade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchConfig {
    /// Pattern/region/fuzzy candidates below this are never accepted
    pub accept_threshold: f64,
    pub alias_confidence: f64,
    pub pattern_floor: f64,
    pub pattern_cap: f64,
    pub region_floor: f64,
    pub region_cap: f64,
    pub fuzzy_min_similarity: f64,
    /// Reported confidence of a fuzzy match never exceeds this
    pub fuzzy_cap: f64,
    /// Fuzzy candidates this close to the best score are kept as alternatives
    pub fuzzy_alternative_delta: f64,
    /// Upper bound on names scanned by the fuzzy matcher
    pub max_fuzzy_candidates: usize,
    pub historical_bonus: f64,
    pub min_plausible_year: i32,
    pub max_plausible_year: i32,
    /// Results below this end up in the unresolved report; the default is
    /// the lower edge of the medium band, so every low-band result is listed
    pub unresolved_threshold: f64,
    /// Scale applied to a relative's match when used as a hint
    pub relative_hint_weight: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            accept_threshold: 0.5,
            alias_confidence: 0.95,
            pattern_floor: 0.6,
            pattern_cap: 0.85,
            region_floor: 0.5,
            region_cap: 0.6,
            fuzzy_min_similarity: 0.5,
            fuzzy_cap: 0.6,
            fuzzy_alternative_delta: 0.05,
            max_fuzzy_candidates: 10_000,
            historical_bonus: 0.1,
            min_plausible_year: 1,
            max_plausible_year: 2100,
            unresolved_threshold: 0.7,
            relative_hint_weight: 0.4,
        }
    }
}

impl MatchConfig {
    pub fn validate(&self) -> Result<()> {
        let unit_values = [
            ("acceptThreshold", self.accept_threshold),
            ("aliasConfidence", self.alias_confidence),
            ("patternFloor", self.pattern_floor),
            ("patternCap", self.pattern_cap),
            ("regionFloor", self.region_floor),
            ("regionCap", self.region_cap),
            ("fuzzyMinSimilarity", self.fuzzy_min_similarity),
            ("fuzzyCap", self.fuzzy_cap),
            ("fuzzyAlternativeDelta", self.fuzzy_alternative_delta),
            ("historicalBonus", self.historical_bonus),
            ("unresolvedThreshold", self.unresolved_threshold),
            ("relativeHintWeight", self.relative_hint_weight),
        ];
        for (name, value) in unit_values {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::Configuration(format!(
                    "{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }

        if self.pattern_floor > self.pattern_cap {
            return Err(Error::Configuration(format!(
                "patternFloor ({}) exceeds patternCap ({})",
                self.pattern_floor, self.pattern_cap
            )));
        }
        if self.region_floor > self.region_cap {
            return Err(Error::Configuration(format!(
                "regionFloor ({}) exceeds regionCap ({})",
                self.region_floor, self.region_cap
            )));
        }

        // exact >= alias >= pattern >= region >= fuzzy
        if self.pattern_cap > self.alias_confidence {
            return Err(Error::Configuration(format!(
                "patternCap ({}) must not exceed aliasConfidence ({})",
                self.pattern_cap, self.alias_confidence
            )));
        }
        if self.region_cap > self.pattern_floor {
            return Err(Error::Configuration(format!(
                "regionCap ({}) must not exceed patternFloor ({})",
                self.region_cap, self.pattern_floor
            )));
        }

        if self.fuzzy_cap > self.region_cap {
            return Err(Error::Configuration(format!(
                "fuzzyCap ({}) must not exceed regionCap ({})",
                self.fuzzy_cap, self.region_cap
            )));
        }

        if self.min_plausible_year > self.max_plausible_year {
            return Err(Error::Configuration(format!(
                "minPlausibleYear ({}) exceeds maxPlausibleYear ({})",
                self.min_plausible_year, self.max_plausible_year
            )));
        }
        if self.max_fuzzy_candidates == 0 {
            return Err(Error::Configuration(
                "maxFuzzyCandidates must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Year usable for historical corroboration, or `None` if implausible.
    pub fn usable_year(&self, year: Option<i32>) -> Option<i32> {
        year.filter(|y| (self.min_plausible_year..=self.max_plausible_year).contains(y))
    }
}
