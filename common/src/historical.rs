//! Historical corroboration
//!
//! When a plausible event year is known, a candidate whose matched literal
//! is one of its country's historical names, valid in that year, gets
//! `historical_bonus` added (capped at 1.0). Confidences never go down.

use crate::config::MatchConfig;
use crate::normalizer::{contains_tokens, normalize_place, token_key};
use crate::reference::ReferenceData;
use crate::strategy::CandidateSet;
use crate::types::MatchMethod;
use std::cmp::Ordering;

/// Result of the adjustment step.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoricalOutcome {
    pub set: CandidateSet,
    /// Year that corroborated the primary candidate
    pub historical_year: Option<i32>,
}

/// Boost corroborated candidates and re-rank.
///
/// The method becomes `Historical` only when the primary candidate after
/// re-ranking was corroborated.
pub fn apply(
    mut set: CandidateSet,
    year: i32,
    data: &ReferenceData,
    config: &MatchConfig,
) -> HistoricalOutcome {
    let mut corroborated = Vec::with_capacity(set.candidates.len());

    for candidate in &mut set.candidates {
        let hit = corroborating_name(&candidate.iso2, &candidate.matched_value, year, data);
        if let Some(name) = hit {
            let boosted = (candidate.confidence + config.historical_bonus).min(1.0);
            candidate.confidence = boosted.max(candidate.confidence);
            candidate.reason = format!("{}; '{}' valid in {}", candidate.reason, name, year);
        }
        corroborated.push((candidate.iso2.clone(), hit.is_some()));
    }

    // Stable sort keeps the strategy's own tie order
    set.candidates.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(Ordering::Equal)
    });

    let primary_corroborated = corroborated
        .iter()
        .any(|(iso2, hit)| *hit && *iso2 == set.primary().iso2);

    if primary_corroborated {
        tracing::trace!(iso2 = %set.primary().iso2, year, "historical name corroborated");
        set.method = MatchMethod::Historical;
        HistoricalOutcome {
            set,
            historical_year: Some(year),
        }
    } else {
        HistoricalOutcome {
            set,
            historical_year: None,
        }
    }
}

/// Historical name of `iso2` valid in `year` that the matched literal refers to.
fn corroborating_name<'a>(
    iso2: &str,
    matched_value: &str,
    year: i32,
    data: &'a ReferenceData,
) -> Option<&'a str> {
    let matched = token_key(&normalize_place(matched_value));
    if matched.is_empty() {
        return None;
    }
    data.historical_names(iso2)
        .iter()
        .filter(|entry| entry.range.contains(year))
        .find(|entry| contains_tokens(&matched, &entry.key))
        .map(|entry| entry.literal.as_str())
}
