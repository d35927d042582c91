//! Region tag match
//!
//! A region tag names an area shared by several countries, so a hit is
//! ambiguous by nature: every member comes back with the same confidence.

use super::{length_ratio, Candidate, CandidateSet, MatchQuery};
use crate::config::MatchConfig;
use crate::normalizer::contains_tokens;
use crate::reference::ReferenceData;
use crate::types::MatchMethod;
use std::cmp::Ordering;

/// Confidence is `region_floor + (region_cap - region_floor) * ratio`.
pub fn match_region(
    query: &MatchQuery,
    data: &ReferenceData,
    config: &MatchConfig,
) -> Option<CandidateSet> {
    if query.is_empty() {
        return None;
    }
    let input = query.token_key.as_str();

    let mut candidates: Vec<Candidate> = data
        .regions()
        .iter()
        .filter(|region| contains_tokens(input, &region.key))
        .flat_map(|region| {
            let ratio = length_ratio(&region.key, input);
            let confidence = config.region_cap * ratio + config.region_floor * (1.0 - ratio);
            region.members.iter().map(move |iso2| Candidate {
                iso2: iso2.clone(),
                confidence,
                matched_value: region.literal.clone(),
                reason: format!("region '{}'", region.literal),
            })
        })
        .collect();

    candidates.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.iso2.cmp(&b.iso2))
    });
    CandidateSet::new(MatchMethod::Region, candidates)
}
