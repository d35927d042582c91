//! Token pattern scan
//!
//! Each country contributes its patterns and historical names as token
//! patterns. A pattern hits when it contains, or is contained by, the input
//! on token boundaries.

use super::{length_ratio, Candidate, CandidateSet, MatchQuery};
use crate::config::MatchConfig;
use crate::normalizer::contains_tokens;
use crate::reference::{PatternEntry, ReferenceData};
use crate::types::MatchMethod;
use std::cmp::Ordering;

struct PatternHit<'a> {
    entry: &'a PatternEntry,
    confidence: f64,
}

/// Confidence is the overlap ratio clamped to `[pattern_floor, pattern_cap]`.
///
/// Ranking: confidence, then longer pattern, then list position, then ISO2.
pub fn match_pattern(
    query: &MatchQuery,
    data: &ReferenceData,
    config: &MatchConfig,
) -> Option<CandidateSet> {
    if query.is_empty() {
        return None;
    }
    let input = query.token_key.as_str();

    let mut hits: Vec<PatternHit> = data
        .patterns()
        .iter()
        .filter_map(|entry| {
            let ratio = if contains_tokens(input, &entry.key) {
                length_ratio(&entry.key, input)
            } else if contains_tokens(&entry.key, input) {
                length_ratio(input, &entry.key)
            } else {
                return None;
            };
            Some(PatternHit {
                entry,
                confidence: ratio.clamp(config.pattern_floor, config.pattern_cap),
            })
        })
        .collect();

    if hits.is_empty() {
        return None;
    }
    hits.sort_by(rank);

    let candidates = hits
        .into_iter()
        .map(|hit| Candidate {
            iso2: hit.entry.iso2.clone(),
            confidence: hit.confidence,
            matched_value: hit.entry.literal.clone(),
            reason: format!("{} '{}'", hit.entry.source.label(), hit.entry.literal),
        })
        .collect();
    CandidateSet::new(MatchMethod::Pattern, candidates)
}

fn rank(a: &PatternHit, b: &PatternHit) -> Ordering {
    b.confidence
        .partial_cmp(&a.confidence)
        .unwrap_or(Ordering::Equal)
        .then_with(|| b.entry.key.len().cmp(&a.entry.key.len()))
        .then_with(|| a.entry.position.cmp(&b.entry.position))
        .then_with(|| a.entry.iso2.cmp(&b.entry.iso2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::test_support::reference;

    fn run(place: &str) -> Option<CandidateSet> {
        match_pattern(&MatchQuery::new(place), &reference(), &MatchConfig::default())
    }

    #[test]
    fn test_whole_input_pattern_hits_cap() {
        let set = run("Cork").unwrap();
        assert_eq!(set.method, MatchMethod::Pattern);
        assert_eq!(set.primary().iso2, "IE");
        assert!((set.best_confidence() - 0.85).abs() < 1e-9);
        assert_eq!(set.primary().reason, "pattern 'cork'");
    }

    #[test]
    fn test_small_overlap_clamps_to_floor() {
        let set = run("Kilbrittain, Co. Cork").unwrap();
        assert_eq!(set.primary().iso2, "IE");
        assert!((set.best_confidence() - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_ratio_between_floor_and_cap() {
        // "new amsterdam" is 13 chars, "amsterdam" 9
        let set = run("New Amsterdam").unwrap();
        assert_eq!(set.primary().iso2, "US");
        assert!((set.best_confidence() - 0.85).abs() < 1e-9);
        let nl = set.alternatives().find(|c| c.iso2 == "NL").unwrap();
        assert!((nl.confidence - 9.0 / 13.0).abs() < 1e-9);
    }

    #[test]
    fn test_token_boundaries() {
        assert!(run("Corkington").is_none());
    }

    #[test]
    fn test_shared_pattern_prefers_earlier_position() {
        let set = run("Pomerania").unwrap();
        let codes: Vec<&str> = set.candidates.iter().map(|c| c.iso2.as_str()).collect();
        assert_eq!(codes, vec!["PL", "DE"]);
    }

    #[test]
    fn test_longer_pattern_wins_ties() {
        // both clamp to the floor
        let set = run("Tyrol and Bavaria region of the Alps").unwrap();
        let codes: Vec<&str> = set.candidates.iter().map(|c| c.iso2.as_str()).collect();
        assert_eq!(codes, vec!["DE", "AT"]);
        assert!(set.candidates.iter().all(|c| (c.confidence - 0.6).abs() < 1e-9));
    }

    #[test]
    fn test_country_names_are_not_patterns() {
        assert!(run("Paris France Europe").is_none());
        // "Central Europe" is left to the region stage
        assert!(run("Central Europe").is_none());
    }
}
