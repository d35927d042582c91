//! Edit-distance fallback
//!
//! Scores the input, and its last place level, against canonical names,
//! aliases and historical names. Candidates within `fuzzy_alternative_delta`
//! of the best score are kept as alternatives.

use super::{Candidate, CandidateSet, MatchQuery};
use crate::config::MatchConfig;
use crate::reference::ReferenceData;
use crate::similarity::{similarity, similarity_upper_bound};
use crate::types::MatchMethod;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Best similarity per country.
struct Scored<'a> {
    score: f64,
    literal: &'a str,
}

/// Reported confidence is `min(similarity, fuzzy_cap)`. The raw similarity
/// decides the `fuzzy_min_similarity` floor and the alternative window and is
/// kept in the reason text. With the default cap of 0.6 a fuzzy match never
/// outranks a region match, and every fuzzy match lands in the low band.
///
/// When nothing clears `fuzzy_min_similarity` the single closest name is
/// still returned, scored below the floor, so it can serve as a best guess.
pub fn match_fuzzy(
    query: &MatchQuery,
    data: &ReferenceData,
    config: &MatchConfig,
) -> Option<CandidateSet> {
    if query.is_empty() {
        return None;
    }

    let targets: Vec<(&str, usize)> = query
        .lookup_keys()
        .into_iter()
        .map(|key| (key, key.chars().count()))
        .collect();

    let mut best_overall = 0.0_f64;
    let mut by_country: HashMap<&str, Scored> = HashMap::new();

    for name in data.fuzzy_names().iter().take(config.max_fuzzy_candidates) {
        for &(target, target_len) in &targets {
            let bound = similarity_upper_bound(target_len, name.char_len);
            if bound < config.fuzzy_min_similarity && bound <= best_overall {
                continue;
            }

            let score = similarity(target, &name.normalized);
            if score <= 0.0 {
                continue;
            }
            best_overall = best_overall.max(score);

            let entry = by_country.entry(name.iso2.as_str()).or_insert(Scored {
                score,
                literal: &name.literal,
            });
            if score > entry.score {
                entry.score = score;
                entry.literal = &name.literal;
            }
        }
    }

    let mut scored: Vec<(&str, Scored)> = by_country.into_iter().collect();
    scored.sort_by(|(a_iso, a), (b_iso, b)| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a_iso.cmp(b_iso))
    });

    let best = scored.first().map(|(_, s)| s.score)?;
    let kept: Vec<(&str, Scored)> = if best >= config.fuzzy_min_similarity {
        scored
            .into_iter()
            .filter(|(_, s)| {
                s.score >= config.fuzzy_min_similarity
                    && best - s.score <= config.fuzzy_alternative_delta + f64::EPSILON
            })
            .collect()
    } else {
        scored.into_iter().take(1).collect()
    };

    let candidates = kept
        .into_iter()
        .map(|(iso2, s)| Candidate {
            iso2: iso2.to_string(),
            confidence: s.score.min(config.fuzzy_cap),
            matched_value: s.literal.to_string(),
            reason: format!("similarity {:.2} to '{}'", s.score, s.literal),
        })
        .collect();
    CandidateSet::new(MatchMethod::Fuzzy, candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::CountryMatchingMap;
    use crate::strategy::test_support::{country, reference};

    fn run(place: &str) -> Option<CandidateSet> {
        match_fuzzy(&MatchQuery::new(place), &reference(), &MatchConfig::default())
    }

    #[test]
    fn test_typo_resolves() {
        let set = run("Germny").unwrap();
        assert_eq!(set.method, MatchMethod::Fuzzy);
        assert_eq!(set.primary().iso2, "DE");
        assert_eq!(set.primary().matched_value, "Germany");
        // similarity 6/7 is reported in the reason, confidence is capped
        assert!(set.primary().reason.starts_with("similarity 0.86"));
        assert!((set.best_confidence() - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_last_level_is_scored() {
        let set = run("Kilbrittain, Irland").unwrap();
        assert_eq!(set.primary().iso2, "IE");
    }

    #[test]
    fn test_close_scores_kept_as_alternatives() {
        let set = run("Austrai").unwrap();
        assert_eq!(set.primary().iso2, "AT");
        for alt in set.alternatives() {
            assert!(alt.confidence >= 0.5);
        }
    }

    #[test]
    fn test_alternative_window() {
        // against a 40-char input: one edit 0.975, two edits 0.95, five edits 0.875
        let map = CountryMatchingMap::from_entries(vec![
            ("XA".to_string(), country("abcdefghijklmnopqrstuvwxyzabcdefghijklm0")),
            ("XB".to_string(), country("abcdefghijklmnopqrstuvwxyzabcdefghijkl00")),
            ("XC".to_string(), country("abcdefghijklmnopqrstuvwxyzabcdefghi00000")),
        ])
        .unwrap();
        let data = ReferenceData::new(map);
        let query = MatchQuery::new("abcdefghijklmnopqrstuvwxyzabcdefghijklmn");

        let set = match_fuzzy(&query, &data, &MatchConfig::default()).unwrap();
        let codes: Vec<&str> = set.candidates.iter().map(|c| c.iso2.as_str()).collect();
        // XC is above the similarity floor but 0.1 behind the best
        assert_eq!(codes, vec!["XA", "XB"]);
        assert!(set.candidates[1].reason.starts_with("similarity 0.95"));

        let wide = MatchConfig {
            fuzzy_alternative_delta: 0.2,
            ..Default::default()
        };
        let set = match_fuzzy(&query, &data, &wide).unwrap();
        assert_eq!(set.candidates.len(), 3);
    }

    #[test]
    fn test_sub_threshold_best_guess() {
        let set = run("xyzzyplace123").unwrap();
        assert_eq!(set.candidates.len(), 1);
        assert!(set.best_confidence() < 0.5);
    }

    #[test]
    fn test_candidate_limit() {
        let config = MatchConfig {
            max_fuzzy_candidates: 1,
            ..Default::default()
        };
        // only the first indexed name (Austria) is scanned
        let set = match_fuzzy(&MatchQuery::new("Germny"), &reference(), &config);
        assert!(set.map_or(true, |s| s.primary().iso2 != "DE"));
    }
}
