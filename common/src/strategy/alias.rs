//! Alias and historical-name lookup

use super::{Candidate, CandidateSet, MatchQuery};
use crate::config::MatchConfig;
use crate::reference::ReferenceData;
use crate::types::MatchMethod;

/// Normalized input equal to an alias (or historical name) of some country.
///
/// All hits share `alias_confidence`. Earlier positions in a country's list
/// rank first; remaining ties fall back to ISO2 order.
pub fn match_alias(
    query: &MatchQuery,
    data: &ReferenceData,
    config: &MatchConfig,
) -> Option<CandidateSet> {
    for (level, key) in query.lookup_keys().into_iter().enumerate() {
        let mut hits: Vec<_> = data.alias_matches(key).iter().collect();
        if hits.is_empty() {
            continue;
        }
        hits.sort_by(|a, b| a.position.cmp(&b.position).then_with(|| a.iso2.cmp(&b.iso2)));

        let candidates = hits
            .into_iter()
            .map(|entry| {
                let kind = if entry.historical { "historical name" } else { "alias" };
                let reason = if level == 0 {
                    format!("{} '{}'", kind, entry.literal)
                } else {
                    format!("{} '{}' in last place level", kind, entry.literal)
                };
                Candidate {
                    iso2: entry.iso2.clone(),
                    confidence: config.alias_confidence,
                    matched_value: entry.literal.clone(),
                    reason,
                }
            })
            .collect();
        return CandidateSet::new(MatchMethod::Alias, candidates);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::test_support::reference;

    fn run(place: &str) -> Option<CandidateSet> {
        match_alias(&MatchQuery::new(place), &reference(), &MatchConfig::default())
    }

    #[test]
    fn test_alias_hit() {
        let set = run("deutschland").unwrap();
        assert_eq!(set.method, MatchMethod::Alias);
        assert_eq!(set.primary().iso2, "DE");
        assert_eq!(set.best_confidence(), 0.95);
        assert_eq!(set.primary().matched_value, "Deutschland");
    }

    #[test]
    fn test_alias_with_diacritics() {
        assert_eq!(run("OSTERREICH").unwrap().primary().iso2, "AT");
    }

    #[test]
    fn test_historical_name_is_alias_tier() {
        let set = run("Prussia").unwrap();
        assert_eq!(set.primary().iso2, "DE");
        assert!(set.primary().reason.starts_with("historical name"));
    }

    #[test]
    fn test_shared_alias_prefers_earlier_position() {
        // IE lists Hibernia second, GB third
        let set = run("Hibernia").unwrap();
        let codes: Vec<&str> = set.candidates.iter().map(|c| c.iso2.as_str()).collect();
        assert_eq!(codes, vec!["IE", "GB"]);
        assert_eq!(set.candidates[1].confidence, set.candidates[0].confidence);
    }

    #[test]
    fn test_alias_in_last_level() {
        let set = run("Munich, Bavaria, Deutschland").unwrap();
        assert_eq!(set.primary().iso2, "DE");
        assert!(set.primary().reason.contains("last place level"));
    }

    #[test]
    fn test_no_alias_hit() {
        assert!(run("Germany").is_none());
    }
}
