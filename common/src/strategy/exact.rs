//! Exact canonical-name match

use super::{Candidate, CandidateSet, MatchQuery};
use crate::config::MatchConfig;
use crate::reference::ReferenceData;
use crate::types::MatchMethod;

/// Normalized input equal to a canonical name. Confidence 1.0.
///
/// Ties are kept as equal-confidence alternatives in ISO2 order.
pub fn match_exact(
    query: &MatchQuery,
    data: &ReferenceData,
    _config: &MatchConfig,
) -> Option<CandidateSet> {
    for (level, key) in query.lookup_keys().into_iter().enumerate() {
        let hits = data.canonical_matches(key);
        if hits.is_empty() {
            continue;
        }

        let candidates = hits
            .iter()
            .filter_map(|iso2| {
                let country = data.map().get(iso2)?;
                Some(Candidate {
                    iso2: iso2.clone(),
                    confidence: 1.0,
                    matched_value: country.canonical.clone(),
                    reason: if level == 0 {
                        "canonical name".to_string()
                    } else {
                        "canonical name of last place level".to_string()
                    },
                })
            })
            .collect();
        return CandidateSet::new(MatchMethod::Exact, candidates);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{CountryMatchingData, CountryMatchingMap};
    use crate::strategy::test_support::reference;

    fn run(place: &str) -> Option<CandidateSet> {
        match_exact(&MatchQuery::new(place), &reference(), &MatchConfig::default())
    }

    #[test]
    fn test_exact_case_and_diacritics() {
        let set = run("  FRANCE ").unwrap();
        assert_eq!(set.method, MatchMethod::Exact);
        assert_eq!(set.primary().iso2, "FR");
        assert_eq!(set.best_confidence(), 1.0);
        assert_eq!(set.primary().matched_value, "France");

        assert_eq!(run("Fránce").unwrap().primary().iso2, "FR");
    }

    #[test]
    fn test_exact_last_level() {
        let set = run("Kilbrittain, Ireland").unwrap();
        assert_eq!(set.primary().iso2, "IE");
        assert!(set.primary().reason.contains("last place level"));
    }

    #[test]
    fn test_no_exact_hit() {
        assert!(run("Deutschland").is_none());
        assert!(run("Frankreich").is_none());
    }

    #[test]
    fn test_shared_canonical_ties_in_iso2_order() {
        let country = |name: &str| CountryMatchingData {
            canonical: name.to_string(),
            ..Default::default()
        };
        let map = CountryMatchingMap::from_entries(vec![
            ("GQ".to_string(), country("Guinea")),
            ("GN".to_string(), country("Guinea")),
        ])
        .unwrap();
        let data = ReferenceData::new(map);
        let set = match_exact(&MatchQuery::new("guinea"), &data, &MatchConfig::default()).unwrap();
        let codes: Vec<&str> = set.candidates.iter().map(|c| c.iso2.as_str()).collect();
        assert_eq!(codes, vec!["GN", "GQ"]);
        assert!(set.candidates.iter().all(|c| c.confidence == 1.0));
    }
}
