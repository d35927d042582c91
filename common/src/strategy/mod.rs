//! Strategy matchers
//!
//! Five stateless functions over the reference store, each returning an
//! optional set of scored candidates ordered best first:
//! exact, alias, pattern, region, fuzzy.

pub mod alias;
pub mod exact;
pub mod fuzzy;
pub mod pattern;
pub mod region;

pub use alias::match_alias;
pub use exact::match_exact;
pub use fuzzy::match_fuzzy;
pub use pattern::match_pattern;
pub use region::match_region;

use crate::config::MatchConfig;
use crate::normalizer::{last_segment, normalize_place, token_key};
use crate::reference::ReferenceData;
use crate::types::{Alternative, MatchMethod};
use std::collections::HashSet;

/// Signature shared by every strategy.
pub type StrategyFn = fn(&MatchQuery, &ReferenceData, &MatchConfig) -> Option<CandidateSet>;

/// Normalized forms of one input, computed once per match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchQuery {
    pub original: String,
    pub normalized: String,
    pub token_key: String,
    /// Final comma-separated level, when the place has several
    pub last_segment: Option<String>,
}

impl MatchQuery {
    pub fn new(original: &str) -> Self {
        let normalized = normalize_place(original);
        Self {
            original: original.to_string(),
            token_key: token_key(&normalized),
            last_segment: last_segment(&normalized),
            normalized,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.token_key.is_empty()
    }

    /// Whole string first, then the final level.
    pub fn lookup_keys(&self) -> Vec<&str> {
        let mut keys = vec![self.normalized.as_str()];
        if let Some(segment) = &self.last_segment {
            keys.push(segment.as_str());
        }
        keys
    }
}

/// One scored country.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub iso2: String,
    pub confidence: f64,
    /// Reference literal that produced the hit
    pub matched_value: String,
    pub reason: String,
}

impl Candidate {
    pub fn to_alternative(&self) -> Alternative {
        Alternative {
            iso2: self.iso2.clone(),
            confidence: self.confidence,
            reason: self.reason.clone(),
        }
    }
}

/// Output of one strategy; `candidates` is never empty and is ordered best first.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateSet {
    pub method: MatchMethod,
    pub candidates: Vec<Candidate>,
}

impl CandidateSet {
    /// `None` for an empty list. Keeps the first candidate per country.
    pub fn new(method: MatchMethod, candidates: Vec<Candidate>) -> Option<Self> {
        let mut seen = HashSet::new();
        let candidates: Vec<Candidate> = candidates
            .into_iter()
            .filter(|c| seen.insert(c.iso2.clone()))
            .collect();

        if candidates.is_empty() {
            None
        } else {
            Some(Self { method, candidates })
        }
    }

    pub fn primary(&self) -> &Candidate {
        &self.candidates[0]
    }

    pub fn best_confidence(&self) -> f64 {
        self.candidates[0].confidence
    }

    pub fn alternatives(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter().skip(1)
    }
}

/// Ratio of two lengths in chars, as used by the pattern and region scorers.
pub(crate) fn length_ratio(part: &str, whole: &str) -> f64 {
    let whole_len = whole.chars().count();
    if whole_len == 0 {
        return 0.0;
    }
    (part.chars().count() as f64 / whole_len as f64).min(1.0)
}
