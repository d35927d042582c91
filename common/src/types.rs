//! Engine input and output types
//!
//! - PlaceInput / PlaceContext: what the caller hands in per record
//! - MatchResult: one per input, produced by the orchestrator
//! - PlaceWithCountry: the per-record form persisted downstream

use serde::{Deserialize, Serialize};

/// Resolution strategy that produced a match.
///
/// "Unmatched" is not a variant: an unresolved result carries `method: None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMethod {
    Exact,
    Alias,
    Pattern,
    Region,
    Fuzzy,
    Historical,
}

impl MatchMethod {
    pub const ALL: [MatchMethod; 6] = [
        MatchMethod::Exact,
        MatchMethod::Alias,
        MatchMethod::Pattern,
        MatchMethod::Region,
        MatchMethod::Fuzzy,
        MatchMethod::Historical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchMethod::Exact => "exact",
            MatchMethod::Alias => "alias",
            MatchMethod::Pattern => "pattern",
            MatchMethod::Region => "region",
            MatchMethod::Fuzzy => "fuzzy",
            MatchMethod::Historical => "historical",
        }
    }
}

impl std::fmt::Display for MatchMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reporting band over the confidence range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceBand {
    /// >= 0.9
    High,
    /// [0.7, 0.9)
    Medium,
    /// [0.5, 0.7)
    Low,
    /// < 0.5
    Unmatched,
}

impl ConfidenceBand {
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= 0.9 {
            ConfidenceBand::High
        } else if confidence >= 0.7 {
            ConfidenceBand::Medium
        } else if confidence >= 0.5 {
            ConfidenceBand::Low
        } else {
            ConfidenceBand::Unmatched
        }
    }
}

impl std::fmt::Display for ConfidenceBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfidenceBand::High => write!(f, "high"),
            ConfidenceBand::Medium => write!(f, "medium"),
            ConfidenceBand::Low => write!(f, "low"),
            ConfidenceBand::Unmatched => write!(f, "unmatched"),
        }
    }
}

/// Another country that plausibly matches the same input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alternative {
    pub iso2: String,
    pub confidence: f64,
    pub reason: String,
}

/// Provenance of a match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDetails {
    /// Input exactly as supplied
    pub original: String,

    /// Matching key produced by the normalizer
    #[serde(default)]
    pub normalized: String,

    /// Literal from the reference data that matched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub historical_year: Option<i32>,

    /// Ordered by confidence, highest first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternatives: Vec<Alternative>,
}

/// Engine output for one input string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// `None` means unresolved
    pub iso2: Option<String>,
    pub confidence: f64,
    pub method: Option<MatchMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<MatchDetails>,
}

impl MatchResult {
    /// Unresolved result; `confidence` is the best sub-threshold score seen.
    pub fn unmatched(
        original: &str,
        normalized: &str,
        confidence: f64,
        alternatives: Vec<Alternative>,
    ) -> Self {
        Self {
            iso2: None,
            confidence,
            method: None,
            details: Some(MatchDetails {
                original: original.to_string(),
                normalized: normalized.to_string(),
                matched_value: None,
                historical_year: None,
                alternatives,
            }),
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.iso2.is_some()
    }

    pub fn band(&self) -> ConfidenceBand {
        ConfidenceBand::from_confidence(self.confidence)
    }

    pub fn alternatives(&self) -> &[Alternative] {
        self.details
            .as_ref()
            .map(|d| d.alternatives.as_slice())
            .unwrap_or(&[])
    }

    /// Best candidate regardless of whether it cleared the acceptance bar.
    pub fn best_guess(&self) -> Option<Alternative> {
        match &self.iso2 {
            Some(iso2) => Some(Alternative {
                iso2: iso2.clone(),
                confidence: self.confidence,
                reason: self
                    .method
                    .map(|m| format!("{} match", m))
                    .unwrap_or_default(),
            }),
            None => self.alternatives().first().cloned(),
        }
    }
}

/// Hints from the caller's genealogical record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlaceContext {
    pub year: Option<i32>,
    pub parent_birth: Option<String>,
    pub spouse_birth: Option<String>,
    pub individual_id: Option<String>,
    pub event_type: Option<String>,
}

/// One `(placeString, context?)` pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceInput {
    pub place: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<PlaceContext>,
}

impl PlaceInput {
    pub fn new(place: impl Into<String>) -> Self {
        Self {
            place: place.into(),
            context: None,
        }
    }

    pub fn with_context(place: impl Into<String>, context: PlaceContext) -> Self {
        Self {
            place: place.into(),
            context: Some(context),
        }
    }

    pub fn year(&self) -> Option<i32> {
        self.context.as_ref().and_then(|c| c.year)
    }
}

/// Country block attached to a resolved place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedCountry {
    pub iso2: String,
    pub confidence: f64,
    pub method: MatchMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_value: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternatives: Vec<Alternative>,
}

/// Per-record output persisted downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceWithCountry {
    pub original: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<ResolvedCountry>,
}

impl PlaceWithCountry {
    pub fn from_result(original: &str, result: &MatchResult) -> Self {
        let country = match (&result.iso2, result.method) {
            (Some(iso2), Some(method)) => Some(ResolvedCountry {
                iso2: iso2.clone(),
                confidence: result.confidence,
                method,
                matched_value: result.details.as_ref().and_then(|d| d.matched_value.clone()),
                alternatives: result.alternatives().to_vec(),
            }),
            _ => None,
        };

        Self {
            original: original.to_string(),
            country,
        }
    }
}
