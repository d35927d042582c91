//! Match orchestrator
//!
//! Runs the strategy cascade as an explicit state machine:
//!
//! ```text
//! NotStarted -> ExactTried -> AliasTried -> PatternTried -> RegionTried
//!            -> FuzzyTried -> HistoricalAdjusted -> Done
//! ```
//!
//! The first stage whose candidates are accepted short-circuits to the
//! historical adjustment. Exact and alias hits are always accepted; the
//! scored stages need `accept_threshold`.

use crate::config::MatchConfig;
use crate::error::Result;
use crate::historical;
use crate::reference::{CountryMatchingMap, ReferenceData};
use crate::strategy::{
    match_alias, match_exact, match_fuzzy, match_pattern, match_region, CandidateSet, MatchQuery,
    StrategyFn,
};
use crate::types::{
    Alternative, MatchDetails, MatchResult, PlaceContext, PlaceInput, PlaceWithCountry,
};
use std::sync::Arc;

/// Cascade progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchState {
    NotStarted,
    ExactTried,
    AliasTried,
    PatternTried,
    RegionTried,
    FuzzyTried,
    HistoricalAdjusted,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Acceptance {
    AnyHit,
    Threshold,
}

struct Stage {
    run: StrategyFn,
    reached: MatchState,
    acceptance: Acceptance,
}

const STAGES: [Stage; 5] = [
    Stage {
        run: match_exact,
        reached: MatchState::ExactTried,
        acceptance: Acceptance::AnyHit,
    },
    Stage {
        run: match_alias,
        reached: MatchState::AliasTried,
        acceptance: Acceptance::AnyHit,
    },
    Stage {
        run: match_pattern,
        reached: MatchState::PatternTried,
        acceptance: Acceptance::Threshold,
    },
    Stage {
        run: match_region,
        reached: MatchState::RegionTried,
        acceptance: Acceptance::Threshold,
    },
    Stage {
        run: match_fuzzy,
        reached: MatchState::FuzzyTried,
        acceptance: Acceptance::Threshold,
    },
];

impl Stage {
    fn accepts(&self, set: &CandidateSet, config: &MatchConfig) -> bool {
        match self.acceptance {
            Acceptance::AnyHit => true,
            Acceptance::Threshold => set.best_confidence() >= config.accept_threshold,
        }
    }
}

/// Result of one cascade run plus the states it passed through.
#[derive(Debug, Clone)]
pub struct MatchTrace {
    pub result: MatchResult,
    pub states: Vec<MatchState>,
}

/// Place-name matcher over shared, immutable reference data.
///
/// Cheap to clone; safe to use from many threads at once.
#[derive(Debug, Clone)]
pub struct CountryMatcher {
    reference: Arc<ReferenceData>,
    config: MatchConfig,
}

impl CountryMatcher {
    pub fn new(map: CountryMatchingMap, config: MatchConfig) -> Result<Self> {
        Self::with_reference(Arc::new(ReferenceData::new(map)), config)
    }

    pub fn with_reference(reference: Arc<ReferenceData>, config: MatchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { reference, config })
    }

    /// Matcher over the bundled reference table with default thresholds.
    pub fn builtin() -> Result<Self> {
        Self::new(CountryMatchingMap::builtin()?, MatchConfig::default())
    }

    pub fn reference(&self) -> &Arc<ReferenceData> {
        &self.reference
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn match_place(&self, place: &str, context: Option<&PlaceContext>) -> MatchResult {
        self.trace(place, context).result
    }

    pub fn match_input(&self, input: &PlaceInput) -> MatchResult {
        self.match_place(&input.place, input.context.as_ref())
    }

    /// Resolve and wrap the result for downstream export.
    pub fn to_place_with_country(&self, input: &PlaceInput) -> PlaceWithCountry {
        PlaceWithCountry::from_result(&input.place, &self.match_input(input))
    }

    /// Same as `match_place`, also returning the visited states.
    pub fn trace(&self, place: &str, context: Option<&PlaceContext>) -> MatchTrace {
        let query = MatchQuery::new(place);
        let mut states = vec![MatchState::NotStarted];

        if query.is_empty() {
            states.push(MatchState::Done);
            return MatchTrace {
                result: MatchResult::unmatched(place, &query.normalized, 0.0, Vec::new()),
                states,
            };
        }

        let mut accepted: Option<CandidateSet> = None;
        let mut best_guess: Option<CandidateSet> = None;

        for stage in &STAGES {
            let outcome = (stage.run)(&query, &self.reference, &self.config);
            states.push(stage.reached);

            let Some(set) = outcome else { continue };
            if stage.accepts(&set, &self.config) {
                accepted = Some(set);
                break;
            }
            let better = best_guess
                .as_ref()
                .map_or(true, |guess| set.best_confidence() > guess.best_confidence());
            if better {
                best_guess = Some(set);
            }
        }

        let result = match accepted {
            Some(set) => {
                let result = self.resolved(&query, set, context);
                states.push(MatchState::HistoricalAdjusted);
                result
            }
            None => self.unresolved(&query, best_guess, context),
        };
        states.push(MatchState::Done);

        tracing::trace!(
            place,
            iso2 = result.iso2.as_deref().unwrap_or("-"),
            confidence = result.confidence,
            "place matched"
        );
        MatchTrace { result, states }
    }

    fn resolved(
        &self,
        query: &MatchQuery,
        set: CandidateSet,
        context: Option<&PlaceContext>,
    ) -> MatchResult {
        let raw_year = context.and_then(|c| c.year);
        let (set, historical_year) = match self.config.usable_year(raw_year) {
            Some(year) => {
                let outcome = historical::apply(set, year, &self.reference, &self.config);
                (outcome.set, outcome.historical_year)
            }
            None => {
                if let Some(year) = raw_year {
                    tracing::debug!(year, place = %query.original, "implausible year ignored");
                }
                (set, None)
            }
        };

        let primary = set.primary();
        MatchResult {
            iso2: Some(primary.iso2.clone()),
            confidence: primary.confidence.clamp(0.0, 1.0),
            method: Some(set.method),
            details: Some(MatchDetails {
                original: query.original.clone(),
                normalized: query.normalized.clone(),
                matched_value: Some(primary.matched_value.clone()),
                historical_year,
                alternatives: set.alternatives().map(|c| c.to_alternative()).collect(),
            }),
        }
    }

    fn unresolved(
        &self,
        query: &MatchQuery,
        best_guess: Option<CandidateSet>,
        context: Option<&PlaceContext>,
    ) -> MatchResult {
        let confidence = best_guess
            .as_ref()
            .map_or(0.0, |set| set.best_confidence().clamp(0.0, 1.0));
        let mut alternatives: Vec<Alternative> = best_guess
            .iter()
            .flat_map(|set| set.candidates.iter().map(|c| c.to_alternative()))
            .collect();

        // Hints and the place's own guesses are ranked together
        if let Some(context) = context {
            for hint in self.relative_hints(context) {
                if !alternatives.iter().any(|a| a.iso2 == hint.iso2) {
                    alternatives.push(hint);
                }
            }
            alternatives.sort_by(|a, b| {
                b.confidence
                    .partial_cmp(&a.confidence)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        }

        MatchResult::unmatched(&query.original, &query.normalized, confidence, alternatives)
    }

    /// Countries of the parent's and spouse's birthplaces, down-weighted.
    fn relative_hints(&self, context: &PlaceContext) -> Vec<Alternative> {
        let relatives = [
            (context.parent_birth.as_deref(), "parent's"),
            (context.spouse_birth.as_deref(), "spouse's"),
        ];

        let mut hints: Vec<Alternative> = Vec::new();
        for (place, relation) in relatives {
            let Some(place) = place else { continue };
            let result = self.match_place(place, None);
            let Some(iso2) = result.iso2 else { continue };
            if hints.iter().any(|h| h.iso2 == iso2) {
                continue;
            }
            hints.push(Alternative {
                iso2,
                confidence: result.confidence * self.config.relative_hint_weight,
                reason: format!("inferred from {} birthplace", relation),
            });
        }
        hints
    }
}
