//! Result aggregation
//!
//! Folds `(input, result)` pairs into processing metadata and the list of
//! unresolved locations. `Aggregator::merge` is associative, so partial
//! aggregators built on different threads can be combined in any grouping.

use crate::types::{Alternative, ConfidenceBand, MatchMethod, MatchResult, PlaceInput};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BandCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub unmatched: usize,
}

impl BandCounts {
    fn record(&mut self, band: ConfidenceBand) {
        match band {
            ConfidenceBand::High => self.high += 1,
            ConfidenceBand::Medium => self.medium += 1,
            ConfidenceBand::Low => self.low += 1,
            ConfidenceBand::Unmatched => self.unmatched += 1,
        }
    }

    fn merge(&mut self, other: &BandCounts) {
        self.high += other.high;
        self.medium += other.medium;
        self.low += other.low;
        self.unmatched += other.unmatched;
    }

    pub fn total(&self) -> usize {
        self.high + self.medium + self.low + self.unmatched
    }
}

/// Count per method; results without a method land in `unmatched`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodCounts {
    pub exact: usize,
    pub alias: usize,
    pub pattern: usize,
    pub region: usize,
    pub fuzzy: usize,
    pub historical: usize,
    pub unmatched: usize,
}

impl MethodCounts {
    fn record(&mut self, method: Option<MatchMethod>) {
        let slot = match method {
            Some(MatchMethod::Exact) => &mut self.exact,
            Some(MatchMethod::Alias) => &mut self.alias,
            Some(MatchMethod::Pattern) => &mut self.pattern,
            Some(MatchMethod::Region) => &mut self.region,
            Some(MatchMethod::Fuzzy) => &mut self.fuzzy,
            Some(MatchMethod::Historical) => &mut self.historical,
            None => &mut self.unmatched,
        };
        *slot += 1;
    }

    fn merge(&mut self, other: &MethodCounts) {
        self.exact += other.exact;
        self.alias += other.alias;
        self.pattern += other.pattern;
        self.region += other.region;
        self.fuzzy += other.fuzzy;
        self.historical += other.historical;
        self.unmatched += other.unmatched;
    }

    pub fn get(&self, method: MatchMethod) -> usize {
        match method {
            MatchMethod::Exact => self.exact,
            MatchMethod::Alias => self.alias,
            MatchMethod::Pattern => self.pattern,
            MatchMethod::Region => self.region,
            MatchMethod::Fuzzy => self.fuzzy,
            MatchMethod::Historical => self.historical,
        }
    }

    pub fn total(&self) -> usize {
        MatchMethod::ALL.iter().map(|m| self.get(*m)).sum::<usize>() + self.unmatched
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingMetadata {
    pub total_locations: usize,
    pub by_confidence: BandCounts,
    pub by_method: MethodCounts,
}

impl ProcessingMetadata {
    pub fn record(&mut self, result: &MatchResult) {
        self.total_locations += 1;
        self.by_confidence.record(result.band());
        self.by_method.record(result.method);
    }

    pub fn merge(&mut self, other: &ProcessingMetadata) {
        self.total_locations += other.total_locations;
        self.by_confidence.merge(&other.by_confidence);
        self.by_method.merge(&other.by_method);
    }
}

/// Which record an unresolved place came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provenance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub individual_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnresolvedContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spouse_birth: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnresolvedLocation {
    /// Position of the input in the batch
    pub index: usize,
    pub original: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provenance: Option<Provenance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<UnresolvedContext>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_guess: Option<Alternative>,
}

impl UnresolvedLocation {
    fn new(index: usize, input: &PlaceInput, result: &MatchResult) -> Self {
        let ctx = input.context.as_ref();

        let provenance = ctx
            .filter(|c| c.individual_id.is_some() || c.event_type.is_some())
            .map(|c| Provenance {
                individual_id: c.individual_id.clone(),
                event_type: c.event_type.clone(),
            });
        let context = ctx
            .filter(|c| c.year.is_some() || c.parent_birth.is_some() || c.spouse_birth.is_some())
            .map(|c| UnresolvedContext {
                year: c.year,
                parent_birth: c.parent_birth.clone(),
                spouse_birth: c.spouse_birth.clone(),
            });

        Self {
            index,
            original: input.place.clone(),
            provenance,
            context,
            best_guess: result.best_guess(),
        }
    }
}

/// Aggregation output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateReport {
    pub metadata: ProcessingMetadata,
    /// Ordered by input index
    pub unresolved: Vec<UnresolvedLocation>,
}

/// Incremental aggregator.
#[derive(Debug, Clone)]
pub struct Aggregator {
    unresolved_threshold: f64,
    metadata: ProcessingMetadata,
    unresolved: Vec<UnresolvedLocation>,
}

impl Aggregator {
    pub fn new(unresolved_threshold: f64) -> Self {
        Self {
            unresolved_threshold,
            metadata: ProcessingMetadata::default(),
            unresolved: Vec::new(),
        }
    }

    /// Record the result for input number `index`.
    pub fn record(&mut self, index: usize, input: &PlaceInput, result: &MatchResult) {
        self.metadata.record(result);
        if !result.is_resolved() || result.confidence < self.unresolved_threshold {
            self.unresolved.push(UnresolvedLocation::new(index, input, result));
        }
    }

    /// Combine two partial aggregators.
    pub fn merge(mut self, other: Aggregator) -> Aggregator {
        self.metadata.merge(&other.metadata);
        self.unresolved.extend(other.unresolved);
        self
    }

    pub fn metadata(&self) -> &ProcessingMetadata {
        &self.metadata
    }

    pub fn finish(mut self) -> AggregateReport {
        self.unresolved.sort_by_key(|u| u.index);
        AggregateReport {
            metadata: self.metadata,
            unresolved: self.unresolved,
        }
    }
}

/// Aggregate a whole batch; `inputs` and `results` are paired by position.
pub fn aggregate(
    inputs: &[PlaceInput],
    results: &[MatchResult],
    unresolved_threshold: f64,
) -> AggregateReport {
    let mut aggregator = Aggregator::new(unresolved_threshold);
    for (index, (input, result)) in inputs.iter().zip(results).enumerate() {
        aggregator.record(index, input, result);
    }
    aggregator.finish()
}
