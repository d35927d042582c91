//! Parallel batch matching
//!
//! Genealogical exports repeat the same place string many times, so each
//! distinct `(place, usable year, parentBirth, spouseBirth)` is matched once
//! and the result fanned back out in input order.

use crate::error::{CountryMatchError, Result};
use country_match_common::{AggregateReport, Aggregator, CountryMatcher, MatchResult, PlaceInput};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct DedupKey<'a> {
    place: &'a str,
    year: Option<i32>,
    parent_birth: Option<&'a str>,
    spouse_birth: Option<&'a str>,
}

/// Batch output; `results[i]` belongs to input `i`.
#[derive(Debug, Clone)]
pub struct BatchOutput {
    pub results: Vec<MatchResult>,
    pub report: AggregateReport,
    /// Distinct inputs actually matched
    pub distinct: usize,
}

pub struct BatchRunner {
    matcher: CountryMatcher,
    threads: Option<usize>,
    progress: bool,
}

impl BatchRunner {
    pub fn new(matcher: CountryMatcher) -> Self {
        Self {
            matcher,
            threads: None,
            progress: false,
        }
    }

    pub fn threads(mut self, threads: Option<usize>) -> Self {
        self.threads = threads;
        self
    }

    pub fn progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    pub fn matcher(&self) -> &CountryMatcher {
        &self.matcher
    }

    pub fn run(&self, inputs: &[PlaceInput]) -> Result<BatchOutput> {
        match self.threads {
            Some(n) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| CountryMatchError::Config(format!("thread pool: {}", e)))?;
                Ok(pool.install(|| self.run_parallel(inputs)))
            }
            None => Ok(self.run_parallel(inputs)),
        }
    }

    fn run_parallel(&self, inputs: &[PlaceInput]) -> BatchOutput {
        let config = self.matcher.config();

        // input index -> slot in `distinct`
        let mut slots = Vec::with_capacity(inputs.len());
        let mut distinct: Vec<&PlaceInput> = Vec::new();
        let mut seen: HashMap<DedupKey, usize> = HashMap::new();
        for input in inputs {
            let context = input.context.as_ref();
            let key = DedupKey {
                place: &input.place,
                year: config.usable_year(input.year()),
                parent_birth: context.and_then(|c| c.parent_birth.as_deref()),
                spouse_birth: context.and_then(|c| c.spouse_birth.as_deref()),
            };
            let slot = *seen.entry(key).or_insert_with(|| {
                distinct.push(input);
                distinct.len() - 1
            });
            slots.push(slot);
        }

        tracing::info!(
            inputs = inputs.len(),
            distinct = distinct.len(),
            "matching places"
        );

        let pb = self.progress_bar(distinct.len() as u64);
        let matched: Vec<MatchResult> = distinct
            .par_iter()
            .map(|input| {
                let result = self.matcher.match_input(input);
                pb.inc(1);
                result
            })
            .collect();
        pb.finish_and_clear();

        let results: Vec<MatchResult> = slots.iter().map(|&slot| matched[slot].clone()).collect();

        let threshold = config.unresolved_threshold;
        let report = (0..inputs.len())
            .into_par_iter()
            .fold(
                || Aggregator::new(threshold),
                |mut agg, i| {
                    agg.record(i, &inputs[i], &results[i]);
                    agg
                },
            )
            .reduce(|| Aggregator::new(threshold), Aggregator::merge)
            .finish();

        BatchOutput {
            results,
            report,
            distinct: distinct.len(),
        }
    }

    fn progress_bar(&self, len: u64) -> ProgressBar {
        if !self.progress {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new(len);
        if let Ok(style) =
            ProgressStyle::with_template("{spinner} [{bar:40}] {pos}/{len} places ({eta})")
        {
            pb.set_style(style.progress_chars("=> "));
        }
        pb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use country_match_common::PlaceContext;

    #[test]
    fn test_duplicates_matched_once() {
        let runner = BatchRunner::new(CountryMatcher::builtin().unwrap());
        let inputs = vec![
            PlaceInput::new("Ireland"),
            PlaceInput::new("France"),
            PlaceInput::new("Ireland"),
            PlaceInput::with_context(
                "Ireland",
                PlaceContext {
                    year: Some(99_999),
                    individual_id: Some("I9".to_string()),
                    ..Default::default()
                },
            ),
        ];
        let output = runner.run(&inputs).unwrap();
        // implausible year and provenance do not split the key
        assert_eq!(output.distinct, 2);
        assert_eq!(output.results.len(), 4);
        assert_eq!(output.results[2], output.results[0]);
        assert_eq!(output.results[1].iso2.as_deref(), Some("FR"));
    }

    #[test]
    fn test_explicit_thread_count() {
        let runner = BatchRunner::new(CountryMatcher::builtin().unwrap()).threads(Some(2));
        let output = runner.run(&[PlaceInput::new("Deutschland")]).unwrap();
        assert_eq!(output.results[0].iso2.as_deref(), Some("DE"));
        assert_eq!(output.report.metadata.total_locations, 1);
    }

    #[test]
    fn test_zero_threads_uses_default_pool() {
        // rayon treats 0 as "pick automatically"
        let runner = BatchRunner::new(CountryMatcher::builtin().unwrap()).threads(Some(0));
        assert!(runner.run(&[]).is_ok());
    }
}
