// Dweve Microbench - Micro-benchmark harness
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Baseline comparison.
//!
//! Compares a candidate result against a baseline across the seven scalar
//! metrics. Differences are signed `candidate - baseline`, so a negative
//! value means the candidate is lower (faster, or fewer collections).
//! Percentages are relative to the baseline and are `0.0` whenever the
//! baseline metric is zero.

use crate::core::collector::{CollectionCounter, Generation};
use crate::core::config::BenchConfig;
use crate::core::measurement::{BenchmarkResult, Benchmarker};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The scalar metrics a comparison covers, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    ElapsedMilliseconds,
    ElapsedTicks,
    AverageMilliseconds,
    AverageTicks,
    Gen0Collections,
    Gen1Collections,
    Gen2Collections,
}

impl Metric {
    /// All metrics, in report order.
    pub const ALL: [Metric; 7] = [
        Metric::ElapsedMilliseconds,
        Metric::ElapsedTicks,
        Metric::AverageMilliseconds,
        Metric::AverageTicks,
        Metric::Gen0Collections,
        Metric::Gen1Collections,
        Metric::Gen2Collections,
    ];

    /// Reads this metric from a result.
    pub fn value(self, result: &BenchmarkResult) -> f64 {
        match self {
            Metric::ElapsedMilliseconds => result.elapsed_ms as f64,
            Metric::ElapsedTicks => result.elapsed_ticks as f64,
            Metric::AverageMilliseconds => result.average_ms as f64,
            Metric::AverageTicks => result.average_ticks as f64,
            Metric::Gen0Collections => result.collections(Generation::Gen0) as f64,
            Metric::Gen1Collections => result.collections(Generation::Gen1) as f64,
            Metric::Gen2Collections => result.collections(Generation::Gen2) as f64,
        }
    }

    /// Short column label.
    pub fn label(self) -> &'static str {
        match self {
            Metric::ElapsedMilliseconds => "Total ms",
            Metric::ElapsedTicks => "Total ticks",
            Metric::AverageMilliseconds => "Avg. ms",
            Metric::AverageTicks => "Avg. ticks",
            Metric::Gen0Collections => "GC0",
            Metric::Gen1Collections => "GC1",
            Metric::Gen2Collections => "GC2",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Signed difference of one metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricDelta {
    /// `candidate - baseline`.
    pub absolute: f64,
    /// `absolute / baseline * 100`, or `0.0` for a zero baseline.
    pub percentage: f64,
}

impl MetricDelta {
    /// Computes the delta between two metric values.
    pub fn between(baseline: f64, candidate: f64) -> Self {
        let absolute = candidate - baseline;
        let percentage = if baseline != 0.0 {
            absolute * 100.0 / baseline
        } else {
            0.0
        };
        Self {
            absolute,
            percentage,
        }
    }
}

/// Comparison of a candidate result against a baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkComparison {
    /// The reference result.
    pub baseline: BenchmarkResult,
    /// The result compared against the baseline.
    pub candidate: BenchmarkResult,
    pub elapsed_ms: MetricDelta,
    pub elapsed_ticks: MetricDelta,
    pub average_ms: MetricDelta,
    pub average_ticks: MetricDelta,
    pub gen0_collections: MetricDelta,
    pub gen1_collections: MetricDelta,
    pub gen2_collections: MetricDelta,
}

impl BenchmarkComparison {
    /// Looks up the delta of `metric`.
    pub fn delta(&self, metric: Metric) -> MetricDelta {
        match metric {
            Metric::ElapsedMilliseconds => self.elapsed_ms,
            Metric::ElapsedTicks => self.elapsed_ticks,
            Metric::AverageMilliseconds => self.average_ms,
            Metric::AverageTicks => self.average_ticks,
            Metric::Gen0Collections => self.gen0_collections,
            Metric::Gen1Collections => self.gen1_collections,
            Metric::Gen2Collections => self.gen2_collections,
        }
    }

    /// Iterates over `(metric, delta)` in report order.
    pub fn deltas(&self) -> impl Iterator<Item = (Metric, MetricDelta)> + '_ {
        Metric::ALL.into_iter().map(move |metric| (metric, self.delta(metric)))
    }
}

/// Compares `candidate` against `baseline`. Pure; nothing is re-run.
pub fn compare(baseline: &BenchmarkResult, candidate: &BenchmarkResult) -> BenchmarkComparison {
    let delta =
        |metric: Metric| MetricDelta::between(metric.value(baseline), metric.value(candidate));

    BenchmarkComparison {
        baseline: baseline.clone(),
        candidate: candidate.clone(),
        elapsed_ms: delta(Metric::ElapsedMilliseconds),
        elapsed_ticks: delta(Metric::ElapsedTicks),
        average_ms: delta(Metric::AverageMilliseconds),
        average_ticks: delta(Metric::AverageTicks),
        gen0_collections: delta(Metric::Gen0Collections),
        gen1_collections: delta(Metric::Gen1Collections),
        gen2_collections: delta(Metric::Gen2Collections),
    }
}

/// Compares each candidate against the same baseline, in order.
pub fn compare_many(
    baseline: &BenchmarkResult,
    candidates: &[BenchmarkResult],
) -> Vec<BenchmarkComparison> {
    candidates
        .iter()
        .map(|candidate| compare(baseline, candidate))
        .collect()
}

impl<C: CollectionCounter> Benchmarker<C> {
    /// Measures `baseline` once, measures every candidate in order, and
    /// compares each candidate against the single baseline result.
    pub fn compare_all<B, I, F>(
        &self,
        baseline: B,
        config: &BenchConfig,
        candidates: I,
    ) -> Result<Vec<BenchmarkComparison>>
    where
        B: FnMut(),
        I: IntoIterator<Item = F>,
        F: FnMut(),
    {
        let baseline = self.measure(baseline, config)?;
        let results = self.measure_all(candidates, config)?;
        Ok(compare_many(&baseline, &results))
    }

    /// [`Benchmarker::compare_all`] with display names attached to the
    /// baseline and to each `(name, operation)` candidate.
    pub fn compare_all_named<B, I, S, F>(
        &self,
        baseline_name: &str,
        baseline: B,
        config: &BenchConfig,
        candidates: I,
    ) -> Result<Vec<BenchmarkComparison>>
    where
        B: FnMut(),
        I: IntoIterator<Item = (S, F)>,
        S: AsRef<str>,
        F: FnMut(),
    {
        let baseline = self.measure_named(baseline_name, baseline, config)?;
        let results = self.measure_all_named(candidates, config)?;
        Ok(compare_many(&baseline, &results))
    }
}

/// [`Benchmarker::compare_all`] with the default engine.
pub fn compare_all<B, I, F>(
    baseline: B,
    config: &BenchConfig,
    candidates: I,
) -> Result<Vec<BenchmarkComparison>>
where
    B: FnMut(),
    I: IntoIterator<Item = F>,
    F: FnMut(),
{
    Benchmarker::new().compare_all(baseline, config, candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::collector::CollectionDelta;
    use crate::harness::runner::Operation;
    use std::time::Duration;

    fn result(elapsed_ms: u64, gen0: i64) -> BenchmarkResult {
        BenchmarkResult::from_run(
            Duration::from_millis(elapsed_ms),
            CollectionDelta {
                gen0,
                gen1: 0,
                gen2: 0,
            },
            10,
        )
    }

    #[test]
    fn test_faster_candidate() {
        let comparison = compare(&result(100, 10), &result(80, 10));

        assert_eq!(comparison.elapsed_ms.absolute, -20.0);
        assert_eq!(comparison.elapsed_ms.percentage, -20.0);
        assert_eq!(comparison.gen0_collections.absolute, 0.0);
        assert_eq!(comparison.gen0_collections.percentage, 0.0);
        assert_eq!(comparison.average_ms.absolute, -2.0);
        assert_eq!(comparison.average_ms.percentage, -20.0);
    }

    #[test]
    fn test_zero_baseline_percentage_is_zero() {
        let comparison = compare(&result(0, 0), &result(50, 3));

        assert_eq!(comparison.elapsed_ms.absolute, 50.0);
        assert_eq!(comparison.elapsed_ms.percentage, 0.0);
        assert_eq!(comparison.gen0_collections.absolute, 3.0);
        assert_eq!(comparison.gen0_collections.percentage, 0.0);
        // gen1/gen2 are zero on both sides
        assert_eq!(comparison.gen2_collections, MetricDelta::default());
    }

    #[test]
    fn test_slower_candidate_percentage() {
        let comparison = compare(&result(40, 4), &result(50, 6));
        assert_eq!(comparison.elapsed_ms.percentage, 25.0);
        assert_eq!(comparison.gen0_collections.percentage, 50.0);
    }

    #[test]
    fn test_self_comparison_is_zero() {
        let r = result(123, 7);
        let comparison = compare(&r, &r);
        for (_, delta) in comparison.deltas() {
            assert_eq!(delta, MetricDelta::default());
        }
    }

    #[test]
    fn test_comparison_keeps_both_results() {
        let baseline = result(10, 0).with_name("base");
        let candidate = result(20, 0).with_name("cand");
        let comparison = compare(&baseline, &candidate);
        assert_eq!(comparison.baseline, baseline);
        assert_eq!(comparison.candidate, candidate);
    }

    #[test]
    fn test_compare_many_preserves_order() {
        let baseline = result(100, 0);
        let candidates = vec![result(50, 0), result(150, 0)];
        let comparisons = compare_many(&baseline, &candidates);

        assert_eq!(comparisons.len(), 2);
        assert_eq!(comparisons[0].elapsed_ms.percentage, -50.0);
        assert_eq!(comparisons[1].elapsed_ms.percentage, 50.0);
    }

    #[test]
    fn test_compare_all_measures_baseline_once() {
        let mut baseline_calls = 0u64;
        let mut candidate_calls = [0u64; 3];
        let comparisons = {
            let [a, b, c] = &mut candidate_calls;
            let candidates: Vec<Operation> = vec![
                Box::new(|| *a += 1),
                Box::new(|| *b += 1),
                Box::new(|| *c += 1),
            ];
            compare_all(|| baseline_calls += 1, &BenchConfig::new(4), candidates).unwrap()
        };

        assert_eq!(comparisons.len(), 3);
        assert_eq!(baseline_calls, 4);
        assert_eq!(candidate_calls, [4, 4, 4]);
        assert!(comparisons
            .iter()
            .all(|c| c.baseline == comparisons[0].baseline));
    }

    #[test]
    fn test_compare_all_named_attaches_names() {
        fn noop() {}
        let mut baseline_calls = 0u64;
        let candidates = [("first", noop as fn()), ("second", noop as fn())];
        let comparisons = Benchmarker::new()
            .compare_all_named("base", || baseline_calls += 1, &BenchConfig::new(3), candidates)
            .unwrap();

        assert_eq!(baseline_calls, 3);
        assert_eq!(comparisons.len(), 2);
        assert!(comparisons
            .iter()
            .all(|c| c.baseline.display_name() == "base"));
        assert_eq!(comparisons[0].candidate.display_name(), "first");
        assert_eq!(comparisons[1].candidate.display_name(), "second");
    }

    #[test]
    fn test_compare_all_propagates_config_error() {
        let candidates: Vec<Operation> = vec![Box::new(|| {})];
        let err = compare_all(|| {}, &BenchConfig::new(0), candidates).unwrap_err();
        assert!(err.is_invalid_config());
    }

    #[test]
    fn test_metric_labels() {
        let labels: Vec<&str> = Metric::ALL.iter().map(|m| m.label()).collect();
        assert_eq!(
            labels,
            vec!["Total ms", "Total ticks", "Avg. ms", "Avg. ticks", "GC0", "GC1", "GC2"]
        );
    }
}
