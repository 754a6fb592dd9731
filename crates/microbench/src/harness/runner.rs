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

//! Batch runner: measures an ordered list of operations.
//!
//! Every operation is measured with the same configuration, in input
//! order, and `results[i]` belongs to `operations[i]`. The first failure
//! aborts the batch and is returned unchanged; there are no partial
//! batches.

use crate::core::collector::{CollectionCounter, NoCollector};
use crate::core::config::BenchConfig;
use crate::core::measurement::{BenchmarkResult, Benchmarker};
use crate::error::{OperationError, Result};
use crate::harness::comparator::{compare_many, BenchmarkComparison};

/// A boxed operation, for batches mixing different closures.
pub type Operation<'a> = Box<dyn FnMut() + 'a>;

impl<C: CollectionCounter> Benchmarker<C> {
    /// Measures each operation in order with the same configuration.
    pub fn measure_all<I, F>(
        &self,
        operations: I,
        config: &BenchConfig,
    ) -> Result<Vec<BenchmarkResult>>
    where
        I: IntoIterator<Item = F>,
        F: FnMut(),
    {
        operations
            .into_iter()
            .map(|operation| self.measure(operation, config))
            .collect()
    }

    /// Measures `(name, operation)` pairs in order.
    pub fn measure_all_named<I, S, F>(
        &self,
        operations: I,
        config: &BenchConfig,
    ) -> Result<Vec<BenchmarkResult>>
    where
        I: IntoIterator<Item = (S, F)>,
        S: AsRef<str>,
        F: FnMut(),
    {
        operations
            .into_iter()
            .map(|(name, operation)| self.measure_named(name.as_ref(), operation, config))
            .collect()
    }

    /// Measures fallible operations in order, stopping at the first error.
    pub fn try_measure_all<I, F, E>(
        &self,
        operations: I,
        config: &BenchConfig,
    ) -> Result<Vec<BenchmarkResult>>
    where
        I: IntoIterator<Item = F>,
        F: FnMut() -> std::result::Result<(), E>,
        E: Into<OperationError>,
    {
        operations
            .into_iter()
            .map(|operation| self.try_measure(operation, config))
            .collect()
    }
}

/// Measures each operation in order with the default engine.
///
/// # Example
///
/// ```
/// use microbench::core::BenchConfig;
/// use microbench::harness::{measure_all, Operation};
///
/// let mut a = 0u32;
/// let mut b = 0u64;
/// let operations: Vec<Operation> = vec![Box::new(|| a += 1), Box::new(|| b += 2)];
/// let results = measure_all(operations, &BenchConfig::new(10)).unwrap();
///
/// assert_eq!(results.len(), 2);
/// assert_eq!(a, 10);
/// assert_eq!(b, 20);
/// ```
pub fn measure_all<I, F>(operations: I, config: &BenchConfig) -> Result<Vec<BenchmarkResult>>
where
    I: IntoIterator<Item = F>,
    F: FnMut(),
{
    Benchmarker::new().measure_all(operations, config)
}

/// Measures fallible operations in order with the default engine.
pub fn try_measure_all<I, F, E>(operations: I, config: &BenchConfig) -> Result<Vec<BenchmarkResult>>
where
    I: IntoIterator<Item = F>,
    F: FnMut() -> std::result::Result<(), E>,
    E: Into<OperationError>,
{
    Benchmarker::new().try_measure_all(operations, config)
}

/// Runner collecting named operations under one configuration.
///
/// The first registered operation acts as the baseline for
/// [`BenchmarkRunner::run_and_compare`].
pub struct BenchmarkRunner<'a, C = NoCollector> {
    engine: Benchmarker<C>,
    config: BenchConfig,
    benchmarks: Vec<(String, Operation<'a>)>,
}

impl<'a> BenchmarkRunner<'a, NoCollector> {
    /// Creates a runner with the default engine.
    pub fn new(config: BenchConfig) -> Self {
        Self::with_engine(Benchmarker::new(), config)
    }
}

impl<'a, C: CollectionCounter> BenchmarkRunner<'a, C> {
    /// Creates a runner with a specific engine.
    pub fn with_engine(engine: Benchmarker<C>, config: BenchConfig) -> Self {
        Self {
            engine,
            config,
            benchmarks: Vec::new(),
        }
    }

    /// Registers an operation under `name`.
    pub fn register<F>(&mut self, name: &str, operation: F) -> &mut Self
    where
        F: FnMut() + 'a,
    {
        self.benchmarks.push((name.to_string(), Box::new(operation)));
        self
    }

    /// Number of registered operations.
    pub fn len(&self) -> usize {
        self.benchmarks.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.benchmarks.is_empty()
    }

    /// The configuration applied to every operation.
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Measures all registered operations in registration order.
    pub fn run_all(&mut self) -> Result<Vec<BenchmarkResult>> {
        tracing::info!(
            benchmarks = self.benchmarks.len(),
            iterations = self.config.iterations(),
            "running benchmark batch"
        );

        let config = &self.config;
        let engine = &self.engine;
        self.benchmarks
            .iter_mut()
            .map(|(name, operation)| engine.measure_named(name, operation, config))
            .collect()
    }

    /// Measures all operations and compares every later one against the
    /// first. Returns an empty list when fewer than two are registered.
    pub fn run_and_compare(&mut self) -> Result<Vec<BenchmarkComparison>> {
        let mut results = self.run_all()?.into_iter();
        match results.next() {
            Some(baseline) => {
                let candidates: Vec<BenchmarkResult> = results.collect();
                Ok(compare_many(&baseline, &candidates))
            }
            None => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_measure_all_preserves_order() {
        let log = RefCell::new(Vec::new());
        let operations: Vec<Operation> = vec![
            Box::new(|| log.borrow_mut().push('a')),
            Box::new(|| log.borrow_mut().push('b')),
        ];

        let results = measure_all(operations, &BenchConfig::new(3)).unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(*log.borrow(), vec!['a', 'a', 'a', 'b', 'b', 'b']);
        assert!(results.iter().all(|r| r.iterations == 3));
    }

    #[test]
    fn test_measure_all_empty() {
        let operations: Vec<Operation> = Vec::new();
        assert!(measure_all(operations, &BenchConfig::new(1)).unwrap().is_empty());
    }

    #[test]
    fn test_measure_all_invalid_config_fails_whole_batch() {
        let operations: Vec<Operation> = vec![Box::new(|| {}), Box::new(|| {})];
        let err = measure_all(operations, &BenchConfig::new(0)).unwrap_err();
        assert!(err.is_invalid_config());
    }

    #[test]
    fn test_try_measure_all_stops_at_first_failure() {
        let mut second_calls = 0u32;
        let mut third_calls = 0u32;
        let operations: Vec<Box<dyn FnMut() -> std::result::Result<(), &'static str> + '_>> = vec![
            Box::new(|| Ok(())),
            Box::new(|| {
                second_calls += 1;
                Err("second failed")
            }),
            Box::new(|| {
                third_calls += 1;
                Ok(())
            }),
        ];

        let err = try_measure_all(operations, &BenchConfig::new(5)).unwrap_err();
        assert!(err.is_operation_failure());
        assert_eq!(second_calls, 1);
        assert_eq!(third_calls, 0);
    }

    #[test]
    fn test_measure_all_named() {
        fn noop() {}
        let operations = [("first", noop as fn()), ("second", noop as fn())];
        let results = Benchmarker::new()
            .measure_all_named(operations, &BenchConfig::new(2))
            .unwrap();
        assert_eq!(results[0].display_name(), "first");
        assert_eq!(results[1].display_name(), "second");
    }

    #[test]
    fn test_runner_register_and_run() {
        let mut count = 0u64;
        let results = {
            let mut runner = BenchmarkRunner::new(BenchConfig::new(7).with_warmup(3));
            runner.register("count", || count += 1);
            assert_eq!(runner.len(), 1);
            runner.run_all().unwrap()
        };

        assert_eq!(count, 10);
        assert_eq!(results[0].display_name(), "count");
        assert_eq!(results[0].iterations, 7);
    }

    #[test]
    fn test_runner_run_and_compare() {
        let mut runner = BenchmarkRunner::new(BenchConfig::new(5));
        runner
            .register("baseline", || {})
            .register("candidate_a", || {})
            .register("candidate_b", || {});

        let comparisons = runner.run_and_compare().unwrap();
        assert_eq!(comparisons.len(), 2);
        assert_eq!(comparisons[0].baseline.display_name(), "baseline");
        assert_eq!(comparisons[0].candidate.display_name(), "candidate_a");
        assert_eq!(comparisons[1].candidate.display_name(), "candidate_b");
    }

    #[test]
    fn test_runner_empty_compare() {
        let mut runner = BenchmarkRunner::new(BenchConfig::new(1));
        assert!(runner.is_empty());
        assert!(runner.run_and_compare().unwrap().is_empty());
    }
}
