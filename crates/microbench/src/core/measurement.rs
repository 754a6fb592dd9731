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

//! The measurement engine.
//!
//! Runs an operation for a configured number of iterations inside a timed,
//! collection-counted scope, optionally preceded by a warmup phase, and
//! packages the outcome as an immutable [`BenchmarkResult`].
//!
//! The order of a run is fixed:
//!
//! 1. warmup-setup hook (once), then `warmup_iterations` unmeasured calls
//! 2. collection snapshot, immediately followed by the timer start
//! 3. `iterations` calls in a tight loop
//! 4. timer stop, then the closing collection snapshot
//!
//! Averages use integer division and drop the fractional remainder.

use crate::core::collector::{CollectionCounter, CollectionDelta, Generation, NoCollector};
use crate::core::config::BenchConfig;
use crate::core::scope::{MeasurementScope, RunTimer};
use crate::error::{BenchError, OperationError, Result};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::time::Duration;

/// Outcome of measuring one operation.
///
/// One tick is one nanosecond of the monotonic clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Optional display name for reporting.
    pub name: Option<String>,
    /// Total elapsed time of the measured loop.
    pub elapsed: Duration,
    /// Total elapsed whole milliseconds.
    pub elapsed_ms: u64,
    /// Total elapsed ticks.
    pub elapsed_ticks: u64,
    /// `elapsed_ms / iterations`, truncated.
    pub average_ms: u64,
    /// `elapsed_ticks / iterations`, truncated.
    pub average_ticks: u64,
    /// Generation 0 collections during the measured loop.
    pub gen0_collections: i64,
    /// Generation 1 collections during the measured loop.
    pub gen1_collections: i64,
    /// Generation 2 collections during the measured loop.
    pub gen2_collections: i64,
    /// Number of measured iterations.
    pub iterations: u64,
}

impl BenchmarkResult {
    /// Builds a result from raw run data.
    ///
    /// A zero iteration count yields zero averages instead of dividing by
    /// zero. The engine never produces one; only a scope whose caller set
    /// zero iterations can.
    pub fn from_run(elapsed: Duration, collections: CollectionDelta, iterations: u64) -> Self {
        let elapsed_ms = saturating_u64(elapsed.as_millis());
        let elapsed_ticks = saturating_u64(elapsed.as_nanos());

        Self {
            name: None,
            elapsed,
            elapsed_ms,
            elapsed_ticks,
            average_ms: elapsed_ms.checked_div(iterations).unwrap_or(0),
            average_ticks: elapsed_ticks.checked_div(iterations).unwrap_or(0),
            gen0_collections: collections.gen0,
            gen1_collections: collections.gen1,
            gen2_collections: collections.gen2,
            iterations,
        }
    }

    /// Attaches a display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Display name, or `<anonymous>` when none was attached.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<anonymous>")
    }

    /// Collections attributed to `generation`.
    pub fn collections(&self, generation: Generation) -> i64 {
        match generation {
            Generation::Gen0 => self.gen0_collections,
            Generation::Gen1 => self.gen1_collections,
            Generation::Gen2 => self.gen2_collections,
        }
    }
}

fn saturating_u64(value: u128) -> u64 {
    u64::try_from(value).unwrap_or(u64::MAX)
}

/// Measurement engine bound to a collection counter.
///
/// `Benchmarker::new()` uses [`NoCollector`]; the free functions in this
/// module are shorthands for it.
#[derive(Debug, Clone, Default)]
pub struct Benchmarker<C = NoCollector> {
    counter: C,
}

impl Benchmarker<NoCollector> {
    /// Creates an engine that reports zero collections.
    pub fn new() -> Self {
        Self {
            counter: NoCollector,
        }
    }
}

impl<C: CollectionCounter> Benchmarker<C> {
    /// Creates an engine reading collection counts from `counter`.
    pub fn with_counter(counter: C) -> Self {
        Self { counter }
    }

    /// The collection counter in use.
    pub fn counter(&self) -> &C {
        &self.counter
    }

    /// Measures `operation` under `config`.
    ///
    /// Panics raised by the operation or the warmup-setup hook unwind
    /// through this call; nothing is returned for the aborted run.
    pub fn measure<F>(&self, mut operation: F, config: &BenchConfig) -> Result<BenchmarkResult>
    where
        F: FnMut(),
    {
        self.run(
            None,
            || {
                operation();
                Ok::<(), Infallible>(())
            },
            config,
        )
    }

    /// Measures `operation` and attaches `name` to the result.
    pub fn measure_named<F>(
        &self,
        name: &str,
        mut operation: F,
        config: &BenchConfig,
    ) -> Result<BenchmarkResult>
    where
        F: FnMut(),
    {
        self.run(
            Some(name),
            || {
                operation();
                Ok::<(), Infallible>(())
            },
            config,
        )
    }

    /// Measures a fallible operation.
    ///
    /// The first `Err`, during warmup or the measured loop, aborts the run
    /// and is returned as [`BenchError::OperationFailed`].
    pub fn try_measure<F, E>(&self, operation: F, config: &BenchConfig) -> Result<BenchmarkResult>
    where
        F: FnMut() -> std::result::Result<(), E>,
        E: Into<OperationError>,
    {
        self.run(None, operation, config)
    }

    /// Named variant of [`Benchmarker::try_measure`].
    pub fn try_measure_named<F, E>(
        &self,
        name: &str,
        operation: F,
        config: &BenchConfig,
    ) -> Result<BenchmarkResult>
    where
        F: FnMut() -> std::result::Result<(), E>,
        E: Into<OperationError>,
    {
        self.run(Some(name), operation, config)
    }

    /// Opens a measurement scope over a caller-controlled block.
    ///
    /// See [`MeasurementScope`].
    pub fn start_scope<'a>(
        &'a self,
        slot: &'a mut Option<BenchmarkResult>,
    ) -> MeasurementScope<'a, &'a C> {
        MeasurementScope::start(slot, &self.counter)
    }

    fn run<F, E>(
        &self,
        name: Option<&str>,
        mut operation: F,
        config: &BenchConfig,
    ) -> Result<BenchmarkResult>
    where
        F: FnMut() -> std::result::Result<(), E>,
        E: Into<OperationError>,
    {
        config.validate()?;

        let iterations = config.iterations();
        tracing::debug!(
            operation = name.unwrap_or("<anonymous>"),
            iterations,
            warmup = config.warmup_enabled(),
            warmup_iterations = config.warmup_iterations(),
            "starting measurement"
        );

        if config.warmup_enabled() {
            if let Some(setup) = config.warmup_setup() {
                setup();
            }
            for _ in 0..config.warmup_iterations() {
                operation().map_err(|e| BenchError::operation_failed(name, e))?;
            }
            tracing::trace!(
                operation = name.unwrap_or("<anonymous>"),
                "warmup complete"
            );
        }

        let timer = RunTimer::start(&self.counter);
        for _ in 0..iterations {
            operation().map_err(|e| BenchError::operation_failed(name, e))?;
        }
        let mut result = timer.stop(iterations);
        if let Some(name) = name {
            result.name = Some(name.to_string());
        }

        tracing::debug!(
            operation = result.display_name(),
            elapsed_ms = result.elapsed_ms,
            elapsed_ticks = result.elapsed_ticks,
            average_ticks = result.average_ticks,
            gen0 = result.gen0_collections,
            gen1 = result.gen1_collections,
            gen2 = result.gen2_collections,
            "measurement complete"
        );

        Ok(result)
    }
}

/// Measures `operation` under `config` with the default engine.
///
/// # Example
///
/// ```
/// use microbench::core::config::BenchConfig;
/// use microbench::core::measurement::measure;
///
/// let mut counter = 0u64;
/// let config = BenchConfig::new(1_000).with_warmup(100);
/// let result = measure(|| counter += 1, &config).unwrap();
///
/// assert_eq!(result.iterations, 1_000);
/// assert_eq!(result.average_ticks, result.elapsed_ticks / 1_000);
/// ```
pub fn measure<F>(operation: F, config: &BenchConfig) -> Result<BenchmarkResult>
where
    F: FnMut(),
{
    Benchmarker::new().measure(operation, config)
}

/// Measures `operation` and attaches `name` to the result.
pub fn measure_named<F>(name: &str, operation: F, config: &BenchConfig) -> Result<BenchmarkResult>
where
    F: FnMut(),
{
    Benchmarker::new().measure_named(name, operation, config)
}

/// Measures a fallible operation with the default engine.
pub fn try_measure<F, E>(operation: F, config: &BenchConfig) -> Result<BenchmarkResult>
where
    F: FnMut() -> std::result::Result<(), E>,
    E: Into<OperationError>,
{
    Benchmarker::new().try_measure(operation, config)
}
