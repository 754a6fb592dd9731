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

//! Scoped measurement of caller-controlled code.
//!
//! A [`MeasurementScope`] is a guard: it snapshots the collection counters
//! and starts the timer when created, and it writes a finished
//! [`BenchmarkResult`] into a caller-supplied slot when dropped. Dropping
//! happens on every exit path, including `?` early returns and panic
//! unwinding, so the slot is always filled once the scope is gone.
//!
//! ```
//! use microbench::core::scope::start_scope;
//!
//! let mut result = None;
//! {
//!     let mut scope = start_scope(&mut result);
//!     let mut total = 0u64;
//!     for i in 0..1_000u64 {
//!         total = total.wrapping_add(i * i);
//!     }
//!     scope.set_iterations(1_000);
//!     assert!(total > 0);
//! }
//! assert_eq!(result.unwrap().iterations, 1_000);
//! ```

use crate::core::collector::{CollectionCounter, CollectionSnapshot, NoCollector};
use crate::core::measurement::BenchmarkResult;
use std::time::{Duration, Instant};

/// Timer paired with a collection snapshot.
///
/// The snapshot is taken immediately before the clock starts and the
/// closing snapshot immediately after it stops.
pub(crate) struct RunTimer<C: CollectionCounter> {
    counter: C,
    before: CollectionSnapshot,
    start: Instant,
}

impl<C: CollectionCounter> RunTimer<C> {
    pub(crate) fn start(counter: C) -> Self {
        let before = counter.snapshot();
        let start = Instant::now();
        Self {
            counter,
            before,
            start,
        }
    }

    pub(crate) fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub(crate) fn stop(&self, iterations: u64) -> BenchmarkResult {
        let elapsed = self.start.elapsed();
        let after = self.counter.snapshot();
        BenchmarkResult::from_run(elapsed, self.before.delta_to(&after), iterations)
    }
}

/// Guard measuring everything between its creation and its drop.
///
/// The block counts as a single iteration unless the caller reports
/// otherwise with [`MeasurementScope::set_iterations`]. Reporting zero
/// iterations yields zero averages.
pub struct MeasurementScope<'a, C: CollectionCounter = NoCollector> {
    slot: &'a mut Option<BenchmarkResult>,
    timer: RunTimer<C>,
    name: Option<String>,
    iterations: u64,
}

impl<'a, C: CollectionCounter> MeasurementScope<'a, C> {
    /// Snapshots `counter`, starts the timer and returns the guard.
    pub fn start(slot: &'a mut Option<BenchmarkResult>, counter: C) -> Self {
        Self {
            slot,
            timer: RunTimer::start(counter),
            name: None,
            iterations: 1,
        }
    }

    /// Attaches a display name to the result.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets how many iterations the block performed.
    pub fn set_iterations(&mut self, iterations: u64) {
        self.iterations = iterations;
    }

    /// Number of iterations currently reported.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Time elapsed so far, without finalizing.
    pub fn elapsed(&self) -> Duration {
        self.timer.elapsed()
    }

    /// Ends the scope now. Equivalent to dropping it.
    pub fn finish(self) {}
}

impl<C: CollectionCounter> Drop for MeasurementScope<'_, C> {
    fn drop(&mut self) {
        let mut result = self.timer.stop(self.iterations);
        result.name = self.name.take();

        tracing::debug!(
            operation = result.display_name(),
            elapsed_ticks = result.elapsed_ticks,
            iterations = result.iterations,
            unwinding = std::thread::panicking(),
            "measurement scope finalized"
        );

        *self.slot = Some(result);
    }
}

/// Opens a scope with the default engine (zero collection counts).
pub fn start_scope(slot: &mut Option<BenchmarkResult>) -> MeasurementScope<'_, NoCollector> {
    MeasurementScope::start(slot, NoCollector)
}
