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

//! Microbench - micro-benchmark harness
//!
//! Runs a zero-argument operation a configured number of times, measures
//! wall-clock time and generational collection activity, and compares a
//! baseline against alternative operations.
//!
//! ## Features
//!
//! - **Measurement engine**: warmup, then a timed and collection-counted loop
//! - **Scoped measurement**: guard-based timing of caller-controlled code
//! - **Batch runner**: one configuration applied to an ordered list of operations
//! - **Comparator**: signed absolute and percentage differences per metric
//!
//! ## Usage
//!
//! ```
//! use microbench::{compare_all, measure, BenchConfig, Operation};
//!
//! let config = BenchConfig::new(10_000).with_warmup(1_000);
//!
//! let mut counter = 0u64;
//! let result = measure(|| counter += 1, &config).unwrap();
//! assert_eq!(result.iterations, 10_000);
//!
//! let mut v = Vec::new();
//! let candidates: Vec<Operation> = vec![Box::new(|| v.push(1u8))];
//! let comparisons = compare_all(|| {}, &config, candidates).unwrap();
//! assert_eq!(comparisons.len(), 1);
//! ```
//!
//! Rust has no tracing collector, so the default engine reports zero
//! collections at every generation. Supply a
//! [`CollectionCounter`](core::CollectionCounter) through
//! [`Benchmarker::with_counter`](core::Benchmarker::with_counter) to attribute
//! real counts.

pub mod core;
pub mod error;
pub mod harness;
pub mod reporters;

// Re-export key types for convenience
pub use crate::core::{
    measure, measure_named, start_scope, try_measure, BenchConfig, BenchmarkResult, Benchmarker,
    CollectionCounter, Generation, MeasurementScope, NoCollector,
};
pub use error::{BenchError, OperationError, Result};
pub use harness::{
    compare, compare_all, compare_many, measure_all, try_measure_all, BenchmarkComparison,
    BenchmarkRunner, Metric, MetricDelta, Operation,
};
pub use reporters::BenchmarkReport;
