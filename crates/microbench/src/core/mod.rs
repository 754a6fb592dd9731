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

//! Core measurement infrastructure.
//!
//! # Modules
//!
//! - `config`: Per-run configuration (iterations, warmup policy)
//! - `collector`: Generational collection counters
//! - `measurement`: The measurement engine and its result record
//! - `scope`: Guard-based measurement of caller-controlled code

pub mod collector;
pub mod config;
pub mod measurement;
pub mod scope;

// Re-export commonly used types
pub use collector::{
    CollectionCounter, CollectionDelta, CollectionSnapshot, Generation, NoCollector,
};
pub use config::{BenchConfig, WarmupSetup, DEFAULT_ITERATIONS, DEFAULT_WARMUP_ITERATIONS};
pub use measurement::{measure, measure_named, try_measure, BenchmarkResult, Benchmarker};
pub use scope::{start_scope, MeasurementScope};
