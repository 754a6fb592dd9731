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

//! Generational collection counters.
//!
//! The engine attributes collection events to a measured run by reading a
//! cumulative per-generation counter before and after the timed loop. Rust
//! has no tracing collector of its own, so the default [`NoCollector`]
//! reports zero for every generation. Hosts that embed a collected runtime
//! implement [`CollectionCounter`] and hand it to
//! [`Benchmarker::with_counter`](crate::core::measurement::Benchmarker::with_counter).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A collector generation, from most frequent and cheapest (`Gen0`) to
/// least frequent and most expensive (`Gen2`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Generation {
    /// Youngest generation.
    Gen0,
    /// Middle generation.
    Gen1,
    /// Oldest generation.
    Gen2,
}

impl Generation {
    /// All generations, youngest first.
    pub const ALL: [Generation; 3] = [Generation::Gen0, Generation::Gen1, Generation::Gen2];

    /// Numeric tier (0, 1 or 2).
    pub fn tier(self) -> u8 {
        match self {
            Generation::Gen0 => 0,
            Generation::Gen1 => 1,
            Generation::Gen2 => 2,
        }
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GC{}", self.tier())
    }
}

/// Source of cumulative collection counts.
///
/// Counts are expected to be monotonic per generation. The engine does not
/// clamp: a counter that moves backwards shows up as a negative delta.
pub trait CollectionCounter {
    /// Cumulative number of collections of `generation` since process start.
    fn collection_count(&self, generation: Generation) -> u64;

    /// Reads all three generations at once.
    fn snapshot(&self) -> CollectionSnapshot {
        CollectionSnapshot {
            gen0: self.collection_count(Generation::Gen0),
            gen1: self.collection_count(Generation::Gen1),
            gen2: self.collection_count(Generation::Gen2),
        }
    }
}

impl<C: CollectionCounter + ?Sized> CollectionCounter for &C {
    fn collection_count(&self, generation: Generation) -> u64 {
        (**self).collection_count(generation)
    }
}

/// Counter for runtimes without a generational collector: always zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoCollector;

impl CollectionCounter for NoCollector {
    fn collection_count(&self, _generation: Generation) -> u64 {
        0
    }
}

/// Cumulative counts of the three generations at one instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectionSnapshot {
    pub gen0: u64,
    pub gen1: u64,
    pub gen2: u64,
}

impl CollectionSnapshot {
    /// Per-generation events between `self` (earlier) and `later`.
    ///
    /// Each generation is differenced against its own later count.
    pub fn delta_to(&self, later: &CollectionSnapshot) -> CollectionDelta {
        let delta = CollectionDelta {
            gen0: signed_delta(self.gen0, later.gen0),
            gen1: signed_delta(self.gen1, later.gen1),
            gen2: signed_delta(self.gen2, later.gen2),
        };
        if delta.gen0 < 0 || delta.gen1 < 0 || delta.gen2 < 0 {
            tracing::warn!(
                gen0 = delta.gen0,
                gen1 = delta.gen1,
                gen2 = delta.gen2,
                "collection counter moved backwards during measurement"
            );
        }
        delta
    }
}

/// Collection events attributed to a measured run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectionDelta {
    pub gen0: i64,
    pub gen1: i64,
    pub gen2: i64,
}

fn signed_delta(before: u64, after: u64) -> i64 {
    (after as i128 - before as i128).clamp(i64::MIN as i128, i64::MAX as i128) as i64
}
