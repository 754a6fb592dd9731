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

//! Report document types.

use crate::core::measurement::BenchmarkResult;
use crate::harness::comparator::BenchmarkComparison;
use serde::{Deserialize, Serialize};

/// Collection of results and comparisons produced by one session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    /// Report title.
    pub title: String,
    /// Measured results, in measurement order.
    pub results: Vec<BenchmarkResult>,
    /// Comparisons against a baseline, in candidate order.
    pub comparisons: Vec<BenchmarkComparison>,
}

impl BenchmarkReport {
    /// Creates an empty report.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            results: Vec::new(),
            comparisons: Vec::new(),
        }
    }

    /// Appends a result.
    pub fn add_result(&mut self, result: BenchmarkResult) {
        self.results.push(result);
    }

    /// Appends comparisons.
    pub fn add_comparisons(&mut self, comparisons: impl IntoIterator<Item = BenchmarkComparison>) {
        self.comparisons.extend(comparisons);
    }

    /// Returns true when the report holds nothing.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty() && self.comparisons.is_empty()
    }
}
