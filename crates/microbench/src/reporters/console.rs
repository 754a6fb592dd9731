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

//! Console reporter for benchmark results.

use crate::core::collector::Generation;
use crate::core::measurement::BenchmarkResult;
use crate::harness::comparator::{BenchmarkComparison, Metric, MetricDelta};
use std::fmt::Write;

/// Renders a multi-line summary of one result.
pub fn format_result(result: &BenchmarkResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "--> {} <--", result.display_name());
    let _ = writeln!(out, "Iterations: {}", result.iterations);
    let _ = writeln!(out, "Execution Time: {:?}", result.elapsed);
    let _ = writeln!(out, "Execution Time (ms): {}", result.elapsed_ms);
    let _ = writeln!(out, "Execution Ticks: {}", result.elapsed_ticks);
    let _ = writeln!(out, "Average Execution Time (ms): {}", result.average_ms);
    let _ = writeln!(out, "Average Execution Ticks: {}", result.average_ticks);
    for generation in Generation::ALL {
        let _ = writeln!(
            out,
            "Garbage Collections ({}): {}",
            generation.tier(),
            result.collections(generation)
        );
    }
    out
}

fn format_delta(delta: MetricDelta) -> String {
    format!("{} ({:.2}%)", delta.absolute, delta.percentage)
}

/// Renders comparisons as a tab-separated table.
///
/// Each row is labelled with the candidate's display name; each cell is
/// `absolute (percentage%)`.
pub fn format_comparison_table(baseline_name: &str, comparisons: &[BenchmarkComparison]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Method comparisons executed against {}:\n", baseline_name);

    let mut header = String::from("Method");
    for metric in Metric::ALL {
        header.push('\t');
        header.push_str(metric.label());
    }
    let _ = writeln!(out, "{}", header);

    for comparison in comparisons {
        let mut row = comparison.candidate.display_name().to_string();
        for (_, delta) in comparison.deltas() {
            row.push('\t');
            row.push_str(&format_delta(delta));
        }
        let _ = writeln!(out, "{}", row);
    }
    out
}

/// Prints a result summary to stdout.
pub fn print_result(result: &BenchmarkResult) {
    println!("{}", format_result(result));
}

/// Prints the comparison table to stdout.
pub fn print_comparisons(baseline_name: &str, comparisons: &[BenchmarkComparison]) {
    println!("{}", format_comparison_table(baseline_name, comparisons));
}
