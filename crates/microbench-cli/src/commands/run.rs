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

//! Measurement sections and their rendering.

use super::workloads::Workload;
use crate::error::CliError;
use colored::Colorize;
use microbench::reporters::{export_json, format_comparison_table, format_result, to_json};
use microbench::{
    measure_named, start_scope, BenchConfig, BenchmarkComparison, BenchmarkReport, BenchmarkResult,
    Benchmarker,
};
use std::path::PathBuf;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summaries and tables
    #[default]
    Text,
    /// A single JSON report
    Json,
}

/// Where and how results are written.
#[derive(Debug, Clone, Default)]
pub struct OutputOptions {
    /// Format printed to stdout.
    pub format: OutputFormat,
    /// When set, the JSON report is written to this file.
    pub output: Option<PathBuf>,
}

/// One titled group of results, optionally with comparisons.
#[derive(Debug, Clone)]
pub struct Section {
    /// Section heading.
    pub title: &'static str,
    /// Measured results.
    pub results: Vec<BenchmarkResult>,
    /// Baseline name and comparisons against it.
    pub comparisons: Option<(String, Vec<BenchmarkComparison>)>,
}

impl Section {
    fn results(title: &'static str, results: Vec<BenchmarkResult>) -> Self {
        Self {
            title,
            results,
            comparisons: None,
        }
    }
}

/// Measures one workload.
pub fn single_section(workload: &Workload, config: &BenchConfig) -> Result<Section, CliError> {
    let result = measure_named(workload.name, workload.run, config)?;
    Ok(Section::results("Start Single", vec![result]))
}

/// Measures several workloads in order with one configuration.
pub fn multiple_section(
    workloads: &[&Workload],
    config: &BenchConfig,
) -> Result<Section, CliError> {
    let results = Benchmarker::new()
        .measure_all_named(workloads.iter().map(|w| (w.name, w.run)), config)?;
    Ok(Section::results("Start Multiple", results))
}

/// Runs a hand-written loop over a workload inside a measurement scope.
///
/// The scope has no warmup phase; only the iteration count is used.
pub fn scope_section(workload: &Workload, config: &BenchConfig) -> Result<Section, CliError> {
    config.validate()?;
    let iterations = config.iterations();

    let mut slot = None;
    {
        let mut scope = start_scope(&mut slot).named(format!("{} (scope)", workload.name));
        for _ in 0..iterations {
            (workload.run)();
        }
        scope.set_iterations(iterations);
    }

    Ok(Section::results("Start Scope", slot.into_iter().collect()))
}

/// Measures `baseline` once and compares every candidate against it.
pub fn compare_section(
    baseline: &Workload,
    candidates: &[&Workload],
    config: &BenchConfig,
) -> Result<Section, CliError> {
    let comparisons = Benchmarker::new().compare_all_named(
        baseline.name,
        baseline.run,
        config,
        candidates.iter().map(|w| (w.name, w.run)),
    )?;

    Ok(Section {
        title: "Start and Compare",
        results: Vec::new(),
        comparisons: Some((baseline.name.to_string(), comparisons)),
    })
}

fn build_report(sections: &[Section]) -> BenchmarkReport {
    let title = sections
        .iter()
        .map(|s| s.title)
        .collect::<Vec<_>>()
        .join(", ");
    let mut report = BenchmarkReport::new(title);
    for section in sections {
        for result in &section.results {
            report.add_result(result.clone());
        }
        if let Some((_, comparisons)) = &section.comparisons {
            report.add_comparisons(comparisons.iter().cloned());
        }
    }
    report
}

fn verdict(comparison: &BenchmarkComparison) -> String {
    let name = comparison.candidate.display_name();
    let delta = comparison.elapsed_ticks;
    // A zero baseline has no meaningful percentage.
    let magnitude = if comparison.baseline.elapsed_ticks == 0 {
        format!("{} ticks", delta.absolute.abs())
    } else {
        format!("{:.2}%", delta.percentage.abs())
    };
    if delta.absolute < 0.0 {
        format!("{} is {} faster", name, magnitude).green().to_string()
    } else if delta.absolute > 0.0 {
        format!("{} is {} slower", name, magnitude).red().to_string()
    } else {
        format!("{} is unchanged", name)
    }
}

fn print_text(sections: &[Section]) {
    for section in sections {
        println!("{}", format!("=== {} ===", section.title).bold());
        for result in &section.results {
            println!("{}", format_result(result));
        }
        if let Some((baseline, comparisons)) = &section.comparisons {
            println!("{}", format_comparison_table(baseline, comparisons));
            for comparison in comparisons {
                println!("  {}", verdict(comparison));
            }
            println!();
        }
    }
}

/// Writes sections according to `options`.
pub fn emit(sections: &[Section], options: &OutputOptions) -> Result<(), CliError> {
    let report = build_report(sections);

    match options.format {
        OutputFormat::Text => print_text(sections),
        OutputFormat::Json if options.output.is_none() => println!("{}", to_json(&report)?),
        OutputFormat::Json => {}
    }

    if let Some(path) = &options.output {
        export_json(&report, path).map_err(|e| CliError::io_error(path, e))?;
        tracing::info!(path = %path.display(), "report written");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::workloads::find_workload;
    use microbench::compare;
    use microbench::core::CollectionDelta;
    use std::time::Duration;

    fn config() -> BenchConfig {
        BenchConfig::new(10).with_warmup(2)
    }

    #[test]
    fn test_single_section() {
        let section = single_section(find_workload("contains").unwrap(), &config()).unwrap();
        assert_eq!(section.results.len(), 1);
        assert_eq!(section.results[0].display_name(), "contains");
        assert_eq!(section.results[0].iterations, 10);
    }

    #[test]
    fn test_multiple_section_order() {
        let workloads = vec![
            find_workload("find").unwrap(),
            find_workload("format").unwrap(),
        ];
        let section = multiple_section(&workloads, &config()).unwrap();
        assert_eq!(section.results[0].display_name(), "find");
        assert_eq!(section.results[1].display_name(), "format");
    }

    #[test]
    fn test_scope_section() {
        let section = scope_section(find_workload("vec-push").unwrap(), &config()).unwrap();
        assert_eq!(section.results[0].display_name(), "vec-push (scope)");
        assert_eq!(section.results[0].iterations, 10);
    }

    #[test]
    fn test_scope_section_rejects_zero_iterations() {
        let err = scope_section(find_workload("find").unwrap(), &BenchConfig::new(0)).unwrap_err();
        assert!(matches!(err, CliError::Bench(_)));
    }

    #[test]
    fn test_compare_section_names() {
        let candidates = vec![find_workload("find").unwrap()];
        let section =
            compare_section(find_workload("contains").unwrap(), &candidates, &config()).unwrap();
        let (baseline, comparisons) = section.comparisons.unwrap();

        assert_eq!(baseline, "contains");
        assert_eq!(comparisons.len(), 1);
        assert_eq!(comparisons[0].baseline.display_name(), "contains");
        assert_eq!(comparisons[0].candidate.display_name(), "find");
    }

    fn ticks(nanos: u64, name: &str) -> BenchmarkResult {
        BenchmarkResult::from_run(Duration::from_nanos(nanos), CollectionDelta::default(), 1)
            .with_name(name)
    }

    #[test]
    fn test_verdict_uses_percentage() {
        let line = verdict(&compare(&ticks(200, "base"), &ticks(150, "fast")));
        assert!(line.contains("fast is 25.00% faster"));

        let line = verdict(&compare(&ticks(200, "base"), &ticks(300, "slow")));
        assert!(line.contains("slow is 50.00% slower"));
    }

    #[test]
    fn test_verdict_zero_baseline_reports_ticks() {
        let line = verdict(&compare(&ticks(0, "base"), &ticks(40, "slow")));
        assert!(line.contains("slow is 40 ticks slower"));
        assert!(!line.contains('%'));
    }

    #[test]
    fn test_verdict_unchanged() {
        let line = verdict(&compare(&ticks(0, "base"), &ticks(0, "same")));
        assert_eq!(line, "same is unchanged");
    }

    #[test]
    fn test_build_report_merges_sections() {
        let workload = find_workload("contains").unwrap();
        let sections = vec![
            single_section(workload, &config()).unwrap(),
            compare_section(workload, &[workload], &config()).unwrap(),
        ];
        let report = build_report(&sections);
        assert_eq!(report.title, "Start Single, Start and Compare");
        assert_eq!(report.results.len(), 1);
        assert_eq!(report.comparisons.len(), 1);
    }

    #[test]
    fn test_emit_writes_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let sections = vec![single_section(find_workload("find").unwrap(), &config()).unwrap()];
        let options = OutputOptions {
            format: OutputFormat::Json,
            output: Some(path.clone()),
        };

        emit(&sections, &options).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let report: BenchmarkReport = serde_json::from_str(&content).unwrap();
        assert_eq!(report.results[0].display_name(), "find");
    }
}
