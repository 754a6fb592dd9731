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

//! CLI command definitions and argument parsing.
//!
//! Every measuring command shares [`RunArgs`], which maps onto a
//! [`BenchConfig`] and the output options.

use crate::commands::{self, OutputFormat, OutputOptions, Section};
use crate::error::CliError;
use clap::{Args, Subcommand};
use microbench::core::{DEFAULT_ITERATIONS, DEFAULT_WARMUP_ITERATIONS};
use microbench::BenchConfig;
use std::path::PathBuf;

/// Measurement and output options shared by all measuring commands.
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Number of measured iterations per workload
    #[arg(short = 'n', long, default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: u64,

    /// Number of unmeasured warmup iterations
    #[arg(short = 'w', long, default_value_t = DEFAULT_WARMUP_ITERATIONS)]
    pub warmup_iterations: u64,

    /// Skip the warmup phase
    #[arg(long)]
    pub no_warmup: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the JSON report to this file
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl RunArgs {
    /// Builds the benchmark configuration.
    pub fn config(&self) -> BenchConfig {
        let config = BenchConfig::new(self.iterations);
        if self.no_warmup {
            config
        } else {
            config.with_warmup(self.warmup_iterations)
        }
    }

    /// Builds the output options.
    pub fn output_options(&self) -> OutputOptions {
        OutputOptions {
            format: self.format,
            output: self.output.clone(),
        }
    }
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Measure a single workload
    Single {
        /// Workload to measure
        #[arg(default_value = "contains")]
        workload: String,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Measure several workloads in order with the same configuration
    Multiple {
        /// Workloads to measure (default: all)
        workloads: Vec<String>,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Time a hand-written loop over a workload inside a measurement scope
    Scope {
        /// Workload to loop over
        #[arg(default_value = "contains")]
        workload: String,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Compare candidate workloads against a baseline
    Compare {
        /// Baseline workload, measured once
        #[arg(short, long, default_value = "contains")]
        baseline: String,

        /// Candidate workloads (default: find)
        candidates: Vec<String>,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Run the single, multiple, scope and compare demonstrations
    All {
        #[command(flatten)]
        run: RunArgs,
    },

    /// List built-in workloads
    List,
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a workload name is unknown, the configuration is
    /// invalid, or the report cannot be written.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Single { workload, run } => {
                let workload = commands::find_workload(&workload)?;
                let section = commands::single_section(workload, &run.config())?;
                commands::emit(&[section], &run.output_options())
            }
            Commands::Multiple { workloads, run } => {
                let workloads = commands::resolve_workloads(&workloads)?;
                let section = commands::multiple_section(&workloads, &run.config())?;
                commands::emit(&[section], &run.output_options())
            }
            Commands::Scope { workload, run } => {
                let workload = commands::find_workload(&workload)?;
                let section = commands::scope_section(workload, &run.config())?;
                commands::emit(&[section], &run.output_options())
            }
            Commands::Compare {
                baseline,
                candidates,
                run,
            } => {
                let section = compare(&baseline, &candidates, &run.config())?;
                commands::emit(&[section], &run.output_options())
            }
            Commands::All { run } => {
                let config = run.config();
                let baseline = commands::find_workload("contains")?;
                let candidate = commands::find_workload("find")?;
                let sections = vec![
                    commands::single_section(baseline, &config)?,
                    commands::multiple_section(&[baseline, candidate], &config)?,
                    commands::scope_section(baseline, &config)?,
                    commands::compare_section(baseline, &[candidate], &config)?,
                ];
                commands::emit(&sections, &run.output_options())
            }
            Commands::List => {
                println!("{}", commands::list_workloads());
                Ok(())
            }
        }
    }
}

fn compare(
    baseline: &str,
    candidates: &[String],
    config: &BenchConfig,
) -> Result<Section, CliError> {
    let baseline = commands::find_workload(baseline)?;
    let candidates = if candidates.is_empty() {
        vec![commands::find_workload("find")?]
    } else {
        commands::resolve_workloads(candidates)?
    };
    commands::compare_section(baseline, &candidates, config)
}
