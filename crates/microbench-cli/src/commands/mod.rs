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

//! Command implementations for the microbench CLI.
//!
//! Each command measures built-in workloads and produces one or more
//! [`Section`]s, which [`emit`] renders as text, JSON, or both.

mod run;
mod workloads;

pub use run::{
    compare_section, emit, multiple_section, scope_section, single_section, OutputFormat,
    OutputOptions, Section,
};
pub use workloads::{find_workload, resolve_workloads, Workload, WORKLOADS};

/// Renders the workload catalogue.
pub fn list_workloads() -> String {
    let width = WORKLOADS.iter().map(|w| w.name.len()).max().unwrap_or(0);
    WORKLOADS
        .iter()
        .map(|w| format!("{:width$}  {}", w.name, w.description, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}
