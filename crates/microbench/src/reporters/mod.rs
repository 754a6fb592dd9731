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

//! Reporting helpers for measurement records.
//!
//! Formatting lives here, not on the record types: every function takes
//! results or comparisons by reference and renders them.
//!
//! # Modules
//!
//! - `types`: Serializable report document
//! - `console`: Human-readable summaries and the comparison table
//! - `json`: JSON export

pub mod console;
pub mod json;
pub mod types;

pub use console::{format_comparison_table, format_result, print_comparisons, print_result};
pub use json::{export_json, to_json};
pub use types::BenchmarkReport;
