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

//! Microbench CLI library.
//!
//! The driver around the `microbench` harness: it picks built-in workloads,
//! feeds them to the engine with a configuration built from command-line
//! flags, and prints the resulting records.
//!
//! # Commands
//!
//! - **single**: measure one workload
//! - **multiple**: measure several workloads with one configuration
//! - **scope**: time a hand-written loop inside a measurement scope
//! - **compare**: compare candidates against a baseline measured once
//! - **all**: run every demonstration in sequence
//! - **list**: list the built-in workloads

pub mod cli;
pub mod commands;
pub mod error;

pub use error::CliError;
