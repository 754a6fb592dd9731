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

//! Structured error types for the microbench CLI.

use microbench::BenchError;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for CLI operations.
#[derive(Error, Debug)]
pub enum CliError {
    /// A measurement failed or was misconfigured.
    #[error(transparent)]
    Bench(#[from] BenchError),

    /// The requested workload does not exist.
    #[error("Unknown workload '{name}'. Available workloads: {available}")]
    UnknownWorkload {
        /// The name that was requested
        name: String,
        /// Comma-separated list of valid names
        available: String,
    },

    /// Report serialization failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing the report failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },
}

impl CliError {
    /// Creates an I/O error for `path`.
    pub fn io_error(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }
}
