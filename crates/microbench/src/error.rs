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

//! Error types for benchmarking operations.
//!
//! Every failure surfaces to the immediate caller. Nothing is retried and
//! nothing is downgraded to a warning: a benchmark measures the operation's
//! real behavior, failures included.

use thiserror::Error;

/// Boxed error raised by a fallible measured operation.
pub type OperationError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type for benchmarking operations
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can occur during benchmarking operations
#[derive(Debug, Error)]
pub enum BenchError {
    /// Invalid configuration parameter
    #[error("Invalid configuration parameter '{parameter}': {reason}")]
    InvalidConfig {
        /// Parameter name
        parameter: String,
        /// Reason for invalidity
        reason: String,
    },

    /// The measured operation (or its warmup) returned an error.
    ///
    /// The run is aborted at the failing invocation and its partial timing
    /// is discarded.
    #[error("Operation '{operation}' failed: {source}")]
    OperationFailed {
        /// Display name of the operation, or `<anonymous>`
        operation: String,
        /// The error the operation returned
        #[source]
        source: OperationError,
    },
}

impl BenchError {
    /// Creates an [`BenchError::InvalidConfig`] error.
    pub fn invalid_config(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Creates an [`BenchError::OperationFailed`] error.
    pub fn operation_failed(operation: Option<&str>, source: impl Into<OperationError>) -> Self {
        Self::OperationFailed {
            operation: operation.unwrap_or("<anonymous>").to_string(),
            source: source.into(),
        }
    }

    /// Returns true for configuration errors.
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, Self::InvalidConfig { .. })
    }

    /// Returns true for errors raised by the measured operation.
    pub fn is_operation_failure(&self) -> bool {
        matches!(self, Self::OperationFailed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let err = BenchError::invalid_config("iterations", "must be at least 1");
        let msg = err.to_string();
        assert!(msg.contains("iterations"));
        assert!(msg.contains("must be at least 1"));
        assert!(err.is_invalid_config());
        assert!(!err.is_operation_failure());
    }

    #[test]
    fn test_operation_failed_keeps_source() {
        let err = BenchError::operation_failed(Some("parse"), "disk on fire");
        assert!(err.is_operation_failure());
        assert!(err.to_string().contains("parse"));
        assert_eq!(err.source().map(|s| s.to_string()), Some("disk on fire".to_string()));
    }

    #[test]
    fn test_operation_failed_anonymous() {
        let err = BenchError::operation_failed(None, "boom");
        assert!(err.to_string().contains("<anonymous>"));
    }
}
