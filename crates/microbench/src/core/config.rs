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

//! Benchmark configuration.
//!
//! A [`BenchConfig`] is built once per run with a consuming builder and is
//! read-only afterwards. The same configuration applies uniformly to every
//! operation of a batch.

use crate::error::{BenchError, Result};
use std::fmt;
use std::sync::Arc;

/// Default number of measured iterations.
pub const DEFAULT_ITERATIONS: u64 = 100_000;

/// Default number of warmup iterations.
pub const DEFAULT_WARMUP_ITERATIONS: u64 = 1_000;

/// Hook invoked once before the warmup loop.
pub type WarmupSetup = Arc<dyn Fn() + Send + Sync>;

/// Configuration for a single measurement run.
///
/// # Example
///
/// ```
/// use microbench::core::config::BenchConfig;
///
/// let config = BenchConfig::new(1_000)
///     .with_warmup(100)
///     .with_warmup_setup(|| { /* prime caches */ });
///
/// assert_eq!(config.iterations(), 1_000);
/// assert!(config.warmup_enabled());
/// ```
#[derive(Clone)]
pub struct BenchConfig {
    iterations: u64,
    warmup: bool,
    warmup_iterations: u64,
    warmup_setup: Option<WarmupSetup>,
}

impl BenchConfig {
    /// Creates a configuration with the given iteration count and warmup
    /// disabled.
    pub fn new(iterations: u64) -> Self {
        Self {
            iterations,
            warmup: false,
            warmup_iterations: 0,
            warmup_setup: None,
        }
    }

    /// Enables warmup with the given number of unmeasured iterations.
    pub fn with_warmup(mut self, warmup_iterations: u64) -> Self {
        self.warmup = true;
        self.warmup_iterations = warmup_iterations;
        self
    }

    /// Disables warmup. The warmup-setup hook is kept but not invoked.
    pub fn without_warmup(mut self) -> Self {
        self.warmup = false;
        self
    }

    /// Sets the hook run once before the warmup loop.
    pub fn with_warmup_setup<F>(mut self, setup: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.warmup_setup = Some(Arc::new(setup));
        self
    }

    /// Number of measured iterations.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Whether the warmup phase runs.
    pub fn warmup_enabled(&self) -> bool {
        self.warmup
    }

    /// Number of warmup iterations (meaningful only when warmup is enabled).
    pub fn warmup_iterations(&self) -> u64 {
        self.warmup_iterations
    }

    /// The warmup-setup hook, if any.
    pub fn warmup_setup(&self) -> Option<&WarmupSetup> {
        self.warmup_setup.as_ref()
    }

    /// Checks that the configuration can drive a measurement.
    ///
    /// A zero iteration count is rejected rather than producing an average
    /// computed by division by zero.
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(BenchError::invalid_config(
                "iterations",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ITERATIONS).with_warmup(DEFAULT_WARMUP_ITERATIONS)
    }
}

impl fmt::Debug for BenchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BenchConfig")
            .field("iterations", &self.iterations)
            .field("warmup", &self.warmup)
            .field("warmup_iterations", &self.warmup_iterations)
            .field("warmup_setup", &self.warmup_setup.as_ref().map(|_| ".."))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_default_config() {
        let config = BenchConfig::default();
        assert_eq!(config.iterations(), DEFAULT_ITERATIONS);
        assert!(config.warmup_enabled());
        assert_eq!(config.warmup_iterations(), DEFAULT_WARMUP_ITERATIONS);
        assert!(config.warmup_setup().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_new_has_no_warmup() {
        let config = BenchConfig::new(10);
        assert!(!config.warmup_enabled());
        assert_eq!(config.warmup_iterations(), 0);
    }

    #[test]
    fn test_without_warmup() {
        let config = BenchConfig::default().without_warmup();
        assert!(!config.warmup_enabled());
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let err = BenchConfig::new(0).validate().unwrap_err();
        assert!(err.is_invalid_config());
        assert!(err.to_string().contains("iterations"));
    }

    #[test]
    fn test_zero_warmup_iterations_allowed() {
        assert!(BenchConfig::new(5).with_warmup(0).validate().is_ok());
    }

    #[test]
    fn test_clone_shares_setup_hook() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let config = BenchConfig::new(1).with_warmup_setup(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let copy = config.clone();

        (config.warmup_setup().unwrap())();
        (copy.warmup_setup().unwrap())();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_debug_hides_closure() {
        let config = BenchConfig::new(3).with_warmup_setup(|| {});
        let debug = format!("{:?}", config);
        assert!(debug.contains("iterations: 3"));
        assert!(debug.contains("warmup_setup: Some"));
    }
}
