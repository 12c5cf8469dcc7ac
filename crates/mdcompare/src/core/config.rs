// Dweve MDCompare - Markdown Converter Benchmark
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

//! Runner configuration.
//!
//! The candidate list and every timing constant are fixed when the runner is
//! built. Nothing is read from files or the command line.

use crate::core::converter::Candidate;
use crate::core::plan::{IterationPlan, MAX_ITERATIONS, MIN_ITERATIONS, TARGET_READ_VOLUME};
use crate::error::{BenchError, Result};
use crate::harness::quarantine::{HeapTrim, Quarantine};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Default per-invocation timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Accumulated time after which a candidate is extrapolated instead of run.
pub const DEFAULT_SLOW_THRESHOLD: Duration = Duration::from_secs(20);

/// Minimum wall time between progress updates.
pub const DEFAULT_PROGRESS_INTERVAL: Duration = Duration::from_millis(500);

/// Immutable runner configuration.
///
/// # Example
///
/// ```no_run
/// use mdcompare::core::{Candidate, RunnerConfig};
/// use std::time::Duration;
///
/// let config = RunnerConfig::new(vec![
///     Candidate::from_fn("identity", |s| Ok(s.to_string())),
///     Candidate::from_fn("upper", |s| Ok(s.to_uppercase())),
/// ])
/// .with_timeout(Duration::from_secs(5));
/// ```
#[derive(Clone)]
pub struct RunnerConfig {
    /// Candidates in report order; index 0 is the baseline.
    pub candidates: Vec<Candidate>,
    /// Per-invocation timeout.
    pub timeout: Duration,
    /// Early-exit threshold on accumulated time.
    pub slow_threshold: Duration,
    /// Cumulative bytes to read per input.
    pub target_read_volume: u64,
    /// Lower bound on measured passes.
    pub min_iterations: u64,
    /// Upper bound on measured passes.
    pub max_iterations: u64,
    /// Minimum wall time between progress updates.
    pub progress_interval: Duration,
    /// Cleanup hook run after every invocation.
    pub quarantine: Arc<dyn Quarantine>,
}

impl RunnerConfig {
    /// Creates a configuration with default timings.
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self {
            candidates,
            timeout: DEFAULT_TIMEOUT,
            slow_threshold: DEFAULT_SLOW_THRESHOLD,
            target_read_volume: TARGET_READ_VOLUME,
            min_iterations: MIN_ITERATIONS,
            max_iterations: MAX_ITERATIONS,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            quarantine: Arc::new(HeapTrim),
        }
    }

    /// Sets the per-invocation timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the early-exit threshold.
    pub fn with_slow_threshold(mut self, threshold: Duration) -> Self {
        self.slow_threshold = threshold;
        self
    }

    /// Sets the cumulative read volume per input.
    pub fn with_target_read_volume(mut self, bytes: u64) -> Self {
        self.target_read_volume = bytes;
        self
    }

    /// Sets the measured pass bounds.
    pub fn with_iteration_bounds(mut self, min: u64, max: u64) -> Self {
        self.min_iterations = min;
        self.max_iterations = max;
        self
    }

    /// Sets the progress update interval.
    pub fn with_progress_interval(mut self, interval: Duration) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Sets the cleanup hook.
    pub fn with_quarantine(mut self, quarantine: impl Quarantine + 'static) -> Self {
        self.quarantine = Arc::new(quarantine);
        self
    }

    /// Plans the measured passes for an input of `len` bytes.
    pub fn plan_for(&self, len: u64) -> IterationPlan {
        IterationPlan::with_bounds(
            len,
            self.target_read_volume,
            self.min_iterations,
            self.max_iterations,
        )
    }

    /// Checks that the configuration can drive a run.
    pub fn validate(&self) -> Result<()> {
        if self.candidates.is_empty() {
            return Err(BenchError::invalid_config(
                "candidates",
                "at least one candidate is required",
            ));
        }
        if self.timeout.is_zero() {
            return Err(BenchError::invalid_config("timeout", "must be positive"));
        }
        if self.min_iterations == 0 {
            return Err(BenchError::invalid_config(
                "min_iterations",
                "must be at least 1",
            ));
        }
        if self.min_iterations > self.max_iterations {
            return Err(BenchError::invalid_config(
                "max_iterations",
                format!(
                    "must not be below min_iterations ({} > {})",
                    self.min_iterations, self.max_iterations
                ),
            ));
        }
        Ok(())
    }
}

impl fmt::Debug for RunnerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunnerConfig")
            .field("candidates", &self.candidates)
            .field("timeout", &self.timeout)
            .field("slow_threshold", &self.slow_threshold)
            .field("target_read_volume", &self.target_read_volume)
            .field("min_iterations", &self.min_iterations)
            .field("max_iterations", &self.max_iterations)
            .field("progress_interval", &self.progress_interval)
            .finish_non_exhaustive()
    }
}
