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

//! Per-input report data and aggregation.

use crate::core::IterationPlan;
use crate::error::CandidateError;
use crate::harness::RunResult;
use std::time::Duration;

/// One table row: the final figures for a candidate on an input.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateRow {
    /// Candidate name.
    pub name: String,
    /// Accumulated time over all measured passes.
    pub total: Duration,
    /// Total divided by the planned iteration count.
    pub average: Duration,
    /// Total relative to the baseline total; `None` when undefined.
    pub ratio: Option<f64>,
    /// Failure recorded on this input, if any.
    pub error: Option<CandidateError>,
    /// Whether the total was partly extrapolated.
    pub skipped_early: bool,
}

impl CandidateRow {
    /// Returns the total in whole milliseconds.
    pub fn total_millis(&self) -> u128 {
        self.total.as_millis()
    }

    /// Returns the average in fractional milliseconds.
    pub fn average_millis(&self) -> f64 {
        self.average.as_secs_f64() * 1000.0
    }
}

/// Comparative result for one benchmark input.
#[derive(Debug, Clone, PartialEq)]
pub struct InputReport {
    /// Input name.
    pub name: String,
    /// Input size in bytes.
    pub len: u64,
    /// Measured passes per candidate.
    pub iterations: u64,
    /// One row per candidate, baseline first.
    pub rows: Vec<CandidateRow>,
}

impl InputReport {
    /// Builds the report from finished run results.
    ///
    /// `names` and `results` are in candidate order; index 0 is the baseline.
    pub fn aggregate<S: AsRef<str>>(
        name: impl Into<String>,
        len: u64,
        plan: &IterationPlan,
        names: &[S],
        results: Vec<RunResult>,
    ) -> Self {
        let baseline_total = results.first().map(|r| r.elapsed).unwrap_or_default();
        let iterations = plan.iterations();

        let rows = names
            .iter()
            .zip(results)
            .enumerate()
            .map(|(index, (name, result))| CandidateRow {
                name: name.as_ref().to_string(),
                total: result.elapsed,
                average: average(result.elapsed, iterations),
                ratio: ratio(result.elapsed, baseline_total, index == 0),
                error: result.error,
                skipped_early: result.skipped_early,
            })
            .collect();

        Self {
            name: name.into(),
            len,
            iterations,
            rows,
        }
    }

    /// Returns the baseline row.
    pub fn baseline(&self) -> Option<&CandidateRow> {
        self.rows.first()
    }

    /// Returns the row for a candidate name.
    pub fn row(&self, name: &str) -> Option<&CandidateRow> {
        self.rows.iter().find(|r| r.name == name)
    }

    /// Returns rows that recorded an error.
    pub fn failures(&self) -> impl Iterator<Item = &CandidateRow> {
        self.rows.iter().filter(|r| r.error.is_some())
    }
}

/// Average time per measured pass.
pub fn average(total: Duration, iterations: u64) -> Duration {
    if iterations == 0 {
        return Duration::ZERO;
    }
    let nanos = total.as_nanos() / u128::from(iterations);
    Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
}

/// Ratio of `total` to `baseline_total`.
///
/// The baseline against itself is exactly 1.0. Any other ratio is undefined
/// when the baseline total is zero.
pub fn ratio(total: Duration, baseline_total: Duration, is_baseline: bool) -> Option<f64> {
    if is_baseline {
        Some(1.0)
    } else if baseline_total.is_zero() {
        None
    } else {
        Some(total.as_nanos() as f64 / baseline_total.as_nanos() as f64)
    }
}
