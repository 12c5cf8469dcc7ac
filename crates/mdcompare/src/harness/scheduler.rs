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

//! Iteration scheduling and per-candidate accounting.
//!
//! For each input the scheduler runs one warmup pass followed by the planned
//! number of measured passes. Every pass invokes each candidate once, in
//! candidate order, so two candidates never run at the same time.
//!
//! Accounting rules:
//!
//! - The warmup pass is not charged unless it exceeded the slow threshold.
//! - Once a candidate's accumulated time exceeds the slow threshold it is no
//!   longer invoked on this input. Each remaining measured pass `k > 0`
//!   extrapolates its total to `total * (k + 1) / k`.
//! - State is per input; a candidate that was slow on one file starts fresh on
//!   the next.

use crate::core::{IterationPlan, Pass};
use crate::error::CandidateError;
use crate::harness::invoke::Invocation;
use std::time::Duration;

/// Accumulated result of one candidate on one input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunResult {
    /// Time charged across all counted passes, including extrapolation.
    pub elapsed: Duration,
    /// The most recent failure, if any.
    pub error: Option<CandidateError>,
    /// Whether the early-exit rule stopped real invocations.
    pub skipped_early: bool,
    /// Number of real invocations, warmup included.
    pub invocations: u64,
}

impl RunResult {
    /// Returns the accumulated time in whole milliseconds.
    pub fn total_millis(&self) -> u128 {
        self.elapsed.as_millis()
    }

    fn record(&mut self, pass: Pass, invocation: Invocation, slow_threshold: Duration) {
        self.invocations += 1;
        if let Some(error) = invocation.error {
            self.error = Some(error);
        }
        let counted = match pass {
            Pass::Warmup => invocation.elapsed > slow_threshold,
            Pass::Measured(_) => true,
        };
        if counted {
            self.elapsed += invocation.elapsed;
        }
    }

    /// Scales the total measured over `completed` passes to `completed + 1`.
    fn extrapolate(&mut self, completed: u64) {
        let nanos = self.elapsed.as_nanos() * u128::from(completed + 1) / u128::from(completed);
        self.elapsed = Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX));
    }
}

/// Drives the warmup and measured passes for one input.
#[derive(Debug, Clone, Copy)]
pub struct Scheduler {
    plan: IterationPlan,
    slow_threshold: Duration,
}

impl Scheduler {
    /// Creates a scheduler for one input.
    pub fn new(plan: IterationPlan, slow_threshold: Duration) -> Self {
        Self {
            plan,
            slow_threshold,
        }
    }

    /// Returns the plan this scheduler follows.
    pub fn plan(&self) -> IterationPlan {
        self.plan
    }

    /// Runs every pass over `candidates` candidates.
    ///
    /// `invoke` performs one timed invocation of the candidate at the given
    /// index. `on_pass` is called before each pass starts and is meant for
    /// progress reporting.
    pub fn run<F, P>(&self, candidates: usize, mut invoke: F, mut on_pass: P) -> Vec<RunResult>
    where
        F: FnMut(usize, Pass) -> Invocation,
        P: FnMut(Pass),
    {
        let mut results = vec![RunResult::default(); candidates];

        for pass in self.plan.passes() {
            on_pass(pass);

            for (index, result) in results.iter_mut().enumerate() {
                if result.elapsed > self.slow_threshold {
                    result.skipped_early = true;
                    if let Pass::Measured(completed) = pass {
                        if completed > 0 {
                            result.extrapolate(completed);
                        }
                    }
                    continue;
                }

                let invocation = invoke(index, pass);
                result.record(pass, invocation, self.slow_threshold);
            }
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SLOW: Duration = Duration::from_millis(20_000);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn plan(iterations: u64) -> IterationPlan {
        IterationPlan::with_bounds(1, iterations, 1, iterations)
    }

    #[test]
    fn test_warmup_is_not_charged() {
        let scheduler = Scheduler::new(plan(4), SLOW);
        let results = scheduler.run(
            1,
            |_, pass| match pass {
                Pass::Warmup => Invocation::completed(ms(500)),
                Pass::Measured(_) => Invocation::completed(ms(10)),
            },
            |_| {},
        );

        assert_eq!(results[0].elapsed, ms(40));
        assert_eq!(results[0].invocations, 5);
        assert!(!results[0].skipped_early);
    }

    #[test]
    fn test_slow_warmup_is_charged_and_triggers_early_exit() {
        let scheduler = Scheduler::new(plan(4), SLOW);
        let mut calls = 0;
        let results = scheduler.run(
            1,
            |_, _| {
                calls += 1;
                Invocation::completed(ms(25_000))
            },
            |_| {},
        );

        // Pass 0 is skipped without extrapolation, passes 1..=3 extrapolate
        // by 2/1, 3/2 and 4/3.
        assert_eq!(calls, 1);
        assert_eq!(results[0].elapsed, ms(100_000));
        assert!(results[0].skipped_early);
    }

    #[test]
    fn test_early_exit_extrapolates_from_measured_rate() {
        let iterations = 10;
        let scheduler = Scheduler::new(plan(iterations), SLOW);
        let results = scheduler.run(
            2,
            |index, pass| match (index, pass) {
                (0, _) => Invocation::completed(ms(1)),
                (_, Pass::Warmup) => Invocation::completed(ms(5)),
                (_, Pass::Measured(_)) => Invocation::completed(ms(7_000)),
            },
            |_| {},
        );

        // Three measured passes reach 21000 ms; the remaining seven are
        // extrapolated at the same rate.
        let slow = &results[1];
        assert!(slow.skipped_early);
        assert_eq!(slow.invocations, 4);
        let expected = 21_000.0 * iterations as f64 / 3.0;
        let actual = slow.elapsed.as_secs_f64() * 1000.0;
        assert!((actual - expected).abs() < 1.0, "{} vs {}", actual, expected);

        // The fast candidate is unaffected.
        assert_eq!(results[0].elapsed, ms(iterations));
        assert!(!results[0].skipped_early);
    }

    #[test]
    fn test_timeout_contributes_timeout_and_one_error() {
        let timeout = ms(30_000);
        let scheduler = Scheduler::new(plan(5), SLOW);
        let results = scheduler.run(
            1,
            |_, pass| match pass {
                Pass::Measured(2) => Invocation::timed_out(timeout),
                _ => Invocation::completed(ms(100)),
            },
            |_| {},
        );

        let result = &results[0];
        assert_eq!(result.error, Some(CandidateError::Timeout { timeout }));
        assert!(result.skipped_early);
        // Passes 0 and 1 (200 ms) plus the timeout, then passes 3 and 4 are
        // extrapolated: 30200 * 4/3 * 5/4.
        assert_eq!(result.invocations, 4);
        let expected = 30_200.0 * 5.0 / 3.0;
        let actual = result.elapsed.as_secs_f64() * 1000.0;
        assert!((actual - expected).abs() < 1.0, "{} vs {}", actual, expected);
    }

    #[test]
    fn test_errors_do_not_stop_other_candidates() {
        let scheduler = Scheduler::new(plan(3), SLOW);
        let results = scheduler.run(
            3,
            |index, _| {
                if index == 1 {
                    Invocation::failed(ms(1), CandidateError::Runtime("boom".to_string()))
                } else {
                    Invocation::completed(ms(2))
                }
            },
            |_| {},
        );

        assert_eq!(results[0].error, None);
        assert_eq!(
            results[1].error,
            Some(CandidateError::Runtime("boom".to_string()))
        );
        assert_eq!(results[2].error, None);
        assert!(results.iter().all(|r| r.invocations == 4));
        assert_eq!(results[1].elapsed, ms(3));
    }

    #[test]
    fn test_candidates_run_in_order_each_pass() {
        let scheduler = Scheduler::new(plan(2), SLOW);
        let mut order = Vec::new();
        let mut passes = Vec::new();
        scheduler.run(
            3,
            |index, pass| {
                order.push((pass.index(), index));
                Invocation::completed(ms(1))
            },
            |pass| passes.push(pass),
        );

        assert_eq!(
            order,
            vec![
                (-1, 0),
                (-1, 1),
                (-1, 2),
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 0),
                (1, 1),
                (1, 2)
            ]
        );
        assert_eq!(passes, vec![Pass::Warmup, Pass::Measured(0), Pass::Measured(1)]);
    }

    #[test]
    fn test_threshold_is_strict() {
        let scheduler = Scheduler::new(plan(3), ms(100));
        let results = scheduler.run(1, |_, _| Invocation::completed(ms(50)), |_| {});

        // 100 ms after two passes is not above the threshold.
        assert!(!results[0].skipped_early);
        assert_eq!(results[0].elapsed, ms(150));
        assert_eq!(results[0].total_millis(), 150);
    }
}
