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

//! Benchmark runner.
//!
//! Walks the corpus smallest file first and, for each file, schedules every
//! candidate through the warmup and measured passes, then prints the
//! comparison table. Files run one after another on the calling thread.

use crate::core::{Pass, RunnerConfig};
use crate::error::{BenchError, Result};
use crate::fixtures::{BenchmarkInput, CorpusSource};
use crate::harness::invoke::invoke;
use crate::harness::scheduler::Scheduler;
use crate::reporters::console::{self, ProgressTicker};
use crate::reporters::types::InputReport;
use std::io::{self, Write};
use tracing::{info, info_span, warn};

/// Runner for executing the comparison over a corpus.
#[derive(Debug, Clone)]
pub struct BenchmarkRunner {
    config: RunnerConfig,
    corpus: CorpusSource,
}

impl BenchmarkRunner {
    /// Creates a runner, rejecting unusable configurations.
    pub fn new(config: RunnerConfig, corpus: CorpusSource) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, corpus })
    }

    /// Benchmarks every corpus file and writes the report to `out`.
    ///
    /// A missing corpus fails before anything is written or invoked. Files
    /// that cannot be read are skipped with a warning.
    pub fn run<W: Write + ?Sized>(&self, out: &mut W) -> Result<Vec<InputReport>> {
        let entries = self.corpus.discover()?;
        info!(files = entries.len(), "corpus discovered");

        console::write_preamble(out).map_err(output_error)?;

        let mut reports = Vec::with_capacity(entries.len());
        for entry in &entries {
            let input = match entry.load() {
                Ok(input) => input,
                Err(err) => {
                    warn!(file = %entry.path.display(), error = %err, "skipping unreadable input");
                    continue;
                }
            };
            reports.push(self.run_input(&input, out)?);
        }

        Ok(reports)
    }

    /// Benchmarks a single loaded input and writes its table to `out`.
    pub fn run_input<W: Write + ?Sized>(
        &self,
        input: &BenchmarkInput,
        out: &mut W,
    ) -> Result<InputReport> {
        let config = &self.config;
        let plan = config.plan_for(input.len());
        let _span = info_span!(
            "input",
            file = input.name(),
            bytes = input.len(),
            iterations = plan.iterations()
        )
        .entered();

        console::write_header(out, input.name(), input.len(), plan.iterations())
            .map_err(output_error)?;

        let mut ticker = ProgressTicker::new(config.progress_interval);
        let mut warned = vec![false; config.candidates.len()];
        let results = Scheduler::new(plan, config.slow_threshold).run(
            config.candidates.len(),
            |index, _pass: Pass| {
                let candidate = &config.candidates[index];
                let invocation = invoke(
                    candidate,
                    input,
                    config.timeout,
                    config.quarantine.as_ref(),
                );
                // First failure per candidate per input only; the table
                // carries the final error.
                if let Some(error) = &invocation.error {
                    if !warned[index] {
                        warned[index] = true;
                        warn!(candidate = candidate.name(), error = %error, "candidate failed");
                    }
                }
                invocation
            },
            |pass| {
                if let Some(fraction) = ticker.tick(pass, plan.iterations()) {
                    // Progress is cosmetic; a failed write shows up on the table.
                    let _ = console::write_progress(out, fraction);
                }
            },
        );

        let names: Vec<&str> = config.candidates.iter().map(|c| c.name()).collect();
        let report = InputReport::aggregate(input.name(), input.len(), &plan, &names, results);

        for row in report.rows.iter().filter(|r| r.skipped_early) {
            info!(
                candidate = %row.name,
                total_ms = row.total_millis() as u64,
                "extrapolated after exceeding the slow threshold"
            );
        }

        console::write_rows(out, &report).map_err(output_error)?;
        Ok(report)
    }
}

fn output_error(err: io::Error) -> BenchError {
    BenchError::Output(err.to_string())
}
