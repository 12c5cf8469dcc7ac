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

//! Console reporter.
//!
//! Renders the per-input comparison table:
//!
//! ```text
//! readme.md    4.2 KB   (1248 iterations)
//!
//!              Library    Total   Each   vs Baseline
//! --------------------------------------------------
//!             Baseline      521   0.42   100%
//!       pulldown-cmark       97   0.08   19%
//! --------------------------------------------------
//! ```

use crate::core::Pass;
use crate::reporters::types::{CandidateRow, InputReport};
use std::io::{self, Write};
use std::time::{Duration, Instant};

/// First line of every run.
pub const PREAMBLE: &str = "All times are shown in milliseconds.";

/// Line above and below the table body.
pub const SEPARATOR: &str = "--------------------------------------------------";

/// Formats a byte count: bytes up to 2000, KB up to 2,000,000, MB above.
pub fn format_size(len: u64) -> String {
    if len > 2_000_000 {
        format!("{:.1} MB", len as f64 / 1024.0 / 1024.0)
    } else if len > 2_000 {
        format!("{:.1} KB", len as f64 / 1024.0)
    } else {
        format!("{} B", len)
    }
}

/// Formats a ratio as an integer percentage.
pub fn format_ratio(ratio: Option<f64>) -> String {
    match ratio {
        Some(r) => format!("{:.0}%", r * 100.0),
        None => "n/a".to_string(),
    }
}

/// Formats a progress fraction in `[0, 1]`.
pub fn format_progress(fraction: f64) -> String {
    format!("{:>6.1}%", fraction * 100.0)
}

/// Formats one table row.
pub fn format_row(row: &CandidateRow) -> String {
    format!(
        "{:>20} {:>8} {:>6.2}   {}",
        row.name,
        row.total_millis(),
        row.average_millis(),
        format_ratio(row.ratio)
    )
}

/// Writes the run preamble.
pub fn write_preamble<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", PREAMBLE)?;
    writeln!(out)
}

/// Writes the input header and the column headings.
pub fn write_header<W: Write + ?Sized>(
    out: &mut W,
    name: &str,
    len: u64,
    iterations: u64,
) -> io::Result<()> {
    writeln!(
        out,
        "{}    {}   ({} iterations)",
        name,
        format_size(len),
        iterations
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "{:>20} {:>8} {:>6}   {}",
        "Library", "Total", "Each", "vs Baseline"
    )?;
    writeln!(out, "{}", SEPARATOR)?;
    out.flush()
}

/// Writes the table body, error lines, and closing separator.
pub fn write_rows<W: Write + ?Sized>(out: &mut W, report: &InputReport) -> io::Result<()> {
    for row in &report.rows {
        writeln!(out, "{}", format_row(row))?;
        if let Some(error) = &row.error {
            writeln!(out, "{} failed: {}", row.name, error)?;
            writeln!(out)?;
        }
    }
    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out)?;
    out.flush()
}

/// Writes a progress update that the next line overwrites.
pub fn write_progress<W: Write + ?Sized>(out: &mut W, fraction: f64) -> io::Result<()> {
    write!(out, "\r{}\r", format_progress(fraction))?;
    out.flush()
}

/// Rate-limits progress updates to one per interval of wall time.
#[derive(Debug)]
pub struct ProgressTicker {
    started: Instant,
    interval: Duration,
    last_slot: u128,
}

impl ProgressTicker {
    /// Starts the clock.
    pub fn new(interval: Duration) -> Self {
        Self {
            started: Instant::now(),
            interval,
            last_slot: 0,
        }
    }

    /// Returns the completed fraction when an update is due.
    ///
    /// A zero interval makes every pass due.
    pub fn tick(&mut self, pass: Pass, iterations: u64) -> Option<f64> {
        let due = if self.interval.is_zero() {
            true
        } else {
            let slot = self.started.elapsed().as_nanos() / self.interval.as_nanos();
            if slot > self.last_slot {
                self.last_slot = slot;
                true
            } else {
                false
            }
        };

        due.then(|| {
            let done = pass.index().max(0) as f64;
            done / iterations.max(1) as f64
        })
    }
}
