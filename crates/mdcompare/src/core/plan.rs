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

//! Iteration planning.
//!
//! The number of measured passes per input is normalized to input size so
//! that every file is read for roughly the same cumulative volume.

/// Cumulative read volume targeted per input (5 MiB).
pub const TARGET_READ_VOLUME: u64 = 5 * 1024 * 1024;

/// Lower bound on measured passes.
pub const MIN_ITERATIONS: u64 = 3;

/// Upper bound on measured passes.
pub const MAX_ITERATIONS: u64 = 10_000;

/// One pass over every candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// The discarded first pass (iteration index -1).
    Warmup,
    /// A measured pass; the value is the zero-based index, which is also the
    /// number of measured passes already completed.
    Measured(u64),
}

impl Pass {
    /// Returns the iteration index, -1 for the warmup.
    pub fn index(self) -> i64 {
        match self {
            Pass::Warmup => -1,
            Pass::Measured(i) => i as i64,
        }
    }
}

/// Measured pass count for one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationPlan {
    iterations: u64,
}

impl IterationPlan {
    /// Plans an input of `len` bytes with the default volume and bounds.
    pub fn for_input_len(len: u64) -> Self {
        Self::with_bounds(len, TARGET_READ_VOLUME, MIN_ITERATIONS, MAX_ITERATIONS)
    }

    /// Plans an input of `len` bytes: `round(target / len)` clamped to
    /// `[min, max]`. An empty input gets `max`.
    pub fn with_bounds(len: u64, target: u64, min: u64, max: u64) -> Self {
        let raw = if len == 0 {
            max
        } else {
            target.saturating_add(len / 2) / len
        };
        Self {
            iterations: raw.max(min).min(max),
        }
    }

    /// Returns the number of measured passes.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Returns every pass in order: the warmup, then each measured pass.
    pub fn passes(&self) -> impl Iterator<Item = Pass> {
        std::iter::once(Pass::Warmup).chain((0..self.iterations).map(Pass::Measured))
    }
}
