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

//! Control converter.
//!
//! Does a fixed amount of regex and string work proportional to input size
//! without parsing markdown. Every real converter is reported relative to it.

use mdcompare::core::read_input;
use mdcompare::{ConvertError, Converter};
use once_cell::sync::Lazy;
use regex::Regex;
use std::io::{Read, Write};

/// Runs of characters outside `_`, `a`-`f`, and whitespace.
static SCRUB: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^_a-f\s]+").expect("baseline pattern is valid"));

/// Number of reverse-scrub-reverse rounds per call.
pub const ROUNDS: usize = 3;

/// Reverses the input, collapses every run outside `[_a-f\s]` to `_`,
/// reverses it back, and writes the result. Repeated [`ROUNDS`] times.
#[derive(Debug, Clone, Copy, Default)]
pub struct Baseline;

impl Baseline {
    /// Runs one round over `text`.
    pub fn scrub(text: &str) -> String {
        let reversed: String = text.chars().rev().collect();
        let scrubbed = SCRUB.replace_all(&reversed, "_");
        scrubbed.chars().rev().collect()
    }
}

impl Converter for Baseline {
    fn convert(&self, input: &mut dyn Read, output: &mut dyn Write) -> Result<(), ConvertError> {
        let text = read_input(input)?;
        for _ in 0..ROUNDS {
            output.write_all(Self::scrub(&text).as_bytes())?;
        }
        Ok(())
    }
}
