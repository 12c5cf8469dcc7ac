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

//! Converter adapters for the MDCompare benchmark.
//!
//! Each adapter wraps one markdown library behind
//! [`mdcompare::Converter`]:
//!
//! - [`Baseline`]: regex control workload, always benchmarked first
//! - [`PulldownCmark`]: pulldown-cmark, plain and with GitHub extensions
//! - [`Comrak`]: comrak with GitHub extensions
//! - [`MarkdownRs`]: the `markdown` crate

pub mod baseline;
pub mod comrak_html;
pub mod markdown_rs;
pub mod pulldown;

pub use baseline::Baseline;
pub use comrak_html::Comrak;
pub use markdown_rs::MarkdownRs;
pub use pulldown::PulldownCmark;

use mdcompare::Candidate;

/// Name of the control candidate.
pub const BASELINE_NAME: &str = "Baseline";

/// Returns the default candidate list, baseline first.
pub fn default_candidates() -> Vec<Candidate> {
    vec![
        Candidate::new(BASELINE_NAME, Baseline),
        Candidate::new("pulldown-cmark", PulldownCmark::commonmark()),
        Candidate::new("pulldown-cmark (GFM)", PulldownCmark::gfm()),
        Candidate::new("comrak", Comrak::gfm()),
        Candidate::new("markdown-rs", MarkdownRs::commonmark()),
    ]
}
