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

//! MDCompare Benchmark Runner
//!
//! Measures and compares the wall-clock time of interchangeable
//! markdown-to-HTML converters over a corpus of input files.
//!
//! ## Features
//!
//! - **Uniform converter contract**: every candidate reads a full input and
//!   writes a full output through [`Converter`]
//! - **Size-normalized iterations**: each file is read for roughly 5 MiB in
//!   total, clamped to 3..=10000 passes
//! - **Hard timeouts**: each call is bounded; a stuck converter is recorded
//!   and abandoned instead of stalling the run
//! - **Early exit**: candidates that are clearly too slow are extrapolated
//!   rather than re-measured
//!
//! ## Usage
//!
//! ```no_run
//! use mdcompare::{BenchmarkRunner, Candidate, CorpusSource, RunnerConfig};
//!
//! let config = RunnerConfig::new(vec![
//!     Candidate::from_fn("Baseline", |s| Ok(s.to_string())),
//!     Candidate::from_fn("shout", |s| Ok(s.to_uppercase())),
//! ]);
//! let runner = BenchmarkRunner::new(config, CorpusSource::default())?;
//! runner.run(&mut std::io::stdout().lock())?;
//! # Ok::<(), mdcompare::BenchError>(())
//! ```

pub mod core;
pub mod error;
pub mod fixtures;
pub mod harness;
pub mod priority;
pub mod reporters;

// Re-export key types for convenience
pub use crate::core::{Candidate, Converter, FnConverter, IterationPlan, RunnerConfig};
pub use error::{BenchError, CandidateError, ConvertError, Result};
pub use fixtures::{BenchmarkInput, CorpusSource};
pub use harness::{BenchmarkRunner, HeapTrim, NoQuarantine, Quarantine};
pub use priority::raise_priority;
pub use reporters::{CandidateRow, InputReport};
