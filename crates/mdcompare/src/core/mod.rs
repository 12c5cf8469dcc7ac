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

//! Core benchmark infrastructure.
//!
//! # Modules
//!
//! - `converter`: The uniform converter contract and named candidates
//! - `config`: Immutable runner configuration
//! - `plan`: Iteration planning from input size

pub mod config;
pub mod converter;
pub mod plan;

// Re-export commonly used types
pub use config::{RunnerConfig, DEFAULT_PROGRESS_INTERVAL, DEFAULT_SLOW_THRESHOLD, DEFAULT_TIMEOUT};
pub use converter::{read_input, Candidate, Converter, FnConverter};
pub use plan::{IterationPlan, Pass, MAX_ITERATIONS, MIN_ITERATIONS, TARGET_READ_VOLUME};
