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

//! Benchmark harness.
//!
//! # Modules
//!
//! - `invoke`: One timed, timeout-bounded converter call
//! - `quarantine`: Cleanup hook run between invocations
//! - `scheduler`: Warmup, measured passes, and early-exit accounting
//! - `runner`: Drives the corpus through the scheduler and reporter

pub mod invoke;
pub mod quarantine;
pub mod runner;
pub mod scheduler;

pub use invoke::{invoke, Invocation};
pub use quarantine::{HeapTrim, NoQuarantine, Quarantine};
pub use runner::BenchmarkRunner;
pub use scheduler::{RunResult, Scheduler};
