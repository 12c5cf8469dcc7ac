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

//! Structured error types for the benchmark runner.
//!
//! Errors fall into three groups:
//!
//! - [`BenchError`]: setup failures that end the whole run (missing corpus,
//!   unreadable input, invalid configuration).
//! - [`CandidateError`]: failures of a single candidate on a single input.
//!   These are recorded in the report and never abort the run.
//! - [`ConvertError`]: what a converter adapter returns when a conversion
//!   fails. The timed invocation turns it into a [`CandidateError`].

use std::io;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Result type for runner operations.
pub type Result<T> = std::result::Result<T, BenchError>;

/// Fatal errors that prevent the benchmark from running.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BenchError {
    /// Neither the corpus directory nor its fallback exists.
    #[error("Please create a folder named '{name}' in the current directory and populate it with the source files.")]
    CorpusMissing {
        /// Directory name shown to the user
        name: String,
        /// Primary location that was checked
        primary: PathBuf,
        /// Fallback location that was checked
        fallback: PathBuf,
    },

    /// The single input file of a fixed-path run does not exist.
    #[error("Please create the input file '{}' before running the benchmark.", .path.display())]
    InputMissing {
        /// The missing input path
        path: PathBuf,
    },

    /// I/O operation failed while reading the corpus.
    #[error("I/O error for '{}': {}", .path.display(), .message)]
    Io {
        /// The path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// Writing the report failed.
    #[error("Failed to write report: {0}")]
    Output(String),

    /// A runner configuration value is unusable.
    #[error("Invalid configuration parameter '{parameter}': {reason}")]
    InvalidConfig {
        /// Parameter name
        parameter: String,
        /// Reason for invalidity
        reason: String,
    },
}

impl BenchError {
    /// Creates an I/O error with path context.
    pub fn io_error(path: impl Into<PathBuf>, err: io::Error) -> Self {
        BenchError::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        BenchError::InvalidConfig {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }
}

/// A failure recorded against one candidate for one input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CandidateError {
    /// The conversion did not finish within the invocation timeout.
    #[error("Timeout - did not complete in {}.", describe_timeout(.timeout))]
    Timeout {
        /// The timeout that was exceeded
        timeout: Duration,
    },

    /// The converter returned an error.
    #[error("{0}")]
    Runtime(String),

    /// The converter panicked.
    #[error("panicked: {0}")]
    Panicked(String),
}

fn describe_timeout(timeout: &Duration) -> String {
    if timeout.subsec_nanos() == 0 {
        let secs = timeout.as_secs();
        if secs == 1 {
            "1 second".to_string()
        } else {
            format!("{} seconds", secs)
        }
    } else {
        format!("{} ms", timeout.as_millis())
    }
}

/// Error returned by a converter adapter.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Reading the input or writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not valid UTF-8.
    #[error("input is not valid UTF-8")]
    InvalidUtf8,

    /// The converter rejected the input.
    #[error("{0}")]
    Failed(String),
}

impl ConvertError {
    /// Creates a conversion failure from any displayable message.
    pub fn failed(message: impl std::fmt::Display) -> Self {
        ConvertError::Failed(message.to_string())
    }
}
