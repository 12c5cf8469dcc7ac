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

//! Timed invocation of a single candidate.
//!
//! Each call runs the converter on a dedicated worker thread so the
//! controlling thread can stop waiting after the timeout. Cancellation is
//! best effort: a timed-out worker is abandoned, not killed. It may keep
//! running in the background and its late result is dropped because nobody
//! holds the receiving end of its channel any more. CPU and memory used by
//! such a worker are not contained.
//!
//! Panics inside workers are caught and recorded, so the process panic hook
//! is wrapped once to stay silent on worker threads.

use crate::core::Candidate;
use crate::error::{CandidateError, ConvertError};
use crate::fixtures::BenchmarkInput;
use crate::harness::quarantine::Quarantine;
use std::any::Any;
use std::io::Cursor;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Once;
use std::thread;
use std::time::{Duration, Instant};
use tracing::debug;

/// Outcome of one timed invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Time charged to the candidate for this call.
    pub elapsed: Duration,
    /// Failure recorded for this call, if any.
    pub error: Option<CandidateError>,
}

impl Invocation {
    /// A call that finished successfully.
    pub fn completed(elapsed: Duration) -> Self {
        Self {
            elapsed,
            error: None,
        }
    }

    /// A call that failed after `elapsed`.
    pub fn failed(elapsed: Duration, error: CandidateError) -> Self {
        Self {
            elapsed,
            error: Some(error),
        }
    }

    /// A call that was abandoned. It is charged exactly `timeout`.
    pub fn timed_out(timeout: Duration) -> Self {
        Self::failed(timeout, CandidateError::Timeout { timeout })
    }

    /// Returns true if the call recorded no error.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Name prefix of every worker thread.
pub const WORKER_PREFIX: &str = "mdcompare-";

static QUIET_WORKER_PANICS: Once = Once::new();

type WorkerOutcome = (Duration, Result<Result<(), ConvertError>, String>);

/// Runs `candidate` once over `input`, waiting at most `timeout`.
///
/// The converter reads from a fresh cursor over the loaded input and writes
/// into a fresh buffer that is discarded. After the call returns, times out,
/// or fails, the candidate's own [`release`](crate::Converter::release) and
/// the `quarantine` hook both run.
pub fn invoke(
    candidate: &Candidate,
    input: &BenchmarkInput,
    timeout: Duration,
    quarantine: &dyn Quarantine,
) -> Invocation {
    silence_worker_panics();
    let invocation = run_on_worker(candidate, input, timeout);

    candidate.converter().release();
    quarantine.release();

    debug!(
        candidate = candidate.name(),
        elapsed_us = invocation.elapsed.as_micros() as u64,
        ok = invocation.is_ok(),
        "invocation finished"
    );
    invocation
}

fn run_on_worker(candidate: &Candidate, input: &BenchmarkInput, timeout: Duration) -> Invocation {
    let (tx, rx) = mpsc::channel::<WorkerOutcome>();
    let converter = candidate.converter();
    let contents = input.contents();

    let spawned = thread::Builder::new()
        .name(worker_name(candidate.name()))
        .spawn(move || {
            let mut reader = Cursor::new(contents);
            let mut sink = Vec::new();

            let start = Instant::now();
            let result = panic::catch_unwind(AssertUnwindSafe(|| {
                converter.convert(&mut reader, &mut sink)
            }));
            let elapsed = start.elapsed();
            drop(sink);

            // The controller may have stopped waiting.
            let _ = tx.send((elapsed, result.map_err(panic_message)));
        });

    if let Err(err) = spawned {
        return Invocation::failed(
            Duration::ZERO,
            CandidateError::Runtime(format!("failed to start worker thread: {}", err)),
        );
    }

    match rx.recv_timeout(timeout) {
        Ok((elapsed, Ok(Ok(())))) => Invocation::completed(elapsed),
        Ok((elapsed, Ok(Err(err)))) => {
            Invocation::failed(elapsed, CandidateError::Runtime(err.to_string()))
        }
        Ok((elapsed, Err(message))) => Invocation::failed(elapsed, CandidateError::Panicked(message)),
        Err(RecvTimeoutError::Timeout) => Invocation::timed_out(timeout),
        Err(RecvTimeoutError::Disconnected) => Invocation::failed(
            Duration::ZERO,
            CandidateError::Panicked("worker exited without reporting".to_string()),
        ),
    }
}

/// Thread name for a candidate's worker. Interior NULs are not allowed in
/// thread names and are dropped.
fn worker_name(candidate: &str) -> String {
    let mut name = String::with_capacity(WORKER_PREFIX.len() + candidate.len());
    name.push_str(WORKER_PREFIX);
    name.extend(candidate.chars().filter(|&c| c != '\0'));
    name
}

fn is_worker_thread(name: Option<&str>) -> bool {
    name.map_or(false, |n| n.starts_with(WORKER_PREFIX))
}

/// Wraps the current panic hook so panics on worker threads print nothing.
/// Other threads keep the previous behavior.
fn silence_worker_panics() {
    QUIET_WORKER_PANICS.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !is_worker_thread(thread::current().name()) {
                previous(info);
            }
        }));
    });
}

fn panic_message(panic: Box<dyn Any + Send>) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
