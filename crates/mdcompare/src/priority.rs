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

//! Best-effort process priority boost.
//!
//! Raising scheduling priority reduces interference from other processes.
//! Unprivileged users usually cannot lower their nice value, so failure is
//! expected and only logged.

use tracing::debug;

/// Nice value requested on Unix.
pub const HIGH_PRIORITY_NICE: i32 = -10;

/// Requests elevated scheduling priority for the current process.
///
/// Returns whether the request succeeded. Never fails the run.
pub fn raise_priority() -> bool {
    raise_priority_impl()
}

#[cfg(unix)]
fn raise_priority_impl() -> bool {
    // SAFETY: setpriority only reads its integer arguments.
    let rc = unsafe { libc::setpriority(libc::PRIO_PROCESS, 0, HIGH_PRIORITY_NICE) };
    if rc == 0 {
        debug!(nice = HIGH_PRIORITY_NICE, "raised process priority");
        true
    } else {
        let err = std::io::Error::last_os_error();
        debug!(error = %err, "could not raise process priority");
        false
    }
}

#[cfg(not(unix))]
fn raise_priority_impl() -> bool {
    debug!("process priority changes are not supported on this platform");
    false
}
