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

//! Resource quarantine between invocations.
//!
//! After every invocation the runner asks a [`Quarantine`] to return memory
//! left behind by the last candidate, so that one converter's allocation
//! residue does not skew the next converter's timing.

/// Hook that releases per-invocation resources.
pub trait Quarantine: Send + Sync {
    /// Releases resources left behind by the previous invocation.
    fn release(&self);
}

/// Returns freed heap pages to the operating system.
///
/// Uses `malloc_trim(0)` on glibc targets and does nothing elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeapTrim;

impl Quarantine for HeapTrim {
    fn release(&self) {
        #[cfg(all(target_os = "linux", target_env = "gnu"))]
        trim_heap();
    }
}

#[cfg(all(target_os = "linux", target_env = "gnu"))]
fn trim_heap() {
    // SAFETY: malloc_trim only walks allocator-internal free lists.
    unsafe {
        libc::malloc_trim(0);
    }
}

/// Skips cleanup entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoQuarantine;

impl Quarantine for NoQuarantine {
    fn release(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heap_trim_is_callable_repeatedly() {
        let trim = HeapTrim;
        let garbage: Vec<Vec<u8>> = (0..64).map(|_| vec![0u8; 64 * 1024]).collect();
        drop(garbage);
        trim.release();
        trim.release();
    }

    #[test]
    fn test_quarantine_is_object_safe() {
        let hooks: Vec<Box<dyn Quarantine>> = vec![Box::new(HeapTrim), Box::new(NoQuarantine)];
        for hook in &hooks {
            hook.release();
        }
    }
}
