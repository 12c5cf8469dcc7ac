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

//! Corpus discovery and input loading.
//!
//! The corpus is either a directory of markdown files (with a fallback
//! location for runs started from a build output directory) or a single
//! fixed input file. Files are benchmarked smallest first so early results
//! appear quickly and slow large-file runs come last.

use crate::error::{BenchError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Default corpus directory, relative to the working directory.
pub const DEFAULT_CORPUS_DIR: &str = "Tests";

/// Fallback corpus directory, checked when the default does not exist.
pub const DEFAULT_FALLBACK_DIR: &str = "../../Tests";

/// Where benchmark inputs come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorpusSource {
    /// Every regular file in `primary`, or in `fallback` if `primary` is absent.
    Directory {
        /// Directory checked first
        primary: PathBuf,
        /// Directory checked when `primary` does not exist
        fallback: PathBuf,
    },
    /// A single fixed input file.
    File(PathBuf),
}

impl CorpusSource {
    /// A directory corpus with an explicit fallback.
    pub fn directory(primary: impl Into<PathBuf>, fallback: impl Into<PathBuf>) -> Self {
        CorpusSource::Directory {
            primary: primary.into(),
            fallback: fallback.into(),
        }
    }

    /// A single-file corpus.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        CorpusSource::File(path.into())
    }

    /// Lists the inputs in benchmark order.
    ///
    /// Fails with [`BenchError::CorpusMissing`] or [`BenchError::InputMissing`]
    /// when nothing can be benchmarked at all.
    pub fn discover(&self) -> Result<Vec<CorpusEntry>> {
        match self {
            CorpusSource::Directory { primary, fallback } => {
                let dir = resolve_dir(primary, fallback)?;
                list_files(&dir)
            }
            CorpusSource::File(path) => {
                let metadata = fs::metadata(path).map_err(|_| BenchError::InputMissing {
                    path: path.clone(),
                })?;
                if !metadata.is_file() {
                    return Err(BenchError::InputMissing { path: path.clone() });
                }
                Ok(vec![CorpusEntry {
                    path: path.clone(),
                    len: metadata.len(),
                }])
            }
        }
    }
}

impl Default for CorpusSource {
    fn default() -> Self {
        Self::directory(DEFAULT_CORPUS_DIR, DEFAULT_FALLBACK_DIR)
    }
}

fn resolve_dir(primary: &Path, fallback: &Path) -> Result<PathBuf> {
    if primary.is_dir() {
        Ok(primary.to_path_buf())
    } else if fallback.is_dir() {
        Ok(fallback.to_path_buf())
    } else {
        let name = primary
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| primary.display().to_string());
        Err(BenchError::CorpusMissing {
            name,
            primary: primary.to_path_buf(),
            fallback: fallback.to_path_buf(),
        })
    }
}

fn list_files(dir: &Path) -> Result<Vec<CorpusEntry>> {
    let entries = fs::read_dir(dir).map_err(|e| BenchError::io_error(dir, e))?;

    let mut files: Vec<CorpusEntry> = entries
        .flatten()
        .filter_map(|entry| {
            let path = entry.path();
            let metadata = fs::metadata(&path).ok()?;
            metadata.is_file().then(|| CorpusEntry {
                path,
                len: metadata.len(),
            })
        })
        .collect();

    files.sort_by(|a, b| a.len.cmp(&b.len).then_with(|| a.path.cmp(&b.path)));
    Ok(files)
}

/// A discovered input file that has not been read yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusEntry {
    /// Location of the file.
    pub path: PathBuf,
    /// Size reported by the filesystem at discovery time.
    pub len: u64,
}

impl CorpusEntry {
    /// Returns the file name shown in reports.
    pub fn name(&self) -> String {
        display_name(&self.path)
    }

    /// Reads the file into memory.
    pub fn load(&self) -> Result<BenchmarkInput> {
        let bytes = fs::read(&self.path).map_err(|e| BenchError::io_error(&self.path, e))?;
        Ok(BenchmarkInput {
            name: self.name(),
            path: Some(self.path.clone()),
            contents: Arc::from(bytes),
        })
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// A loaded, read-only benchmark input.
///
/// Contents are shared so every invocation can get a fresh reader without
/// copying or touching the filesystem again.
#[derive(Debug, Clone)]
pub struct BenchmarkInput {
    name: String,
    path: Option<PathBuf>,
    contents: Arc<[u8]>,
}

impl BenchmarkInput {
    /// Creates an input from in-memory bytes.
    pub fn from_bytes(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        let bytes: Vec<u8> = bytes.into();
        Self {
            name: name.into(),
            path: None,
            contents: Arc::from(bytes),
        }
    }

    /// Returns the name shown in reports.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the source path, if the input came from disk.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns the input length in bytes.
    pub fn len(&self) -> u64 {
        self.contents.len() as u64
    }

    /// Returns true for an empty input.
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Returns a shared handle to the contents.
    pub fn contents(&self) -> Arc<[u8]> {
        Arc::clone(&self.contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write(dir: &Path, name: &str, len: usize) {
        fs::write(dir.join(name), "x".repeat(len)).unwrap();
    }

    #[test]
    fn test_files_are_ordered_by_size() {
        let dir = tempdir().unwrap();
        write(dir.path(), "large.md", 3_000);
        write(dir.path(), "small.md", 10);
        write(dir.path(), "medium.md", 500);
        fs::create_dir(dir.path().join("nested")).unwrap();

        let source = CorpusSource::directory(dir.path(), dir.path().join("missing"));
        let entries = source.discover().unwrap();

        let names: Vec<String> = entries.iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["small.md", "medium.md", "large.md"]);
        assert_eq!(entries[0].len, 10);
    }

    #[test]
    fn test_equal_sizes_order_by_name() {
        let dir = tempdir().unwrap();
        write(dir.path(), "b.md", 4);
        write(dir.path(), "a.md", 4);

        let entries = CorpusSource::directory(dir.path(), dir.path())
            .discover()
            .unwrap();
        let names: Vec<String> = entries.iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["a.md", "b.md"]);
    }

    #[test]
    fn test_fallback_directory_is_used() {
        let dir = tempdir().unwrap();
        let fallback = dir.path().join("fallback");
        fs::create_dir(&fallback).unwrap();
        write(&fallback, "only.md", 7);

        let source = CorpusSource::directory(dir.path().join("Tests"), &fallback);
        let entries = source.discover().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].path, fallback.join("only.md"));
    }

    #[test]
    fn test_missing_corpus_is_a_setup_error() {
        let dir = tempdir().unwrap();
        let source = CorpusSource::directory(dir.path().join("Tests"), dir.path().join("elsewhere"));

        match source.discover() {
            Err(BenchError::CorpusMissing { name, .. }) => assert_eq!(name, "Tests"),
            other => panic!("Expected CorpusMissing, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_directory_yields_no_inputs() {
        let dir = tempdir().unwrap();
        let entries = CorpusSource::directory(dir.path(), dir.path())
            .discover()
            .unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_single_file_source() {
        let dir = tempdir().unwrap();
        write(dir.path(), "readme.md", 42);

        let entries = CorpusSource::file(dir.path().join("readme.md"))
            .discover()
            .unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].len, 42);

        let missing = CorpusSource::file(dir.path().join("nope.md")).discover();
        assert!(matches!(missing, Err(BenchError::InputMissing { .. })));

        let not_a_file = CorpusSource::file(dir.path()).discover();
        assert!(matches!(not_a_file, Err(BenchError::InputMissing { .. })));
    }

    #[test]
    fn test_load_reads_contents() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("doc.md"), "# Heading\n").unwrap();

        let entry = CorpusSource::file(dir.path().join("doc.md"))
            .discover()
            .unwrap()
            .remove(0);
        let input = entry.load().unwrap();

        assert_eq!(input.name(), "doc.md");
        assert_eq!(input.len(), 10);
        assert_eq!(&*input.contents(), b"# Heading\n");
        assert_eq!(input.path(), Some(dir.path().join("doc.md").as_path()));
    }

    #[test]
    fn test_default_source() {
        assert_eq!(
            CorpusSource::default(),
            CorpusSource::directory("Tests", "../../Tests")
        );
    }

    #[test]
    fn test_in_memory_input() {
        let input = BenchmarkInput::from_bytes("inline", "abc");
        assert_eq!(input.len(), 3);
        assert!(!input.is_empty());
        assert!(input.path().is_none());
    }
}
