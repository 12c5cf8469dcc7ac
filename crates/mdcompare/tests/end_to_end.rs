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

//! End-to-end runs over on-disk corpora.

use mdcompare::{BenchError, BenchmarkRunner, Candidate, CorpusSource, NoQuarantine, RunnerConfig};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

fn config() -> RunnerConfig {
    RunnerConfig::new(vec![
        Candidate::from_fn("Baseline", |s| Ok(s.to_string())),
        Candidate::from_fn("lines", |s| {
            Ok(s.lines().map(|l| format!("<p>{}</p>\n", l)).collect())
        }),
    ])
    .with_progress_interval(Duration::ZERO)
    .with_quarantine(NoQuarantine)
}

#[test]
fn test_size_drives_iterations_and_units() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("small.md"), "a".repeat(3_000)).unwrap();
    fs::write(dir.path().join("large.md"), "b\n".repeat(1_050_000)).unwrap();

    let runner =
        BenchmarkRunner::new(config(), CorpusSource::directory(dir.path(), dir.path())).unwrap();
    let mut out = Vec::new();
    let reports = runner.run(&mut out).unwrap();

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].name, "small.md");
    assert_eq!(reports[0].iterations, 1_748);
    assert_eq!(reports[1].name, "large.md");
    assert_eq!(reports[1].len, 2_100_000);
    assert_eq!(reports[1].iterations, 3);

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("small.md    2.9 KB   (1748 iterations)"));
    assert!(text.contains("large.md    2.0 MB   (3 iterations)"));
    for report in &reports {
        assert!(report.failures().next().is_none());
        assert_eq!(report.baseline().unwrap().ratio, Some(1.0));
    }
}

#[test]
fn test_primary_directory_wins_over_fallback() {
    let dir = tempdir().unwrap();
    let primary = dir.path().join("Tests");
    let fallback = dir.path().join("Fallback");
    fs::create_dir(&primary).unwrap();
    fs::create_dir(&fallback).unwrap();
    fs::write(primary.join("primary.md"), "# P\n").unwrap();
    fs::write(fallback.join("fallback.md"), "# F\n").unwrap();

    let config = config().with_iteration_bounds(3, 3);
    let runner =
        BenchmarkRunner::new(config, CorpusSource::directory(&primary, &fallback)).unwrap();
    let reports = runner.run(&mut Vec::new()).unwrap();

    let names: Vec<&str> = reports.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["primary.md"]);
}

#[test]
fn test_missing_single_file() {
    let dir = tempdir().unwrap();
    let runner =
        BenchmarkRunner::new(config(), CorpusSource::file(dir.path().join("absent.md"))).unwrap();

    let mut out = Vec::new();
    let err = runner.run(&mut out).unwrap_err();
    assert!(matches!(err, BenchError::InputMissing { .. }));
    assert!(out.is_empty());
}
