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

//! MDCompare command-line entry point.
//!
//! Benchmarks the bundled markdown converters over the `Tests` corpus in the
//! current directory and prints one comparison table per file.

use clap::Parser;
use mdcompare::{BenchmarkRunner, CorpusSource, RunnerConfig};
use mdcompare_converters::default_candidates;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "mdcompare=warn";

#[derive(Parser)]
#[command(name = "mdcompare")]
#[command(author, version, about = "MDCompare - Markdown converter benchmark", long_about = None)]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(io::stderr)
        .init();

    tracing::info!("Starting MDCompare v{}", env!("CARGO_PKG_VERSION"));

    mdcompare::raise_priority();

    let config = RunnerConfig::new(default_candidates());
    let runner = match BenchmarkRunner::new(config, CorpusSource::default()) {
        Ok(runner) => runner,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = runner.run(&mut out);
    let _ = out.flush();

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{}", e);
            ExitCode::FAILURE
        }
    }
}
