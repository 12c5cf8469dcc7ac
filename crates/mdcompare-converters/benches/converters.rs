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

//! Criterion benchmarks for the converter adapters.
//!
//! Complements the wall-clock harness with statistically sampled timings of
//! each adapter on small, medium, and generated large documents.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mdcompare_converters::default_candidates;
use std::io::Cursor;

const SHORT_MARKDOWN: &str = r#"# Hello World

This is a **simple** paragraph with some *emphasis*.

- Item 1
- Item 2
- Item 3
"#;

const MEDIUM_MARKDOWN: &str = r#"# Release Notes

## Highlights

The runner now reports **extrapolated** totals for slow candidates and
keeps going when a converter *panics*.

1. Faster corpus discovery
2. Progress output on long inputs
3. Clearer timeout messages

```rust
fn main() {
    println!("Hello, world!");
}
```

> Inputs are read once and shared across every pass.

| Library | Total | Each |
|---------|-------|------|
| A       | 10    | 1.0  |
| B       | 20    | 2.0  |

See [the changelog](https://example.com/changelog) for details.
"#;

fn long_markdown() -> String {
    MEDIUM_MARKDOWN.repeat(64)
}

fn bench_converters(c: &mut Criterion) {
    let long = long_markdown();
    let inputs = [
        ("short", SHORT_MARKDOWN),
        ("medium", MEDIUM_MARKDOWN),
        ("long", long.as_str()),
    ];

    for candidate in default_candidates() {
        let mut group = c.benchmark_group(candidate.name());
        let converter = candidate.converter();

        for (label, text) in inputs {
            group.throughput(Throughput::Bytes(text.len() as u64));
            group.bench_with_input(BenchmarkId::from_parameter(label), text, |b, text| {
                let mut output = Vec::with_capacity(text.len() * 2);
                b.iter(|| {
                    output.clear();
                    let mut input = Cursor::new(black_box(text.as_bytes()));
                    converter
                        .convert(&mut input, &mut output)
                        .expect("conversion failed");
                    black_box(output.len())
                });
            });
        }

        group.finish();
    }
}

criterion_group!(benches, bench_converters);
criterion_main!(benches);
