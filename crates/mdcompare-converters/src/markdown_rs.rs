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

//! markdown-rs adapter.

use mdcompare::core::read_input;
use mdcompare::{ConvertError, Converter};
use std::io::{Read, Write};

/// Converter backed by the `markdown` crate's compiler.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRs {
    gfm: bool,
}

impl MarkdownRs {
    /// Strict CommonMark.
    pub fn commonmark() -> Self {
        Self { gfm: false }
    }

    /// GitHub Flavored Markdown.
    pub fn gfm() -> Self {
        Self { gfm: true }
    }
}

impl Converter for MarkdownRs {
    fn convert(&self, input: &mut dyn Read, output: &mut dyn Write) -> Result<(), ConvertError> {
        let text = read_input(input)?;
        let options = if self.gfm {
            markdown::Options::gfm()
        } else {
            markdown::Options::default()
        };
        let html = markdown::to_html_with_options(&text, &options).map_err(ConvertError::failed)?;
        output.write_all(html.as_bytes())?;
        Ok(())
    }
}
