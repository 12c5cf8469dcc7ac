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

//! pulldown-cmark adapters.

use mdcompare::core::read_input;
use mdcompare::{ConvertError, Converter};
use pulldown_cmark::{html, Options, Parser};
use std::io::{Read, Write};

/// Pull-parser converter, CommonMark only or with GitHub extensions.
#[derive(Debug, Clone, Copy)]
pub struct PulldownCmark {
    options: Options,
}

impl PulldownCmark {
    /// Strict CommonMark.
    pub fn commonmark() -> Self {
        Self {
            options: Options::empty(),
        }
    }

    /// Tables, strikethrough, task lists, and footnotes enabled.
    pub fn gfm() -> Self {
        Self {
            options: Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS
                | Options::ENABLE_FOOTNOTES,
        }
    }
}

impl Default for PulldownCmark {
    fn default() -> Self {
        Self::commonmark()
    }
}

impl Converter for PulldownCmark {
    fn convert(&self, input: &mut dyn Read, output: &mut dyn Write) -> Result<(), ConvertError> {
        let text = read_input(input)?;
        let mut html_output = String::with_capacity(text.len() * 3 / 2);
        html::push_html(&mut html_output, Parser::new_ext(&text, self.options));
        output.write_all(html_output.as_bytes())?;
        Ok(())
    }
}
