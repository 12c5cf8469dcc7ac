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

//! comrak adapter.

use mdcompare::core::read_input;
use mdcompare::{ConvertError, Converter};
use std::io::{Read, Write};

/// CommonMark and GFM-compatible converter backed by comrak.
#[derive(Debug, Clone, Copy, Default)]
pub struct Comrak {
    extensions: bool,
}

impl Comrak {
    /// Strict CommonMark.
    pub fn commonmark() -> Self {
        Self { extensions: false }
    }

    /// Tables, strikethrough, task lists, autolinks, and footnotes enabled.
    pub fn gfm() -> Self {
        Self { extensions: true }
    }
}

impl Converter for Comrak {
    fn convert(&self, input: &mut dyn Read, output: &mut dyn Write) -> Result<(), ConvertError> {
        let text = read_input(input)?;

        let mut options = comrak::Options::default();
        if self.extensions {
            options.extension.table = true;
            options.extension.strikethrough = true;
            options.extension.tasklist = true;
            options.extension.autolink = true;
            options.extension.footnotes = true;
        }

        let html = comrak::markdown_to_html(&text, &options);
        output.write_all(html.as_bytes())?;
        Ok(())
    }
}
