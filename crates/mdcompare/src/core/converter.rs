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

//! Converter adapter contract.
//!
//! Every markdown converter under comparison is wrapped behind [`Converter`]:
//! it consumes a readable input source and writes its full output to a sink.
//! The runner treats converters as opaque and holds no converter-specific
//! logic.

use crate::error::ConvertError;
use std::fmt;
use std::io::{Read, Write};
use std::sync::Arc;

/// A text transformation under benchmark.
///
/// Implementations must be `Send + Sync` because each invocation runs on a
/// worker thread, and every call must be independently repeatable.
pub trait Converter: Send + Sync {
    /// Converts the whole of `input` and writes the result to `output`.
    fn convert(&self, input: &mut dyn Read, output: &mut dyn Write) -> Result<(), ConvertError>;

    /// Releases caches or pooled allocations left behind by the last
    /// invocation. Called after every invocation, including failed ones.
    fn release(&self) {}
}

/// Reads an entire input source as UTF-8 text.
pub fn read_input(input: &mut dyn Read) -> Result<String, ConvertError> {
    let mut bytes = Vec::new();
    input.read_to_end(&mut bytes)?;
    String::from_utf8(bytes).map_err(|_| ConvertError::InvalidUtf8)
}

/// Adapts a unary `&str -> String` function to the [`Converter`] contract.
pub struct FnConverter<F> {
    transform: F,
}

impl<F> FnConverter<F>
where
    F: Fn(&str) -> Result<String, ConvertError> + Send + Sync,
{
    /// Wraps a string transformation.
    pub fn new(transform: F) -> Self {
        Self { transform }
    }
}

impl<F> Converter for FnConverter<F>
where
    F: Fn(&str) -> Result<String, ConvertError> + Send + Sync,
{
    fn convert(&self, input: &mut dyn Read, output: &mut dyn Write) -> Result<(), ConvertError> {
        let text = read_input(input)?;
        let html = (self.transform)(&text)?;
        output.write_all(html.as_bytes())?;
        Ok(())
    }
}

/// One named implementation under comparison.
#[derive(Clone)]
pub struct Candidate {
    name: String,
    converter: Arc<dyn Converter>,
}

impl Candidate {
    /// Creates a candidate from a converter.
    pub fn new(name: impl Into<String>, converter: impl Converter + 'static) -> Self {
        Self {
            name: name.into(),
            converter: Arc::new(converter),
        }
    }

    /// Creates a candidate from a shared converter.
    pub fn from_arc(name: impl Into<String>, converter: Arc<dyn Converter>) -> Self {
        Self {
            name: name.into(),
            converter,
        }
    }

    /// Creates a candidate from a unary string transformation.
    pub fn from_fn<F>(name: impl Into<String>, transform: F) -> Self
    where
        F: Fn(&str) -> Result<String, ConvertError> + Send + Sync + 'static,
    {
        Self::new(name, FnConverter::new(transform))
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a shared handle to the converter.
    pub fn converter(&self) -> Arc<dyn Converter> {
        Arc::clone(&self.converter)
    }
}

impl fmt::Debug for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Candidate").field("name", &self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_fn_converter_round_trips_through_streams() {
        let candidate = Candidate::from_fn("upper", |s| Ok(s.to_uppercase()));
        let mut input = Cursor::new(b"hello".to_vec());
        let mut output = Vec::new();

        candidate
            .converter()
            .convert(&mut input, &mut output)
            .unwrap();

        assert_eq!(output, b"HELLO");
        assert_eq!(candidate.name(), "upper");
    }

    #[test]
    fn test_read_input_rejects_invalid_utf8() {
        let mut input = Cursor::new(vec![0xff, 0xfe, 0x00]);
        assert!(matches!(
            read_input(&mut input),
            Err(ConvertError::InvalidUtf8)
        ));
    }

    #[test]
    fn test_fn_converter_propagates_failure() {
        let candidate = Candidate::from_fn("broken", |_| Err(ConvertError::failed("nope")));
        let mut input = Cursor::new(b"# title".to_vec());
        let mut output = Vec::new();

        let err = candidate
            .converter()
            .convert(&mut input, &mut output)
            .unwrap_err();
        assert_eq!(err.to_string(), "nope");
        assert!(output.is_empty());
    }

    #[test]
    fn test_debug_shows_name_only() {
        let candidate = Candidate::from_fn("identity", |s| Ok(s.to_string()));
        assert_eq!(format!("{:?}", candidate), "Candidate { name: \"identity\" }");
    }
}
