//! Decoding of gate pipeline listings
//!
//! Decoding is all-or-nothing: the body must be a JSON array and every element
//! must decode as a [`PipelineConfig`]. A single bad element fails the whole
//! listing; nothing is skipped or coerced.

use serde::de::{Deserializer as _, SeqAccess, Visitor};
use serde_json::Value as JsonValue;
use std::cell::Cell;
use std::fmt;
use thiserror::Error;

use crate::domain::pipeline::PipelineConfig;

/// Errors produced while decoding a pipeline listing
///
/// `Syntax` and `Element` keep the serde_json cause, whose `line()` and
/// `column()` point into the response body.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Body was empty or whitespace only
    #[error("response body is empty")]
    EmptyBody,

    /// Body is not valid JSON
    #[error("response body is not valid JSON: {0}")]
    Syntax(#[source] serde_json::Error),

    /// Body is valid JSON but not an array
    #[error("expected a JSON array of pipeline configs, found {found}")]
    NotAnArray { found: &'static str },

    /// An element of the array is not a valid pipeline config
    #[error("pipeline config at index {index} is invalid: {source}")]
    Element {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Decode a gate response body into pipeline configs, preserving order
pub fn decode_pipeline_configs(body: &[u8]) -> Result<Vec<PipelineConfig>, DecodeError> {
    let Some(first) = body.iter().find(|b| !b.is_ascii_whitespace()) else {
        return Err(DecodeError::EmptyBody);
    };

    if *first != b'[' {
        let document: JsonValue = serde_json::from_slice(body).map_err(DecodeError::Syntax)?;
        return Err(DecodeError::NotAnArray {
            found: json_kind(&document),
        });
    }

    let index = Cell::new(0);
    let mut deserializer = serde_json::Deserializer::from_slice(body);
    let decoded = (&mut deserializer)
        .deserialize_seq(ListingVisitor { index: &index })
        .and_then(|pipelines| {
            deserializer.end()?;
            Ok(pipelines)
        });

    decoded.map_err(|source| {
        if source.is_data() {
            DecodeError::Element {
                index: index.get(),
                source,
            }
        } else {
            DecodeError::Syntax(source)
        }
    })
}

/// Collects array elements, recording the index of the element being decoded
struct ListingVisitor<'a> {
    index: &'a Cell<usize>,
}

impl<'de> Visitor<'de> for ListingVisitor<'_> {
    type Value = Vec<PipelineConfig>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a JSON array of pipeline configs")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut pipelines = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(pipeline) = seq.next_element()? {
            pipelines.push(pipeline);
            self.index.set(pipelines.len());
        }
        Ok(pipelines)
    }
}

/// Encode pipeline configs as the pretty JSON array the CLI emits
pub fn encode_pipeline_configs(pipelines: &[PipelineConfig]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(pipelines)
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
