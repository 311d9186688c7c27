//! Pulls a typed value out of free-text generation output.
//!
//! The service is asked for JSON but usually wraps it in prose or code
//! fences. The block taken is the greedy span from the first `{` to the last
//! `}` in the reply.

use std::sync::LazyLock;

use regex::Regex;
use serde::de::DeserializeOwned;

static BRACE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("valid brace-block regex"));

/// Outcome of [`extract_structured`].
#[derive(Debug)]
pub enum Extraction<T> {
    Success(T),
    /// No `{ ... }` block in the text.
    NotFound,
    /// The block is not valid JSON.
    ParseError(serde_json::Error),
    /// Valid JSON that does not fit the target type.
    ValidationError(serde_json::Error),
}

/// Find the outermost brace-delimited block in `text` and decode it as `T`.
///
/// Parsing happens in two steps so callers can tell malformed JSON apart from
/// JSON of the wrong shape.
#[must_use]
pub fn extract_structured<T: DeserializeOwned>(text: &str) -> Extraction<T> {
    let Some(block) = BRACE_BLOCK.find(text) else {
        return Extraction::NotFound;
    };

    let value: serde_json::Value = match serde_json::from_str(block.as_str()) {
        Ok(value) => value,
        Err(e) => return Extraction::ParseError(e),
    };

    match serde_json::from_value(value) {
        Ok(parsed) => Extraction::Success(parsed),
        Err(e) => Extraction::ValidationError(e),
    }
}
