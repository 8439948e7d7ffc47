//! Turning raw model text into a validated message.

use outreach_core::GeneratedMessage;
use outreach_error::{GenerationError, GenerationErrorKind, GenerationResult};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use tracing::debug;

/// Longest excerpt of raw model output carried in errors.
pub const EXCERPT_CHARS: usize = 200;

static LEADING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^```(?:json)?\s*").expect("valid leading fence regex"));
static TRAILING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*```$").expect("valid trailing fence regex"));

/// Trims the text and removes a surrounding markdown code fence, if any.
///
/// A leading ```` ```json ```` or ```` ``` ```` and a trailing ```` ``` ```` are
/// removed independently; text without fences only loses outer whitespace.
///
/// # Examples
///
/// ```
/// use outreach_pipeline::extraction::strip_code_fence;
///
/// assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
/// assert_eq!(strip_code_fence("  {\"a\":1} "), "{\"a\":1}");
/// ```
pub fn strip_code_fence(raw: &str) -> &str {
    let text = raw.trim();
    let text = match LEADING_FENCE.find(text) {
        Some(m) => &text[m.end()..],
        None => text,
    };
    match TRAILING_FENCE.find(text) {
        Some(m) => &text[..m.start()],
        None => text,
    }
}

/// First [`EXCERPT_CHARS`] characters of `raw`, with `...` appended when
/// anything was cut.
pub fn excerpt(raw: &str) -> String {
    match raw.char_indices().nth(EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}...", &raw[..cut]),
        None => raw.to_string(),
    }
}

/// Parses fence-stripped text as JSON.
///
/// # Errors
///
/// `MalformedJson` with an excerpt of `raw` when the text is not JSON.
pub fn parse_json(raw: &str) -> GenerationResult<Value> {
    serde_json::from_str(strip_code_fence(raw)).map_err(|e| {
        debug!(error = %e, "Model output is not JSON");
        GenerationError::new(GenerationErrorKind::MalformedJson {
            excerpt: excerpt(raw),
            reason: e.to_string(),
        })
    })
}

/// Checks a parsed value against the message schema.
///
/// All five keys must be present with string values; any other key fails.
///
/// # Errors
///
/// `SchemaValidation` naming the first problem found.
pub fn validate_message(value: Value) -> GenerationResult<GeneratedMessage> {
    // serde would also accept a five-element array for a struct
    if !value.is_object() {
        return Err(GenerationError::new(GenerationErrorKind::SchemaValidation(
            "expected a JSON object".to_string(),
        )));
    }
    serde_json::from_value(value)
        .map_err(|e| GenerationError::new(GenerationErrorKind::SchemaValidation(e.to_string())))
}

/// [`parse_json`] followed by [`validate_message`].
pub fn parse_message(raw: &str) -> GenerationResult<GeneratedMessage> {
    validate_message(parse_json(raw)?)
}
