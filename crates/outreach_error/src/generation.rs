//! Generation pipeline error types and retry classification.

use crate::ProviderErrorKind;
use derive_more::{Display, Error};

/// Failure conditions of a single generation attempt, plus the terminal
/// exhaustion state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum GenerationErrorKind {
    /// The first choice carried no message content.
    #[display("No response from AI")]
    EmptyResponse,

    /// The model output was not parseable JSON.
    #[display("AI response is not valid JSON. Response: {}", excerpt)]
    MalformedJson {
        /// At most 200 characters of the raw response
        excerpt: String,
        /// Parser diagnostic
        reason: String,
    },

    /// The JSON did not match the message schema.
    #[display("AI response failed schema validation: {}", _0)]
    SchemaValidation(String),

    /// The provider call itself failed.
    #[display("{}", _0)]
    Provider(ProviderErrorKind),

    /// Every attempt failed.
    #[display(
        "Failed to generate valid message after {} retries. Last AI response: \"{}\"",
        attempts,
        last_response
    )]
    RetriesExhausted {
        /// Number of attempts made
        attempts: usize,
        /// Truncated excerpt of the last raw response, empty if none arrived
        last_response: String,
    },
}

impl GenerationErrorKind {
    /// Whether another attempt may be made after this failure.
    ///
    /// Every per-attempt failure is retryable; only exhaustion is final.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, GenerationErrorKind::RetriesExhausted { .. })
    }

    /// Short label for logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            GenerationErrorKind::EmptyResponse => "empty_response",
            GenerationErrorKind::MalformedJson { .. } => "malformed_json",
            GenerationErrorKind::SchemaValidation(_) => "schema_validation",
            GenerationErrorKind::Provider(_) => "provider",
            GenerationErrorKind::RetriesExhausted { .. } => "retries_exhausted",
        }
    }
}

impl From<ProviderErrorKind> for GenerationErrorKind {
    fn from(kind: ProviderErrorKind) -> Self {
        GenerationErrorKind::Provider(kind)
    }
}

/// Generation error with location tracking.
///
/// # Examples
///
/// ```
/// use outreach_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::RetriesExhausted {
///     attempts: 3,
///     last_response: String::new(),
/// });
/// assert!(!err.kind.is_retryable());
/// assert!(err.kind.to_string().contains("after 3 retries"));
/// ```
#[derive(Debug, Clone, Display, Error)]
#[display("Generation Error: {} at {}:{}", kind, file, line)]
pub struct GenerationError {
    /// The specific error kind.
    pub kind: GenerationErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// File where error occurred.
    pub file: &'static str,
}

impl GenerationError {
    /// Creates a new error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<crate::ProviderError> for GenerationError {
    #[track_caller]
    fn from(err: crate::ProviderError) -> Self {
        Self::new(GenerationErrorKind::Provider(err.kind))
    }
}

/// Result type for generation operations.
pub type GenerationResult<T> = Result<T, GenerationError>;
