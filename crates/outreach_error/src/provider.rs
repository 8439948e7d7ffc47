//! Errors from OpenAI-compatible chat-completion providers.

use derive_more::{Display, Error};

/// Provider-side failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum ProviderErrorKind {
    /// HTTP/network error
    #[display("HTTP error: {}", _0)]
    Http(String),

    /// The request did not complete within the configured timeout
    #[display("Request timed out: {}", _0)]
    Timeout(String),

    /// API returned a non-success status
    #[display("API error (status {}): {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Error body returned by the provider
        message: String,
    },

    /// Response body could not be decoded
    #[display("Response parsing failed: {}", _0)]
    ResponseParsing(String),

    /// Request could not be expressed in the provider's format
    #[display("Invalid request: {}", _0)]
    InvalidRequest(String),
}

/// Provider error with source location.
///
/// # Examples
///
/// ```
/// use outreach_error::{ProviderError, ProviderErrorKind};
///
/// let err = ProviderError::new(ProviderErrorKind::Api {
///     status: 429,
///     message: "slow down".into(),
/// });
/// assert!(err.to_string().contains("status 429"));
/// ```
#[derive(Debug, Clone, Display, Error)]
#[display("Provider Error: {} at line {} in {}", kind, line, file)]
pub struct ProviderError {
    /// What went wrong
    pub kind: ProviderErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ProviderError {
    /// Create a new ProviderError with the given kind at the current location.
    #[track_caller]
    pub fn new(kind: ProviderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
