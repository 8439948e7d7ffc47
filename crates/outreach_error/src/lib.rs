//! Error types for the Outreach service.
//!
//! Every error carries the source location where it was raised. The
//! crate-level [`OutreachError`] wraps any of the component errors so binaries
//! can propagate with `?`.

mod config;
mod generation;
mod provider;
mod server;

pub use config::{ConfigError, ConfigErrorKind};
pub use generation::{GenerationError, GenerationErrorKind, GenerationResult};
pub use provider::{ProviderError, ProviderErrorKind};
pub use server::{ServerError, ServerErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From, derive_more::Display)]
pub enum OutreachErrorKind {
    /// Configuration error
    #[display("{}", _0)]
    Config(ConfigError),
    /// LLM provider error
    #[display("{}", _0)]
    Provider(ProviderError),
    /// Generation pipeline error
    #[display("{}", _0)]
    Generation(GenerationError),
    /// HTTP server error
    #[display("{}", _0)]
    Server(ServerError),
}

/// Outreach error with kind discrimination.
#[derive(Debug)]
pub struct OutreachError(Box<OutreachErrorKind>);

impl OutreachError {
    /// Create a new error from a kind.
    pub fn new(kind: OutreachErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &OutreachErrorKind {
        &self.0
    }
}

impl std::fmt::Display for OutreachError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Outreach Error: {}", self.0)
    }
}

impl std::error::Error for OutreachError {}

// Generic From implementation for any type that converts to OutreachErrorKind
impl<T> From<T> for OutreachError
where
    T: Into<OutreachErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Outreach operations.
pub type OutreachResult<T> = std::result::Result<T, OutreachError>;
