//! Configuration error types.

use derive_more::{Display, Error};

/// Configuration failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum ConfigErrorKind {
    /// A required environment variable is not set.
    #[display("{} not set", _0)]
    MissingVariable(String),

    /// A variable is set but cannot be interpreted.
    #[display("Invalid value {:?} for {}: {}", value, variable, reason)]
    InvalidValue {
        /// Variable name
        variable: String,
        /// Raw value as read
        value: String,
        /// Why it was rejected
        reason: String,
    },

    /// Assembling the configuration struct failed.
    #[display("Failed to build configuration: {}", _0)]
    Builder(String),
}

/// Configuration error with source location.
///
/// # Examples
///
/// ```
/// use outreach_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::MissingVariable("OPENROUTER_API_KEY".into()));
/// assert!(err.to_string().contains("OPENROUTER_API_KEY not set"));
/// ```
#[derive(Debug, Clone, Display, Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// What went wrong
    pub kind: ConfigErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with the given kind at the current location.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
