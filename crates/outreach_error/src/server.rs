//! HTTP server lifecycle errors.

use derive_more::{Display, Error};

/// Failures while binding or running the HTTP listener.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum ServerErrorKind {
    /// Could not bind the listen address.
    #[display("Failed to bind {}: {}", addr, reason)]
    Bind {
        /// Requested listen address
        addr: String,
        /// Underlying I/O error text
        reason: String,
    },

    /// The server loop exited with an error.
    #[display("Server terminated: {}", _0)]
    Serve(String),
}

/// Server error with source location.
#[derive(Debug, Clone, Display, Error)]
#[display("Server Error: {} at line {} in {}", kind, line, file)]
pub struct ServerError {
    /// What went wrong
    pub kind: ServerErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ServerError {
    /// Create a new ServerError with the given kind at the current location.
    #[track_caller]
    pub fn new(kind: ServerErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
