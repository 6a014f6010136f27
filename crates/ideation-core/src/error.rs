//! Error types for idea generation.

use thiserror::Error;

/// Errors that can occur while asking a generator for an idea.
///
/// None of these are fatal to the brainstorming flow: the orchestrator
/// answers every one of them with fallback text.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The generator is misconfigured (bad endpoint, missing key).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The request never got a response.
    #[error("network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success status.
    #[error("endpoint returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The endpoint answered 2xx but the body was unusable.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl GenerationError {
    /// Status code carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            GenerationError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
