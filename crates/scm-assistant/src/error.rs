//! Error types for the supply-chain assistant.

use thiserror::Error;

/// Errors that can occur while answering an idea request.
#[derive(Debug, Error)]
pub enum AssistantError {
    /// Missing or invalid configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The chat API could not be reached.
    #[error("Network error: {0}")]
    Network(String),

    /// The chat API answered with a non-success status.
    #[error("OpenAI API error: {status}")]
    Api { status: u16, message: String },

    /// The chat API answered with a body we could not read.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The completion carried no text.
    #[error("Failed to generate AI response")]
    EmptyResponse,
}
