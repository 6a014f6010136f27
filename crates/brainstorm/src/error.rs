//! Error types for orchestrator operations.

use ideation_core::GenerationError;
use thiserror::Error;

/// Errors that can occur during brainstorming.
///
/// Generation failures never show up here: they are answered with
/// fallback text.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// `initialize` has not been called yet.
    #[error("brainstorming service not initialized")]
    NotInitialized,

    /// The user sent nothing to work with.
    #[error("message is empty")]
    EmptyMessage,

    /// The generator could not be built.
    #[error("generator setup failed: {0}")]
    Setup(#[from] GenerationError),
}
