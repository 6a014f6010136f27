//! Error types for the web server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use brainstorm::OrchestratorError;
use database::{DatabaseError, SubmissionError, ValidationError};
use scm_assistant::AssistantError;
use thiserror::Error;

/// Message shown when a submission could not be stored.
pub const SUBMISSION_FAILED: &str = "There was an error submitting your idea. Please try again.";

/// Errors that can occur while handling a request.
#[derive(Debug, Error)]
pub enum WebError {
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Submission(#[from] SubmissionError),

    #[error(transparent)]
    Brainstorm(#[from] OrchestratorError),

    #[error(transparent)]
    Assistant(#[from] AssistantError),

    #[error("{0} not found")]
    NotFound(&'static str),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            WebError::Database(err) if err.is_not_found() => {
                (StatusCode::NOT_FOUND, err.to_string())
            }
            WebError::Database(err) => {
                tracing::error!("Database error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            WebError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            WebError::Submission(SubmissionError::Invalid(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            WebError::Submission(SubmissionError::Store(err)) => {
                tracing::error!("Error submitting idea: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, SUBMISSION_FAILED.to_string())
            }
            WebError::Brainstorm(OrchestratorError::EmptyMessage) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            WebError::Brainstorm(err) => {
                tracing::error!("Brainstorming error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            WebError::Assistant(err) => {
                tracing::error!("Error in supply-chain-ai function: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            WebError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, Json(body)).into_response()
    }
}

/// Result type for handlers.
pub type Result<T> = std::result::Result<T, WebError>;
