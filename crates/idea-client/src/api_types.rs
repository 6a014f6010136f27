//! Idea-generation endpoint request and response types.

use ideation_core::ConversationTurn;
use serde::{Deserialize, Serialize};

/// Request body accepted by the idea-generation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaRequest {
    /// User message (problem statement or composed refinement)
    pub message: String,
    /// Category display name, e.g. "Blue Yonder"
    pub category: String,
    /// Recent conversation, oldest first
    #[serde(default)]
    pub context: Vec<ConversationTurn>,
}

/// Successful response from the idea-generation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaResponse {
    /// Generated text
    pub response: String,
    /// Echo of the requested category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Error body returned with non-2xx statuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaErrorBody {
    pub error: String,
}
