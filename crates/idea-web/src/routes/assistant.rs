//! The idea-generation endpoint.

use axum::extract::State;
use axum::Json;
use scm_assistant::{AssistantError, AssistantReply, AssistantRequest};

use crate::error::Result;
use crate::state::AppState;

/// Answer `{message, category, context}` with `{response, category}`.
pub async fn supply_chain_ai(
    State(state): State<AppState>,
    Json(request): Json<AssistantRequest>,
) -> Result<Json<AssistantReply>> {
    let assistant = state.assistant.as_ref().ok_or_else(|| {
        AssistantError::Configuration("OPENAI_API_KEY not set".to_string())
    })?;

    Ok(Json(assistant.respond(&request).await?))
}
