//! Idea submission and the best-idea spotlight.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use database::{submission, BestIdea, IdeaSubmission, SubmissionReceipt};

use crate::error::{Result, WebError};
use crate::state::AppState;

/// Submit an idea.
pub async fn submit(
    State(state): State<AppState>,
    Json(form): Json<IdeaSubmission>,
) -> Result<(StatusCode, Json<SubmissionReceipt>)> {
    let receipt = submission::submit(state.db.pool(), &form).await?;
    Ok((StatusCode::CREATED, Json(receipt)))
}

/// The most voted idea with its author.
pub async fn best(State(state): State<AppState>) -> Result<Json<BestIdea>> {
    database::idea::best_idea(state.db.pool())
        .await?
        .map(Json)
        .ok_or(WebError::NotFound("Idea"))
}
