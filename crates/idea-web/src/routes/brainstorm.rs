//! Brainstorming chat sessions.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use brainstorm::{IdeaSource, Session};
use ideation_core::Category;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WebError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct NewSession {
    /// Category id; unknown ids fall back to the general category.
    #[serde(default)]
    pub category: String,
}

#[derive(Serialize)]
pub struct SessionCreated {
    pub session_id: String,
    pub category: &'static str,
    pub label: &'static str,
    pub welcome: String,
    /// False when the session will only answer with fallback text.
    pub remote_available: bool,
}

#[derive(Debug, Deserialize)]
pub struct ChatMessage {
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatReply {
    pub reply: String,
    pub source: IdeaSource,
    pub refined: bool,
    pub current_idea: Option<String>,
}

/// Open a session for a category.
pub async fn create_session(
    State(state): State<AppState>,
    Json(body): Json<NewSession>,
) -> (StatusCode, Json<SessionCreated>) {
    let category = Category::lookup(&body.category);
    let session = Session::start(state.generator.clone(), category).await;

    let welcome = session.welcome_message();
    let remote_available = session.orchestrator().remote_available();
    let session_id = state.sessions.insert(session).await;

    tracing::info!(%session_id, %category, "Brainstorming session opened");

    (
        StatusCode::CREATED,
        Json(SessionCreated {
            session_id,
            category: category.id(),
            label: category.label(),
            welcome,
            remote_available,
        }),
    )
}

/// Send a message: the first one asks for an idea, later ones refine it.
pub async fn send_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<ChatMessage>,
) -> Result<Json<ChatReply>> {
    let session = state
        .sessions
        .get(&id)
        .await
        .ok_or(WebError::NotFound("Session"))?;
    let mut session = session.lock().await;

    let reply = session.send(&body.message).await?;

    Ok(Json(ChatReply {
        reply: reply.text,
        source: reply.source,
        refined: reply.refined,
        current_idea: session.current_idea().map(str::to_string),
    }))
}

/// Close a session.
pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    if state.sessions.remove(&id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(WebError::NotFound("Session"))
    }
}
