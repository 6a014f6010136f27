//! Route handlers for the innovation hub.

pub mod analytics;
pub mod assistant;
pub mod brainstorm;
pub mod catalog;
pub mod health;
pub mod ideas;
pub mod knowledge;

use axum::routing::{delete, get, post};
use axum::Router;

use crate::config::IDEA_ENDPOINT_PATH;
use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health))
        // Landing
        .route("/api/categories", get(catalog::categories))
        .route("/api/stats", get(catalog::stats))
        // Ideas
        .route("/api/ideas", post(ideas::submit))
        .route("/api/ideas/best", get(ideas::best))
        // Analytics
        .route("/api/analytics", get(analytics::dashboard))
        .route("/api/analytics/visit", post(analytics::record_visit))
        // Knowledge base
        .route("/api/knowledge", get(knowledge::search))
        .route("/api/knowledge/export", get(knowledge::export))
        .route("/api/articles", post(knowledge::create_article))
        // Brainstorming
        .route("/api/brainstorm/sessions", post(brainstorm::create_session))
        .route("/api/brainstorm/sessions/:id", delete(brainstorm::delete_session))
        .route(
            "/api/brainstorm/sessions/:id/messages",
            post(brainstorm::send_message),
        )
        // Idea-generation endpoint
        .route(IDEA_ENDPOINT_PATH, post(assistant::supply_chain_ai))
}
