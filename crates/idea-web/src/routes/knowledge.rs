//! Knowledge base: search, article creation and CSV export.

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use database::{knowledge, Article, KnowledgeResults, NewArticle};
use serde::Deserialize;

use crate::error::Result;
use crate::state::AppState;

pub const EXPORT_FILENAME: &str = "knowledge_base_export.csv";

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// Search published articles and ideas.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<KnowledgeResults>> {
    let pool = state.db.pool();
    let articles = database::article::list_published_articles(pool).await?;
    let ideas = database::idea::list_ideas(pool).await?;

    Ok(Json(knowledge::search(&articles, &ideas, &params.q)))
}

/// Create a user-submitted article.
pub async fn create_article(
    State(state): State<AppState>,
    Json(article): Json<NewArticle>,
) -> Result<(StatusCode, Json<Article>)> {
    article.validate()?;
    let created = database::article::create_article(state.db.pool(), &article).await?;
    tracing::info!(article_id = %created.id, "Article published");
    Ok((StatusCode::CREATED, Json(created)))
}

/// Download the whole knowledge base as CSV.
pub async fn export(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let pool = state.db.pool();
    let articles = database::article::list_published_articles(pool).await?;
    let ideas = database::idea::list_ideas(pool).await?;

    let csv = knowledge::export_csv(&articles, &ideas);
    let disposition = format!("attachment; filename=\"{}\"", EXPORT_FILENAME);

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        csv,
    ))
}
