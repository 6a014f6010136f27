//! Landing page data: categories and headline stats.

use axum::extract::State;
use axum::Json;
use ideation_core::Category;
use serde::Serialize;

use crate::error::Result;
use crate::state::AppState;

/// A category as shown on the submission form.
#[derive(Serialize)]
pub struct CategoryInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

/// Headline numbers for the landing page.
#[derive(Serialize)]
pub struct Stats {
    pub total_users: i64,
    pub total_ideas: i64,
    pub categories: usize,
}

/// List the idea categories.
pub async fn categories() -> Json<Vec<CategoryInfo>> {
    Json(
        Category::ALL
            .iter()
            .map(|category| CategoryInfo {
                id: category.id(),
                label: category.label(),
                description: category.description(),
            })
            .collect(),
    )
}

/// Get landing statistics as JSON.
pub async fn stats(State(state): State<AppState>) -> Result<Json<Stats>> {
    let pool = state.db.pool();

    Ok(Json(Stats {
        total_users: database::user::count_users(pool).await?,
        total_ideas: database::idea::count_ideas(pool).await?,
        categories: Category::ALL.len(),
    }))
}
