//! Analytics dashboard.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use database::VisitorAnalytics;
use ideation_core::Category;
use serde::Serialize;

use crate::error::Result;
use crate::state::AppState;

/// Days of visitor history shown on the dashboard.
const VISITOR_DAYS: i64 = 7;

/// Submission count for one category.
#[derive(Serialize)]
pub struct CategoryCount {
    pub category: String,
    /// Display label, or the raw id when the category is unknown.
    pub label: String,
    pub count: i64,
}

/// Dashboard aggregate.
#[derive(Serialize)]
pub struct Dashboard {
    pub visitors: Vec<VisitorAnalytics>,
    pub ideas_by_category: Vec<CategoryCount>,
    pub total_users: i64,
    pub total_ideas: i64,
    /// Count of the most recent visitor day.
    pub today_visitors: i64,
    /// Sum of the per-category counters.
    pub total_submissions: i64,
}

/// Get the dashboard aggregate.
pub async fn dashboard(State(state): State<AppState>) -> Result<Json<Dashboard>> {
    let pool = state.db.pool();

    let visitors = database::analytics::recent_visitors(pool, VISITOR_DAYS).await?;
    let counts = database::analytics::idea_counts(pool).await?;
    let total_users = database::user::count_users(pool).await?;
    let total_ideas = database::idea::count_ideas(pool).await?;

    let today_visitors = visitors.last().map(|v| v.visitor_count).unwrap_or(0);
    let total_submissions = counts.iter().map(|c| c.submission_count).sum();

    let ideas_by_category = counts
        .into_iter()
        .map(|c| CategoryCount {
            label: Category::from_id(&c.category)
                .map(|category| category.label().to_string())
                .unwrap_or_else(|| c.category.clone()),
            category: c.category,
            count: c.submission_count,
        })
        .collect();

    Ok(Json(Dashboard {
        visitors,
        ideas_by_category,
        total_users,
        total_ideas,
        today_visitors,
        total_submissions,
    }))
}

/// Count a visit for today (UTC).
pub async fn record_visit(State(state): State<AppState>) -> Result<StatusCode> {
    let today = chrono::Utc::now().format("%Y-%m-%d").to_string();
    database::analytics::increment_visitor_count(state.db.pool(), &today).await?;
    Ok(StatusCode::NO_CONTENT)
}
