//! Submission and visitor counters.

use sqlx::SqlitePool;

use crate::error::Result;
use crate::models::{IdeaAnalytics, VisitorAnalytics};

/// Add one submission to a category's counter.
pub async fn increment_idea_count(pool: &SqlitePool, category: &str) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO idea_analytics (category, submission_count, updated_at)
        VALUES (?, 1, datetime('now'))
        ON CONFLICT(category) DO UPDATE SET
            submission_count = submission_count + 1,
            updated_at = datetime('now')
        "#,
    )
    .bind(category)
    .execute(pool)
    .await?;

    Ok(())
}

/// Add one visitor to the counter for `date` (`YYYY-MM-DD`).
pub async fn increment_visitor_count(pool: &SqlitePool, date: &str) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO visitor_analytics (date, visitor_count)
        VALUES (?, 1)
        ON CONFLICT(date) DO UPDATE SET
            visitor_count = visitor_count + 1
        "#,
    )
    .bind(date)
    .execute(pool)
    .await?;

    Ok(())
}

/// Visitor counts for the most recent `limit` days, oldest first.
pub async fn recent_visitors(pool: &SqlitePool, limit: i64) -> Result<Vec<VisitorAnalytics>> {
    let rows = sqlx::query_as::<_, VisitorAnalytics>(
        r#"
        SELECT date, visitor_count FROM (
            SELECT date, visitor_count
            FROM visitor_analytics
            ORDER BY date DESC
            LIMIT ?
        )
        ORDER BY date ASC
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Submission counters, highest first.
pub async fn idea_counts(pool: &SqlitePool) -> Result<Vec<IdeaAnalytics>> {
    let rows = sqlx::query_as::<_, IdeaAnalytics>(
        r#"
        SELECT category, submission_count
        FROM idea_analytics
        ORDER BY submission_count DESC, category ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
