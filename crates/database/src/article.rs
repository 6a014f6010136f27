//! Knowledge-base article persistence.

use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::{DatabaseError, Result};
use crate::models::{Article, NewArticle};
use crate::user;
use crate::validation::{
    validate_article_category, validate_required, ValidationError, MAX_BODY_LENGTH,
    MAX_TITLE_LENGTH,
};

impl NewArticle {
    /// Require a title, content and a known article category.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        validate_required("title", &self.title, MAX_TITLE_LENGTH)?;
        validate_required("content", &self.content, MAX_BODY_LENGTH)?;
        validate_article_category(&self.category)
    }
}

/// Create a published, user-submitted article.
///
/// Call [`NewArticle::validate`] first. A `user_id` must name an existing
/// user, otherwise `NotFound` is returned.
pub async fn create_article(pool: &SqlitePool, article: &NewArticle) -> Result<Article> {
    if let Some(ref user_id) = article.user_id {
        user::get_user(pool, user_id).await?;
    }

    let id = Uuid::new_v4().to_string();

    sqlx::query(
        r#"
        INSERT INTO articles (id, user_id, title, content, category, article_type, status)
        VALUES (?, ?, ?, ?, ?, 'user_submitted', 'published')
        "#,
    )
    .bind(&id)
    .bind(&article.user_id)
    .bind(article.title.trim())
    .bind(article.content.trim())
    .bind(article.category.trim())
    .execute(pool)
    .await?;

    get_article(pool, &id).await
}

/// Get an article by ID.
pub async fn get_article(pool: &SqlitePool, id: &str) -> Result<Article> {
    sqlx::query_as::<_, Article>(
        r#"
        SELECT id, user_id, title, content, category, article_type, status, votes, created_at
        FROM articles
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "Article",
        id: id.to_string(),
    })
}

/// List published articles, newest first.
pub async fn list_published_articles(pool: &SqlitePool) -> Result<Vec<Article>> {
    let articles = sqlx::query_as::<_, Article>(
        r#"
        SELECT id, user_id, title, content, category, article_type, status, votes, created_at
        FROM articles
        WHERE status = 'published'
        ORDER BY created_at DESC, rowid DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(articles)
}
