//! Database models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Someone who submitted at least one idea, identified by email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// UUID v4.
    pub id: String,
    pub name: String,
    /// Unique across users.
    pub email: String,
    pub created_at: String,
}

/// A submitted idea.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Idea {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    /// Category id, e.g. "blue_yonder".
    pub category: String,
    pub status: String,
    pub votes: i64,
    pub created_at: String,
}

/// The top-voted idea joined with its author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct BestIdea {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub votes: i64,
    pub created_at: String,
    pub author_name: String,
    pub author_email: String,
}

/// A knowledge-base article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Article {
    pub id: String,
    /// Author, when the article was submitted by a known user.
    pub user_id: Option<String>,
    pub title: String,
    pub content: String,
    pub category: String,
    /// Always "user_submitted" for articles created through the API.
    pub article_type: String,
    pub status: String,
    pub votes: i64,
    pub created_at: String,
}

/// Fields accepted when creating an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewArticle {
    #[serde(default)]
    pub user_id: Option<String>,
    pub title: String,
    pub content: String,
    #[serde(default = "default_article_category")]
    pub category: String,
}

fn default_article_category() -> String {
    "general".to_string()
}

/// Per-category submission counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct IdeaAnalytics {
    pub category: String,
    pub submission_count: i64,
}

/// Per-day visitor counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct VisitorAnalytics {
    /// `YYYY-MM-DD`
    pub date: String,
    pub visitor_count: i64,
}
