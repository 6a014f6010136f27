//! SQLite persistence layer for the innovation hub.
//!
//! This crate provides async database operations for users, ideas,
//! knowledge-base articles and analytics counters using SQLx with SQLite,
//! plus the idea submission workflow built on top of them.
//!
//! # Example
//!
//! ```no_run
//! use database::{submission, Database, IdeaSubmission};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect and run migrations
//!     let db = Database::connect("sqlite:ideas.db?mode=rwc").await?;
//!     db.migrate().await?;
//!
//!     let receipt = submission::submit(
//!         db.pool(),
//!         &IdeaSubmission {
//!             name: "Dana".to_string(),
//!             email: "dana@example.com".to_string(),
//!             title: "Dock appointment slots".to_string(),
//!             description: "Let carriers book unloading slots.".to_string(),
//!             category: "manhattan".to_string(),
//!         },
//!     )
//!     .await?;
//!     println!("stored idea {}", receipt.idea_id);
//!
//!     Ok(())
//! }
//! ```

pub mod analytics;
pub mod article;
pub mod error;
pub mod idea;
pub mod knowledge;
pub mod models;
pub mod submission;
pub mod user;
pub mod validation;

pub use error::{DatabaseError, Result};
pub use knowledge::KnowledgeResults;
pub use models::{
    Article, BestIdea, Idea, IdeaAnalytics, NewArticle, User, VisitorAnalytics,
};
pub use submission::{IdeaSubmission, SubmissionError, SubmissionReceipt};
pub use validation::ValidationError;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Database connection wrapper.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Default pool size for database connections.
    const DEFAULT_POOL_SIZE: u32 = 10;

    /// Connect to a SQLite database.
    ///
    /// The URL should be in the format `sqlite:path/to/db.sqlite?mode=rwc`.
    /// Use `sqlite::memory:` for tests.
    pub async fn connect(url: &str) -> Result<Self> {
        Self::connect_with_pool_size(url, Self::DEFAULT_POOL_SIZE).await
    }

    /// Connect to a SQLite database with a custom pool size.
    pub async fn connect_with_pool_size(url: &str, pool_size: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect_with(options)
            .await?;

        tracing::info!("Connected to database: {} (pool size: {})", url, pool_size);

        Ok(Self { pool })
    }

    /// Run database migrations.
    pub async fn migrate(&self) -> Result<()> {
        tracing::info!("Running database migrations...");

        sqlx::migrate!("./migrations").run(&self.pool).await?;

        tracing::info!("Migrations complete");
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the database connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
