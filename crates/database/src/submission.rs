//! Idea submission workflow.
//!
//! 1. Validate the form.
//! 2. Look up the submitter by email, creating the user if absent.
//! 3. Insert the idea.
//! 4. Bump the category counter. This step is best-effort: a failure is
//!    logged and reported on the receipt, never returned as an error.

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::{info, warn};

use crate::error::DatabaseError;
use crate::models::User;
use crate::validation::{
    validate_email, validate_idea_category, validate_required, ValidationError, MAX_BODY_LENGTH,
    MAX_NAME_LENGTH, MAX_TITLE_LENGTH,
};
use crate::{analytics, idea, user};

/// The idea submission form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaSubmission {
    pub name: String,
    pub email: String,
    pub title: String,
    pub description: String,
    /// Category id, e.g. "manhattan".
    pub category: String,
}

/// Outcome of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub user_id: String,
    pub idea_id: String,
    /// True when the submitter's email was new.
    pub created_user: bool,
    /// False when the category counter could not be updated.
    pub counter_updated: bool,
}

/// Errors surfaced by [`submit`].
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("{0}")]
    Invalid(#[from] ValidationError),

    /// User lookup/creation or idea insert failed.
    #[error("submission failed: {0}")]
    Store(#[from] DatabaseError),
}

impl IdeaSubmission {
    /// Check every field, returning the first problem found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_required("name", &self.name, MAX_NAME_LENGTH)?;
        validate_email(&self.email)?;
        validate_required("title", &self.title, MAX_TITLE_LENGTH)?;
        validate_required("description", &self.description, MAX_BODY_LENGTH)?;
        validate_idea_category(&self.category)?;
        Ok(())
    }
}

/// Run the submission workflow.
pub async fn submit(
    pool: &SqlitePool,
    submission: &IdeaSubmission,
) -> Result<SubmissionReceipt, SubmissionError> {
    submission.validate()?;

    let email = submission.email.trim();
    let category = submission.category.trim();

    let (author, created_user) = find_or_create_user(pool, submission.name.trim(), email).await?;

    let idea = idea::create_idea(
        pool,
        &author.id,
        submission.title.trim(),
        submission.description.trim(),
        category,
    )
    .await?;

    let counter_updated = match analytics::increment_idea_count(pool, category).await {
        Ok(()) => true,
        Err(e) => {
            warn!(category, error = %e, "Idea counter update failed");
            false
        }
    };

    info!(
        idea_id = %idea.id,
        user_id = %author.id,
        category,
        created_user,
        "Idea submitted"
    );

    Ok(SubmissionReceipt {
        user_id: author.id,
        idea_id: idea.id,
        created_user,
        counter_updated,
    })
}

/// Returns the user and whether it was created by this call.
async fn find_or_create_user(
    pool: &SqlitePool,
    name: &str,
    email: &str,
) -> Result<(User, bool), DatabaseError> {
    match user::get_user_by_email(pool, email).await {
        Ok(existing) => Ok((existing, false)),
        Err(e) if e.is_not_found() => create_or_reuse_user(pool, name, email).await,
        Err(e) => Err(e),
    }
}

/// Insert a user whose email was just looked up and not found.
async fn create_or_reuse_user(
    pool: &SqlitePool,
    name: &str,
    email: &str,
) -> Result<(User, bool), DatabaseError> {
    match user::create_user(pool, name, email).await {
        Ok(created) => Ok((created, true)),
        // Another submission with the same email won the race.
        Err(DatabaseError::AlreadyExists { .. }) => {
            let existing = user::get_user_by_email(pool, email).await?;
            Ok((existing, false))
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    async fn test_db() -> Database {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.migrate().await.unwrap();
        db
    }

    #[tokio::test]
    async fn test_insert_after_concurrent_signup_reuses_user() {
        let db = test_db().await;
        // Another submission creates the user after our lookup missed.
        let winner = user::create_user(db.pool(), "Dana", "dana@example.com")
            .await
            .unwrap();

        let (reused, created) = create_or_reuse_user(db.pool(), "Dana R.", "dana@example.com")
            .await
            .unwrap();
        assert!(!created);
        assert_eq!(reused.id, winner.id);
        assert_eq!(reused.name, "Dana");
        assert_eq!(user::count_users(db.pool()).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_find_or_create_user() {
        let db = test_db().await;

        let (first, created) = find_or_create_user(db.pool(), "Dana", "dana@example.com")
            .await
            .unwrap();
        assert!(created);

        let (second, created) = find_or_create_user(db.pool(), "Dana", "dana@example.com")
            .await
            .unwrap();
        assert!(!created);
        assert_eq!(second.id, first.id);
    }

    #[test]
    fn test_validate_reports_first_problem() {
        let mut form = IdeaSubmission {
            name: "Dana".to_string(),
            email: "dana@example.com".to_string(),
            title: "Dock slots".to_string(),
            description: "Book dock slots".to_string(),
            category: "manhattan".to_string(),
        };
        assert!(form.validate().is_ok());

        form.category = "sap".to_string();
        assert_eq!(
            form.validate(),
            Err(ValidationError::UnknownCategory("sap".to_string()))
        );

        form.title = " ".to_string();
        assert_eq!(form.validate(), Err(ValidationError::Empty("title".to_string())));

        form.email = "dana".to_string();
        assert!(matches!(form.validate(), Err(ValidationError::InvalidEmail(_))));
    }
}
