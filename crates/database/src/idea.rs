//! Idea persistence.

use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::{DatabaseError, Result};
use crate::models::{BestIdea, Idea};

/// Insert an idea for an existing user.
pub async fn create_idea(
    pool: &SqlitePool,
    user_id: &str,
    title: &str,
    description: &str,
    category: &str,
) -> Result<Idea> {
    let id = Uuid::new_v4().to_string();

    sqlx::query(
        r#"
        INSERT INTO ideas (id, user_id, title, description, category)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(user_id)
    .bind(title)
    .bind(description)
    .bind(category)
    .execute(pool)
    .await?;

    get_idea(pool, &id).await
}

/// Get an idea by ID.
pub async fn get_idea(pool: &SqlitePool, id: &str) -> Result<Idea> {
    sqlx::query_as::<_, Idea>(
        r#"
        SELECT id, user_id, title, description, category, status, votes, created_at
        FROM ideas
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "Idea",
        id: id.to_string(),
    })
}

/// List all ideas, newest first.
pub async fn list_ideas(pool: &SqlitePool) -> Result<Vec<Idea>> {
    let ideas = sqlx::query_as::<_, Idea>(
        r#"
        SELECT id, user_id, title, description, category, status, votes, created_at
        FROM ideas
        ORDER BY created_at DESC, rowid DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(ideas)
}

/// Count total ideas.
pub async fn count_ideas(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM ideas
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(count)
}

/// Set the vote count of an idea.
pub async fn set_votes(pool: &SqlitePool, id: &str, votes: i64) -> Result<()> {
    let result = sqlx::query(
        r#"
        UPDATE ideas
        SET votes = ?
        WHERE id = ?
        "#,
    )
    .bind(votes)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "Idea",
            id: id.to_string(),
        });
    }

    Ok(())
}

/// The most voted idea, newest first among ties, with its author.
pub async fn best_idea(pool: &SqlitePool) -> Result<Option<BestIdea>> {
    let idea = sqlx::query_as::<_, BestIdea>(
        r#"
        SELECT i.id, i.title, i.description, i.category, i.votes, i.created_at,
               u.name AS author_name, u.email AS author_email
        FROM ideas i
        JOIN users u ON u.id = i.user_id
        ORDER BY i.votes DESC, i.created_at DESC, i.rowid DESC
        LIMIT 1
        "#,
    )
    .fetch_optional(pool)
    .await?;

    Ok(idea)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{user, Database};

    async fn test_db() -> Database {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.migrate().await.unwrap();
        db
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let db = test_db().await;
        let author = user::create_user(db.pool(), "Bob", "bob@example.com")
            .await
            .unwrap();

        let first = create_idea(db.pool(), &author.id, "Dock slots", "Book slots", "manhattan")
            .await
            .unwrap();
        let second = create_idea(db.pool(), &author.id, "RFID", "Tag pallets", "blue_yonder")
            .await
            .unwrap();

        assert_eq!(first.votes, 0);
        assert_eq!(first.status, "submitted");

        let ideas = list_ideas(db.pool()).await.unwrap();
        assert_eq!(ideas.len(), 2);
        assert_eq!(ideas[0].id, second.id);
        assert_eq!(count_ideas(db.pool()).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_unknown_user_rejected() {
        let db = test_db().await;
        let result = create_idea(db.pool(), "no-such-user", "t", "d", "kinaxis").await;
        assert!(matches!(result, Err(DatabaseError::Sqlx(_))));
    }

    #[tokio::test]
    async fn test_best_idea() {
        let db = test_db().await;
        assert!(best_idea(db.pool()).await.unwrap().is_none());

        let author = user::create_user(db.pool(), "Carol", "carol@example.com")
            .await
            .unwrap();
        let popular = create_idea(db.pool(), &author.id, "Popular", "d", "coupa")
            .await
            .unwrap();
        let tied_newer = create_idea(db.pool(), &author.id, "Tied newer", "d", "coupa")
            .await
            .unwrap();
        create_idea(db.pool(), &author.id, "Unloved", "d", "coupa")
            .await
            .unwrap();

        set_votes(db.pool(), &popular.id, 5).await.unwrap();
        let best = best_idea(db.pool()).await.unwrap().unwrap();
        assert_eq!(best.id, popular.id);
        assert_eq!(best.author_name, "Carol");
        assert_eq!(best.author_email, "carol@example.com");

        set_votes(db.pool(), &tied_newer.id, 5).await.unwrap();
        let best = best_idea(db.pool()).await.unwrap().unwrap();
        assert_eq!(best.id, tied_newer.id);
    }
}
