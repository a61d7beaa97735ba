use sqlx::{types::Json, PgPool};
use uuid::Uuid;

use crate::auth::repo_types::{TokenEntry, User};

impl User {
    /// Find a user by email.
    pub async fn find_by_email(db: &PgPool, email: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, tokens, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Find a user by id.
    pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, tokens, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Create a new user with hashed password and an empty token collection.
    pub async fn create(db: &PgPool, email: &str, password_hash: &str) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password_hash)
            VALUES ($1, $2)
            RETURNING id, email, password_hash, tokens, created_at
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(db)
        .await?;
        Ok(user)
    }

    /// Append a token entry to the user's collection. The JSONB concat keeps
    /// the append atomic under concurrent logins.
    pub async fn push_token(db: &PgPool, user_id: Uuid, entry: &TokenEntry) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE users
            SET tokens = tokens || $2
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .bind(Json(entry))
        .execute(db)
        .await?;
        Ok(())
    }

    /// Remove the entry holding `raw` from the user's token collection.
    pub async fn remove_token(db: &PgPool, user_id: Uuid, raw: &str) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE users
            SET tokens = COALESCE(
                (SELECT jsonb_agg(entry)
                 FROM jsonb_array_elements(tokens) AS entry
                 WHERE entry->>'token' <> $2),
                '[]'::jsonb)
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .bind(raw)
        .execute(db)
        .await?;
        Ok(())
    }
}
