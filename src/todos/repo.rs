use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::todos::repo_types::Todo;

impl Todo {
    pub async fn create(db: &PgPool, creator_id: Uuid, text: &str) -> anyhow::Result<Todo> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            INSERT INTO todos (creator_id, text)
            VALUES ($1, $2)
            RETURNING id, creator_id, text, completed, completed_at, created_at
            "#,
        )
        .bind(creator_id)
        .bind(text)
        .fetch_one(db)
        .await?;
        Ok(todo)
    }

    pub async fn list_by_creator(db: &PgPool, creator_id: Uuid) -> anyhow::Result<Vec<Todo>> {
        let rows = sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, creator_id, text, completed, completed_at, created_at
            FROM todos
            WHERE creator_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(creator_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    /// Fetch a todo only if it belongs to `creator_id`. A foreign todo and a
    /// missing one are the same `None`.
    pub async fn find_owned(
        db: &PgPool,
        id: Uuid,
        creator_id: Uuid,
    ) -> anyhow::Result<Option<Todo>> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, creator_id, text, completed, completed_at, created_at
            FROM todos
            WHERE id = $1 AND creator_id = $2
            "#,
        )
        .bind(id)
        .bind(creator_id)
        .fetch_optional(db)
        .await?;
        Ok(todo)
    }

    pub async fn update_owned(
        db: &PgPool,
        id: Uuid,
        creator_id: Uuid,
        text: Option<&str>,
        completed: bool,
        completed_at: Option<OffsetDateTime>,
    ) -> anyhow::Result<Option<Todo>> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            UPDATE todos
            SET text = COALESCE($3, text),
                completed = $4,
                completed_at = $5
            WHERE id = $1 AND creator_id = $2
            RETURNING id, creator_id, text, completed, completed_at, created_at
            "#,
        )
        .bind(id)
        .bind(creator_id)
        .bind(text)
        .bind(completed)
        .bind(completed_at)
        .fetch_optional(db)
        .await?;
        Ok(todo)
    }

    pub async fn remove_owned(
        db: &PgPool,
        id: Uuid,
        creator_id: Uuid,
    ) -> anyhow::Result<Option<Todo>> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            DELETE FROM todos
            WHERE id = $1 AND creator_id = $2
            RETURNING id, creator_id, text, completed, completed_at, created_at
            "#,
        )
        .bind(id)
        .bind(creator_id)
        .fetch_optional(db)
        .await?;
        Ok(todo)
    }
}
