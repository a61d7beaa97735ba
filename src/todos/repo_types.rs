use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Todo record. `completed_at` is non-null exactly when `completed` is true;
/// every write path goes through the same transition so the pair never
/// drifts apart.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: Uuid,
    pub creator_id: Uuid,
    pub text: String,
    pub completed: bool,
    #[serde(with = "time::serde::rfc3339::option")]
    pub completed_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Todo {
        Todo {
            id: Uuid::new_v4(),
            creator_id: Uuid::new_v4(),
            text: "walk the dog".into(),
            completed: false,
            completed_at: None,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    #[test]
    fn wire_form_uses_camel_case() {
        let value = serde_json::to_value(sample()).unwrap();
        assert!(value.get("completedAt").is_some());
        assert!(value.get("creatorId").is_some());
        assert!(value.get("completed_at").is_none());
    }

    #[test]
    fn incomplete_todo_serializes_null_completed_at() {
        let value = serde_json::to_value(sample()).unwrap();
        assert!(value["completedAt"].is_null());
        assert_eq!(value["completed"], serde_json::json!(false));
    }

    #[test]
    fn completed_todo_serializes_timestamp() {
        let mut todo = sample();
        todo.completed = true;
        todo.completed_at = Some(OffsetDateTime::now_utc());
        let value = serde_json::to_value(todo).unwrap();
        assert!(value["completedAt"].is_string());
    }
}
