use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::auth::dto::TokenScope;

/// One issued token as stored on the user record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenEntry {
    pub scope: TokenScope,
    pub token: String,
}

/// User record in the database. The token collection lives in a JSONB column
/// so the stored row carries the issued-token entries with the user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    #[serde(skip_serializing)]
    pub tokens: Json<Vec<TokenEntry>>,
    pub created_at: OffsetDateTime,
}

impl User {
    /// True when `raw` is present in the stored token collection with the
    /// auth scope. A logged-out token is absent and therefore rejected even
    /// though its signature still verifies.
    pub fn has_auth_token(&self, raw: &str) -> bool {
        self.tokens
            .0
            .iter()
            .any(|entry| entry.scope == TokenScope::Auth && entry.token == raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_tokens(tokens: Vec<TokenEntry>) -> User {
        User {
            id: Uuid::new_v4(),
            email: "test@example.com".into(),
            password_hash: "$2b$10$notarealhash".into(),
            tokens: Json(tokens),
            created_at: OffsetDateTime::now_utc(),
        }
    }

    #[test]
    fn stored_token_matches() {
        let user = user_with_tokens(vec![TokenEntry {
            scope: TokenScope::Auth,
            token: "abc.def.ghi".into(),
        }]);
        assert!(user.has_auth_token("abc.def.ghi"));
    }

    #[test]
    fn unknown_token_does_not_match() {
        let user = user_with_tokens(vec![TokenEntry {
            scope: TokenScope::Auth,
            token: "abc.def.ghi".into(),
        }]);
        assert!(!user.has_auth_token("zzz.yyy.xxx"));
    }

    #[test]
    fn removed_token_no_longer_matches() {
        let mut user = user_with_tokens(vec![TokenEntry {
            scope: TokenScope::Auth,
            token: "abc.def.ghi".into(),
        }]);
        user.tokens.0.retain(|entry| entry.token != "abc.def.ghi");
        assert!(!user.has_auth_token("abc.def.ghi"));
    }

    #[test]
    fn serialization_redacts_password_and_tokens() {
        let user = user_with_tokens(vec![TokenEntry {
            scope: TokenScope::Auth,
            token: "abc.def.ghi".into(),
        }]);
        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("password_hash").is_none());
        assert!(value.get("tokens").is_none());
        assert!(value.get("email").is_some());
    }
}
