use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tracing::warn;

use crate::auth::repo_types::User;
use crate::auth::services::{find_by_token, JwtKeys};
use crate::auth::X_AUTH_HEADER;
use crate::error::ApiError;
use crate::state::AppState;

/// Resolves the `x-auth` header to a stored user. Handlers behind this
/// extractor get the full user record plus the raw token that authenticated
/// the request (logout needs it to know which entry to drop).
pub struct AuthedUser {
    pub user: User,
    pub token: String,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthedUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(X_AUTH_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or(ApiError::Unauthorized)?;

        let keys = JwtKeys::from_ref(state);
        let user = match find_by_token(&state.db, &keys, raw).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                warn!("token missing, invalid or revoked");
                return Err(ApiError::Unauthorized);
            }
            Err(e) => {
                warn!(error = %e, "token lookup failed");
                return Err(ApiError::Unauthorized);
            }
        };

        Ok(AuthedUser {
            user,
            token: raw.to_string(),
        })
    }
}
