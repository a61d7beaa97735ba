use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::warn;

/// Request-level failure taxonomy.
///
/// Store failures map to 400 rather than 500: nothing in a request cycle is
/// retried, and the client-facing contract only distinguishes bad input,
/// missing auth and missing records.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("Invalid credentials")]
    Credentials,
    #[error("unauthorized")]
    Unauthorized,
    #[error("not found")]
    NotFound,
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Credentials | ApiError::Store(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            // 401 and 404 carry no body; "not yours" stays indistinguishable
            // from "does not exist".
            ApiError::Unauthorized | ApiError::NotFound => status.into_response(),
            ApiError::Store(e) => {
                warn!(error = %e, "store operation failed");
                (status, Json(serde_json::json!({ "error": e.to_string() }))).into_response()
            }
            other => {
                (status, Json(serde_json::json!({ "error": other.to_string() }))).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_and_credentials_map_to_400() {
        assert_eq!(
            ApiError::Validation("Text must not be empty".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::Credentials.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn store_errors_map_to_400() {
        let err = ApiError::Store(anyhow::anyhow!("connection reset"));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unauthorized_and_not_found_statuses() {
        assert_eq!(ApiError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
    }
}
