use crate::state::AppState;
use axum::Router;

mod dto;
pub mod handlers;
pub mod repo;
pub(crate) mod repo_types;
pub mod services;
pub(crate) mod extractors;

/// Name of the header carrying the bearer token, both on requests and on the
/// register/login responses that issue one.
pub const X_AUTH_HEADER: &str = "x-auth";

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(handlers::user_routes())
        .merge(handlers::me_routes())
}
