use axum::{
    extract::{FromRef, State},
    http::{HeaderMap, StatusCode},
    routing::{delete, get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, PublicUser, RegisterRequest},
        extractors::AuthedUser,
        repo_types::User,
        services::{
            find_by_credentials, generate_auth_token, hash_password, is_valid_email, JwtKeys,
        },
        X_AUTH_HEADER,
    },
    error::ApiError,
    state::AppState,
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(register))
        .route("/users/login", post(login))
}

pub fn me_routes() -> Router<AppState> {
    Router::new()
        .route("/users/me", get(me))
        .route("/users/me/token", delete(logout))
}

fn token_header(token: &str) -> Result<HeaderMap, ApiError> {
    let mut headers = HeaderMap::new();
    let value = token
        .parse()
        .map_err(|_| ApiError::Store(anyhow::anyhow!("token not representable as header")))?;
    headers.insert(X_AUTH_HEADER, value);
    Ok(headers)
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(mut payload): Json<RegisterRequest>,
) -> Result<(HeaderMap, Json<PublicUser>), ApiError> {
    payload.email = payload.email.trim().to_lowercase();

    if payload.email.len() < 8 || !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(ApiError::Validation("Invalid email".into()));
    }

    if payload.password.len() < 6 {
        warn!("password too short");
        return Err(ApiError::Validation("Password too short".into()));
    }

    // Pre-check the duplicate; the unique index still backstops races.
    if User::find_by_email(&state.db, &payload.email).await?.is_some() {
        warn!(email = %payload.email, "email already registered");
        return Err(ApiError::Validation("Email already registered".into()));
    }

    let hash = hash_password(&payload.password)?;
    let user = User::create(&state.db, &payload.email, &hash).await?;

    let keys = JwtKeys::from_ref(&state);
    let token = generate_auth_token(&state.db, &keys, user.id).await?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok((token_header(&token)?, Json(PublicUser::from(user))))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(mut payload): Json<LoginRequest>,
) -> Result<(HeaderMap, Json<PublicUser>), ApiError> {
    payload.email = payload.email.trim().to_lowercase();

    // Unknown email and wrong password fall through to the same rejection.
    let user = find_by_credentials(&state.db, &payload.email, &payload.password)
        .await?
        .ok_or_else(|| {
            warn!(email = %payload.email, "login rejected");
            ApiError::Credentials
        })?;

    let keys = JwtKeys::from_ref(&state);
    let token = generate_auth_token(&state.db, &keys, user.id).await?;

    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok((token_header(&token)?, Json(PublicUser::from(user))))
}

#[instrument(skip(authed))]
pub async fn me(authed: AuthedUser) -> Json<PublicUser> {
    Json(PublicUser::from(authed.user))
}

#[instrument(skip(state, authed))]
pub async fn logout(
    State(state): State<AppState>,
    authed: AuthedUser,
) -> Result<StatusCode, ApiError> {
    User::remove_token(&state.db, authed.user.id, &authed.token).await?;
    info!(user_id = %authed.user.id, "token revoked");
    Ok(StatusCode::OK)
}
