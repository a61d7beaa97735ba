use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::extractors::AuthedUser,
    error::ApiError,
    state::AppState,
    todos::{
        dto::{CreateTodoRequest, TodoListResponse, TodoResponse, UpdateTodoRequest},
        repo_types::Todo,
        services::{clean_text, completion_update},
    },
};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/todos", get(list_todos))
        .route("/todos/:id", get(get_todo))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/todos", post(create_todo))
        .route("/todos/:id", axum::routing::patch(update_todo).delete(delete_todo))
}

/// A malformed id gets the same 404 as a missing record.
fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::NotFound)
}

#[instrument(skip(state, authed, payload))]
pub async fn create_todo(
    State(state): State<AppState>,
    authed: AuthedUser,
    Json(payload): Json<CreateTodoRequest>,
) -> Result<Json<Todo>, ApiError> {
    let text = clean_text(&payload.text)
        .ok_or_else(|| ApiError::Validation("Text must not be empty".into()))?;

    let todo = Todo::create(&state.db, authed.user.id, &text).await?;
    info!(todo_id = %todo.id, user_id = %authed.user.id, "todo created");
    Ok(Json(todo))
}

#[instrument(skip(state, authed))]
pub async fn list_todos(
    State(state): State<AppState>,
    authed: AuthedUser,
) -> Result<Json<TodoListResponse>, ApiError> {
    let todos = Todo::list_by_creator(&state.db, authed.user.id).await?;
    Ok(Json(TodoListResponse { todos }))
}

#[instrument(skip(state, authed))]
pub async fn get_todo(
    State(state): State<AppState>,
    authed: AuthedUser,
    Path(id): Path<String>,
) -> Result<Json<TodoResponse>, ApiError> {
    let id = parse_id(&id)?;
    let todo = Todo::find_owned(&state.db, id, authed.user.id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(TodoResponse { todo }))
}

#[instrument(skip(state, authed, payload))]
pub async fn update_todo(
    State(state): State<AppState>,
    authed: AuthedUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdateTodoRequest>,
) -> Result<Json<TodoResponse>, ApiError> {
    let id = parse_id(&id)?;

    let text = match payload.text.as_deref() {
        Some(raw) => Some(
            clean_text(raw).ok_or_else(|| ApiError::Validation("Text must not be empty".into()))?,
        ),
        None => None,
    };
    let (completed, completed_at) = completion_update(payload.completed);

    let todo = Todo::update_owned(
        &state.db,
        id,
        authed.user.id,
        text.as_deref(),
        completed,
        completed_at,
    )
    .await?
    .ok_or(ApiError::NotFound)?;

    info!(todo_id = %todo.id, user_id = %authed.user.id, "todo updated");
    Ok(Json(TodoResponse { todo }))
}

#[instrument(skip(state, authed))]
pub async fn delete_todo(
    State(state): State<AppState>,
    authed: AuthedUser,
    Path(id): Path<String>,
) -> Result<Json<TodoResponse>, ApiError> {
    let id = parse_id(&id)?;
    let todo = Todo::remove_owned(&state.db, id, authed.user.id)
        .await?
        .ok_or(ApiError::NotFound)?;
    info!(todo_id = %todo.id, user_id = %authed.user.id, "todo removed");
    Ok(Json(TodoResponse { todo }))
}
