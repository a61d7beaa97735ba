use serde::{Deserialize, Serialize};

use crate::todos::repo_types::Todo;

#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub text: String,
}

/// PATCH body. Both fields optional; an absent or false `completed` clears
/// the completion timestamp.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTodoRequest {
    pub text: Option<String>,
    pub completed: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct TodoListResponse {
    pub todos: Vec<Todo>,
}

#[derive(Debug, Serialize)]
pub struct TodoResponse {
    pub todo: Todo,
}
