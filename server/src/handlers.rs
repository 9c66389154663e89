//! Request handlers: one store call per request, results mapped to status codes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::error::ApiError;
use crate::routes::AppState;
use crate::types::{CreateTodo, HealthStatus, MessageBody, Todo, UpdateTodo};

pub const HEALTHY: &str = "Server is healthy";

/// Liveness probe. Never touches storage.
pub async fn healthcheck() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: HEALTHY.to_string(),
    })
}

pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = state.store.find_all().await?;
    Ok(Json(todos))
}

pub async fn create_todo(
    State(state): State<AppState>,
    Json(input): Json<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let new_todo = input.validate()?;
    let todo = state.store.insert(new_todo).await?;
    info!(id = %todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Todo>, ApiError> {
    let patch = input.validate()?;
    let todo = state.store.find_and_update(&id, patch).await?;
    info!(id = %todo.id, completed = todo.completed, "updated todo");
    Ok(Json(todo))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>, ApiError> {
    state.store.delete_by_id(&id).await?;
    info!(%id, "deleted todo");
    Ok(Json(MessageBody::new("Todo deleted")))
}
