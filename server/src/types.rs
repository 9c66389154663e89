//! Wire DTOs for the todo API.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::store::{NewTodo, TodoPatch};

/// A stored todo as it appears on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub text: String,
    pub completed: bool,
}

/// Body of `POST /api/todos`.
///
/// `text` is optional at the serde level so that a missing field and an
/// empty one are both reported as a validation error rather than an
/// extractor rejection.
#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl CreateTodo {
    pub fn validate(self) -> Result<NewTodo, ApiError> {
        let text = self.text.unwrap_or_default();
        if text.trim().is_empty() {
            return Err(ApiError::Validation("text is required".to_string()));
        }
        Ok(NewTodo {
            text,
            completed: self.completed,
        })
    }
}

/// Body of `PUT /api/todos/{id}`. Omitted fields are left untouched.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTodo {
    pub text: Option<String>,
    pub completed: Option<bool>,
}

impl UpdateTodo {
    pub fn validate(self) -> Result<TodoPatch, ApiError> {
        if self.text.as_deref().is_some_and(|text| text.trim().is_empty()) {
            return Err(ApiError::Validation("text must not be empty".to_string()));
        }
        Ok(TodoPatch {
            text: self.text,
            completed: self.completed,
        })
    }
}

/// `{"message": ...}` body used for errors and delete confirmations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of `GET /api/healthcheck`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}
