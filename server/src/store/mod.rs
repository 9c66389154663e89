//! Persistence for todo records.
//!
//! # Design
//! [`TodoStore`] is the only seam between handlers and durable state. Id
//! assignment is the store's job: callers hand over a [`NewTodo`] and get
//! back a [`Todo`] carrying whatever id the backend chose, and never parse
//! or construct ids themselves.

mod memory;
mod sqlite;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

use crate::config::StorageConfig;
use crate::types::Todo;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// URL that selects the in-process store.
pub const MEMORY_URL: &str = "memory";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("todo {0} not found")]
    NotFound(String),

    /// The backend could not be reached or rejected the operation.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("unsupported storage url: {0}")]
    UnsupportedUrl(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Unavailable(err.to_string())
    }
}

/// Fields for a todo that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub text: String,
    pub completed: bool,
}

/// Partial update; `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub text: Option<String>,
    pub completed: Option<bool>,
}

impl TodoPatch {
    pub fn completed(completed: bool) -> Self {
        Self {
            text: None,
            completed: Some(completed),
        }
    }

    pub(crate) fn apply(self, todo: &mut Todo) {
        if let Some(text) = self.text {
            todo.text = text;
        }
        if let Some(completed) = self.completed {
            todo.completed = completed;
        }
    }
}

/// Durable todo collection.
///
/// Implementations must be safe to share across request tasks; the service
/// layer adds no locking of its own.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Every stored todo, in insertion order.
    async fn find_all(&self) -> Result<Vec<Todo>, StoreError>;

    /// Persist a new todo under a freshly assigned id.
    async fn insert(&self, todo: NewTodo) -> Result<Todo, StoreError>;

    /// Apply `patch` to the todo with `id` and return the updated record.
    async fn find_and_update(&self, id: &str, patch: TodoPatch) -> Result<Todo, StoreError>;

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError>;
}

pub type SharedStore = Arc<dyn TodoStore>;

/// Open the store named by `config.url`.
///
/// `memory` selects [`MemoryStore`]; any `sqlite:` URL selects
/// [`SqliteStore`]. Connection failures surface here so the caller can
/// treat them as fatal at startup.
pub async fn connect(config: &StorageConfig) -> Result<SharedStore, StoreError> {
    if config.url == MEMORY_URL {
        info!("using in-memory todo store");
        return Ok(Arc::new(MemoryStore::new()));
    }
    if config.url.starts_with("sqlite:") {
        let store = SqliteStore::connect(config).await?;
        return Ok(Arc::new(store));
    }
    Err(StoreError::UnsupportedUrl(config.url.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage(url: &str) -> StorageConfig {
        StorageConfig {
            url: url.to_string(),
            ..StorageConfig::default()
        }
    }

    #[tokio::test]
    async fn connect_memory_store() {
        let store = connect(&storage(MEMORY_URL)).await.unwrap();
        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn connect_in_memory_sqlite() {
        let store = connect(&storage("sqlite::memory:")).await.unwrap();
        let created = store
            .insert(NewTodo {
                text: "via connect".to_string(),
                completed: false,
            })
            .await
            .unwrap();
        assert_eq!(store.find_all().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn connect_rejects_unknown_scheme() {
        let err = connect(&storage("mongodb://localhost/todos")).await.err().unwrap();
        assert!(matches!(err, StoreError::UnsupportedUrl(_)));
    }

    #[test]
    fn patch_applies_present_fields_only() {
        let mut todo = Todo {
            id: "1".to_string(),
            text: "keep".to_string(),
            completed: false,
        };
        TodoPatch::completed(true).apply(&mut todo);
        assert_eq!(todo.text, "keep");
        assert!(todo.completed);
    }
}
