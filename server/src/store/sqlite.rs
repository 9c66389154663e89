//! SQLite-backed store using an sqlx connection pool.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;
use uuid::Uuid;

use super::{NewTodo, StoreError, TodoPatch, TodoStore};
use crate::config::StorageConfig;
use crate::types::Todo;

#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

#[derive(sqlx::FromRow)]
struct TodoRow {
    id: String,
    text: String,
    completed: bool,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Todo {
            id: row.id,
            text: row.text,
            completed: row.completed,
        }
    }
}

/// An in-memory database lives and dies with its connection, so the pool
/// must hold exactly one and never recycle it.
fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

impl SqliteStore {
    /// Open the pool, creating the database file if needed, and ensure the
    /// schema exists.
    pub async fn connect(config: &StorageConfig) -> Result<Self, StoreError> {
        info!(url = %config.url, "connecting to SQLite todo store");

        let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);
        let pool_options = SqlitePoolOptions::new().acquire_timeout(config.selection_timeout);
        let pool_options = if is_in_memory(&config.url) {
            pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            pool_options.idle_timeout(config.idle_timeout)
        };
        let pool = pool_options.connect_with(options).await?;

        let store = Self { pool };
        store.init().await?;
        Ok(store)
    }

    async fn init(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS todos (
                id TEXT PRIMARY KEY,
                text TEXT NOT NULL,
                completed INTEGER NOT NULL DEFAULT 0
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        info!("todos table ready");
        Ok(())
    }
}

#[async_trait]
impl TodoStore for SqliteStore {
    async fn find_all(&self) -> Result<Vec<Todo>, StoreError> {
        let rows: Vec<TodoRow> =
            sqlx::query_as("SELECT id, text, completed FROM todos ORDER BY rowid")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(Todo::from).collect())
    }

    async fn insert(&self, todo: NewTodo) -> Result<Todo, StoreError> {
        let todo = Todo {
            id: Uuid::new_v4().to_string(),
            text: todo.text,
            completed: todo.completed,
        };
        sqlx::query("INSERT INTO todos (id, text, completed) VALUES (?, ?, ?)")
            .bind(&todo.id)
            .bind(&todo.text)
            .bind(todo.completed)
            .execute(&self.pool)
            .await?;
        Ok(todo)
    }

    async fn find_and_update(&self, id: &str, patch: TodoPatch) -> Result<Todo, StoreError> {
        let row: Option<TodoRow> = sqlx::query_as(
            r#"
            UPDATE todos
            SET text = COALESCE(?, text), completed = COALESCE(?, completed)
            WHERE id = ?
            RETURNING id, text, completed
            "#,
        )
        .bind(patch.text)
        .bind(patch.completed)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Todo::from)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
