//! REST service for the todo collection.
//!
//! # Overview
//! Serves list/create/update/delete on `/api/todos` plus a storage-independent
//! liveness probe on `/api/healthcheck`. Todos live behind the [`TodoStore`]
//! trait; the binary picks an implementation from `DATABASE_URL`.
//!
//! # Design
//! - Handlers translate request payloads into a single store call and map
//!   store results to status codes. They hold no state besides the shared
//!   `Arc<dyn TodoStore>`.
//! - DTOs are defined independently from the `todo-core` client crate;
//!   the core integration test runs this server to catch schema drift.
//! - Cross-origin enforcement happens in a middleware in front of the
//!   router, so rejected requests never reach a handler.

pub mod config;
pub mod cors;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod store;
pub mod telemetry;
pub mod types;

use tokio::net::TcpListener;

pub use config::{Config, ConfigError, StorageConfig};
pub use cors::CorsPolicy;
pub use error::ApiError;
pub use routes::{app, AppState, COLLECTION_PREFIX, HEALTHCHECK_PATH};
pub use store::{MemoryStore, SharedStore, SqliteStore, StoreError, TodoStore};
pub use types::Todo;

/// Serve the application on an already-bound listener until the server fails.
pub async fn run(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    axum::serve(listener, app(state)).await
}
