//! Route table and middleware stack.

use axum::{
    middleware,
    routing::{get, put},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::cors::{enforce_cors, CorsPolicy};
use crate::handlers::{create_todo, delete_todo, healthcheck, list_todos, update_todo};
use crate::store::SharedStore;

/// Base path under which all todo operations are mounted.
pub const COLLECTION_PREFIX: &str = "/api/todos";
pub const HEALTHCHECK_PATH: &str = "/api/healthcheck";

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub cors: CorsPolicy,
}

impl AppState {
    pub fn new(store: SharedStore, cors: CorsPolicy) -> Self {
        Self { store, cors }
    }
}

pub fn app(state: AppState) -> Router {
    let todos = Router::new()
        .route("/", get(list_todos).post(create_todo))
        .route("/{id}", put(update_todo).delete(delete_todo));

    // Nesting only matches the bare prefix; the trailing-slash form is
    // served too.
    let cors = state.cors.clone();
    Router::new()
        .route(HEALTHCHECK_PATH, get(healthcheck))
        .route(&format!("{COLLECTION_PREFIX}/"), get(list_todos).post(create_todo))
        .nest(COLLECTION_PREFIX, todos)
        .with_state(state)
        .layer(cors.layer())
        .layer(middleware::from_fn_with_state(cors, enforce_cors))
        .layer(TraceLayer::new_for_http())
}
