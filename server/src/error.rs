//! Error type returned by request handlers.
//!
//! Every variant renders as a JSON `{"message": ...}` body with a matching
//! status code. Storage failures are logged here, once, at the point where
//! they become a 500.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{debug, error};

use crate::store::StoreError;
use crate::types::MessageBody;

#[derive(Debug, Error)]
pub enum ApiError {
    /// A required field is missing or blank.
    #[error("{0}")]
    Validation(String),

    /// No todo has the requested id.
    #[error("Todo not found")]
    NotFound(String),

    /// Detail stays in the log; clients only see the fixed message.
    #[error("Storage error")]
    Storage(StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ApiError::NotFound(id),
            other => ApiError::Storage(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Validation(reason) => debug!(%reason, "rejected invalid todo payload"),
            ApiError::NotFound(id) => debug!(%id, "todo not found"),
            ApiError::Storage(err) => error!(error = %err, "storage operation failed"),
        }
        (self.status(), Json(MessageBody::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_not_found_maps_to_404() {
        let err = ApiError::from(StoreError::NotFound("x".to_string()));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn store_unavailable_maps_to_500() {
        let err = ApiError::from(StoreError::Unavailable("connection refused".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Storage error");
    }
}
