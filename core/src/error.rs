//! Error types for the todo API client.
//!
//! `NotFound` gets a dedicated variant because callers distinguish "the todo
//! does not exist" from other failures. Other non-success responses land in
//! `HttpError` with the server's `message` when it sent one.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned an unexpected status other than 404.
    #[error("HTTP {status}: {message}")]
    HttpError { status: u16, message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),
}
