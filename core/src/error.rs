//! Error types for the todo API client.
//!
//! # Design
//! The server reports a missing record with status 200 and a `message` body,
//! so `NotFound` is decided from the body shape, not the status. Any
//! non-200 status lands in `HttpError` with the raw body for debugging.

use thiserror::Error;

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No todo matched the requested id. Carries the server's message.
    #[error("not found: {0}")]
    NotFound(String),

    /// The server returned a status other than 200.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),
}
