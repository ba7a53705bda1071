//! Error types for the todo server.
//!
//! `StoreError` is what the store reports. `ApiError` is what a handler
//! returns; a missing record is rendered as a normal 200 response carrying a
//! route-specific `message`, so clients see it in the body, not the status.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::types::MessageBody;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("no todo with id {id}")]
    NotFound { id: i64 },
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// The store had no record for the requested id. `message` is the body
    /// text for the route that failed.
    #[error("{message}")]
    NotFound {
        message: &'static str,
        #[source]
        source: StoreError,
    },
}

impl ApiError {
    pub fn not_found(message: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| ApiError::NotFound { message, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound { message, source } => {
                tracing::debug!(error = %source, "lookup missed");
                (StatusCode::OK, Json(MessageBody::new(message))).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NOT_FOUND_TO_UPDATE;

    #[test]
    fn store_error_display() {
        assert_eq!(StoreError::NotFound { id: 3 }.to_string(), "no todo with id 3");
    }

    #[test]
    fn api_not_found_keeps_ok_status() {
        let err = ApiError::not_found(NOT_FOUND_TO_UPDATE)(StoreError::NotFound { id: 1 });
        assert_eq!(err.to_string(), NOT_FOUND_TO_UPDATE);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
