//! In-memory todo HTTP service.
//!
//! # Overview
//! Keeps an ordered list of todo records in process memory and exposes
//! create/read/update/delete routes over it as JSON. Nothing is persisted.
//!
//! # Design
//! - `TodoStore` owns the records and is passed to handlers as axum state.
//! - Lookups scan in insertion order and act on the first matching id.
//! - A missing id is answered with a `message` body and status 200.

pub mod config;
pub mod error;
pub mod routes;
pub mod store;
pub mod types;

use std::future::Future;

use axum::Router;
use tokio::net::TcpListener;

pub use crate::config::{LogFormat, ServerConfig};
pub use error::{ApiError, StoreError};
pub use store::TodoStore;
pub use types::{MessageBody, Todo, TodoBody, TodosBody};

/// Router over a fresh, empty store.
pub fn app() -> Router {
    app_with_store(TodoStore::new())
}

pub fn app_with_store(store: TodoStore) -> Router {
    routes::router(store)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Serve `store` on `listener` until `shutdown` resolves.
pub async fn run_with_shutdown<F>(
    listener: TcpListener,
    store: TodoStore,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app_with_store(store))
        .with_graceful_shutdown(shutdown)
        .await
}
