//! In-memory todo store.
//!
//! # Design
//! Records live in a `Vec` so insertion order is kept and duplicate ids are
//! allowed. Every lookup is a linear scan where the first matching `id` wins,
//! which means a later record with a repeated id is shadowed for
//! get/update/delete until the earlier one is removed.
//!
//! The vector sits behind a `tokio::sync::RwLock` inside an `Arc`, so the
//! store can be cloned into axum state and mutated from concurrent handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::types::Todo;

#[derive(Clone, Debug, Default)]
pub struct TodoStore {
    todos: Arc<RwLock<Vec<Todo>>>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records in insertion order.
    pub async fn list(&self) -> Vec<Todo> {
        self.todos.read().await.clone()
    }

    /// Append `todo` to the end of the sequence. No duplicate check.
    pub async fn create(&self, todo: Todo) {
        let mut todos = self.todos.write().await;
        tracing::debug!(id = todo.id, len = todos.len() + 1, "todo appended");
        todos.push(todo);
    }

    pub async fn get(&self, id: i64) -> Result<Todo, StoreError> {
        let todos = self.todos.read().await;
        todos
            .iter()
            .find(|todo| todo.id == id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    /// Overwrite the `item` of the first record matching `id` and return the
    /// updated record.
    pub async fn update(&self, id: i64, item: String) -> Result<Todo, StoreError> {
        let mut todos = self.todos.write().await;
        let todo = todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or(StoreError::NotFound { id })?;
        todo.item = item;
        tracing::debug!(id, "todo updated");
        Ok(todo.clone())
    }

    /// Remove the first record matching `id`, keeping the order of the rest.
    pub async fn delete(&self, id: i64) -> Result<Todo, StoreError> {
        let mut todos = self.todos.write().await;
        let index = todos
            .iter()
            .position(|todo| todo.id == id)
            .ok_or(StoreError::NotFound { id })?;
        let removed = todos.remove(index);
        tracing::debug!(id, len = todos.len(), "todo removed");
        Ok(removed)
    }

    pub async fn len(&self) -> usize {
        self.todos.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.todos.read().await.is_empty()
    }
}
