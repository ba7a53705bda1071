//! Domain DTOs for the todo API.
//!
//! # Design
//! These mirror the server's wire shapes but are defined independently, so
//! the client carries no dependency on axum. The integration test against a
//! live server catches any drift between the two.

use serde::{Deserialize, Serialize};

/// A single todo record. `id` is chosen by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub item: String,
}

impl Todo {
    pub fn new(id: i64, item: impl Into<String>) -> Self {
        Self {
            id,
            item: item.into(),
        }
    }
}

/// Envelope of `GET /todos`.
#[derive(Debug, Deserialize)]
pub(crate) struct TodoList {
    pub todos: Vec<Todo>,
}

/// Body of the single-todo routes. The server answers either with the record
/// or with a message when no record matched.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum TodoOrMessage {
    Todo { todo: Todo },
    Message { message: String },
}

#[derive(Debug, Deserialize)]
pub(crate) struct Message {
    pub message: String,
}
