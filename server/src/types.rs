//! Wire types for the todo API.
//!
//! Every response body is a single-key JSON object: `todos`, `todo` or
//! `message`. Not-found outcomes travel as a `message` body with status 200.

use serde::{Deserialize, Serialize};

pub const HELLO: &str = "Hello World";
pub const TODO_ADDED: &str = "Todo has been added";
pub const TODO_DELETED: &str = "Todo has been DELETED!";
pub const NOT_FOUND: &str = "No todos found";
pub const NOT_FOUND_TO_UPDATE: &str = "No todos found to update";

/// A todo record. `id` is supplied by the caller and never checked for
/// uniqueness.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
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

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodosBody {
    pub todos: Vec<Todo>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoBody {
    pub todo: Todo,
}
