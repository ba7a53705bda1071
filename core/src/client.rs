//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each route is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Message, Todo, TodoList, TodoOrMessage};

const TODO_DELETED: &str = "Todo has been DELETED!";

/// Synchronous, stateless client for the todo API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_root(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/")
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/todos")
    }

    pub fn build_get_todo(&self, id: i64) -> HttpRequest {
        self.request(HttpMethod::Get, &format!("/todos/{id}"))
    }

    pub fn build_create_todo(&self, todo: &Todo) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Post, "/todos", todo)
    }

    /// The server keeps the stored id; only `todo.item` is applied.
    pub fn build_update_todo(&self, id: i64, todo: &Todo) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Put, &format!("/todos/{id}"), todo)
    }

    pub fn build_delete_todo(&self, id: i64) -> HttpRequest {
        self.request(HttpMethod::Delete, &format!("/todos/{id}"))
    }

    pub fn parse_root(&self, response: HttpResponse) -> Result<String, ApiError> {
        let body: Message = decode(&response)?;
        Ok(body.message)
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        let body: TodoList = decode(&response)?;
        Ok(body.todos)
    }

    /// Returns the server's confirmation message.
    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<String, ApiError> {
        let body: Message = decode(&response)?;
        Ok(body.message)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_todo_or_message(&response)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_todo_or_message(&response)
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        let body: Message = decode(&response)?;
        if body.message == TODO_DELETED {
            Ok(())
        } else {
            Err(ApiError::NotFound(body.message))
        }
    }

    fn request(&self, method: HttpMethod, path: &str) -> HttpRequest {
        HttpRequest {
            method,
            path: self.url(path),
            headers: Vec::new(),
            body: None,
        }
    }

    fn json_request(
        &self,
        method: HttpMethod,
        path: &str,
        todo: &Todo,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(todo).map_err(ApiError::Serialization)?;
        Ok(HttpRequest {
            method,
            path: self.url(path),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Check for a 200 status, then deserialize the body.
fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    if response.status != 200 {
        return Err(ApiError::HttpError {
            status: response.status,
            body: response.body.clone(),
        });
    }
    serde_json::from_str(&response.body).map_err(ApiError::Deserialization)
}

fn parse_todo_or_message(response: &HttpResponse) -> Result<Todo, ApiError> {
    match decode(response)? {
        TodoOrMessage::Todo { todo } => Ok(todo),
        TodoOrMessage::Message { message } => Err(ApiError::NotFound(message)),
    }
}
