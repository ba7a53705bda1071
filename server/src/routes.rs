use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::error::ApiError;
use crate::store::TodoStore;
use crate::types::{
    MessageBody, Todo, TodoBody, TodosBody, HELLO, NOT_FOUND, NOT_FOUND_TO_UPDATE, TODO_ADDED,
    TODO_DELETED,
};

pub fn router(store: TodoStore) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", get(get_todo).put(update_todo).delete(delete_todo))
        .with_state(store)
}

async fn root() -> Json<MessageBody> {
    Json(MessageBody::new(HELLO))
}

async fn list_todos(State(store): State<TodoStore>) -> Json<TodosBody> {
    Json(TodosBody {
        todos: store.list().await,
    })
}

async fn create_todo(State(store): State<TodoStore>, Json(todo): Json<Todo>) -> Json<MessageBody> {
    tracing::info!(id = todo.id, "creating todo");
    store.create(todo).await;
    Json(MessageBody::new(TODO_ADDED))
}

async fn get_todo(
    State(store): State<TodoStore>,
    Path(id): Path<i64>,
) -> Result<Json<TodoBody>, ApiError> {
    let todo = store.get(id).await.map_err(ApiError::not_found(NOT_FOUND))?;
    Ok(Json(TodoBody { todo }))
}

// The body's `id` is accepted for schema parity with create but ignored; the
// path id selects the record.
async fn update_todo(
    State(store): State<TodoStore>,
    Path(id): Path<i64>,
    Json(input): Json<Todo>,
) -> Result<Json<TodoBody>, ApiError> {
    tracing::info!(id, "updating todo");
    let todo = store
        .update(id, input.item)
        .await
        .map_err(ApiError::not_found(NOT_FOUND_TO_UPDATE))?;
    Ok(Json(TodoBody { todo }))
}

async fn delete_todo(
    State(store): State<TodoStore>,
    Path(id): Path<i64>,
) -> Result<Json<MessageBody>, ApiError> {
    tracing::info!(id, "deleting todo");
    store.delete(id).await.map_err(ApiError::not_found(NOT_FOUND))?;
    Ok(Json(MessageBody::new(TODO_DELETED)))
}
