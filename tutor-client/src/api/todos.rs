//! Todo API

use shared::models::{Todo, TodoCreate, TodoUpdate};

use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// List todos
    pub async fn list_todos(&self) -> ClientResult<Vec<Todo>> {
        self.get("/api/todos/").await
    }

    /// Create a todo
    pub async fn create_todo(&self, todo: &TodoCreate) -> ClientResult<Todo> {
        self.post("/api/todos/", todo).await
    }

    /// Partially update a todo (typically toggling completion)
    pub async fn update_todo(&self, id: i64, update: &TodoUpdate) -> ClientResult<Todo> {
        self.patch(&format!("/api/todos/{id}/"), update).await
    }

    /// Delete a todo
    pub async fn delete_todo(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("/api/todos/{id}/")).await
    }
}
