//! Student API

use shared::models::{Student, StudentCreate, StudentUpdate};

use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// List all students of the authenticated tutor
    pub async fn list_students(&self) -> ClientResult<Vec<Student>> {
        self.get("/api/students/").await
    }

    /// Get one student
    pub async fn get_student(&self, id: i64) -> ClientResult<Student> {
        self.get(&format!("/api/students/{id}/")).await
    }

    /// Create a student
    pub async fn create_student(&self, student: &StudentCreate) -> ClientResult<Student> {
        self.post("/api/students/", student).await
    }

    /// Partially update a student
    pub async fn update_student(&self, id: i64, update: &StudentUpdate) -> ClientResult<Student> {
        self.patch(&format!("/api/students/{id}/"), update).await
    }

    /// Delete a student and all dependent records
    pub async fn delete_student(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("/api/students/{id}/")).await
    }
}
