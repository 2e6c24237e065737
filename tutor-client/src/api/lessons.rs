//! Lesson schedule API

use chrono::NaiveDate;
use shared::models::{Lesson, LessonCreate, LessonUpdate};

use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// List lessons within a date range (both bounds inclusive)
    pub async fn list_lessons(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> ClientResult<Vec<Lesson>> {
        self.get_with_query(
            "/api/lessons/",
            &[
                ("date_after", from.to_string()),
                ("date_before", to.to_string()),
            ],
        )
        .await
    }

    /// List today's lessons (dashboard widget)
    pub async fn today_lessons(&self) -> ClientResult<Vec<Lesson>> {
        self.get("/api/lessons/today/").await
    }

    /// Create a lesson
    pub async fn create_lesson(&self, lesson: &LessonCreate) -> ClientResult<Lesson> {
        self.post("/api/lessons/", lesson).await
    }

    /// Partially update a lesson (reschedule, set status, add feedback)
    pub async fn update_lesson(&self, id: i64, update: &LessonUpdate) -> ClientResult<Lesson> {
        self.patch(&format!("/api/lessons/{id}/"), update).await
    }

    /// Delete a lesson
    pub async fn delete_lesson(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("/api/lessons/{id}/")).await
    }
}
