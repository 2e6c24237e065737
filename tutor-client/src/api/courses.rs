//! Course registration API

use shared::models::{CourseRegistration, CourseRegistrationCreate, CourseRegistrationUpdate};

use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// List course registrations, optionally filtered by student
    pub async fn list_courses(&self, student: Option<i64>) -> ClientResult<Vec<CourseRegistration>> {
        match student {
            Some(id) => {
                self.get_with_query("/api/courses/", &[("student", id)])
                    .await
            }
            None => self.get("/api/courses/").await,
        }
    }

    /// Create a course registration; the total fee is computed server-side
    pub async fn create_course(
        &self,
        course: &CourseRegistrationCreate,
    ) -> ClientResult<CourseRegistration> {
        self.post("/api/courses/", course).await
    }

    /// Partially update a course registration
    pub async fn update_course(
        &self,
        id: i64,
        update: &CourseRegistrationUpdate,
    ) -> ClientResult<CourseRegistration> {
        self.patch(&format!("/api/courses/{id}/"), update).await
    }

    /// Delete a course registration
    pub async fn delete_course(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("/api/courses/{id}/")).await
    }
}
