//! Aggregated statistics API

use shared::models::{DashboardStats, ExamStats};

use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// Monthly revenue and activity figures for the dashboard
    pub async fn dashboard_stats(&self) -> ClientResult<DashboardStats> {
        self.get("/api/dashboard/stats/").await
    }

    /// Accuracy statistics over recorded mock exams
    pub async fn exam_stats(&self) -> ClientResult<ExamStats> {
        self.get("/api/exams/stats/").await
    }
}
