//! Aggregated statistics models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Response of `GET /api/dashboard/stats/`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DashboardStats {
    /// Sum of all course fees registered this month
    pub estimated_revenue: Decimal,
    /// Sum of the paid ones
    pub current_revenue: Decimal,
    pub active_students: u32,
    pub monthly_lesson_count: u32,
}

/// Per-category accuracy over question-based exam results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryAccuracy {
    /// Section category, e.g. "Hörverstehen"
    pub category: String,
    pub correct: u32,
    pub total: u32,
}

/// Response of `GET /api/exams/stats/`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExamStats {
    pub record_count: u32,
    pub average_score: Decimal,
    pub categories: Vec<CategoryAccuracy>,
}
