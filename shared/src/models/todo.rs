//! Todo model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Task category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TodoCategory {
    /// Lesson preparation
    Prep,
    /// Administration and accounting
    Admin,
    /// Student management
    Student,
    Personal,
}

/// Todo entity; priority is 1 (high) to 3 (low)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub content: String,
    pub category: TodoCategory,
    pub priority: u8,
    pub is_completed: bool,
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create todo payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoCreate {
    pub content: String,
    pub category: TodoCategory,
    pub priority: u8,
    pub due_date: Option<NaiveDate>,
}

/// Update todo payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodoUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<TodoCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}
