//! Course registration model

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Contract status of a course registration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourseStatus {
    #[default]
    Active,
    Paused,
    Finished,
}

/// Course registration (contract) entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseRegistration {
    pub id: i64,
    pub student: i64,
    pub status: CourseStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Euro per hour
    pub hourly_rate: Decimal,
    pub total_hours: Decimal,
    /// hourly_rate x total_hours, computed server-side
    pub total_fee: Option<Decimal>,
    pub is_paid: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create course registration payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseRegistrationCreate {
    pub student: i64,
    pub status: CourseStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub hourly_rate: Decimal,
    pub total_hours: Decimal,
    pub is_paid: bool,
}

/// Update course registration payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CourseRegistrationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CourseStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_hours: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_paid: Option<bool>,
}
