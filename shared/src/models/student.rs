//! Student model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::exam::ExamMode;
use crate::invoice::form::RecipientAddress;

/// Student gender, stored as single-letter codes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

/// Enrollment status of a student
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StudentStatus {
    #[default]
    Active,
    Paused,
    Finished,
}

/// Student entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub gender: Option<Gender>,
    pub age: u32,
    pub status: StudentStatus,
    /// Current language level, e.g. "B1"
    pub current_level: String,
    /// Target language level, e.g. "C1"
    pub target_level: String,
    /// Default filter for the result-input screens
    pub target_exam_mode: ExamMode,
    /// Invoice recipient name when it differs from the student (a parent,
    /// a company)
    pub billing_name: Option<String>,
    pub street: Option<String>,
    pub postcode: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub memo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Student {
    /// Name printed on invoices: billing name when set, otherwise the
    /// student's own.
    pub fn recipient_name(&self) -> &str {
        match self.billing_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.name,
        }
    }

    /// Postal address for the invoice recipient block.
    pub fn recipient_address(&self) -> RecipientAddress {
        RecipientAddress {
            street: self.street.clone().unwrap_or_default(),
            zip: self.postcode.clone().unwrap_or_default(),
            city: self.city.clone().unwrap_or_default(),
            country: self
                .country
                .clone()
                .unwrap_or_else(|| "Deutschland".to_string()),
        }
    }
}

/// Create student payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentCreate {
    pub name: String,
    pub gender: Option<Gender>,
    pub age: u32,
    pub status: StudentStatus,
    pub current_level: String,
    pub target_level: String,
    pub target_exam_mode: ExamMode,
    pub billing_name: Option<String>,
    pub street: Option<String>,
    pub postcode: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub memo: Option<String>,
}

/// Update student payload (PATCH, only set fields are sent)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StudentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_exam_mode: Option<ExamMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}
