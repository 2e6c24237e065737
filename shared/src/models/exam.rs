//! Exam models: standards metadata, attempt records and official results

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which parts of an exam are taken
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExamMode {
    /// Written and oral together
    #[default]
    Full,
    Written,
    Oral,
}

/// Module kind within an exam standard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExamModuleType {
    Written,
    Oral,
}

/// Section of an exam module, e.g. "Hören Teil 1"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamSection {
    pub id: i64,
    pub exam_module: i64,
    /// Statistics grouping, e.g. "Leseverstehen"
    pub category: String,
    pub name: String,
    /// Checkbox-per-question input when true, single score input otherwise
    pub is_question_based: bool,
    pub question_start_num: Option<u32>,
    pub question_end_num: Option<u32>,
    /// Weight per question for weighted standards (C1 uses 2.0 or 1.0)
    pub points_per_question: Decimal,
    pub section_max_score: u32,
}

/// Written or oral module of an exam standard, with its sections
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamModule {
    pub id: i64,
    pub exam_standard: i64,
    pub module_type: ExamModuleType,
    pub max_score: u32,
    pub sections: Vec<ExamSection>,
}

/// Exam standard (e.g. "Telc B1"), with its modules nested
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamStandard {
    pub id: i64,
    pub name: String,
    pub level: String,
    pub total_score: u32,
    pub modules: Vec<ExamModule>,
}

/// Scanned exam paper attached to a record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamAttachment {
    pub id: i64,
    pub exam_record: i64,
    /// Server-side file URL
    pub file: String,
    pub original_name: Option<String>,
}

/// One mock-exam attempt of a student
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamRecord {
    pub id: i64,
    pub student: i64,
    pub exam_standard: i64,
    pub exam_date: NaiveDate,
    pub exam_mode: ExamMode,
    pub total_score: Decimal,
    pub grade: Option<String>,
    /// Flattened for list display
    pub student_name: String,
    pub exam_name: String,
    pub attachments: Vec<ExamAttachment>,
    pub score_inputs: Vec<ExamScoreInput>,
    pub detail_results: Vec<ExamDetailResult>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create exam record payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamRecordCreate {
    pub student: i64,
    pub exam_standard: i64,
    pub exam_date: NaiveDate,
    pub exam_mode: ExamMode,
    pub total_score: Decimal,
    pub grade: Option<String>,
}

/// Per-question correct/incorrect result for question-based sections
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamDetailResult {
    pub id: i64,
    pub exam_record: i64,
    pub exam_section: i64,
    pub question_number: u32,
    pub is_correct: bool,
}

/// Create detail result payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamDetailResultCreate {
    pub exam_record: i64,
    pub exam_section: i64,
    pub question_number: u32,
    pub is_correct: bool,
}

/// Manually entered score for subjective sections (writing/speaking)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamScoreInput {
    pub id: i64,
    pub exam_record: i64,
    pub exam_section: i64,
    pub score: Decimal,
}

/// Create score input payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamScoreInputCreate {
    pub exam_record: i64,
    pub exam_section: i64,
    pub score: Decimal,
}

/// Outcome of an official certification exam
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OfficialResultStatus {
    Passed,
    Failed,
    #[default]
    Waiting,
}

/// Official certification exam result (Telc, Goethe, ...), separate from
/// internal mock exams
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfficialExamResult {
    pub id: i64,
    pub student: i64,
    /// Linked standard, or free-text name when not in the list
    pub exam_standard: Option<i64>,
    pub exam_name_manual: Option<String>,
    pub exam_date: NaiveDate,
    pub status: OfficialResultStatus,
    /// Free-text score, entered when known
    pub total_score: Option<String>,
    pub grade: Option<String>,
    pub memo: Option<String>,
    /// Flattened for list display
    pub student_name: String,
    pub student_level: String,
    pub exam_standard_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create official result payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfficialExamResultCreate {
    pub student: i64,
    pub exam_standard: Option<i64>,
    pub exam_name_manual: Option<String>,
    pub exam_date: NaiveDate,
    pub status: OfficialResultStatus,
    pub total_score: Option<String>,
    pub grade: Option<String>,
    pub memo: Option<String>,
}

/// Update official result payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OfficialExamResultUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exam_standard: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exam_name_manual: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exam_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OfficialResultStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_score: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}
