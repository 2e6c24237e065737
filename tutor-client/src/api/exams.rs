//! Exam API: standards metadata, attempt records and official results

use shared::models::{
    ExamDetailResult, ExamDetailResultCreate, ExamRecord, ExamRecordCreate, ExamScoreInput,
    ExamScoreInputCreate, ExamStandard, OfficialExamResult, OfficialExamResultCreate,
    OfficialExamResultUpdate,
};

use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// List exam standards with their modules and sections (read-only)
    pub async fn list_exam_standards(&self) -> ClientResult<Vec<ExamStandard>> {
        self.get("/api/exam-standards/").await
    }

    /// List exam records, optionally filtered by student
    pub async fn list_exam_records(&self, student: Option<i64>) -> ClientResult<Vec<ExamRecord>> {
        match student {
            Some(id) => {
                self.get_with_query("/api/exam-records/", &[("student", id)])
                    .await
            }
            None => self.get("/api/exam-records/").await,
        }
    }

    /// Create an exam record header; detail results and score inputs are
    /// attached afterwards
    pub async fn create_exam_record(&self, record: &ExamRecordCreate) -> ClientResult<ExamRecord> {
        self.post("/api/exam-records/", record).await
    }

    /// Delete an exam record with all its results
    pub async fn delete_exam_record(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("/api/exam-records/{id}/")).await
    }

    /// Store one per-question result for a question-based section
    pub async fn create_detail_result(
        &self,
        result: &ExamDetailResultCreate,
    ) -> ClientResult<ExamDetailResult> {
        self.post("/api/exam-detail-results/", result).await
    }

    /// Store one manual score for a subjective section
    pub async fn create_score_input(
        &self,
        score: &ExamScoreInputCreate,
    ) -> ClientResult<ExamScoreInput> {
        self.post("/api/exam-score-inputs/", score).await
    }

    /// List official certification results
    pub async fn list_official_results(&self) -> ClientResult<Vec<OfficialExamResult>> {
        self.get("/api/official-results/").await
    }

    /// Record an official certification result
    pub async fn create_official_result(
        &self,
        result: &OfficialExamResultCreate,
    ) -> ClientResult<OfficialExamResult> {
        self.post("/api/official-results/", result).await
    }

    /// Partially update an official result (e.g. WAITING to PASSED)
    pub async fn update_official_result(
        &self,
        id: i64,
        update: &OfficialExamResultUpdate,
    ) -> ClientResult<OfficialExamResult> {
        self.patch(&format!("/api/official-results/{id}/"), update)
            .await
    }

    /// Delete an official result
    pub async fn delete_official_result(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("/api/official-results/{id}/")).await
    }
}
