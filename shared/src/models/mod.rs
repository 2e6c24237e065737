//! Data models shared between the API client and the UI layer

pub mod business_profile;
pub mod course;
pub mod dashboard;
pub mod exam;
pub mod invoice;
pub mod lesson;
pub mod student;
pub mod todo;
pub mod tutor;

pub use business_profile::{BusinessProfile, BusinessProfileUpdate, PriceInputType};
pub use course::{CourseRegistration, CourseRegistrationCreate, CourseRegistrationUpdate, CourseStatus};
pub use dashboard::{CategoryAccuracy, DashboardStats, ExamStats};
pub use exam::{
    ExamAttachment, ExamDetailResult, ExamDetailResultCreate, ExamMode, ExamModule,
    ExamModuleType, ExamRecord, ExamRecordCreate, ExamScoreInput, ExamScoreInputCreate,
    ExamSection, ExamStandard, OfficialExamResult, OfficialExamResultCreate,
    OfficialExamResultUpdate, OfficialResultStatus,
};
pub use invoice::{InvoiceSummary, NextInvoiceNumber};
pub use lesson::{Lesson, LessonCreate, LessonStatus, LessonUpdate};
pub use student::{Gender, Student, StudentCreate, StudentStatus, StudentUpdate};
pub use todo::{Todo, TodoCategory, TodoCreate, TodoUpdate};
pub use tutor::{Provider, Tutor, TutorUpdate};
