//! Endpoint groups
//!
//! Each module extends [`crate::HttpClient`] with the calls for one
//! resource. Paths keep the backend's trailing slashes.

pub mod auth;
pub mod courses;
pub mod exams;
pub mod invoices;
pub mod lessons;
pub mod profile;
pub mod stats;
pub mod students;
pub mod todos;
