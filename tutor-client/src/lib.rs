//! Tutor Client - HTTP client for the tutoring-business backend
//!
//! Session-cookie authenticated REST calls for students, courses,
//! lessons, exams, todos and invoicing.

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::invoice::{InvoiceDraft, InvoicePayload, InvoiceTotals, PriceMode, TaxConfig};
pub use shared::models;
