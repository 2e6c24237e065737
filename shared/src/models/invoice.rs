//! Stored invoice model (list/detail views)
//!
//! The editable draft and the creation payload live in
//! [`crate::invoice`]; this is the read side returned by the server.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Stored invoice row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceSummary {
    pub id: i64,
    /// Full display code, e.g. "RE-2025-0042"
    pub full_invoice_code: String,
    /// Sequential number within the year
    pub invoice_number: u32,
    pub student: Option<i64>,
    pub recipient_name: String,
    pub invoice_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub subject: String,
    pub subtotal: Decimal,
    pub total_adjustment_amount: Decimal,
    pub vat_amount: Decimal,
    pub total_amount: Decimal,
    /// Snapshot of the issuer's §19 UStG flag at creation time
    pub is_small_business: bool,
    pub is_paid: bool,
    pub is_sent: bool,
    pub created_at: DateTime<Utc>,
}

/// Response of `GET /api/invoices/next_number/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextInvoiceNumber {
    /// Next free invoice code for the current year
    pub next_number: String,
}
