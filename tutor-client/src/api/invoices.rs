//! Invoice API

use shared::invoice::InvoicePayload;
use shared::models::{InvoiceSummary, NextInvoiceNumber};

use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// List stored invoices
    pub async fn list_invoices(&self) -> ClientResult<Vec<InvoiceSummary>> {
        self.get("/api/invoices/").await
    }

    /// Next free invoice code for the current year
    pub async fn next_invoice_number(&self) -> ClientResult<NextInvoiceNumber> {
        self.get("/api/invoices/next_number/").await
    }

    /// Create an invoice with all items and adjustments in one call
    pub async fn create_invoice(&self, payload: &InvoicePayload) -> ClientResult<InvoiceSummary> {
        self.post("/api/invoices/create_full/", payload).await
    }

    /// Render a PDF preview without persisting anything
    pub async fn preview_invoice_pdf(&self, payload: &InvoicePayload) -> ClientResult<Vec<u8>> {
        self.post_raw("/api/invoices/preview_pdf/", payload).await
    }

    /// Download the PDF of a stored invoice
    pub async fn download_invoice_pdf(&self, id: i64) -> ClientResult<Vec<u8>> {
        self.get_bytes(&format!("/api/invoices/{id}/download_pdf/"))
            .await
    }

    /// Mark an invoice as paid or unpaid
    pub async fn set_invoice_paid(&self, id: i64, is_paid: bool) -> ClientResult<InvoiceSummary> {
        self.patch(
            &format!("/api/invoices/{id}/"),
            &serde_json::json!({ "is_paid": is_paid }),
        )
        .await
    }

    /// Delete an invoice
    pub async fn delete_invoice(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("/api/invoices/{id}/")).await
    }
}
