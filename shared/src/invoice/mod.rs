//! Invoice domain types and form state
//!
//! The arithmetic itself lives in [`crate::invoice_money`]; this module
//! holds the data shapes (line items, document-level adjustments, tax
//! configuration), the editable draft state and the submission payload.

pub mod form;
pub mod payload;
pub mod types;

pub use form::{DraftChange, InvoiceDraft, LineItemDraft};
pub use payload::{InvoicePayload, PayloadAdjustment, PayloadItem};
pub use types::{
    Adjustment, AdjustmentKind, DiscountUnit, InvoiceTotals, ItemUnit, LineItem, PriceMode,
    TaxConfig,
};
