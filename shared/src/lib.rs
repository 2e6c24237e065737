//! Shared types for the tutoring-business management client
//!
//! Domain models, the invoice pricing engine, form state and validation
//! rules used by the API client and any rendering front-end.

pub mod invoice;
pub mod invoice_money;
pub mod models;
pub mod util;
pub mod validation;

// Re-exports
pub use serde::{Deserialize, Serialize};

// Invoice re-exports (the pricing engine is the one contract callers
// should not have to dig for)
pub use invoice::{
    Adjustment, AdjustmentKind, DiscountUnit, InvoiceTotals, ItemUnit, LineItem, PriceMode,
    TaxConfig,
};
pub use invoice_money::{calculate_totals, line_total, parse_amount};
