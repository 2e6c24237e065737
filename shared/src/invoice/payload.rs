//! Submission payload for the invoice-creation endpoint
//!
//! The backend stores everything in net terms. Whatever mode the document
//! was edited in, prices and currency discounts are normalized to net
//! before transmission, and each item's `total_price` is recomputed from
//! the normalized values. The document totals (`subtotal`, `vat_amount`,
//! `total_amount`) are the display totals from
//! [`crate::invoice_money::calculate_totals`]; the two computations agree
//! to the cent for single-rate invoices without adjustments.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::{
    Adjustment, AdjustmentKind, DiscountUnit, InvoiceTotals, ItemUnit, LineItem, PriceMode,
    TaxConfig,
};
use crate::invoice_money::tax_divisor;

/// One line item as the backend stores it (all values net)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadItem {
    pub description: String,
    /// Effective quantity (1 for flat-rate items)
    #[serde(with = "rust_decimal::serde::float")]
    pub quantity: Decimal,
    pub unit: ItemUnit,
    /// Net price per unit
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    /// Net discount value (percentages are transmitted unchanged)
    #[serde(with = "rust_decimal::serde::float")]
    pub discount_value: Decimal,
    pub discount_unit: DiscountUnit,
    /// Effective VAT percentage (0 under §19 UStG)
    #[serde(with = "rust_decimal::serde::float")]
    pub vat_rate: Decimal,
    /// Net line total
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
}

/// One document-level adjustment as the backend stores it (net value)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadAdjustment {
    pub label: String,
    #[serde(rename = "type")]
    pub kind: AdjustmentKind,
    #[serde(with = "rust_decimal::serde::float")]
    pub value: Decimal,
    pub unit: DiscountUnit,
}

/// Invoice header fields collected from the draft
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InvoiceHeader {
    /// Recipient student ID, if a roster entry was selected
    pub student: Option<i64>,
    pub recipient_name: String,
    /// Recipient address serialized as a JSON object string
    pub recipient_address: String,
    pub invoice_number: String,
    pub invoice_date: Option<NaiveDate>,
    /// Delivery date, or period start when a period is billed
    pub delivery_date_start: Option<NaiveDate>,
    pub delivery_date_end: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub subject: String,
    pub header_text: String,
    pub footer_text: String,
}

/// Full body for `POST /api/invoices/create_full/`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvoicePayload {
    #[serde(flatten)]
    pub header: InvoiceHeader,
    pub items: Vec<PayloadItem>,
    pub adjustments: Vec<PayloadAdjustment>,
    /// Display net total
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
    /// Display VAT amount
    #[serde(with = "rust_decimal::serde::float")]
    pub vat_amount: Decimal,
    /// Display gross total
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
}

/// Normalize one line item to net terms.
pub fn normalize_item(item: &LineItem, price_mode: PriceMode, tax_config: &TaxConfig) -> PayloadItem {
    let rate = tax_config.effective_item_rate(item) / Decimal::ONE_HUNDRED;
    let quantity = item.effective_quantity();

    let net_price = if price_mode == PriceMode::Gross {
        item.unit_price / tax_divisor(rate)
    } else {
        item.unit_price
    };

    let net_discount = match item.discount_unit {
        // Percentages are mode-independent
        DiscountUnit::Percent => item.discount_value,
        DiscountUnit::Currency if price_mode == PriceMode::Gross => {
            item.discount_value / tax_divisor(rate)
        }
        DiscountUnit::Currency => item.discount_value,
    };

    let total_price = match item.discount_unit {
        DiscountUnit::Percent => {
            net_price * quantity * (Decimal::ONE - net_discount / Decimal::ONE_HUNDRED)
        }
        DiscountUnit::Currency => net_price * quantity - net_discount,
    }
    .max(Decimal::ZERO);

    PayloadItem {
        description: item.description.clone(),
        quantity,
        unit: item.unit,
        unit_price: net_price,
        discount_value: net_discount,
        discount_unit: item.discount_unit,
        vat_rate: tax_config.effective_item_rate(item),
        total_price,
    }
}

/// Normalize one adjustment to net terms.
///
/// Currency values in gross mode are divided by the document default rate,
/// matching the display aggregation - per-item rates are never used here.
pub fn normalize_adjustment(
    adjustment: &Adjustment,
    price_mode: PriceMode,
    tax_config: &TaxConfig,
) -> PayloadAdjustment {
    let value = if adjustment.unit == DiscountUnit::Currency && price_mode == PriceMode::Gross {
        adjustment.value / tax_divisor(tax_config.assumed_rate())
    } else {
        adjustment.value
    };

    PayloadAdjustment {
        label: adjustment.label.clone(),
        kind: adjustment.kind,
        value,
        unit: adjustment.unit,
    }
}

impl InvoicePayload {
    /// Assemble the full submission body from draft data and the display
    /// totals.
    pub fn build(
        header: InvoiceHeader,
        items: &[LineItem],
        adjustments: &[Adjustment],
        price_mode: PriceMode,
        tax_config: &TaxConfig,
        totals: InvoiceTotals,
    ) -> Self {
        Self {
            header,
            items: items
                .iter()
                .map(|item| normalize_item(item, price_mode, tax_config))
                .collect(),
            adjustments: adjustments
                .iter()
                .map(|adjustment| normalize_adjustment(adjustment, price_mode, tax_config))
                .collect(),
            subtotal: totals.net,
            vat_amount: totals.tax,
            total_amount: totals.gross,
        }
    }
}
