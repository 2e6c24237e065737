//! Shared types for invoice pricing

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Billing unit of a line item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemUnit {
    /// Per piece (Stk)
    #[default]
    Piece,
    /// Per hour (Std)
    Hour,
    /// Per day (Tag(e))
    Day,
    /// Flat rate (pauschal) - quantity is fixed at 1
    FlatRate,
}

impl ItemUnit {
    /// Whether the entered quantity is ignored for this unit
    pub fn is_flat_rate(&self) -> bool {
        matches!(self, ItemUnit::FlatRate)
    }
}

/// How a discount or adjustment value is expressed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountUnit {
    /// Percentage of the base amount
    #[default]
    Percent,
    /// Absolute Euro amount
    Currency,
}

/// Document-level adjustment direction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdjustmentKind {
    #[default]
    Discount,
    Surcharge,
}

/// Whether entered prices are tax-inclusive or tax-exclusive
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriceMode {
    /// Brutto - prices include VAT
    #[default]
    Gross,
    /// Netto - prices exclude VAT
    Net,
}

/// One invoice position
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Service description (free text)
    pub description: String,
    /// Quantity; ignored (treated as 1) when `unit` is flat rate
    pub quantity: Decimal,
    /// Billing unit
    pub unit: ItemUnit,
    /// Price per unit, gross or net depending on the document's [`PriceMode`]
    pub unit_price: Decimal,
    /// VAT percentage for this item (0, 7 or 19)
    pub vat_rate: Decimal,
    /// Per-item discount value
    pub discount_value: Decimal,
    /// Whether the discount is a percentage or a Euro amount
    pub discount_unit: DiscountUnit,
}

impl LineItem {
    /// Effective quantity: 1 for flat-rate items, the entered quantity
    /// otherwise.
    pub fn effective_quantity(&self) -> Decimal {
        if self.unit.is_flat_rate() {
            Decimal::ONE
        } else {
            self.quantity
        }
    }
}

/// Document-level discount or surcharge, applied after line aggregation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Adjustment {
    /// Display label (e.g. "Gesamtrabatt")
    pub label: String,
    #[serde(rename = "type")]
    pub kind: AdjustmentKind,
    pub value: Decimal,
    pub unit: DiscountUnit,
}

/// Issuer tax configuration, fetched with the next invoice number
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaxConfig {
    /// §19 UStG small-business flag - forces all VAT to 0
    pub is_small_business: bool,
    /// Default VAT percentage for the document (adjustments and new items)
    pub vat_rate: Decimal,
}

impl TaxConfig {
    /// Effective VAT percentage for a line item (0 under §19 UStG)
    pub fn effective_item_rate(&self, item: &LineItem) -> Decimal {
        if self.is_small_business {
            Decimal::ZERO
        } else {
            item.vat_rate
        }
    }

    /// Document default rate as a fraction (0.19 for 19%), 0 under §19 UStG.
    ///
    /// Used for currency adjustments and surcharge tax - never a per-item
    /// rate.
    pub fn assumed_rate(&self) -> Decimal {
        if self.is_small_business {
            Decimal::ZERO
        } else {
            self.vat_rate / Decimal::ONE_HUNDRED
        }
    }
}

impl Default for TaxConfig {
    fn default() -> Self {
        Self {
            is_small_business: false,
            vat_rate: Decimal::from(19),
        }
    }
}

/// Computed invoice totals (never stored, recomputed from the draft)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct InvoiceTotals {
    /// Net total after all adjustments
    pub net: Decimal,
    /// VAT amount
    pub tax: Decimal,
    /// Gross total
    pub gross: Decimal,
}
