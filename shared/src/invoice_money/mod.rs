//! Invoice money calculation using rust_decimal for precision
//!
//! All arithmetic is done in `Decimal` and kept unrounded; 2-decimal
//! rounding happens only at the display boundary (`to_f64`,
//! [`crate::util::format_euro`]).
//!
//! The math is total: missing or malformed numeric input coerces to zero,
//! over-discounted amounts clamp to zero, and no function here returns an
//! error.

use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use std::str::FromStr;

use crate::invoice::types::{
    Adjustment, AdjustmentKind, DiscountUnit, InvoiceTotals, LineItem, PriceMode, TaxConfig,
};

/// Rounding for display/storage values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Parse a raw form input into a monetary amount.
///
/// Empty, whitespace-only or non-numeric input coerces to zero - the form
/// must never panic or error while the user is mid-edit.
pub fn parse_amount(raw: &str) -> Decimal {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }
    Decimal::from_str(trimmed).unwrap_or_else(|_| {
        tracing::debug!(input = trimmed, "non-numeric amount input, coercing to 0");
        Decimal::ZERO
    })
}

/// Convert f64 to Decimal at an input boundary.
///
/// NaN/Infinity fall back to zero rather than corrupting a calculation.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64 for display, rounded to 2 decimal places.
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}

/// Compare two monetary values for equality (within 0.01 tolerance)
pub fn money_eq(a: Decimal, b: Decimal) -> bool {
    (a - b).abs() < MONEY_TOLERANCE
}

/// Divisor for backing a net amount out of a gross one at `rate`
/// (fractional, 0.19 for 19%).
///
/// A rate at or below -100% leaves no meaningful gross representation;
/// fall back to 1 (no embedded tax) so the math stays total instead of
/// dividing by zero.
pub(crate) fn tax_divisor(rate: Decimal) -> Decimal {
    let divisor = Decimal::ONE + rate;
    if divisor <= Decimal::ZERO {
        tracing::debug!(rate = %rate, "tax rate at or below -100%, treating amount as net");
        Decimal::ONE
    } else {
        divisor
    }
}

/// Total of a single line: effective quantity x unit price, minus the
/// per-item discount, clamped at zero.
///
/// The result is in whatever mode (gross/net) the document uses - the
/// line calculation itself is mode-agnostic.
pub fn line_total(item: &LineItem) -> Decimal {
    let base = item.effective_quantity() * item.unit_price;

    let discounted = match item.discount_unit {
        DiscountUnit::Percent => {
            base * (Decimal::ONE - item.discount_value / Decimal::ONE_HUNDRED)
        }
        DiscountUnit::Currency => base - item.discount_value,
    };

    discounted.max(Decimal::ZERO)
}

/// Aggregate invoice totals: per-line accumulation, then document-level
/// adjustments applied sequentially in list order.
///
/// Adjustments convert currency values and tax surcharges with the single
/// document default rate, never per-item rates, and discounts scale the
/// accumulated tax proportionally with the net reduction. For mixed-rate
/// invoices this is an approximation, kept deliberately for backend
/// compatibility.
pub fn calculate_totals(
    items: &[LineItem],
    adjustments: &[Adjustment],
    price_mode: PriceMode,
    tax_config: &TaxConfig,
) -> InvoiceTotals {
    let mut gross = Decimal::ZERO;
    let mut tax = Decimal::ZERO;

    for item in items {
        let total = line_total(item);
        let rate = tax_config.effective_item_rate(item) / Decimal::ONE_HUNDRED;

        match price_mode {
            PriceMode::Gross => {
                // Line total is gross; back out the embedded tax. The
                // divisor is guarded against rates at or below -100%.
                gross += total;
                tax += total - total / tax_divisor(rate);
            }
            PriceMode::Net => {
                let tax_part = total * rate;
                gross += total + tax_part;
                tax += tax_part;
            }
        }
    }

    for adjustment in adjustments {
        let current_net = gross - tax;

        let amount = match adjustment.unit {
            DiscountUnit::Percent => current_net * (adjustment.value / Decimal::ONE_HUNDRED),
            DiscountUnit::Currency => {
                // Currency values are entered in the document's price mode;
                // in gross mode convert to a net-equivalent with the
                // document default rate.
                if price_mode == PriceMode::Gross {
                    adjustment.value / tax_divisor(tax_config.assumed_rate())
                } else {
                    adjustment.value
                }
            }
        };

        match adjustment.kind {
            AdjustmentKind::Discount => {
                let reduced_net = (current_net - amount).max(Decimal::ZERO);
                let reduction_ratio = if current_net > Decimal::ZERO {
                    reduced_net / current_net
                } else {
                    Decimal::ZERO
                };

                tax *= reduction_ratio;
                gross = reduced_net + tax;
            }
            AdjustmentKind::Surcharge => {
                let added_net = current_net + amount;
                let added_tax = amount * tax_config.assumed_rate();

                tax += added_tax;
                gross = added_net + tax;
            }
        }
    }

    InvoiceTotals {
        net: gross - tax,
        tax: tax.max(Decimal::ZERO),
        gross: gross.max(Decimal::ZERO),
    }
}

#[cfg(test)]
mod tests;
