//! Small date and formatting helpers shared by the schedule and invoice
//! views.

use chrono::{Datelike, Days, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Format a date as `YYYY-MM-DD` for the backend API.
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Due date from an invoice date plus a payment-term offset in days.
///
/// Returns `None` when the offset pushes the date out of chrono's
/// representable range.
pub fn due_date_from_days(invoice_date: NaiveDate, days: u64) -> Option<NaiveDate> {
    invoice_date.checked_add_days(Days::new(days))
}

/// Days between invoice date and due date, clamped at zero.
///
/// The invoice modal keeps "due in N days" and "due date" in sync; a due
/// date before the invoice date reads as 0 days rather than a negative
/// term.
pub fn days_until_due(invoice_date: NaiveDate, due_date: NaiveDate) -> i64 {
    (due_date - invoice_date).num_days().max(0)
}

/// Monday-through-Sunday week containing `base`.
pub fn week_days(base: NaiveDate) -> Vec<NaiveDate> {
    let monday = base - chrono::Duration::days(base.weekday().num_days_from_monday() as i64);
    (0..7)
        .map(|offset| monday + chrono::Duration::days(offset))
        .collect()
}

/// Format a monetary amount as German-locale Euro: `1.234,56 €`.
///
/// This is the only place display rounding (2 decimals, half-up) happens;
/// the pricing engine itself keeps full precision.
pub fn format_euro(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(
        2,
        rust_decimal::RoundingStrategy::MidpointAwayFromZero,
    );
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let cents = rounded.abs() * Decimal::from(100);
    let total_cents = cents.to_i128().unwrap_or(0);
    let euros = total_cents / 100;
    let rest = total_cents % 100;

    let mut digits = euros.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    while digits.len() > 3 {
        let split = digits.len() - 3;
        grouped.insert_str(0, &format!(".{}", &digits[split..]));
        digits.truncate(split);
    }
    grouped.insert_str(0, &digits);

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped},{rest:02} €")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn due_date_roundtrip() {
        let invoice = date(2025, 3, 28);
        let due = due_date_from_days(invoice, 14).unwrap();
        assert_eq!(due, date(2025, 4, 11));
        assert_eq!(days_until_due(invoice, due), 14);
    }

    #[test]
    fn due_date_before_invoice_clamps_to_zero() {
        assert_eq!(days_until_due(date(2025, 3, 28), date(2025, 3, 1)), 0);
    }

    #[test]
    fn week_starts_on_monday() {
        // 2025-03-26 is a Wednesday
        let week = week_days(date(2025, 3, 26));
        assert_eq!(week.len(), 7);
        assert_eq!(week[0], date(2025, 3, 24));
        assert_eq!(week[6], date(2025, 3, 30));
        // Sunday maps into the same week, not the next one
        assert_eq!(week_days(date(2025, 3, 30))[0], date(2025, 3, 24));
    }

    #[test]
    fn euro_formatting() {
        assert_eq!(format_euro(dec!(0)), "0,00 €");
        assert_eq!(format_euro(dec!(7.5)), "7,50 €");
        assert_eq!(format_euro(dec!(1234.56)), "1.234,56 €");
        assert_eq!(format_euro(dec!(1234567.891)), "1.234.567,89 €");
        assert_eq!(format_euro(dec!(-42.005)), "-42,01 €");
    }
}
