//! Invoice draft state
//!
//! The create-invoice modal owns its whole form as one value, rebuilt
//! fresh on every open. Numeric fields keep the raw text the user typed;
//! conversion to [`Decimal`] happens through
//! [`parse_amount`](crate::invoice_money::parse_amount) when totals are
//! computed, so a half-typed "1," never breaks the running calculation.
//!
//! All mutation goes through [`InvoiceDraft::apply`] with a
//! [`DraftChange`] - one entry point, no cross-field side effects hiding
//! in setters.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::payload::{InvoiceHeader, InvoicePayload};
use super::types::{
    Adjustment, AdjustmentKind, DiscountUnit, InvoiceTotals, ItemUnit, LineItem, PriceMode,
    TaxConfig,
};
use crate::invoice_money::{calculate_totals, line_total, parse_amount};
use crate::util::{days_until_due, due_date_from_days, format_iso_date};
use crate::validation::{FieldError, Rule, validate};

/// Recipient postal address
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecipientAddress {
    pub street: String,
    pub zip: String,
    pub city: String,
    pub country: String,
}

/// One editable invoice position (raw user input)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItemDraft {
    pub description: String,
    /// Raw quantity input; blank or malformed reads as 0
    pub quantity: String,
    pub unit: ItemUnit,
    /// Raw unit price input
    pub unit_price: String,
    /// Selected VAT percentage
    pub vat_rate: Decimal,
    /// Raw discount input
    pub discount_value: String,
    pub discount_unit: DiscountUnit,
}

impl LineItemDraft {
    /// Fresh empty position; VAT preselects the document default (0 under
    /// §19 UStG).
    pub fn new(tax_config: &TaxConfig) -> Self {
        Self {
            description: String::new(),
            quantity: String::new(),
            unit: ItemUnit::Piece,
            unit_price: String::new(),
            vat_rate: if tax_config.is_small_business {
                Decimal::ZERO
            } else {
                tax_config.vat_rate
            },
            discount_value: String::new(),
            discount_unit: DiscountUnit::Percent,
        }
    }

    /// Parse the raw inputs into a calculable line item.
    pub fn to_line_item(&self) -> LineItem {
        LineItem {
            description: self.description.clone(),
            quantity: parse_amount(&self.quantity),
            unit: self.unit,
            unit_price: parse_amount(&self.unit_price),
            vat_rate: self.vat_rate,
            discount_value: parse_amount(&self.discount_value),
            discount_unit: self.discount_unit,
        }
    }
}

/// One editable document-level adjustment (raw user input)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdjustmentDraft {
    pub label: String,
    pub kind: AdjustmentKind,
    /// Raw value input
    pub value: String,
    pub unit: DiscountUnit,
}

impl AdjustmentDraft {
    pub fn to_adjustment(&self) -> Adjustment {
        Adjustment {
            label: self.label.clone(),
            kind: self.kind,
            value: parse_amount(&self.value),
            unit: self.unit,
        }
    }
}

impl Default for AdjustmentDraft {
    fn default() -> Self {
        Self {
            label: "Gesamtrabatt".to_string(),
            kind: AdjustmentKind::Discount,
            value: String::new(),
            unit: DiscountUnit::Percent,
        }
    }
}

/// Field-level change to one line item
#[derive(Debug, Clone, PartialEq)]
pub enum ItemChange {
    Description(String),
    Quantity(String),
    Unit(ItemUnit),
    UnitPrice(String),
    VatRate(Decimal),
    DiscountValue(String),
    DiscountUnit(DiscountUnit),
}

/// Field-level change to one adjustment
#[derive(Debug, Clone, PartialEq)]
pub enum AdjustmentChange {
    Label(String),
    Kind(AdjustmentKind),
    Value(String),
    Unit(DiscountUnit),
}

/// All mutations the invoice form supports
#[derive(Debug, Clone, PartialEq)]
pub enum DraftChange {
    SelectRecipient {
        id: i64,
        name: String,
        address: RecipientAddress,
    },
    SetInvoiceDate(NaiveDate),
    /// Switch between single delivery date and billing period; clears the
    /// date fields either way, as the modal does
    TogglePeriodMode,
    SetDeliveryDate(Option<NaiveDate>),
    SetPeriodStart(Option<NaiveDate>),
    SetPeriodEnd(Option<NaiveDate>),
    /// Raw "due in N days" input; recomputes the due date
    SetDueDays(String),
    /// Picked due date; recomputes the day offset
    SetDueDate(Option<NaiveDate>),
    SetPriceMode(PriceMode),
    SetHeaderText(String),
    SetFooterText(String),
    AddItem,
    RemoveItem(usize),
    UpdateItem { index: usize, change: ItemChange },
    AddAdjustment,
    RemoveAdjustment(usize),
    UpdateAdjustment { index: usize, change: AdjustmentChange },
}

impl DraftChange {
    /// Recipient selection from a roster entry, using the billing name
    /// and address when present.
    pub fn select_student(student: &crate::models::Student) -> Self {
        DraftChange::SelectRecipient {
            id: student.id,
            name: student.recipient_name().to_string(),
            address: student.recipient_address(),
        }
    }
}

/// Complete form state of the create-invoice modal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvoiceDraft {
    pub recipient_id: Option<i64>,
    pub recipient_name: String,
    pub recipient_address: RecipientAddress,
    pub invoice_number: String,
    pub invoice_date: Option<NaiveDate>,
    /// Billing a period instead of a single delivery date
    pub period_mode: bool,
    pub delivery_date: Option<NaiveDate>,
    pub period_start: Option<NaiveDate>,
    pub period_end: Option<NaiveDate>,
    /// Raw "due in N days" input
    pub due_days: String,
    pub due_date: Option<NaiveDate>,
    pub subject: String,
    pub header_text: String,
    pub footer_text: String,
    pub price_mode: PriceMode,
    pub items: Vec<LineItemDraft>,
    pub adjustments: Vec<AdjustmentDraft>,
    pub tax_config: TaxConfig,
}

impl InvoiceDraft {
    /// New draft for the given invoice number and issuer tax
    /// configuration; starts with one empty position.
    pub fn new(
        invoice_number: impl Into<String>,
        invoice_date: NaiveDate,
        tax_config: TaxConfig,
    ) -> Self {
        let invoice_number = invoice_number.into();
        Self {
            recipient_id: None,
            recipient_name: String::new(),
            recipient_address: RecipientAddress::default(),
            subject: format!("Rechnung Nr. {invoice_number}"),
            invoice_number,
            invoice_date: Some(invoice_date),
            period_mode: false,
            delivery_date: None,
            period_start: None,
            period_end: None,
            due_days: String::new(),
            due_date: None,
            header_text: String::new(),
            footer_text: String::new(),
            items: vec![LineItemDraft::new(&tax_config)],
            adjustments: Vec::new(),
            price_mode: PriceMode::Gross,
            tax_config,
        }
    }

    /// Apply one change, keeping the coupled fields (due days/date,
    /// period toggling) in sync.
    pub fn apply(&mut self, change: DraftChange) {
        match change {
            DraftChange::SelectRecipient { id, name, address } => {
                self.recipient_id = Some(id);
                self.recipient_name = name;
                self.recipient_address = address;
            }
            DraftChange::SetInvoiceDate(date) => {
                self.invoice_date = Some(date);
                self.sync_due_date_from_days();
            }
            DraftChange::TogglePeriodMode => {
                self.period_mode = !self.period_mode;
                self.delivery_date = None;
                self.period_start = None;
                self.period_end = None;
            }
            DraftChange::SetDeliveryDate(date) => self.delivery_date = date,
            DraftChange::SetPeriodStart(date) => self.period_start = date,
            DraftChange::SetPeriodEnd(date) => self.period_end = date,
            DraftChange::SetDueDays(raw) => {
                self.due_days = raw;
                self.sync_due_date_from_days();
            }
            DraftChange::SetDueDate(date) => {
                self.due_date = date;
                self.due_days = match (self.invoice_date, date) {
                    (Some(invoice_date), Some(due)) => {
                        days_until_due(invoice_date, due).to_string()
                    }
                    _ => String::new(),
                };
            }
            DraftChange::SetPriceMode(mode) => self.price_mode = mode,
            DraftChange::SetHeaderText(text) => self.header_text = text,
            DraftChange::SetFooterText(text) => self.footer_text = text,
            DraftChange::AddItem => self.items.push(LineItemDraft::new(&self.tax_config)),
            DraftChange::RemoveItem(index) => {
                // The form always keeps at least one position
                if self.items.len() > 1 && index < self.items.len() {
                    self.items.remove(index);
                }
            }
            DraftChange::UpdateItem { index, change } => {
                if let Some(item) = self.items.get_mut(index) {
                    match change {
                        ItemChange::Description(v) => item.description = v,
                        ItemChange::Quantity(v) => item.quantity = v,
                        ItemChange::Unit(v) => item.unit = v,
                        ItemChange::UnitPrice(v) => item.unit_price = v,
                        ItemChange::VatRate(v) => item.vat_rate = v,
                        ItemChange::DiscountValue(v) => item.discount_value = v,
                        ItemChange::DiscountUnit(v) => item.discount_unit = v,
                    }
                }
            }
            DraftChange::AddAdjustment => self.adjustments.push(AdjustmentDraft::default()),
            DraftChange::RemoveAdjustment(index) => {
                if index < self.adjustments.len() {
                    self.adjustments.remove(index);
                }
            }
            DraftChange::UpdateAdjustment { index, change } => {
                if let Some(adjustment) = self.adjustments.get_mut(index) {
                    match change {
                        AdjustmentChange::Label(v) => adjustment.label = v,
                        AdjustmentChange::Kind(v) => adjustment.kind = v,
                        AdjustmentChange::Value(v) => adjustment.value = v,
                        AdjustmentChange::Unit(v) => adjustment.unit = v,
                    }
                }
            }
        }
    }

    fn sync_due_date_from_days(&mut self) {
        let days = self.due_days.trim();
        self.due_date = match (self.invoice_date, days.parse::<u64>()) {
            (Some(invoice_date), Ok(days)) => due_date_from_days(invoice_date, days),
            _ => None,
        };
    }

    /// Parsed line items in entry order.
    pub fn line_items(&self) -> Vec<LineItem> {
        self.items.iter().map(LineItemDraft::to_line_item).collect()
    }

    /// Parsed adjustments in entry order.
    pub fn parsed_adjustments(&self) -> Vec<Adjustment> {
        self.adjustments
            .iter()
            .map(AdjustmentDraft::to_adjustment)
            .collect()
    }

    /// Display total for one position row.
    pub fn item_total(&self, index: usize) -> Decimal {
        self.items
            .get(index)
            .map(|item| line_total(&item.to_line_item()))
            .unwrap_or(Decimal::ZERO)
    }

    /// Document totals, recomputed from scratch on every call.
    pub fn totals(&self) -> InvoiceTotals {
        calculate_totals(
            &self.line_items(),
            &self.parsed_adjustments(),
            self.price_mode,
            &self.tax_config,
        )
    }

    /// Validation before submit: recipient and a delivery date (or a
    /// complete period) are required; a period must not end before it
    /// starts.
    pub fn validate(&self) -> Vec<FieldError> {
        const RULES: &[Rule<InvoiceDraft>] = &[
            Rule {
                field: "recipient",
                message_key: "invoice.recipient_required",
                check: |draft| draft.recipient_id.is_some(),
            },
            Rule {
                field: "delivery",
                message_key: "invoice.delivery_required",
                check: |draft| {
                    draft.delivery_date.is_some()
                        || (draft.period_start.is_some() && draft.period_end.is_some())
                },
            },
            Rule {
                field: "period",
                message_key: "invoice.period_order",
                check: |draft| match (draft.period_start, draft.period_end) {
                    (Some(start), Some(end)) => end >= start,
                    _ => true,
                },
            },
        ];
        validate(self, RULES)
    }

    /// Assemble the submission payload (§ net normalization) from the
    /// current state.
    pub fn to_payload(&self) -> InvoicePayload {
        let header = InvoiceHeader {
            student: self.recipient_id,
            recipient_name: if self.recipient_name.is_empty() {
                "Unbekannt".to_string()
            } else {
                self.recipient_name.clone()
            },
            recipient_address: serde_json::to_string(&self.recipient_address)
                .unwrap_or_else(|_| "{}".to_string()),
            invoice_number: self.invoice_number.clone(),
            invoice_date: self.invoice_date,
            delivery_date_start: if self.period_mode {
                self.period_start
            } else {
                self.delivery_date
            },
            delivery_date_end: if self.period_mode {
                self.period_end
            } else {
                None
            },
            due_date: self.due_date,
            subject: self.subject.clone(),
            header_text: self.header_text.clone(),
            footer_text: self.footer_text.clone(),
        };

        InvoicePayload::build(
            header,
            &self.line_items(),
            &self.parsed_adjustments(),
            self.price_mode,
            &self.tax_config,
            self.totals(),
        )
    }

    /// ISO invoice date for display, empty when unset.
    pub fn invoice_date_display(&self) -> String {
        self.invoice_date.map(format_iso_date).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn draft() -> InvoiceDraft {
        InvoiceDraft::new(
            "RE-2025-0042",
            NaiveDate::from_ymd_opt(2025, 3, 28).unwrap(),
            TaxConfig::default(),
        )
    }

    #[test]
    fn new_draft_has_one_empty_item_and_subject() {
        let draft = draft();
        assert_eq!(draft.items.len(), 1);
        assert_eq!(draft.subject, "Rechnung Nr. RE-2025-0042");
        assert_eq!(draft.items[0].vat_rate, dec!(19));
        assert_eq!(draft.totals(), InvoiceTotals::default());
    }

    #[test]
    fn small_business_preselects_zero_vat() {
        let draft = InvoiceDraft::new(
            "RE-1",
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            TaxConfig {
                is_small_business: true,
                vat_rate: dec!(19),
            },
        );
        assert_eq!(draft.items[0].vat_rate, Decimal::ZERO);
    }

    #[test]
    fn due_days_and_due_date_stay_in_sync() {
        let mut draft = draft();
        draft.apply(DraftChange::SetDueDays("14".to_string()));
        assert_eq!(
            draft.due_date,
            Some(NaiveDate::from_ymd_opt(2025, 4, 11).unwrap())
        );

        draft.apply(DraftChange::SetDueDate(Some(
            NaiveDate::from_ymd_opt(2025, 4, 4).unwrap(),
        )));
        assert_eq!(draft.due_days, "7");

        draft.apply(DraftChange::SetDueDays(String::new()));
        assert_eq!(draft.due_date, None);
    }

    #[test]
    fn toggling_period_mode_clears_dates() {
        let mut draft = draft();
        draft.apply(DraftChange::SetDeliveryDate(Some(
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        )));
        draft.apply(DraftChange::TogglePeriodMode);
        assert!(draft.period_mode);
        assert_eq!(draft.delivery_date, None);
        assert_eq!(draft.period_start, None);
    }

    #[test]
    fn last_item_cannot_be_removed() {
        let mut draft = draft();
        draft.apply(DraftChange::RemoveItem(0));
        assert_eq!(draft.items.len(), 1);

        draft.apply(DraftChange::AddItem);
        draft.apply(DraftChange::RemoveItem(1));
        assert_eq!(draft.items.len(), 1);
    }

    #[test]
    fn malformed_numeric_input_reads_as_zero() {
        let mut draft = draft();
        draft.apply(DraftChange::UpdateItem {
            index: 0,
            change: ItemChange::Quantity("2,".to_string()),
        });
        draft.apply(DraftChange::UpdateItem {
            index: 0,
            change: ItemChange::UnitPrice("50".to_string()),
        });
        // "2," fails to parse and coerces to 0, so the line reads 0
        assert_eq!(draft.item_total(0), Decimal::ZERO);

        draft.apply(DraftChange::UpdateItem {
            index: 0,
            change: ItemChange::Quantity("2".to_string()),
        });
        assert_eq!(draft.item_total(0), dec!(100));
    }

    #[test]
    fn validation_requires_recipient_and_delivery() {
        let draft = draft();
        let errors = draft.validate();
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert!(fields.contains(&"recipient"));
        assert!(fields.contains(&"delivery"));
    }

    #[test]
    fn validation_rejects_inverted_period() {
        let mut draft = draft();
        draft.apply(DraftChange::TogglePeriodMode);
        draft.apply(DraftChange::SetPeriodStart(Some(
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
        )));
        draft.apply(DraftChange::SetPeriodEnd(Some(
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        )));
        assert!(draft.validate().iter().any(|e| e.field == "period"));
    }

    #[test]
    fn payload_uses_period_dates_in_period_mode() {
        let mut draft = draft();
        draft.apply(DraftChange::TogglePeriodMode);
        let start = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();
        draft.apply(DraftChange::SetPeriodStart(Some(start)));
        draft.apply(DraftChange::SetPeriodEnd(Some(end)));

        let payload = draft.to_payload();
        assert_eq!(payload.header.delivery_date_start, Some(start));
        assert_eq!(payload.header.delivery_date_end, Some(end));
        assert_eq!(payload.header.recipient_name, "Unbekannt");
    }
}
