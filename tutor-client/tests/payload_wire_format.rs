// Wire-format checks for the invoice creation payload.
// The backend is strict about field names and enum spellings, so the
// serialized JSON shape is pinned here.

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use shared::invoice::form::{DraftChange, InvoiceDraft, ItemChange};
use shared::invoice::types::{DiscountUnit, ItemUnit, TaxConfig};

fn sample_draft() -> InvoiceDraft {
    let mut draft = InvoiceDraft::new(
        "RE-2025-0007",
        NaiveDate::from_ymd_opt(2025, 5, 2).unwrap(),
        TaxConfig::default(),
    );
    draft.apply(DraftChange::SetDeliveryDate(Some(
        NaiveDate::from_ymd_opt(2025, 4, 30).unwrap(),
    )));
    draft.apply(DraftChange::UpdateItem {
        index: 0,
        change: ItemChange::Description("Nachhilfe Deutsch B2".to_string()),
    });
    draft.apply(DraftChange::UpdateItem {
        index: 0,
        change: ItemChange::Quantity("4".to_string()),
    });
    draft.apply(DraftChange::UpdateItem {
        index: 0,
        change: ItemChange::UnitPrice("47.60".to_string()),
    });
    draft
}

#[test]
fn payload_header_is_flattened() {
    let payload = sample_draft().to_payload();
    let json = serde_json::to_value(&payload).unwrap();

    // Header fields sit at the top level, not under a "header" key
    assert!(json.get("header").is_none());
    assert_eq!(json["invoice_number"], "RE-2025-0007");
    assert_eq!(json["invoice_date"], "2025-05-02");
    assert_eq!(json["delivery_date_start"], "2025-04-30");
    assert!(json["delivery_date_end"].is_null());
}

#[test]
fn adjustment_kind_serializes_as_type() {
    use shared::invoice::types::{Adjustment, AdjustmentKind};
    use shared::invoice::payload::normalize_adjustment;
    use shared::invoice::types::PriceMode;

    let adjustment = Adjustment {
        label: "Treuerabatt".to_string(),
        kind: AdjustmentKind::Discount,
        value: dec!(5),
        unit: DiscountUnit::Percent,
    };
    let normalized = normalize_adjustment(&adjustment, PriceMode::Net, &TaxConfig::default());
    let json = serde_json::to_value(&normalized).unwrap();

    assert_eq!(json["type"], "DISCOUNT");
    assert_eq!(json["unit"], "PERCENT");
    assert!(json.get("kind").is_none());
}

#[test]
fn enums_use_screaming_snake_case() {
    assert_eq!(
        serde_json::to_value(ItemUnit::FlatRate).unwrap(),
        "FLAT_RATE"
    );
    assert_eq!(
        serde_json::to_value(DiscountUnit::Currency).unwrap(),
        "CURRENCY"
    );
}

#[test]
fn money_fields_are_json_numbers() {
    let payload = sample_draft().to_payload();
    let json = serde_json::to_value(&payload).unwrap();

    // 4 x 47.60 gross = 190.40; net = 160
    assert!(json["total_amount"].is_number());
    assert_eq!(json["total_amount"].as_f64().unwrap(), 190.40);
    assert!((json["subtotal"].as_f64().unwrap() - 160.0).abs() < 0.01);

    let item = &json["items"][0];
    assert!(item["unit_price"].is_number());
    assert!(item["total_price"].is_number());
    assert_eq!(item["quantity"].as_f64().unwrap(), 4.0);
    assert_eq!(item["vat_rate"].as_f64().unwrap(), 19.0);
}
