use super::*;
use rust_decimal_macros::dec;

fn item(quantity: Decimal, unit_price: Decimal, vat_rate: Decimal) -> LineItem {
    LineItem {
        description: "Nachhilfe Mathematik".to_string(),
        quantity,
        unit: crate::invoice::types::ItemUnit::Hour,
        unit_price,
        vat_rate,
        discount_value: Decimal::ZERO,
        discount_unit: DiscountUnit::Percent,
    }
}

fn flat_rate_item(quantity: Decimal, unit_price: Decimal) -> LineItem {
    LineItem {
        unit: crate::invoice::types::ItemUnit::FlatRate,
        ..item(quantity, unit_price, dec!(19))
    }
}

fn adjustment(kind: AdjustmentKind, value: Decimal, unit: DiscountUnit) -> Adjustment {
    Adjustment {
        label: "Anpassung".to_string(),
        kind,
        value,
        unit,
    }
}

#[test]
fn test_to_decimal_precision() {
    // Classic floating point problem: 0.1 + 0.2 != 0.3
    let sum_f64 = 0.1_f64 + 0.2_f64;
    assert_ne!(sum_f64, 0.3);

    let sum_dec = to_decimal(0.1) + to_decimal(0.2);
    assert_eq!(to_f64(sum_dec), 0.3);
}

#[test]
fn test_to_decimal_non_finite_is_zero() {
    assert_eq!(to_decimal(f64::NAN), Decimal::ZERO);
    assert_eq!(to_decimal(f64::INFINITY), Decimal::ZERO);
}

#[test]
fn test_parse_amount() {
    assert_eq!(parse_amount("19.5"), dec!(19.5));
    assert_eq!(parse_amount("  42 "), dec!(42));
    assert_eq!(parse_amount(""), Decimal::ZERO);
    assert_eq!(parse_amount("   "), Decimal::ZERO);
    assert_eq!(parse_amount("1,5"), Decimal::ZERO);
    assert_eq!(parse_amount("abc"), Decimal::ZERO);
}

#[test]
fn test_money_eq_tolerance() {
    assert!(money_eq(dec!(10.000), dec!(10.009)));
    assert!(!money_eq(dec!(10.00), dec!(10.01)));
}

#[test]
fn test_line_total_no_discount() {
    let total = line_total(&item(dec!(3), dec!(10.99), dec!(19)));
    assert_eq!(to_f64(total), 32.97);
}

#[test]
fn test_line_total_percent_discount() {
    let mut item = item(dec!(2), dec!(100), dec!(19));
    item.discount_value = dec!(10);
    assert_eq!(line_total(&item), dec!(180));
}

#[test]
fn test_line_total_currency_discount() {
    let mut item = item(dec!(2), dec!(100), dec!(19));
    item.discount_value = dec!(25);
    item.discount_unit = DiscountUnit::Currency;
    assert_eq!(line_total(&item), dec!(175));
}

#[test]
fn test_line_total_over_discount_clamps_to_zero() {
    let mut item = item(dec!(1), dec!(50), dec!(19));
    item.discount_value = dec!(80);
    item.discount_unit = DiscountUnit::Currency;
    assert_eq!(line_total(&item), Decimal::ZERO);

    item.discount_value = dec!(150);
    item.discount_unit = DiscountUnit::Percent;
    assert_eq!(line_total(&item), Decimal::ZERO);
}

#[test]
fn test_flat_rate_ignores_quantity() {
    // Blank quantity parses to 0, a typed quantity could be anything;
    // pauschal items bill once either way.
    assert_eq!(line_total(&flat_rate_item(Decimal::ZERO, dec!(500))), dec!(500));
    assert_eq!(line_total(&flat_rate_item(dec!(7), dec!(500))), dec!(500));
}

#[test]
fn test_totals_gross_mode_backs_out_tax() {
    let items = [item(dec!(2), dec!(100), dec!(19))];
    let totals = calculate_totals(&items, &[], PriceMode::Gross, &TaxConfig::default());

    assert_eq!(to_f64(totals.gross), 200.0);
    assert_eq!(to_f64(totals.tax), 31.93);
    assert_eq!(to_f64(totals.net), 168.07);
}

#[test]
fn test_totals_gross_mode_with_line_discount() {
    let mut discounted = item(dec!(2), dec!(100), dec!(19));
    discounted.discount_value = dec!(10);
    let totals = calculate_totals(&[discounted], &[], PriceMode::Gross, &TaxConfig::default());

    assert_eq!(to_f64(totals.gross), 180.0);
    assert_eq!(to_f64(totals.tax), 28.74);
    assert_eq!(to_f64(totals.net), 151.26);
}

#[test]
fn test_totals_net_mode_adds_tax() {
    let items = [item(dec!(2), dec!(100), dec!(19))];
    let totals = calculate_totals(&items, &[], PriceMode::Net, &TaxConfig::default());

    assert_eq!(totals.net, dec!(200));
    assert_eq!(totals.tax, dec!(38));
    assert_eq!(totals.gross, dec!(238));
}

#[test]
fn test_gross_and_net_mode_agree_on_equivalent_input() {
    // 119 gross at 19% is the same invoice as 100 net at 19%
    let gross_items = [item(dec!(1), dec!(119), dec!(19))];
    let net_items = [item(dec!(1), dec!(100), dec!(19))];
    let config = TaxConfig::default();

    let from_gross = calculate_totals(&gross_items, &[], PriceMode::Gross, &config);
    let from_net = calculate_totals(&net_items, &[], PriceMode::Net, &config);

    assert!(money_eq(from_gross.net, from_net.net));
    assert!(money_eq(from_gross.tax, from_net.tax));
    assert!(money_eq(from_gross.gross, from_net.gross));
}

#[test]
fn test_totals_identity_net_plus_tax_is_gross() {
    let items = [
        item(dec!(2), dec!(45.50), dec!(19)),
        item(dec!(1), dec!(80), dec!(7)),
        item(dec!(3), dec!(12.34), Decimal::ZERO),
    ];
    let adjustments = [
        adjustment(AdjustmentKind::Discount, dec!(5), DiscountUnit::Percent),
        adjustment(AdjustmentKind::Surcharge, dec!(10), DiscountUnit::Currency),
    ];
    let totals = calculate_totals(&items, &adjustments, PriceMode::Gross, &TaxConfig::default());

    assert_eq!(totals.net + totals.tax, totals.gross);
}

#[test]
fn test_single_rate_tax_matches_rate_times_net() {
    let items = [
        item(dec!(2), dec!(100), dec!(19)),
        item(dec!(1), dec!(59.90), dec!(19)),
    ];
    let config = TaxConfig::default();

    for mode in [PriceMode::Gross, PriceMode::Net] {
        let totals = calculate_totals(&items, &[], mode, &config);
        assert!(money_eq(totals.tax, totals.net * dec!(0.19)));
    }
}

#[test]
fn test_zero_value_adjustments_are_noops() {
    let items = [item(dec!(2), dec!(100), dec!(19))];
    let config = TaxConfig::default();
    let baseline = calculate_totals(&items, &[], PriceMode::Gross, &config);

    for kind in [AdjustmentKind::Discount, AdjustmentKind::Surcharge] {
        for unit in [DiscountUnit::Percent, DiscountUnit::Currency] {
            let adjustments = [adjustment(kind, Decimal::ZERO, unit)];
            let totals = calculate_totals(&items, &adjustments, PriceMode::Gross, &config);
            assert_eq!(totals, baseline);
        }
    }
}

#[test]
fn test_percent_discounts_compound_sequentially() {
    // Two 10% discounts on 100 net leave 81, not 80
    let items = [item(dec!(1), dec!(100), dec!(19))];
    let adjustments = [
        adjustment(AdjustmentKind::Discount, dec!(10), DiscountUnit::Percent),
        adjustment(AdjustmentKind::Discount, dec!(10), DiscountUnit::Percent),
    ];
    let totals = calculate_totals(&items, &adjustments, PriceMode::Net, &TaxConfig::default());

    assert_eq!(to_f64(totals.net), 81.0);
    assert_eq!(to_f64(totals.tax), 15.39);
    assert_eq!(to_f64(totals.gross), 96.39);
}

#[test]
fn test_currency_discount_converts_to_net_in_gross_mode() {
    // 119 gross = 100 net + 19 tax; an 11.90 gross discount removes 10 net
    let items = [item(dec!(1), dec!(119), dec!(19))];
    let adjustments = [adjustment(
        AdjustmentKind::Discount,
        dec!(11.90),
        DiscountUnit::Currency,
    )];
    let totals = calculate_totals(&items, &adjustments, PriceMode::Gross, &TaxConfig::default());

    assert_eq!(to_f64(totals.net), 90.0);
    assert_eq!(to_f64(totals.tax), 17.1);
    assert_eq!(to_f64(totals.gross), 107.1);
}

#[test]
fn test_discount_scales_tax_proportionally() {
    let items = [item(dec!(1), dec!(100), dec!(19))];
    let adjustments = [adjustment(
        AdjustmentKind::Discount,
        dec!(25),
        DiscountUnit::Percent,
    )];
    let totals = calculate_totals(&items, &adjustments, PriceMode::Net, &TaxConfig::default());

    assert_eq!(to_f64(totals.net), 75.0);
    assert_eq!(to_f64(totals.tax), 14.25);
    assert_eq!(to_f64(totals.gross), 89.25);
}

#[test]
fn test_surcharge_taxed_at_document_rate() {
    // 100 net + 19 tax; a 10% surcharge adds 10 net and 1.90 tax
    let items = [item(dec!(1), dec!(100), dec!(19))];
    let adjustments = [adjustment(
        AdjustmentKind::Surcharge,
        dec!(10),
        DiscountUnit::Percent,
    )];
    let totals = calculate_totals(&items, &adjustments, PriceMode::Net, &TaxConfig::default());

    assert_eq!(to_f64(totals.net), 110.0);
    assert_eq!(to_f64(totals.tax), 20.9);
    assert_eq!(to_f64(totals.gross), 130.9);
}

#[test]
fn test_over_discount_clamps_document_to_zero() {
    let items = [item(dec!(1), dec!(50), dec!(19))];
    let adjustments = [adjustment(
        AdjustmentKind::Discount,
        dec!(500),
        DiscountUnit::Currency,
    )];
    let totals = calculate_totals(&items, &adjustments, PriceMode::Net, &TaxConfig::default());

    assert_eq!(totals.net, Decimal::ZERO);
    assert_eq!(totals.tax, Decimal::ZERO);
    assert_eq!(totals.gross, Decimal::ZERO);
}

#[test]
fn test_small_business_has_no_tax() {
    let config = TaxConfig {
        is_small_business: true,
        vat_rate: dec!(19),
    };
    let items = [item(dec!(2), dec!(100), dec!(19))];
    let adjustments = [
        adjustment(AdjustmentKind::Discount, dec!(10), DiscountUnit::Percent),
        adjustment(AdjustmentKind::Surcharge, dec!(15), DiscountUnit::Currency),
    ];

    for mode in [PriceMode::Gross, PriceMode::Net] {
        let totals = calculate_totals(&items, &adjustments, mode, &config);
        assert_eq!(totals.tax, Decimal::ZERO);
        assert_eq!(totals.net, totals.gross);
        assert_eq!(to_f64(totals.gross), 195.0);
    }
}

#[test]
fn test_vat_rate_at_minus_100_stays_total() {
    // A -100% rate makes the gross back-out divisor hit zero; the
    // calculation must treat the amount as carrying no tax instead of
    // dividing by zero.
    let items = [item(dec!(1), dec!(100), dec!(-100))];
    let totals = calculate_totals(&items, &[], PriceMode::Gross, &TaxConfig::default());

    assert_eq!(totals.gross, dec!(100));
    assert_eq!(totals.tax, Decimal::ZERO);
    assert_eq!(totals.net, dec!(100));

    // Same guard for currency adjustments when the document default
    // rate is -100%
    let config = TaxConfig {
        is_small_business: false,
        vat_rate: dec!(-100),
    };
    let zero_rated = [item(dec!(1), dec!(100), Decimal::ZERO)];
    let adjustments = [adjustment(
        AdjustmentKind::Discount,
        dec!(10),
        DiscountUnit::Currency,
    )];
    let totals = calculate_totals(&zero_rated, &adjustments, PriceMode::Gross, &config);

    assert_eq!(totals.net, dec!(90));
    assert_eq!(totals.tax, Decimal::ZERO);
    assert_eq!(totals.gross, dec!(90));

    // And for payload normalization, which divides by the same factor
    let normalized = crate::invoice::payload::normalize_item(
        &item(dec!(1), dec!(100), dec!(-100)),
        PriceMode::Gross,
        &TaxConfig::default(),
    );
    assert_eq!(normalized.unit_price, dec!(100));
    assert_eq!(normalized.total_price, dec!(100));
}

#[test]
fn test_mixed_rates_accumulate_per_item() {
    let items = [
        item(dec!(1), dec!(119), dec!(19)),
        item(dec!(1), dec!(107), dec!(7)),
    ];
    let totals = calculate_totals(&items, &[], PriceMode::Gross, &TaxConfig::default());

    assert_eq!(to_f64(totals.gross), 226.0);
    assert_eq!(to_f64(totals.tax), 26.0);
    assert_eq!(to_f64(totals.net), 200.0);
}

#[test]
fn test_payload_items_agree_with_display_totals() {
    use crate::invoice::payload::normalize_item;

    // Single-rate invoice without adjustments: the sum of the normalized
    // net line totals must match the display net to the cent.
    let items = [
        item(dec!(2), dec!(45.50), dec!(19)),
        item(dec!(3), dec!(19.99), dec!(19)),
    ];
    let config = TaxConfig::default();
    let totals = calculate_totals(&items, &[], PriceMode::Gross, &config);

    let payload_net: Decimal = items
        .iter()
        .map(|i| normalize_item(i, PriceMode::Gross, &config).total_price)
        .sum();

    assert!(money_eq(payload_net, totals.net));
    assert!(money_eq(payload_net * dec!(0.19), totals.tax));
}
