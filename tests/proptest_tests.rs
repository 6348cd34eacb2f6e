//! Property-based tests for the GST engine and amount in words.
//!
//! Run with: `cargo test --test proptest_tests`

use chrono::NaiveDate;
use gstbill::core::*;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ── Proptest Strategies ─────────────────────────────────────────────────────

/// Generate a reasonable rate (0.00 to 99999.99).
fn arb_rate() -> impl Strategy<Value = Decimal> {
    (0u64..10_000_000u64).prop_map(|paise| Decimal::new(paise as i64, 2))
}

/// Generate a quantity with up to three decimals (0 to 1000).
fn arb_quantity() -> impl Strategy<Value = Decimal> {
    (0u64..=1_000_000u64).prop_map(|milli| Decimal::new(milli as i64, 3))
}

fn arb_jurisdiction() -> impl Strategy<Value = Jurisdiction> {
    prop_oneof![Just(Jurisdiction::SameState), Just(Jurisdiction::OtherState)]
}

/// A registered buyer in the home state, one in another state, or an
/// unregistered buyer.
fn arb_buyer_gstin() -> impl Strategy<Value = Option<&'static str>> {
    prop_oneof![
        Just(Some("24ABCDE1234F1Z6")),
        Just(Some("27AAPFU0939F1ZV")),
        Just(Some("07AAACR5055K1Z9")),
        Just(None),
    ]
}

fn arb_lines() -> impl Strategy<Value = Vec<(Decimal, Decimal)>> {
    prop::collection::vec((arb_quantity(), arb_rate()), 0..=8)
}

fn build(gstin: Option<&str>, lines: &[(Decimal, Decimal)]) -> Invoice {
    let mut buyer = PartyBuilder::new("Buyer", "Address");
    if let Some(g) = gstin {
        buyer = buyer.gstin(g);
    }
    let mut builder = InvoiceBuilder::from_profile(
        &SellerProfile::default(),
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
    )
    .buyer(buyer.build());
    for (i, (quantity, rate)) in lines.iter().enumerate() {
        builder = builder.add_line(LineItemBuilder::new(format!("Item {i}"), *quantity, *rate).build());
    }
    builder.build_unchecked().unwrap()
}

// ── Property Tests ──────────────────────────────────────────────────────────

proptest! {
    /// amount = quantity * rate, and the tax is 18% of it in either jurisdiction.
    #[test]
    fn line_tax_is_eighteen_percent(q in arb_quantity(), r in arb_rate(), j in arb_jurisdiction()) {
        let line = compute_item(q, r, j);
        prop_assert_eq!(line.amount, q * r);
        prop_assert_eq!(line.tax(), line.amount * dec!(0.18));
        prop_assert_eq!(line.total, line.amount + line.tax());
    }

    /// Same-state lines carry no IGST; other-state lines carry no CGST/SGST.
    #[test]
    fn split_is_exclusive(q in arb_quantity(), r in arb_rate(), j in arb_jurisdiction()) {
        let line = compute_item(q, r, j);
        match j {
            Jurisdiction::SameState => {
                prop_assert!(line.igst.is_zero());
                prop_assert_eq!(line.cgst, line.sgst);
            }
            Jurisdiction::OtherState => {
                prop_assert!(line.cgst.is_zero());
                prop_assert!(line.sgst.is_zero());
            }
        }
    }

    /// grand total = subtotal + the three tax totals = sum of line totals.
    #[test]
    fn totals_add_up(gstin in arb_buyer_gstin(), lines in arb_lines()) {
        let inv = build(gstin, &lines);
        let t = &inv.totals;
        prop_assert_eq!(t.grand_total, t.subtotal + t.cgst_total + t.sgst_total + t.igst_total);
        let line_sum: Decimal = inv.items.iter().map(|i| i.tax.total).sum();
        prop_assert_eq!(t.grand_total, line_sum);
        prop_assert_eq!(&t.amount_in_words, &amount_in_words(t.grand_total));
    }

    /// Every line of an invoice shares the jurisdiction of its buyer.
    #[test]
    fn one_jurisdiction_per_invoice(gstin in arb_buyer_gstin(), lines in arb_lines()) {
        let inv = build(gstin, &lines);
        let expected = classify(gstin.unwrap_or(""));
        prop_assert_eq!(inv.jurisdiction(), expected);
        for item in &inv.items {
            prop_assert_eq!(item.tax, compute_item(item.quantity, item.rate, expected));
        }
    }

    /// Recalculating twice changes nothing, and the result is always consistent.
    #[test]
    fn recalculate_is_idempotent(gstin in arb_buyer_gstin(), lines in arb_lines()) {
        let mut inv = build(gstin, &lines);
        let first = inv.clone();
        inv.recalculate();
        prop_assert_eq!(&inv, &first);
        prop_assert!(validate_arithmetic(&inv).is_empty());
    }

    /// Changing the buyer's GSTIN re-derives every line.
    #[test]
    fn buyer_change_matches_fresh_build(from in arb_buyer_gstin(), to in arb_buyer_gstin(), lines in arb_lines()) {
        let mut edited = build(from, &lines);
        edited.set_buyer_gstin(to.unwrap_or(""));
        let fresh = build(to, &lines);
        prop_assert_eq!(&edited.items, &fresh.items);
        prop_assert_eq!(&edited.totals, &fresh.totals);
    }

    /// Words always end with "Rupees Only", exactly once.
    #[test]
    fn words_suffix(n in any::<u64>()) {
        let words = to_words(n);
        prop_assert!(words.ends_with(" Rupees Only") || words == "Zero Rupees Only");
        prop_assert_eq!(words.matches("Rupees Only").count(), 1);
        prop_assert!(!words.contains("  "));
    }

    /// Numbers below a thousand never mention a group word.
    #[test]
    fn small_numbers_have_no_groups(n in 1u64..1000) {
        let words = to_words(n);
        prop_assert!(!words.contains("Thousand"));
        prop_assert!(!words.contains("Lakh"));
        prop_assert!(!words.contains("Crore"));
    }

    /// A crore or more always names the crore group.
    #[test]
    fn crore_amounts_name_the_group(n in 10_000_000u64..u64::MAX) {
        prop_assert!(to_words(n).contains("Crore"));
    }

    /// Floor semantics: the paise never change the words.
    #[test]
    fn paise_are_dropped(rupees in 0u64..1_000_000_000, paise in 0i64..100) {
        let amount = Decimal::from(rupees) + Decimal::new(paise, 2);
        prop_assert_eq!(amount_in_words(amount), to_words(rupees));
    }

    /// Valid GSTINs survive a check-character recomputation.
    #[test]
    fn check_char_detects_single_substitution(pos in 2usize..12, replacement in "[0-9A-Z]") {
        let valid = "27AAPFU0939F1ZV";
        let mut chars: Vec<char> = valid.chars().collect();
        let new_char = replacement.chars().next().unwrap();
        prop_assume!(chars[pos] != new_char);
        chars[pos] = new_char;
        let altered: String = chars.into_iter().collect();
        prop_assert!(validate_gstin(&altered).is_err());
    }

    /// Anywhere inside the accepted range a line computes and reads in
    /// words without overflowing.
    #[test]
    fn accepted_range_never_overflows(
        milli in 0i64..=1_000_000_000_000_000,
        paise in 0i64..=100_000_000_000_000,
        j in arb_jurisdiction(),
    ) {
        let quantity = Decimal::new(milli, 3);
        let rate = Decimal::new(paise, 2);
        let line = compute_item(quantity, rate, j);
        prop_assert!(line.amount <= MAX_QUANTITY * MAX_RATE);
        prop_assert!(line.total >= line.amount);
        prop_assert!(amount_in_words(line.total).ends_with("Rupees Only"));
    }
}

// ── Edge Case Tests ─────────────────────────────────────────────────────────

#[test]
fn words_at_group_boundaries() {
    let cases = [
        (1, "One Rupees Only"),
        (10, "Ten Rupees Only"),
        (19, "Nineteen Rupees Only"),
        (20, "Twenty Rupees Only"),
        (100, "One Hundred Rupees Only"),
        (101, "One Hundred and One Rupees Only"),
        (999, "Nine Hundred and Ninety Nine Rupees Only"),
        (1_000, "One Thousand Rupees Only"),
        (99_999, "Ninety Nine Thousand Nine Hundred and Ninety Nine Rupees Only"),
        (1_00_000, "One Lakh Rupees Only"),
        (1_00_001, "One Lakh One Rupees Only"),
        (15_00_000, "Fifteen Lakh Rupees Only"),
        (12_34_567, "Twelve Lakh Thirty Four Thousand Five Hundred and Sixty Seven Rupees Only"),
        (1_00_00_000, "One Crore Rupees Only"),
        (25_00_50_000, "Twenty Five Crore Fifty Thousand Rupees Only"),
        (100_00_00_000, "One Hundred Crore Rupees Only"),
        (1000_00_00_000, "One Thousand Crore Rupees Only"),
    ];
    for (n, expected) in cases {
        assert_eq!(to_words(n), expected, "{n}");
    }
}

#[test]
fn negative_amount_words_as_zero() {
    assert_eq!(amount_in_words(dec!(-12.5)), "Zero Rupees Only");
    assert_eq!(amount_in_words(dec!(0.99)), "Zero Rupees Only");
}

#[test]
fn million_unit_line_stays_exact() {
    let line = compute_item(dec!(1000000), dec!(99999.99), Jurisdiction::SameState);
    assert_eq!(line.amount, dec!(99999990000));
    assert_eq!(line.total, dec!(117999988200));
}

#[test]
fn largest_accepted_line_is_exact_and_the_next_step_is_refused() {
    let e22 = Decimal::from_i128_with_scale(10_i128.pow(22), 0);
    let line = compute_item(MAX_QUANTITY, MAX_RATE, Jurisdiction::OtherState);
    assert_eq!(line.amount, e22 * dec!(100));
    assert_eq!(line.igst, e22 * dec!(18));
    assert_eq!(line.total, e22 * dec!(118));

    let mut inv = InvoiceBuilder::from_profile(
        &SellerProfile::default(),
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
    )
    .buyer(PartyBuilder::new("Shree Traders", "Surat").gstin("27AAPFU0939F1ZV").build())
    .add_line(LineItemBuilder::new("Crane", MAX_QUANTITY, MAX_RATE).build())
    .build_unchecked()
    .unwrap();
    assert_eq!(inv.totals.grand_total, e22 * dec!(118));

    let err = inv.set_item_quantity(0, MAX_QUANTITY + dec!(0.001)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "value out of range: quantity 1000000000000.001 exceeds 1000000000000"
    );
    assert!(inv.set_item_rate(0, MAX_RATE + dec!(0.01)).is_err());
    assert_eq!(inv.items[0].quantity, MAX_QUANTITY);
    assert_eq!(inv.totals.grand_total, e22 * dec!(118));

    let refused = InvoiceBuilder::from_profile(
        &SellerProfile::default(),
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
    )
    .buyer(PartyBuilder::new("Shree Traders", "Surat").build())
    .add_line(LineItemBuilder::new("Crane", MAX_QUANTITY, MAX_RATE + dec!(1)).build())
    .build_unchecked();
    assert!(matches!(refused, Err(GstError::OutOfRange(_))));
}
