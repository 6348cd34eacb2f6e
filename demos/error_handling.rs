use chrono::NaiveDate;
use gstbill::core::*;
use rust_decimal_macros::dec;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn main() {
    // ── 1. Builder error: missing required parts ──────────────────────
    println!("=== Builder Error ===");
    let result = InvoiceBuilder::new(date())
        .seller(SellerProfile::default().party())
        .add_line(LineItemBuilder::new("Steel Bolt", dec!(2), dec!(500)).build())
        .build();
    match result {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  Build failed: {e}"),
    }

    // ── 2. Validation errors: all of them, not just the first ─────────
    println!("\n=== Validation Errors ===");
    let invoice = InvoiceBuilder::from_profile(&SellerProfile::default(), date())
        .number("INV-2024-000000001")
        .buyer(
            PartyBuilder::new("Shree Traders", "")
                .gstin("24ABCDE1234F1Z5")
                .build(),
        )
        .add_line(LineItemBuilder::new("", dec!(0), dec!(500)).hsn_code("73-18").build())
        .build_unchecked()
        .unwrap();
    let errors = validate_invoice(&invoice);
    println!("  Found {} validation errors:", errors.len());
    for e in &errors {
        println!("  - {e}");
    }

    // ── 3. GSTIN checks ───────────────────────────────────────────────
    println!("\n=== GSTIN ===");
    for input in ["24AELPV7892J1ZK", "24ABCDE1234F1Z5", "24aelpv7892j1zk", "99ZZZZZ"] {
        match validate_gstin(input) {
            Ok(parts) => println!(
                "  {input}: ok, {} ({})",
                state_name(parts.state_code).unwrap_or("unknown state"),
                parts.pan
            ),
            Err(e) => println!("  {e}"),
        }
    }
    let fixed = normalize_gstin(" 24aelpv7892j1zk ");
    println!("  normalized: {fixed} -> valid: {}", validate_gstin(&fixed).is_ok());

    // ── 4. Tampered stored totals ─────────────────────────────────────
    println!("\n=== Arithmetic Check ===");
    let mut stored = InvoiceBuilder::from_profile(&SellerProfile::default(), date())
        .buyer(PartyBuilder::new("Om Steel", "Rajkot").gstin("24ABCDE1234F1Z6").build())
        .add_line(LineItemBuilder::new("Steel Bolt", dec!(2), dec!(500)).build())
        .build()
        .unwrap();
    stored.totals.grand_total = dec!(1100);
    for e in validate_arithmetic(&stored) {
        println!("  - {e}");
    }
    stored.recalculate();
    println!("  after recalculate: {} issue(s)", validate_arithmetic(&stored).len());

    // ── 5. Numbering ──────────────────────────────────────────────────
    println!("\n=== Numbering ===");
    let mut seq = InvoiceNumberSequence::new(DEFAULT_PREFIX, 2024);
    if let Err(e) = seq.advance_year(2023) {
        println!("  {e}");
    }
}
