use chrono::NaiveDate;
use gstbill::core::*;
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;

fn print_totals(label: &str, invoice: &Invoice) {
    let t = &invoice.totals;
    println!(
        "{label:<28} {:?}  subtotal {}  cgst {}  sgst {}  igst {}  total {}",
        invoice.jurisdiction(),
        t.subtotal,
        t.cgst_total,
        t.sgst_total,
        t.igst_total,
        t.grand_total
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "gstbill=debug".into()))
        .init();

    let catalog = [
        Product::new("Steel Bolt M8 x 40", dec!(3.75)).hsn_code("7318").unit(Unit::Pcs),
        Product::new("Welding Rod 3.15mm", dec!(450)).hsn_code("8311").unit(Unit::Box),
    ];
    let customer = Customer::new("Om Steel", "GIDC, Rajkot").gstin("24ABCDE1234F1Z6");

    // Start from an empty draft, the way an invoice form does.
    let mut invoice = InvoiceBuilder::from_profile(
        &SellerProfile::default(),
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
    )
    .customer(&customer)
    .build_unchecked()
    .expect("seller and buyer are set");
    print_totals("empty draft", &invoice);

    invoice.add_blank_item();
    invoice.select_product(0, &catalog[0]).expect("line 0 exists");
    invoice.set_item_quantity(0, parse_or_zero("200")).expect("line 0 exists");
    print_totals("bolts added", &invoice);

    invoice.add_blank_item();
    invoice.select_product(1, &catalog[1]).expect("line 1 exists");
    invoice.set_item_quantity(1, parse_or_zero("three")).expect("line 1 exists");
    print_totals("bad quantity typed", &invoice);
    invoice.set_item_quantity(1, parse_or_zero("3")).expect("line 1 exists");
    print_totals("quantity fixed", &invoice);

    // A buyer registered in Maharashtra flips every line to IGST.
    invoice.set_buyer_gstin("27AAPFU0939F1ZV");
    print_totals("buyer moved to Maharashtra", &invoice);

    invoice.set_buyer_gstin("");
    print_totals("unregistered buyer", &invoice);

    let removed = invoice.remove_item(0).expect("line 0 exists");
    println!("removed '{}'", removed.description);
    print_totals("after removal", &invoice);

    match invoice.set_item_rate(5, dec!(10)) {
        Ok(()) => println!("unexpected success"),
        Err(e) => println!("edit rejected: {e}"),
    }

    println!("\nIssues before saving:");
    for error in validate_invoice(&invoice) {
        println!("  - {error}");
    }
}
