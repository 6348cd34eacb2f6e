use chrono::NaiveDate;
use gstbill::core::*;
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let profile = SellerProfile::default();
    let mut numbers = InvoiceNumberSequence::after_count(DEFAULT_PREFIX, 2024, 17);

    let buyer = PartyBuilder::new("Shree Traders", "45, Ring Road, Surat, Gujarat - 395002")
        .gstin("24ABCDE1234F1Z6")
        .phone("9825012345")
        .build();

    let mut invoice = InvoiceBuilder::from_profile(&profile, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
        .buyer(buyer)
        .add_line(
            LineItemBuilder::new("Steel Bolt M8 x 40", dec!(200), dec!(3.75))
                .hsn_code("7318")
                .unit(Unit::Pcs)
                .build(),
        )
        .add_line(
            LineItemBuilder::new("MS Flat 25x5", dec!(42.5), dec!(68))
                .hsn_code("7211")
                .unit(Unit::Kg)
                .build(),
        )
        .build()
        .expect("valid invoice");

    let number = invoice.assign_number(&mut numbers).to_string();
    println!("Invoice {number} ({:?})", invoice.jurisdiction());
    println!("  Subtotal:    {}", invoice.totals.subtotal);
    println!("  CGST:        {}", invoice.totals.cgst_total);
    println!("  SGST:        {}", invoice.totals.sgst_total);
    println!("  IGST:        {}", invoice.totals.igst_total);
    println!("  Grand total: {}", invoice.totals.grand_total);
    println!("  In words:    {}", invoice.totals.amount_in_words);

    println!("\n{}", layout(&invoice).to_text());
}
