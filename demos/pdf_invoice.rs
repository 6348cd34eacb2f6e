use chrono::NaiveDate;
use gstbill::core::*;
use gstbill::pdf;
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "gstbill=debug".into()))
        .init();

    let invoice = InvoiceBuilder::from_profile(
        &SellerProfile::default(),
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
    )
    .number("INV-2024-0042")
    .buyer(
        PartyBuilder::new("Patil Fabricators", "Plot 7, MIDC Bhosari, Pune, Maharashtra - 411026")
            .gstin("27AAPFU0939F1ZV")
            .email("accounts@patilfab.in")
            .build(),
    )
    .add_line(
        LineItemBuilder::new("Welding Rod 3.15mm", dec!(3), dec!(450))
            .hsn_code("8311")
            .unit(Unit::Box)
            .build(),
    )
    .add_line(
        LineItemBuilder::new("Grinding Disc 4 inch", dec!(25), dec!(33.33))
            .hsn_code("6804")
            .build(),
    )
    .payment_method(PaymentMethod::Upi)
    .build()?;

    let bytes = pdf::to_pdf(&invoice)?;
    let path = std::env::temp_dir().join(pdf::pdf_filename(&invoice));
    std::fs::write(&path, &bytes)?;
    println!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}
