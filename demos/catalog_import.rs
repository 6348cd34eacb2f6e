use gstbill::core::*;
use gstbill::sheet;
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), GstError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    println!("Product template:\n{}", sheet::product_template());

    let existing = vec![Product::new("Steel Bolt M8 x 40", dec!(3.75)).hsn_code("7318")];
    let upload = "Products,HSN,Price\n\
                  Steel Bolt M8 x 40,7318,3.75\n\
                  Hex Nut M8,7318,1.20\n\
                  \"Washer, Spring M8\",7318,0.80\n\
                  Cutting Oil,2710,\n";

    let report = sheet::import_products(upload, &existing)?;
    println!("{}", report.message("products"));
    for error in &report.errors {
        println!("  {error}");
    }

    let mut catalog = existing;
    catalog.extend(report.imported);
    println!("\nCatalog export:\n{}", sheet::export_products(&catalog));

    let customers = sheet::import_customers(&sheet::customer_template(), &[])?;
    println!("{}", customers.message("customers"));
    println!("\nCustomer export:\n{}", sheet::export_customers(&customers.imported));
    Ok(())
}
