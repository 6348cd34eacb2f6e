use super::writer::Writer;
use super::import::{CUSTOMER_COLUMNS, PRODUCT_COLUMNS};
use crate::core::{Customer, Invoice, Product};

/// Columns of the invoice register.
pub const REGISTER_COLUMNS: [&str; 13] = [
    "Invoice No",
    "Date",
    "Buyer",
    "Buyer GSTIN",
    "Place of Supply",
    "Items",
    "Subtotal",
    "CGST",
    "SGST",
    "IGST",
    "Grand Total",
    "Amount in Words",
    "Payment Method",
];

/// Blank product sheet with two sample rows.
pub fn product_template() -> String {
    let mut w = Writer::new();
    w.row(&PRODUCT_COLUMNS);
    w.row(&["Sample Product", "998314", "100"]);
    w.row(&["Another Product", "998315", "50"]);
    w.finish()
}

/// Blank customer sheet with two sample rows.
pub fn customer_template() -> String {
    let mut w = Writer::new();
    w.row(&CUSTOMER_COLUMNS);
    w.row(&[
        "ABC Company Ltd",
        "123 Business Street, City, State - 123456",
        "9876543210",
        "24ABCDE1234F1Z6",
    ]);
    w.row(&[
        "XYZ Corporation",
        "456 Corporate Avenue, City, State - 654321",
        "1234567890",
        "27AAPFU0939F1ZV",
    ]);
    w.finish()
}

/// Export products in the import layout, so the file can be edited and
/// imported again.
pub fn export_products(products: &[Product]) -> String {
    let mut w = Writer::new();
    w.row(&PRODUCT_COLUMNS);
    for product in products {
        w.text(&product.name)
            .text(product.hsn_code.as_deref().unwrap_or(""))
            .decimal(product.rate)
            .end_row();
    }
    w.finish()
}

/// Export customers in the import layout.
pub fn export_customers(customers: &[Customer]) -> String {
    let mut w = Writer::new();
    w.row(&CUSTOMER_COLUMNS);
    for customer in customers {
        w.row(&[
            customer.name.as_str(),
            customer.address.as_str(),
            customer.phone.as_deref().unwrap_or(""),
            customer.gstin.as_deref().unwrap_or(""),
        ]);
    }
    w.finish()
}

/// Invoice register: one row per invoice with its stored totals.
///
/// Amounts are written at full precision; dates as dd/mm/yyyy.
pub fn export_invoices(invoices: &[Invoice]) -> String {
    let mut w = Writer::new();
    w.row(&REGISTER_COLUMNS);
    for inv in invoices {
        let place = inv
            .buyer
            .gstin
            .as_deref()
            .and_then(|g| g.trim().get(..2))
            .unwrap_or("");
        let t = &inv.totals;
        w.text(inv.invoice_number.as_deref().unwrap_or(""))
            .text(&inv.invoice_date.format("%d/%m/%Y").to_string())
            .text(&inv.buyer.name)
            .text(inv.buyer.gstin.as_deref().unwrap_or(""))
            .text(place)
            .decimal(inv.items.len().into())
            .decimal(t.subtotal)
            .decimal(t.cgst_total)
            .decimal(t.sgst_total)
            .decimal(t.igst_total)
            .decimal(t.grand_total)
            .text(&t.amount_in_words)
            .text(inv.payment_method.code())
            .end_row();
    }

    tracing::debug!(invoices = invoices.len(), "invoice register exported");
    w.finish()
}
