use std::collections::HashSet;
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord};
use rust_decimal::Decimal;

use crate::core::{Customer, GstError, MAX_RATE, Product, normalize_gstin};

/// Column headings of the product sheet.
pub const PRODUCT_COLUMNS: [&str; 3] = ["Products", "HSN", "Price"];

/// Column headings of the customer sheet.
pub const CUSTOMER_COLUMNS: [&str; 4] = [
    "Business Name",
    "Business Address",
    "Contact Number",
    "GST No",
];

/// Outcome of a sheet import.
///
/// Bad rows do not abort the import; each one is reported as
/// `"Row N: ..."` where N is the line the row starts on (the header is
/// row 1, blank lines still count).
#[derive(Debug, Clone, PartialEq)]
pub struct ImportReport<T> {
    pub imported: Vec<T>,
    pub errors: Vec<String>,
}

impl<T> ImportReport<T> {
    fn new() -> Self {
        Self {
            imported: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Summary line, e.g. "Successfully imported 3 products".
    pub fn message(&self, noun: &str) -> String {
        format!("Successfully imported {} {noun}", self.imported.len())
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Import products from a `Products, HSN, Price` sheet.
///
/// Rows without a name are skipped. A price that is missing, unparseable,
/// not positive or above [`MAX_RATE`] rejects the row, as does a name
/// already present in `existing` or earlier in the same sheet.
pub fn import_products(input: &str, existing: &[Product]) -> Result<ImportReport<Product>, GstError> {
    let rows = data_rows(input)?;
    let mut names: HashSet<String> = existing.iter().map(|p| p.name.clone()).collect();
    let mut report = ImportReport::new();

    for (row_number, row) in rows {
        let name = cell(&row, 0);
        if name.is_empty() {
            continue;
        }

        let rate = Decimal::from_str(cell(&row, 2)).unwrap_or(Decimal::ZERO);
        if rate <= Decimal::ZERO || rate > MAX_RATE {
            reject(&mut report.errors, row_number, "Missing product name or invalid price");
            continue;
        }
        if names.contains(name) {
            reject(
                &mut report.errors,
                row_number,
                &format!("Product \"{name}\" already exists"),
            );
            continue;
        }

        let mut product = Product::new(name, rate);
        let hsn = cell(&row, 1);
        if !hsn.is_empty() {
            product = product.hsn_code(hsn);
        }
        names.insert(product.name.clone());
        report.imported.push(product);
    }

    tracing::info!(
        imported = report.imported.len(),
        rejected = report.errors.len(),
        "product sheet imported"
    );
    Ok(report)
}

/// Import customers from a `Business Name, Business Address, Contact Number,
/// GST No` sheet.
///
/// Rows without a name are skipped. A customer whose name, or non-empty
/// GSTIN, matches one in `existing` or earlier in the sheet is rejected.
/// GSTINs are upper-cased but not checked, so incomplete registrations can
/// still be entered.
pub fn import_customers(
    input: &str,
    existing: &[Customer],
) -> Result<ImportReport<Customer>, GstError> {
    let rows = data_rows(input)?;
    let mut names: HashSet<String> = existing.iter().map(|c| c.name.clone()).collect();
    let mut gstins: HashSet<String> = existing
        .iter()
        .filter_map(|c| c.gstin.as_deref())
        .map(normalize_gstin)
        .filter(|g| !g.is_empty())
        .collect();
    let mut report = ImportReport::new();

    for (row_number, row) in rows {
        let name = cell(&row, 0);
        if name.is_empty() {
            continue;
        }
        let gstin = normalize_gstin(cell(&row, 3));

        if names.contains(name) || (!gstin.is_empty() && gstins.contains(&gstin)) {
            reject(
                &mut report.errors,
                row_number,
                &format!("Customer \"{name}\" already exists"),
            );
            continue;
        }

        let mut customer = Customer::new(name, cell(&row, 1));
        let phone = cell(&row, 2);
        if !phone.is_empty() {
            customer = customer.phone(phone);
        }
        if !gstin.is_empty() {
            gstins.insert(gstin.clone());
            customer = customer.gstin(gstin);
        }
        names.insert(customer.name.clone());
        report.imported.push(customer);
    }

    tracing::info!(
        imported = report.imported.len(),
        rejected = report.errors.len(),
        "customer sheet imported"
    );
    Ok(report)
}

/// Records after the header, paired with the line each one starts on.
fn data_rows(input: &str) -> Result<Vec<(u64, StringRecord)>, GstError> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input.as_bytes());

    if reader.headers().map_err(unreadable)?.is_empty() {
        return Err(GstError::Import("sheet is empty".into()));
    }

    reader
        .records()
        .map(|result| {
            let record = result.map_err(unreadable)?;
            Ok((start_line(input, &record), record))
        })
        .collect()
}

/// The reader positions a record where the previous one ended, before any
/// line breaks or blank lines in between.
fn start_line(input: &str, record: &StringRecord) -> u64 {
    let offset = record
        .position()
        .and_then(|p| usize::try_from(p.byte()).ok())
        .unwrap_or(0)
        .min(input.len());
    let gap = input.as_bytes()[offset..]
        .iter()
        .take_while(|b| matches!(**b, b'\r' | b'\n'))
        .count();
    let breaks = input.as_bytes()[..offset + gap]
        .iter()
        .filter(|&&b| b == b'\n')
        .count();
    breaks as u64 + 1
}

fn unreadable(e: csv::Error) -> GstError {
    GstError::Import(format!("sheet could not be read: {e}"))
}

fn cell(record: &StringRecord, index: usize) -> &str {
    record.get(index).map(str::trim).unwrap_or("")
}

fn reject(errors: &mut Vec<String>, row_number: u64, message: &str) {
    tracing::warn!(row = row_number, "{message}");
    errors.push(format!("Row {row_number}: {message}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn products_imported_with_defaults() {
        let sheet = "Products,HSN,Price\nSteel Bolt,7318,12.50\nService Call,,500\n";
        let report = import_products(sheet, &[]).unwrap();
        assert!(report.is_clean());
        assert_eq!(report.imported.len(), 2);
        assert_eq!(report.imported[0].hsn_code.as_deref(), Some("7318"));
        assert_eq!(report.imported[0].rate, dec!(12.50));
        assert_eq!(report.imported[1].hsn_code, None);
        assert_eq!(report.message("products"), "Successfully imported 2 products");
    }

    #[test]
    fn product_rows_rejected_with_sheet_row_numbers() {
        let existing = [Product::new("Nut", dec!(2))];
        let sheet = "Products,HSN,Price\nNut,7318,3\n,,\nWasher,7318,abc\nWasher,7318,0\nBolt,7318,5\nBolt,7318,6\nPress,8462,1000000000000.01\n";
        let report = import_products(sheet, &existing).unwrap();
        assert_eq!(report.imported.len(), 1);
        assert_eq!(
            report.errors,
            [
                "Row 2: Product \"Nut\" already exists",
                "Row 4: Missing product name or invalid price",
                "Row 5: Missing product name or invalid price",
                "Row 7: Product \"Bolt\" already exists",
                "Row 8: Missing product name or invalid price",
            ]
        );
    }

    #[test]
    fn customers_deduplicated_by_name_or_gstin() {
        let existing = [Customer::new("Shree Traders", "Surat").gstin("24ABCDE1234F1Z6")];
        let sheet = "Business Name,Business Address,Contact Number,GST No\n\
                     Shree Traders,Surat,,\n\
                     Om Steel,Rajkot,,24abcde1234f1z6\n\
                     \"Patel & Sons\",\"12, Station Road, Vadodara\",9876543210,27aapfu0939f1zv\n\
                     Patel & Sons,Anand,,\n";
        let report = import_customers(sheet, &existing).unwrap();
        assert_eq!(report.imported.len(), 1);
        let patel = &report.imported[0];
        assert_eq!(patel.address, "12, Station Road, Vadodara");
        assert_eq!(patel.phone.as_deref(), Some("9876543210"));
        assert_eq!(patel.gstin.as_deref(), Some("27AAPFU0939F1ZV"));
        assert_eq!(patel.email, None);
        assert_eq!(
            report.errors,
            [
                "Row 2: Customer \"Shree Traders\" already exists",
                "Row 3: Customer \"Om Steel\" already exists",
                "Row 5: Customer \"Patel & Sons\" already exists",
            ]
        );
    }

    #[test]
    fn empty_sheet_is_an_error() {
        assert!(matches!(import_products("", &[]), Err(GstError::Import(_))));
        assert!(matches!(import_customers("\r\n\r\n", &[]), Err(GstError::Import(_))));
    }

    #[test]
    fn short_rows_and_multiline_cells() {
        let sheet = "Business Name,Business Address,Contact Number,GST No\n\
                     Om Steel\n\
                     Patel & Sons,\"Plot 7,\nGIDC Makarpura\",,\n\
                     Om Steel,Rajkot\n";
        let report = import_customers(sheet, &[]).unwrap();
        assert_eq!(report.imported.len(), 2);
        assert_eq!(report.imported[0].address, "");
        assert_eq!(report.imported[1].address, "Plot 7,\nGIDC Makarpura");
        // The quoted address spans lines 3 and 4.
        assert_eq!(report.errors, ["Row 5: Customer \"Om Steel\" already exists"]);
    }
}
