use rust_decimal::Decimal;

use super::error::ValidationError;
use super::gstin::validate_gstin;
use super::tax::{MAX_QUANTITY, MAX_RATE, aggregate, compute_item};
use super::types::*;

/// Maximum length of an invoice serial number (CGST Rule 46(b)).
pub const MAX_INVOICE_NUMBER_LEN: usize = 16;

/// Validate an invoice against the tax-invoice particulars of CGST Rule 46.
/// Returns all validation errors found (not just the first).
pub fn validate_invoice(invoice: &Invoice) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    // Rule 46(b): consecutive serial number, at most 16 characters.
    // A missing number is allowed; it is assigned from a sequence on save.
    if let Some(number) = &invoice.invoice_number {
        if number.trim().is_empty() {
            errors.push(ValidationError::with_rule(
                "invoiceNumber",
                "invoice number must not be blank when provided",
                "Rule 46(b)",
            ));
        } else if number.chars().count() > MAX_INVOICE_NUMBER_LEN {
            errors.push(ValidationError::with_rule(
                "invoiceNumber",
                format!(
                    "invoice number '{number}' exceeds {MAX_INVOICE_NUMBER_LEN} characters"
                ),
                "Rule 46(b)",
            ));
        }
    }

    // Rule 46(a): name, address and GSTIN of the supplier
    validate_party(&invoice.seller, "seller", &mut errors);
    match invoice.seller.gstin.as_deref().map(str::trim) {
        None | Some("") => errors.push(ValidationError::with_rule(
            "seller.gstin",
            "seller GSTIN is required",
            "Rule 46(a)",
        )),
        Some(gstin) => validate_gstin_field(gstin, "seller.gstin", &mut errors),
    }

    // Rule 46(d)/(e): name and address of the recipient, GSTIN if registered
    validate_party(&invoice.buyer, "buyer", &mut errors);
    if let Some(gstin) = invoice.buyer.gstin.as_deref().map(str::trim) {
        if !gstin.is_empty() {
            validate_gstin_field(gstin, "buyer.gstin", &mut errors);
        }
    }

    if invoice.items.is_empty() {
        errors.push(ValidationError::new(
            "items",
            "invoice must have at least one line item",
        ));
    }

    for (i, item) in invoice.items.iter().enumerate() {
        validate_item(item, i, &mut errors);
    }

    errors.extend(validate_arithmetic(invoice));

    errors
}

/// Validate that the stored derived amounts match a fresh calculation.
///
/// Catches documents whose totals were edited by hand, or whose tax split no
/// longer matches the buyer's GSTIN.
pub fn validate_arithmetic(invoice: &Invoice) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let jurisdiction = invoice.jurisdiction();
    let expected_lines: Vec<_> = invoice
        .items
        .iter()
        .map(|item| compute_item(item.quantity, item.rate, jurisdiction))
        .collect();

    for (i, (item, expected)) in invoice.items.iter().zip(&expected_lines).enumerate() {
        let checks = [
            ("amount", item.tax.amount, expected.amount),
            ("cgst", item.tax.cgst, expected.cgst),
            ("sgst", item.tax.sgst, expected.sgst),
            ("igst", item.tax.igst, expected.igst),
            ("total", item.tax.total, expected.total),
        ];
        for (field, actual, expected) in checks {
            if actual != expected {
                errors.push(ValidationError::with_rule(
                    format!("items[{i}].{field}"),
                    format!("{field} {actual} does not match calculated {expected}"),
                    "Rule 46(k)",
                ));
            }
        }
    }

    let expected = aggregate(&expected_lines);
    let totals = &invoice.totals;
    let checks: [(&str, Decimal, Decimal); 5] = [
        ("subtotal", totals.subtotal, expected.subtotal),
        ("cgstTotal", totals.cgst_total, expected.cgst_total),
        ("sgstTotal", totals.sgst_total, expected.sgst_total),
        ("igstTotal", totals.igst_total, expected.igst_total),
        ("grandTotal", totals.grand_total, expected.grand_total),
    ];
    for (field, actual, expected) in checks {
        if actual != expected {
            errors.push(ValidationError::new(
                field,
                format!("{field} {actual} does not match sum of lines {expected}"),
            ));
        }
    }

    let words = super::words::amount_in_words(totals.grand_total);
    if totals.amount_in_words != words {
        errors.push(ValidationError::new(
            "amountInWords",
            format!(
                "amount in words '{}' does not match grand total ('{words}')",
                totals.amount_in_words
            ),
        ));
    }

    errors
}

fn validate_party(party: &Party, prefix: &str, errors: &mut Vec<ValidationError>) {
    let rule = if prefix == "seller" {
        "Rule 46(a)"
    } else {
        "Rule 46(e)"
    };

    if party.name.trim().is_empty() {
        errors.push(ValidationError::with_rule(
            format!("{prefix}.name"),
            "name must not be empty",
            rule,
        ));
    }
    if party.address.trim().is_empty() {
        errors.push(ValidationError::with_rule(
            format!("{prefix}.address"),
            "address must not be empty",
            rule,
        ));
    }
}

fn validate_gstin_field(gstin: &str, field: &str, errors: &mut Vec<ValidationError>) {
    if let Err(e) = validate_gstin(gstin) {
        errors.push(ValidationError::new(field, e.to_string()));
    }
}

fn validate_item(item: &LineItem, index: usize, errors: &mut Vec<ValidationError>) {
    let prefix = format!("items[{index}]");

    if item.description.trim().is_empty() {
        errors.push(ValidationError::with_rule(
            format!("{prefix}.description"),
            "description of goods or services must not be empty",
            "Rule 46(h)",
        ));
    }

    if item.quantity <= Decimal::ZERO {
        errors.push(ValidationError::with_rule(
            format!("{prefix}.quantity"),
            "quantity must be greater than zero",
            "Rule 46(i)",
        ));
    } else if item.quantity > MAX_QUANTITY {
        errors.push(ValidationError::new(
            format!("{prefix}.quantity"),
            format!("quantity must not exceed {MAX_QUANTITY}"),
        ));
    }

    if item.rate.is_sign_negative() {
        errors.push(ValidationError::with_rule(
            format!("{prefix}.rate"),
            "rate must not be negative",
            "Rule 46(j)",
        ));
    } else if item.rate > MAX_RATE {
        errors.push(ValidationError::new(
            format!("{prefix}.rate"),
            format!("rate must not exceed {MAX_RATE}"),
        ));
    }

    if let Some(hsn) = item.hsn_code.as_deref().map(str::trim) {
        let well_formed =
            (2..=8).contains(&hsn.len()) && hsn.chars().all(|c| c.is_ascii_digit());
        if !hsn.is_empty() && !well_formed {
            errors.push(ValidationError::with_rule(
                format!("{prefix}.hsnCode"),
                format!("HSN code '{hsn}' must be 2 to 8 digits"),
                "Rule 46(g)",
            ));
        }
    }
}
