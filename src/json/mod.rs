//! Stored-document JSON.
//!
//! Invoices serialize to the flat camelCase document an invoice store keeps:
//! line amounts sit beside each line's inputs and the totals sit at the top
//! level (`invoiceNumber`, `cgstTotal`, `amountInWords`, ...). Amounts are
//! written as strings so no precision is lost.

use crate::core::{GstError, Invoice, check_line};

/// Serialize an invoice to pretty-printed JSON.
pub fn to_json(invoice: &Invoice) -> Result<String, GstError> {
    serde_json::to_string_pretty(invoice)
        .map_err(|e| GstError::Serialization(format!("failed to serialize invoice: {e}")))
}

/// Parse a stored invoice document.
///
/// Stored amounts are kept as they are; call
/// [`Invoice::recalculate`] to re-derive them, or
/// [`validate_arithmetic`](crate::core::validate_arithmetic) to check them.
/// A line whose quantity or rate exceeds the supported range is refused
/// with [`GstError::OutOfRange`].
pub fn from_json(json: &str) -> Result<Invoice, GstError> {
    let invoice: Invoice = serde_json::from_str(json)
        .map_err(|e| GstError::Serialization(format!("failed to parse invoice: {e}")))?;
    for item in &invoice.items {
        check_line(item)?;
    }

    tracing::debug!(
        invoice = invoice.invoice_number.as_deref().unwrap_or("<unnumbered>"),
        items = invoice.items.len(),
        "invoice document loaded"
    );
    Ok(invoice)
}
