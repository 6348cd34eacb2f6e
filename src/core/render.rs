//! Printable tax-invoice layout.
//!
//! [`layout`] turns an invoice into the blocks and table rows of a printed
//! tax invoice. The PDF renderer and [`InvoiceDocument::to_text`] both draw
//! from this layout, so the two stay identical.
//!
//! Money is rounded for display only (whole rupees; IGST per line to two
//! places). The rounded figures are never written back to the invoice, so a
//! printed total can differ by a fraction of a rupee from the stored one.

use rust_decimal::{Decimal, RoundingStrategy};

use super::states::state_name;
use super::types::{Invoice, Jurisdiction, Party};

/// Printed in place of any missing party detail.
pub const NOT_AVAILABLE: &str = "N/A";

/// Document title.
pub const TITLE: &str = "TAX INVOICE";

/// Closing line at the foot of the page.
pub const FOOTER: &str = "Thank you for your business!";

/// Laid-out tax invoice, ready to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceDocument {
    /// Seller name, upper-cased.
    pub heading: String,
    pub title: &'static str,
    /// "Invoice No: ...    Date: dd/mm/yyyy".
    pub number_line: String,
    pub seller: PartyBlock,
    pub buyer: PartyBlock,
    /// State of the buyer's registration, when it can be told from the GSTIN.
    pub place_of_supply: Option<String>,
    /// Whether the item table and totals carry IGST.
    pub show_igst: bool,
    pub columns: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
    /// (label, value) pairs of the totals section.
    pub totals: Vec<(&'static str, String)>,
    pub amount_in_words: String,
    /// Notes box, one entry per line.
    pub bank_details: Vec<String>,
    /// Terms box, one entry per line.
    pub terms: Vec<String>,
    pub footer: &'static str,
}

/// Seller or buyer details box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartyBlock {
    pub heading: &'static str,
    pub name: String,
    pub address: String,
    pub gstin: String,
    pub phone: String,
    pub email: String,
}

impl PartyBlock {
    fn new(heading: &'static str, party: &Party) -> Self {
        Self {
            heading,
            name: or_na(Some(&party.name)),
            address: or_na(Some(&party.address)),
            gstin: or_na(party.gstin.as_deref()),
            phone: or_na(party.phone.as_deref()),
            email: or_na(party.email.as_deref()),
        }
    }

    /// "Label: value" lines in print order.
    pub fn lines(&self) -> [String; 5] {
        [
            format!("Name: {}", self.name),
            format!("Address: {}", self.address),
            format!("GSTIN: {}", self.gstin),
            format!("Phone: {}", self.phone),
            format!("Email: {}", self.email),
        ]
    }
}

/// Lay out an invoice for printing.
pub fn layout(invoice: &Invoice) -> InvoiceDocument {
    let show_igst = invoice.jurisdiction() == Jurisdiction::OtherState;

    let columns = if show_igst {
        vec!["Sr.", "Item Description", "HSN", "Qty", "Rate", "Amount", "IGST", "Total"]
    } else {
        vec!["Sr.", "Item Description", "HSN", "Qty", "Rate", "Amount", "Total"]
    };

    let rows = invoice
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let mut row = vec![
                (i + 1).to_string(),
                item.description.clone(),
                item.hsn_code.clone().unwrap_or_default(),
                item.quantity.normalize().to_string(),
                display_whole(item.rate),
                display_whole(item.tax.amount),
            ];
            if show_igst {
                row.push(display_two(item.tax.igst));
            }
            row.push(display_whole(item.tax.total));
            row
        })
        .collect();

    let t = &invoice.totals;
    let mut totals = vec![
        ("Subtotal", display_whole(t.subtotal)),
        ("CGST Total", display_whole(t.cgst_total)),
        ("SGST Total", display_whole(t.sgst_total)),
    ];
    if show_igst {
        totals.push(("IGST Total", display_whole(t.igst_total)));
    }
    totals.push(("Grand Total", display_whole(t.grand_total)));

    let place_of_supply = invoice
        .buyer
        .gstin
        .as_deref()
        .map(str::trim)
        .and_then(|g| g.get(..2))
        .and_then(|code| state_name(code).map(|name| format!("{name} ({code})")));

    InvoiceDocument {
        heading: invoice.seller.name.to_uppercase(),
        title: TITLE,
        number_line: format!(
            "Invoice No: {}    Date: {}",
            invoice.invoice_number.as_deref().unwrap_or(""),
            invoice.invoice_date.format("%d/%m/%Y")
        ),
        seller: PartyBlock::new("Seller Details", &invoice.seller),
        buyer: PartyBlock::new("Buyer Details", &invoice.buyer),
        place_of_supply,
        show_igst,
        columns,
        rows,
        totals,
        amount_in_words: or_na(Some(&invoice.totals.amount_in_words)),
        bank_details: text_lines(invoice.notes.as_deref()),
        terms: text_lines(invoice.terms.as_deref()),
        footer: FOOTER,
    }
}

impl InvoiceDocument {
    /// Render as fixed-width plain text for printing.
    pub fn to_text(&self) -> String {
        let mut out = Vec::new();
        out.push(self.heading.clone());
        out.push(self.title.to_string());
        out.push(self.number_line.clone());
        out.push(String::new());

        for block in [&self.seller, &self.buyer] {
            out.push(block.heading.to_string());
            out.extend(block.lines());
            out.push(String::new());
        }
        if let Some(place) = &self.place_of_supply {
            out.push(format!("Place of Supply: {place}"));
            out.push(String::new());
        }

        out.extend(self.table_lines());
        out.push(String::new());

        for (label, value) in &self.totals {
            out.push(format!("{label}: {value}"));
        }
        out.push(format!("Amount in Words: {}", self.amount_in_words));
        out.push(String::new());

        out.push("Bank Details:".to_string());
        out.extend(self.bank_details.iter().cloned());
        out.push(String::new());

        out.push("Terms & Conditions:".to_string());
        out.extend(self.terms.iter().map(|t| format!("• {t}")));
        out.push(String::new());

        out.push(self.footer.to_string());
        out.join("\n")
    }

    /// Item table as aligned text lines (header first). The first three
    /// columns are left-aligned, figures right-aligned.
    pub fn table_lines(&self) -> Vec<String> {
        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.chars().count()).collect();
        for row in &self.rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }

        let mut lines = vec![format_row(&self.columns, &widths)];
        for row in &self.rows {
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            lines.push(format_row(&cells, &widths));
        }
        lines
    }
}

fn format_row(cells: &[&str], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, &w))| {
            if i > 2 {
                format!("{cell:>w$}")
            } else {
                format!("{cell:<w$}")
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// Round to whole rupees for display (half away from zero).
pub fn display_whole(value: Decimal) -> String {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_string()
}

/// Round to paise for display.
pub fn display_two(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}

fn or_na(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn text_lines(text: Option<&str>) -> Vec<String> {
    text.map(|t| t.lines().map(|l| l.trim_end().to_string()).collect())
        .unwrap_or_default()
}
