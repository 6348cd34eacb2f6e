//! Recalculation and editing operations on an invoice.
//!
//! The tax split of every line depends on the buyer's GSTIN, so any change
//! to a line or to the buyer re-derives the whole invoice: jurisdiction
//! first, then each line, then the totals.

use rust_decimal::Decimal;

use super::error::GstError;
use super::numbering::InvoiceNumberSequence;
use super::tax::{aggregate, check_line, checked_quantity, checked_rate, classify_party, compute_item};
use super::types::{Invoice, Jurisdiction, LineItem, LineTax, Party, Product};
use super::units::Unit;

impl LineItem {
    /// A line with description, quantity and rate; derived amounts are zero
    /// until the invoice is recalculated.
    pub fn new(description: impl Into<String>, quantity: Decimal, rate: Decimal) -> Self {
        Self {
            description: description.into(),
            hsn_code: None,
            quantity,
            unit: Unit::Nos,
            rate,
            tax: LineTax::default(),
        }
    }

    /// An empty line as offered by "add item": quantity 1, rate 0.
    pub fn blank() -> Self {
        Self::new("", Decimal::ONE, Decimal::ZERO)
    }

    /// A line for one unit of a catalog product.
    pub fn from_product(product: &Product) -> Self {
        Self {
            description: product.name.clone(),
            hsn_code: product.hsn_code.clone(),
            quantity: Decimal::ONE,
            unit: product.unit,
            rate: product.rate,
            tax: LineTax::default(),
        }
    }

    /// Recompute the derived amounts under `jurisdiction`.
    pub fn recompute(&mut self, jurisdiction: Jurisdiction) {
        self.tax = compute_item(self.quantity, self.rate, jurisdiction);
    }
}

impl Invoice {
    /// Tax treatment implied by the current buyer.
    pub fn jurisdiction(&self) -> Jurisdiction {
        classify_party(&self.buyer)
    }

    /// Re-derive every line and the totals from the current inputs.
    pub fn recalculate(&mut self) {
        let jurisdiction = self.jurisdiction();
        for item in &mut self.items {
            item.recompute(jurisdiction);
        }
        self.totals = aggregate(self.items.iter().map(|item| &item.tax));

        tracing::debug!(
            invoice = self.invoice_number.as_deref().unwrap_or("<unnumbered>"),
            items = self.items.len(),
            ?jurisdiction,
            grand_total = %self.totals.grand_total,
            "invoice recalculated"
        );
    }

    /// Take the next number from `sequence` unless the invoice already has one.
    ///
    /// Returns the number the invoice carries afterwards.
    pub fn assign_number(&mut self, sequence: &mut InvoiceNumberSequence) -> &str {
        let missing = self
            .invoice_number
            .as_deref()
            .is_none_or(|n| n.trim().is_empty());
        if missing {
            sequence.auto_advance(self.invoice_date);
            self.invoice_number = Some(sequence.next_number());
        }
        self.invoice_number.as_deref().unwrap_or_default()
    }

    /// Replace the buyer (e.g. after picking a customer).
    pub fn set_buyer(&mut self, buyer: Party) {
        self.buyer = buyer;
        self.recalculate();
    }

    /// Change the buyer's GSTIN; may flip every line's tax split.
    pub fn set_buyer_gstin(&mut self, gstin: &str) {
        let gstin = gstin.trim();
        self.buyer.gstin = (!gstin.is_empty()).then(|| gstin.to_string());
        self.recalculate();
    }

    /// Append a line. Fails without changing the invoice if its quantity
    /// or rate is out of range.
    pub fn add_item(&mut self, item: LineItem) -> Result<(), GstError> {
        check_line(&item)?;
        self.items.push(item);
        self.recalculate();
        Ok(())
    }

    /// Append an empty line.
    pub fn add_blank_item(&mut self) {
        self.items.push(LineItem::blank());
        self.recalculate();
    }

    /// Remove the line at `index`, returning it.
    pub fn remove_item(&mut self, index: usize) -> Result<LineItem, GstError> {
        self.check_index(index)?;
        let removed = self.items.remove(index);
        self.recalculate();
        Ok(removed)
    }

    /// Set a line's quantity. Negative values are clamped to zero; values
    /// above [`MAX_QUANTITY`](super::tax::MAX_QUANTITY) are rejected.
    pub fn set_item_quantity(&mut self, index: usize, quantity: Decimal) -> Result<(), GstError> {
        self.check_index(index)?;
        self.items[index].quantity = checked_quantity(quantity)?;
        self.recalculate();
        Ok(())
    }

    /// Set a line's rate. Negative values are clamped to zero; values above
    /// [`MAX_RATE`](super::tax::MAX_RATE) are rejected.
    pub fn set_item_rate(&mut self, index: usize, rate: Decimal) -> Result<(), GstError> {
        self.check_index(index)?;
        self.items[index].rate = checked_rate(rate)?;
        self.recalculate();
        Ok(())
    }

    /// Fill a line from a catalog product: name, HSN code, unit and rate are
    /// copied and the quantity resets to 1.
    pub fn select_product(&mut self, index: usize, product: &Product) -> Result<(), GstError> {
        self.check_index(index)?;
        let line = LineItem::from_product(product);
        check_line(&line)?;
        self.items[index] = line;
        self.recalculate();
        Ok(())
    }

    /// Undo a product selection: the line keeps its quantity, everything
    /// else is blanked.
    pub fn clear_product(&mut self, index: usize) -> Result<(), GstError> {
        let item = self.item_mut(index)?;
        *item = LineItem {
            quantity: item.quantity,
            ..LineItem::new("", Decimal::ZERO, Decimal::ZERO)
        };
        self.recalculate();
        Ok(())
    }

    fn item_mut(&mut self, index: usize) -> Result<&mut LineItem, GstError> {
        self.check_index(index)?;
        Ok(&mut self.items[index])
    }

    fn check_index(&self, index: usize) -> Result<(), GstError> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(GstError::ItemIndex {
                index,
                len: self.items.len(),
            })
        }
    }
}
