use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::GstError;
use super::profile::SellerProfile;
use super::tax;
use super::types::*;
use super::units::Unit;
use super::validation;

/// Builder for constructing valid invoices.
///
/// ```
/// use gstbill::core::*;
/// use rust_decimal_macros::dec;
/// use chrono::NaiveDate;
///
/// let invoice = InvoiceBuilder::from_profile(
///     &SellerProfile::default(),
///     NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
/// )
/// .number("INV-2024-0001")
/// .buyer(PartyBuilder::new("Shree Traders", "Ring Road, Surat").gstin("24AELPV7892J1ZK").build())
/// .add_line(LineItemBuilder::new("Steel Bolt", dec!(2), dec!(500)).hsn_code("7318").build())
/// .build()
/// .unwrap();
///
/// assert_eq!(invoice.totals.grand_total, dec!(1180));
/// ```
pub struct InvoiceBuilder {
    number: Option<String>,
    invoice_date: NaiveDate,
    seller: Option<Party>,
    buyer: Option<Party>,
    items: Vec<LineItem>,
    notes: Option<String>,
    terms: Option<String>,
    payment_method: PaymentMethod,
}

impl InvoiceBuilder {
    pub fn new(invoice_date: NaiveDate) -> Self {
        Self {
            number: None,
            invoice_date,
            seller: None,
            buyer: None,
            items: Vec::new(),
            notes: None,
            terms: None,
            payment_method: PaymentMethod::default(),
        }
    }

    /// Start an invoice with the profile's seller block, bank details and terms.
    pub fn from_profile(profile: &SellerProfile, invoice_date: NaiveDate) -> Self {
        Self::new(invoice_date)
            .seller(profile.party())
            .notes(profile.bank_details.clone())
            .terms(profile.terms.clone())
    }

    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }

    pub fn seller(mut self, party: Party) -> Self {
        self.seller = Some(party);
        self
    }

    pub fn buyer(mut self, party: Party) -> Self {
        self.buyer = Some(party);
        self
    }

    /// Address the invoice to a catalog customer.
    pub fn customer(self, customer: &Customer) -> Self {
        self.buyer(customer.to_party())
    }

    pub fn add_line(mut self, line: LineItem) -> Self {
        self.items.push(line);
        self
    }

    /// Add one unit of a catalog product.
    pub fn add_product(self, product: &Product) -> Self {
        self.add_line(LineItem::from_product(product))
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn terms(mut self, terms: impl Into<String>) -> Self {
        self.terms = Some(terms.into());
        self
    }

    pub fn payment_method(mut self, method: PaymentMethod) -> Self {
        self.payment_method = method;
        self
    }

    /// Build the invoice, calculating totals and running validation.
    /// Returns all validation errors (not just the first).
    pub fn build(self) -> Result<Invoice, GstError> {
        if self.items.is_empty() {
            return Err(GstError::Builder(
                "at least one line item is required".into(),
            ));
        }

        // Input limits
        if self.items.len() > 10_000 {
            return Err(GstError::Builder(
                "invoice cannot have more than 10,000 line items".into(),
            ));
        }
        if self.notes.as_ref().is_some_and(|n| n.len() > 10_000)
            || self.terms.as_ref().is_some_and(|t| t.len() > 10_000)
        {
            return Err(GstError::Builder(
                "notes and terms cannot exceed 10,000 characters".into(),
            ));
        }

        let invoice = self.build_unchecked()?;

        let errors = validation::validate_invoice(&invoice);
        if !errors.is_empty() {
            tracing::warn!(errors = errors.len(), "invoice failed validation");
            return Err(GstError::from_validation(&errors));
        }

        Ok(invoice)
    }

    /// Build without validation, for drafts and stored data.
    ///
    /// Quantities and rates must still be within
    /// [`MAX_QUANTITY`](super::tax::MAX_QUANTITY) and
    /// [`MAX_RATE`](super::tax::MAX_RATE).
    pub fn build_unchecked(self) -> Result<Invoice, GstError> {
        for item in &self.items {
            tax::check_line(item)?;
        }
        let seller = self
            .seller
            .ok_or_else(|| GstError::Builder("seller is required".into()))?;
        let buyer = self
            .buyer
            .ok_or_else(|| GstError::Builder("buyer is required".into()))?;

        let mut invoice = Invoice {
            invoice_number: self.number,
            invoice_date: self.invoice_date,
            seller,
            buyer,
            items: self.items,
            totals: Totals::default(),
            notes: self.notes,
            terms: self.terms,
            payment_method: self.payment_method,
        };

        invoice.recalculate();
        Ok(invoice)
    }
}

/// Builder for Party (seller/buyer).
pub struct PartyBuilder {
    name: String,
    address: String,
    gstin: Option<String>,
    phone: Option<String>,
    email: Option<String>,
}

impl PartyBuilder {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            gstin: None,
            phone: None,
            email: None,
        }
    }

    pub fn gstin(mut self, gstin: impl Into<String>) -> Self {
        self.gstin = Some(gstin.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn build(self) -> Party {
        Party {
            name: self.name,
            address: self.address,
            gstin: self.gstin,
            phone: self.phone,
            email: self.email,
        }
    }
}

/// Builder for LineItem.
pub struct LineItemBuilder {
    description: String,
    hsn_code: Option<String>,
    quantity: Decimal,
    unit: Unit,
    rate: Decimal,
}

impl LineItemBuilder {
    pub fn new(description: impl Into<String>, quantity: Decimal, rate: Decimal) -> Self {
        Self {
            description: description.into(),
            hsn_code: None,
            quantity,
            unit: Unit::Nos,
            rate,
        }
    }

    pub fn hsn_code(mut self, code: impl Into<String>) -> Self {
        self.hsn_code = Some(code.into());
        self
    }

    pub fn unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    pub fn build(self) -> LineItem {
        LineItem {
            hsn_code: self.hsn_code,
            unit: self.unit,
            ..LineItem::new(self.description, self.quantity, self.rate)
        }
    }
}
