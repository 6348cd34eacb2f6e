use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::units::Unit;
use super::words::ZERO_IN_WORDS;

/// A GST tax invoice.
///
/// Field names serialize in camelCase so the struct maps one-to-one onto the
/// stored invoice document (`invoiceNumber`, `cgstTotal`, `amountInWords`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Serial number. Unique; assigned from a sequence when not provided.
    #[serde(default)]
    pub invoice_number: Option<String>,
    /// Date of issue.
    pub invoice_date: NaiveDate,
    /// Supplier.
    pub seller: Party,
    /// Recipient.
    pub buyer: Party,
    /// Ordered invoice lines.
    #[serde(default)]
    pub items: Vec<LineItem>,
    /// Derived totals (set by `recalculate()`).
    #[serde(flatten)]
    pub totals: Totals,
    /// Free text printed under "Bank Details".
    #[serde(default)]
    pub notes: Option<String>,
    /// Terms and conditions, one per line.
    #[serde(default)]
    pub terms: Option<String>,
    /// How the buyer intends to pay.
    #[serde(default)]
    pub payment_method: PaymentMethod,
}

/// Seller or buyer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    /// Legal or trade name.
    pub name: String,
    /// Full postal address as a single text block.
    pub address: String,
    /// GST identification number. The first two characters are the state code.
    #[serde(default)]
    pub gstin: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// One invoice line.
///
/// `quantity`, `rate` and the descriptive fields are user input; the
/// [`LineTax`] part is derived and only written by `recalculate()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Goods or service description.
    pub description: String,
    /// HSN/SAC tariff classification code.
    #[serde(default)]
    pub hsn_code: Option<String>,
    /// Quantity supplied.
    pub quantity: Decimal,
    /// Unit of measure.
    #[serde(default)]
    pub unit: Unit,
    /// Price per unit, before tax.
    pub rate: Decimal,
    /// Derived amounts.
    #[serde(flatten)]
    pub tax: LineTax,
}

/// Tax treatment of a supply, decided once per invoice from the buyer's GSTIN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Jurisdiction {
    /// Intra-state supply: CGST + SGST in equal halves.
    SameState,
    /// Inter-state supply (or unregistered buyer): IGST.
    OtherState,
}

/// Computed amounts for a single line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineTax {
    /// Taxable value: quantity * rate.
    #[serde(default)]
    pub amount: Decimal,
    /// Central GST.
    #[serde(default)]
    pub cgst: Decimal,
    /// State GST.
    #[serde(default)]
    pub sgst: Decimal,
    /// Integrated GST.
    #[serde(default)]
    pub igst: Decimal,
    /// amount + cgst + sgst + igst.
    #[serde(default)]
    pub total: Decimal,
}

impl LineTax {
    /// Sum of the three tax components.
    pub fn tax(&self) -> Decimal {
        self.cgst.saturating_add(self.sgst).saturating_add(self.igst)
    }
}

/// Invoice totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    /// Sum of line amounts (taxable value).
    #[serde(default)]
    pub subtotal: Decimal,
    #[serde(default)]
    pub cgst_total: Decimal,
    #[serde(default)]
    pub sgst_total: Decimal,
    #[serde(default)]
    pub igst_total: Decimal,
    /// subtotal + cgst_total + sgst_total + igst_total.
    #[serde(default)]
    pub grand_total: Decimal,
    /// Grand total (whole rupees) in Indian-English words.
    #[serde(default)]
    pub amount_in_words: String,
}

impl Default for Totals {
    fn default() -> Self {
        Self {
            subtotal: Decimal::ZERO,
            cgst_total: Decimal::ZERO,
            sgst_total: Decimal::ZERO,
            igst_total: Decimal::ZERO,
            grand_total: Decimal::ZERO,
            amount_in_words: ZERO_IN_WORDS.to_string(),
        }
    }
}

impl Totals {
    /// Total tax across all components.
    pub fn tax_total(&self) -> Decimal {
        self.cgst_total
            .saturating_add(self.sgst_total)
            .saturating_add(self.igst_total)
    }
}

/// Payment method recorded on the invoice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Cheque,
    #[default]
    BankTransfer,
    Upi,
    Card,
}

impl PaymentMethod {
    /// Stored code (e.g. "bank_transfer").
    pub fn code(&self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Cheque => "cheque",
            Self::BankTransfer => "bank_transfer",
            Self::Upi => "upi",
            Self::Card => "card",
        }
    }

    /// Parse from the stored code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "cash" => Some(Self::Cash),
            "cheque" => Some(Self::Cheque),
            "bank_transfer" => Some(Self::BankTransfer),
            "upi" => Some(Self::Upi),
            "card" => Some(Self::Card),
            _ => None,
        }
    }
}

/// Catalog product that can be picked onto an invoice line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub hsn_code: Option<String>,
    #[serde(default)]
    pub unit: Unit,
    /// Default price per unit.
    pub rate: Decimal,
    #[serde(default = "active")]
    pub is_active: bool,
}

impl Product {
    pub fn new(name: impl Into<String>, rate: Decimal) -> Self {
        Self {
            name: name.into(),
            description: None,
            hsn_code: None,
            unit: Unit::Nos,
            rate,
            is_active: true,
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
}

/// Customer master record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub gstin: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default = "active")]
    pub is_active: bool,
}

impl Customer {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            gstin: None,
            phone: None,
            email: None,
            is_active: true,
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

    /// The buyer block for an invoice addressed to this customer.
    pub fn to_party(&self) -> Party {
        Party {
            name: self.name.clone(),
            address: self.address.clone(),
            gstin: self.gstin.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
        }
    }
}

fn active() -> bool {
    true
}
