use serde::{Deserialize, Serialize};

use super::types::Party;

/// The business issuing invoices, and the text printed on every invoice.
///
/// New invoices are seeded from a profile (see
/// [`InvoiceBuilder::from_profile`](super::InvoiceBuilder::from_profile)).
/// `Default` is the home seller registered in Gujarat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerProfile {
    pub name: String,
    pub address: String,
    pub gstin: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    /// Bank details, printed in the notes box.
    pub bank_details: String,
    /// Terms and conditions, one per line.
    pub terms: String,
}

impl Default for SellerProfile {
    fn default() -> Self {
        Self {
            name: "Harsh Enterprise".into(),
            address: "A-7/13, Alok-5, Nirant Cross Road, Vastral, Ahmedabad - 382418".into(),
            gstin: "24AELPV7892J1ZK".into(),
            phone: Some("9428606712".into()),
            email: None,
            bank_details: "Our Bank : Bank of India, Vastral Branch\n\
                           A/C No. : 205920110000430\n\
                           IFSCN : BKID0002059"
                .into(),
            terms: "1. Goods once sold will not to be returned.\n\
                    2. Credit facility is not available.\n\
                    3. Check product condition at the time of delivery\n\
                    4. All disputes are subject to Gujarat juridiction"
                .into(),
        }
    }
}

impl SellerProfile {
    /// The seller block for an invoice.
    pub fn party(&self) -> Party {
        Party {
            name: self.name.clone(),
            address: self.address.clone(),
            gstin: Some(self.gstin.clone()),
            phone: self.phone.clone(),
            email: self.email.clone(),
        }
    }
}
