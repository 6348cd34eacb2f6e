//! # gstbill
//!
//! GST invoicing core for Indian small businesses: CGST/SGST or IGST per
//! line, invoice totals, amount in words (lakh/crore), GSTIN validation,
//! and printable tax-invoice rendering.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Stored amounts keep full precision; rounding happens only when an
//! invoice is laid out for printing.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use gstbill::core::*;
//! use rust_decimal_macros::dec;
//!
//! let invoice = InvoiceBuilder::from_profile(&SellerProfile::default(), NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
//!     .buyer(PartyBuilder::new("Shree Traders", "Ring Road, Surat").gstin("24AELPV7892J1ZK").build())
//!     .add_line(LineItemBuilder::new("Steel Bolt", dec!(2), dec!(500)).hsn_code("7318").build())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(invoice.jurisdiction(), Jurisdiction::SameState);
//! assert_eq!(invoice.totals.cgst_total, dec!(90));
//! assert_eq!(invoice.totals.grand_total, dec!(1180));
//! assert_eq!(invoice.totals.amount_in_words, "One Thousand One Hundred and Eighty Rupees Only");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Invoice types, GST engine, words, GSTIN, numbering, print layout |
//! | `pdf` | PDF tax-invoice rendering |
//! | `sheet` | CSV import/export of products, customers, invoice register |
//! | `json` | Stored-document JSON serialization |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "pdf")]
pub mod pdf;

#[cfg(feature = "sheet")]
pub mod sheet;

#[cfg(feature = "json")]
pub mod json;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
