//! Core invoice types, the GST engine, and invoice numbering.
//!
//! This module provides the records of a GST tax invoice, the tax
//! calculation that derives every amount on it, amount-in-words rendering,
//! GSTIN validation, and the printable layout.

mod builder;
mod error;
mod gstin;
mod invoice;
mod numbering;
mod profile;
pub mod render;
mod states;
mod tax;
mod types;
pub mod units;
mod validation;
mod words;

pub use builder::*;
pub use error::*;
pub use gstin::*;
pub use numbering::*;
pub use profile::*;
pub use render::{InvoiceDocument, PartyBlock, layout};
pub use states::{is_known_state_code, state_name};
pub use tax::*;
pub use types::*;
pub use units::{Unit, is_known_unit_label};
pub use validation::*;
pub use words::*;
