//! Spreadsheet import and export as CSV.
//!
//! Product and customer sheets use the same column layout for import,
//! export and the downloadable templates, so an exported sheet can be
//! edited and imported again.
//!
//! ```
//! use gstbill::sheet::import_products;
//!
//! let sheet = "Products,HSN,Price\nSteel Bolt,7318,12.50\nWasher,7318,0\n";
//! let report = import_products(sheet, &[]).unwrap();
//! assert_eq!(report.imported.len(), 1);
//! assert_eq!(report.errors, ["Row 3: Missing product name or invalid price"]);
//! ```

mod export;
mod import;
pub mod writer;

pub use export::*;
pub use import::*;
