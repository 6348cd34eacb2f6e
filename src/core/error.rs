use std::fmt;

use thiserror::Error;

/// Errors that can occur while building, editing, importing or rendering invoices.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GstError {
    /// One or more validation rules failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Builder encountered invalid or missing configuration.
    #[error("builder error: {0}")]
    Builder(String),

    /// Invoice number sequencing error.
    #[error("numbering error: {0}")]
    Numbering(String),

    /// An editing operation addressed a line that does not exist.
    #[error("item index {index} out of range (invoice has {len} items)")]
    ItemIndex { index: usize, len: usize },

    /// A quantity or rate beyond what an invoice line accepts.
    #[error("value out of range: {0}")]
    OutOfRange(String),

    /// Spreadsheet import could not be read at all.
    #[error("import error: {0}")]
    Import(String),

    /// Printable or PDF rendering failed.
    #[error("render error: {0}")]
    Render(String),

    /// Stored document could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// One failed check on an invoice, addressed by field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "buyer.gstin", "items[2].rate").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
    /// CGST Rules reference if applicable (e.g. "Rule 46(b)").
    pub rule: Option<String>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.rule {
            Some(rule) => write!(f, "[{rule}] {}: {}", self.field, self.message),
            None => write!(f, "{}: {}", self.field, self.message),
        }
    }
}

impl GstError {
    /// Fold a list of validation errors into a single `Validation` error,
    /// messages joined by "; ".
    pub fn from_validation(errors: &[ValidationError]) -> Self {
        let joined = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Self::Validation(joined)
    }
}

impl ValidationError {
    /// Create a validation error without a rule reference.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: None,
        }
    }

    /// Create a validation error citing a CGST Rules provision.
    pub fn with_rule(
        field: impl Into<String>,
        message: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: Some(rule.into()),
        }
    }
}
