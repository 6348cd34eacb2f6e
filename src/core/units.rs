//! Units of measure offered on invoice lines and catalog products.
//!
//! The label is what gets printed in the item table and stored in the
//! invoice document, so it is kept exactly as entered ("Nos", "Kg", ...).

use serde::{Deserialize, Serialize};

/// Unit of measure for a line item or product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    /// Numbers (generic count).
    #[default]
    Nos,
    /// Kilogram.
    Kg,
    /// Litre.
    Ltr,
    /// Metre.
    Mtr,
    /// Pieces.
    Pcs,
    /// Box.
    Box,
    /// Set.
    Set,
    /// Pair.
    Pair,
}

impl Unit {
    /// All units, in the order they are offered for selection.
    pub const ALL: [Unit; 8] = [
        Unit::Nos,
        Unit::Kg,
        Unit::Ltr,
        Unit::Mtr,
        Unit::Pcs,
        Unit::Box,
        Unit::Set,
        Unit::Pair,
    ];

    /// Printed label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Nos => "Nos",
            Self::Kg => "Kg",
            Self::Ltr => "Ltr",
            Self::Mtr => "Mtr",
            Self::Pcs => "Pcs",
            Self::Box => "Box",
            Self::Set => "Set",
            Self::Pair => "Pair",
        }
    }

    /// Parse from a label. Matching ignores case and surrounding whitespace.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|u| u.label().eq_ignore_ascii_case(label))
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Check whether `label` names a known unit.
pub fn is_known_unit_label(label: &str) -> bool {
    Unit::from_label(label).is_some()
}
