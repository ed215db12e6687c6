//! Normalized BOM line item.

use indexmap::IndexMap;
use std::fmt;

use crate::error::{PartsyError, Result, UnmatchedItem};
use crate::matching::normalize_supplier;

/// One line of the input BOM after format-specific parsing.
///
/// Items are never modified in place. Quantity scaling goes through
/// [`Item::scaled`], which returns a new item and leaves the parsed one
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// 1-based record number in the input, header included
    pub row: usize,
    /// Internal id column of the BOM
    pub id: String,
    /// Reference designators, in BOM order (never empty)
    pub designators: Vec<String>,
    /// Package or footprint
    pub package: String,
    pub quantity: u32,
    /// Value or description text
    pub designation: String,
    /// Supplier name -> supplier reference code, in BOM order
    pub suppliers: IndexMap<String, String>,
}

impl Item {
    /// Designators joined the way the BOM lists them (`R1,R2`).
    #[must_use]
    pub fn designator_list(&self) -> String {
        self.designators.join(",")
    }

    /// Reference code for a supplier, compared case-insensitively.
    #[must_use]
    pub fn supplier_code(&self, supplier: &str) -> Option<&str> {
        let wanted = normalize_supplier(supplier);
        self.suppliers
            .iter()
            .find(|(name, _)| normalize_supplier(name) == wanted)
            .map(|(_, code)| code.as_str())
    }

    /// Supplier references rendered as `supplier:code`.
    #[must_use]
    pub fn supplier_refs(&self) -> Vec<String> {
        self.suppliers
            .iter()
            .map(|(supplier, code)| format!("{supplier}:{code}"))
            .collect()
    }

    /// Copy of this item with its quantity multiplied by `factor`.
    pub fn scaled(&self, factor: u32) -> Result<Self> {
        let quantity =
            self.quantity
                .checked_mul(factor)
                .ok_or(PartsyError::QuantityOverflow {
                    row: self.row,
                    quantity: self.quantity,
                    factor,
                })?;
        Ok(Self {
            quantity,
            ..self.clone()
        })
    }

    /// Report entry for an item that resolved to no article.
    #[must_use]
    pub fn to_unmatched(&self) -> UnmatchedItem {
        UnmatchedItem {
            row: self.row,
            id: self.id.clone(),
            designators: self.designator_list(),
            package: self.package.clone(),
            designation: self.designation.clone(),
            supplier_refs: self.supplier_refs(),
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} x{} '{}' [{}]",
            self.designator_list(),
            self.quantity,
            self.designation,
            self.package
        )
    }
}
