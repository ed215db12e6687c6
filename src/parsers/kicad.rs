//! KiCad BOM reader.
//!
//! Reads the BOM that pcbnew exports, one row per grouped component:
//!
//! ```text
//! "Id";"Designator";"Package";"Quantity";"Designation";"Supplier and ref";
//! 1;"R1,R2";"R_0805";2;"10k";"Farnell:2447553";
//! ```

use indexmap::IndexMap;

use crate::error::{RowErrorKind, RowFormatError};
use crate::matching::normalize_supplier;
use crate::model::Item;

use super::{BomReader, InputFormat};

/// Header signature of the KiCad export.
pub const KICAD_HEADER: &[&str] = &[
    "Id",
    "Designator",
    "Package",
    "Quantity",
    "Designation",
    "Supplier and ref",
];

/// Separators between entries of the supplier column.
const SUPPLIER_SEPARATORS: &[char] = &[';', ','];

/// Reader for KiCad BOM rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct KiCadReader;

impl KiCadReader {
    pub const fn new() -> Self {
        Self
    }
}

impl BomReader for KiCadReader {
    fn format(&self) -> InputFormat {
        InputFormat::KiCad
    }

    fn header(&self) -> &'static [&'static str] {
        KICAD_HEADER
    }

    fn handle_row(&self, row: usize, fields: &[String]) -> Result<Item, RowFormatError> {
        let fail = |kind| RowFormatError::new(row, fields, kind);

        let [id, designators, package, quantity, designation, suppliers] =
            without_trailing_blanks(fields, KICAD_HEADER.len())
        else {
            return Err(fail(RowErrorKind::Arity {
                expected: KICAD_HEADER.len(),
                found: fields.len(),
            }));
        };

        let designators: Vec<String> = designators
            .split(',')
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string)
            .collect();
        if designators.is_empty() {
            return Err(fail(RowErrorKind::EmptyDesignators));
        }

        let quantity = quantity
            .trim()
            .parse::<u32>()
            .map_err(|_| fail(RowErrorKind::InvalidQuantity(quantity.clone())))?;

        let suppliers = parse_supplier_refs(suppliers).map_err(fail)?;

        Ok(Item {
            row,
            id: id.trim().to_string(),
            designators,
            package: package.trim().to_string(),
            quantity,
            designation: designation.trim().to_string(),
            suppliers,
        })
    }
}

/// Drop blank cells past `arity`, left behind by a trailing delimiter.
fn without_trailing_blanks(fields: &[String], arity: usize) -> &[String] {
    if fields.len() > arity && fields[arity..].iter().all(|f| f.trim().is_empty()) {
        &fields[..arity]
    } else {
        fields
    }
}

/// Parse `Farnell:123-456;Mouser:71-RC0805` into an ordered supplier map.
/// Each entry is split on its first colon; an empty column yields an empty
/// map.
fn parse_supplier_refs(column: &str) -> Result<IndexMap<String, String>, RowErrorKind> {
    let mut suppliers = IndexMap::new();
    for entry in column.split(SUPPLIER_SEPARATORS).map(str::trim) {
        if entry.is_empty() {
            continue;
        }
        let Some((supplier, code)) = entry.split_once(':') else {
            return Err(RowErrorKind::InvalidSupplierRef(entry.to_string()));
        };
        let (supplier, code) = (supplier.trim(), code.trim());
        if supplier.is_empty() || code.is_empty() {
            return Err(RowErrorKind::InvalidSupplierRef(entry.to_string()));
        }
        let normalized = normalize_supplier(supplier);
        if suppliers
            .keys()
            .any(|known: &String| normalize_supplier(known) == normalized)
        {
            return Err(RowErrorKind::DuplicateSupplier(supplier.to_string()));
        }
        suppliers.insert(supplier.to_string(), code.to_string());
    }
    Ok(suppliers)
}
