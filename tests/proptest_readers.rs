//! Property-based tests for BOM input handling.
//!
//! The table splitter and the KiCad reader must never panic, and well-formed
//! rows must come back with the values that were written into them.

use partsy::parsers::{parse_bom_str, BomReader, KiCadReader};
use proptest::prelude::*;

/// A cell value without delimiters, quotes or surrounding whitespace.
fn cell() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_.%+-]([A-Za-z0-9_.%+ -]{0,15}[A-Za-z0-9_.%+-])?"
}

fn designator() -> impl Strategy<Value = String> {
    "[A-Z]{1,3}[0-9]{1,4}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn parse_bom_str_doesnt_panic(s in "\\PC{0,1000}") {
        let _ = parse_bom_str(&s, None);
    }

    #[test]
    fn kicad_reader_doesnt_panic(fields in prop::collection::vec("\\PC{0,40}", 0..9)) {
        let _ = KiCadReader::new().handle_row(2, &fields);
    }

    #[test]
    fn kicad_row_values_survive(
        designators in prop::collection::vec(designator(), 1..6),
        package in cell(),
        quantity in any::<u32>(),
        designation in cell(),
        supplier in "[A-Z][a-z]{2,10}",
        code in "[0-9]{3}-[0-9]{3}",
    ) {
        let bom = format!(
            "Id;Designator;Package;Quantity;Designation;Supplier and ref\n\
             1;\"{}\";\"{}\";{};\"{}\";\"{}:{}\"\n",
            designators.join(","),
            package,
            quantity,
            designation,
            supplier,
            code,
        );
        let table = parse_bom_str(&bom, None).unwrap();
        prop_assert_eq!(table.rows.len(), 1);

        let item = KiCadReader::new().handle_row(2, &table.rows[0]).unwrap();
        prop_assert_eq!(&item.designators, &designators);
        prop_assert_eq!(&item.package, &package);
        prop_assert_eq!(item.quantity, quantity);
        prop_assert_eq!(&item.designation, &designation);
        prop_assert_eq!(item.supplier_code(&supplier), Some(code.as_str()));
    }

    #[test]
    fn scaling_is_multiplication(quantity in 0u32..100_000, factor in 0u32..10_000) {
        let fields: Vec<String> = ["1", "R1", "0805", quantity.to_string().as_str(), "10k", ""]
            .iter()
            .map(ToString::to_string)
            .collect();
        let item = KiCadReader::new().handle_row(2, &fields).unwrap();
        let scaled = item.scaled(factor).unwrap();
        prop_assert_eq!(scaled.quantity, quantity * factor);
        prop_assert_eq!(item.quantity, quantity);
    }
}
