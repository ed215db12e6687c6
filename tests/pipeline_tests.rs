//! Pipeline and CLI integration tests.
//!
//! These tests run whole lookups over fixture files: BOM text through the
//! reader, the parts database and a writer, and the `lookup` handler with
//! real input and output files.

use partsy::cli::run_lookup;
use partsy::config::{AppConfig, LookupConfig};
use partsy::database::{ArticleRecord, Database};
use partsy::error::PartsyError;
use partsy::parsers::{parse_bom_str, BomTable, InputFormat};
use partsy::pipeline::{build_order, exit_codes};
use partsy::writers::OutputFormat;
use std::path::{Path, PathBuf};

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn fixture_table(name: &str) -> BomTable {
    let content = std::fs::read_to_string(fixture_path(name)).expect("fixture exists");
    parse_bom_str(&content, None).expect("fixture is valid CSV")
}

fn fixture_database() -> Database {
    Database::from_path(&fixture_path("partsy.yaml")).expect("fixture database loads")
}

const KICAD_HEADER: &str = "Id;Designator;Package;Quantity;Designation;Supplier and ref\n";
const REFERENCE_ROW: &str = "1;R1,R2;0805;2;10k resistor;Farnell:123-456\n";

fn single_row_table(row: &str) -> BomTable {
    parse_bom_str(&format!("{KICAD_HEADER}{row}"), None).expect("valid CSV")
}

fn sheet(order: &partsy::Order) -> String {
    String::from_utf8(order.sheet.clone()).expect("utf-8 sheet")
}

// ============================================================================
// Reference scenarios
// ============================================================================

mod scenarios {
    use super::*;

    #[test]
    fn matched_row_is_ordered() {
        let database =
            Database::from_records(vec![ArticleRecord::new("ORD-1").key("123-456")]).unwrap();
        let order = build_order(
            &database,
            &single_row_table(REFERENCE_ROW),
            InputFormat::KiCad,
            OutputFormat::Farnell,
            1,
        )
        .expect("lookup succeeds");

        assert_eq!(order.lines, 1);
        assert_eq!(sheet(&order), "ORD-1,2,\"R1,R2\",10k resistor\n");
    }

    #[test]
    fn ignored_article_yields_empty_sheet() {
        let database = Database::from_records(vec![ArticleRecord::ignored().key("123-456")]).unwrap();
        let order = build_order(
            &database,
            &single_row_table(REFERENCE_ROW),
            InputFormat::KiCad,
            OutputFormat::Farnell,
            1,
        )
        .expect("ignored items are not an error");

        assert_eq!(order.lines, 0);
        assert_eq!(order.ignored, 1);
        assert!(order.sheet.is_empty());
    }

    #[test]
    fn unknown_supplier_code_aborts() {
        let database =
            Database::from_records(vec![ArticleRecord::new("ORD-1").key("123-456")]).unwrap();
        let err = build_order(
            &database,
            &single_row_table("1;R3;0805;1;22k;Farnell:999-999\n"),
            InputFormat::KiCad,
            OutputFormat::Farnell,
            1,
        )
        .unwrap_err();

        match err {
            PartsyError::Unmatched(unmatched) => {
                assert_eq!(unmatched.items.len(), 1);
                assert_eq!(unmatched.items[0].row, 2);
                assert_eq!(unmatched.items[0].supplier_refs, vec!["Farnell:999-999"]);
            }
            other => panic!("expected unmatched error, got {other}"),
        }
    }

    #[test]
    fn quantity_factor_applied_once() {
        let database =
            Database::from_records(vec![ArticleRecord::new("ORD-1").key("123-456")]).unwrap();
        let order = build_order(
            &database,
            &single_row_table("1;R1;0805;3;10k;Farnell:123-456\n"),
            InputFormat::KiCad,
            OutputFormat::Farnell,
            4,
        )
        .unwrap();
        assert_eq!(sheet(&order), "ORD-1,12,R1,10k\n");
    }
}

// ============================================================================
// Fixture BOMs
// ============================================================================

mod fixture_boms {
    use super::*;

    #[test]
    fn kicad_export_to_farnell() {
        let order = build_order(
            &fixture_database(),
            &fixture_table("kicad_bom.csv"),
            InputFormat::Auto,
            OutputFormat::Auto,
            1,
        )
        .expect("every item resolves");

        assert_eq!(order.input_format, InputFormat::KiCad);
        assert_eq!(order.items, 6);
        assert_eq!(order.ignored, 2);
        assert_eq!(
            sheet(&order),
            "ORD-1,3,\"R1,R2,R5\",10k resistor\n\
             1759122,2,\"C1,C2\",100nF 50V\n\
             9589899,1,U1,NE555\n\
             2099236,1,D1,LED red\n"
        );
    }

    #[test]
    fn ambiguous_designation_reported() {
        let order = build_order(
            &fixture_database(),
            &fixture_table("kicad_bom.csv"),
            InputFormat::KiCad,
            OutputFormat::Farnell,
            1,
        )
        .unwrap();

        assert_eq!(order.ambiguous.len(), 1);
        assert_eq!(order.ambiguous[0].row, 7);
        assert_eq!(order.ambiguous[0].chosen, "led-red-a");
        assert_eq!(order.ambiguous[0].alternatives, vec!["led-red-b"]);
    }

    #[test]
    fn comma_delimited_export() {
        let order = build_order(
            &fixture_database(),
            &fixture_table("kicad_bom_comma.csv"),
            InputFormat::Auto,
            OutputFormat::Farnell,
            10,
        )
        .unwrap();
        assert_eq!(
            sheet(&order),
            "ORD-1,20,\"R1,R2\",10k resistor\n1759122,10,C7,100n\n"
        );
    }

    #[test]
    fn csv_sheet_carries_prices() {
        let order = build_order(
            &fixture_database(),
            &fixture_table("kicad_bom_comma.csv"),
            InputFormat::Auto,
            OutputFormat::Csv,
            1,
        )
        .unwrap();
        let text = sheet(&order);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Order Code,Quantity,Designators"));
        assert_eq!(
            lines[1],
            "ORD-1,2,\"R1,R2\",0805,10k resistor,10k 1% 0805 thick film,0.0120,0.0240"
        );
    }

    #[test]
    fn every_unmatched_item_reported() {
        let err = build_order(
            &fixture_database(),
            &fixture_table("unmatched_bom.csv"),
            InputFormat::Auto,
            OutputFormat::Farnell,
            1,
        )
        .unwrap_err();

        assert_eq!(err.exit_code(), exit_codes::UNMATCHED_ITEMS);
        let message = err.to_string();
        assert!(message.starts_with("2 item(s) not found"), "{message}");
        assert!(message.contains("Farnell:999-999"), "{message}");
        assert!(message.contains("10uH"), "{message}");
    }

    #[test]
    fn unknown_header_not_detected() {
        let err = build_order(
            &fixture_database(),
            &fixture_table("unknown_bom.csv"),
            InputFormat::Auto,
            OutputFormat::Farnell,
            1,
        )
        .unwrap_err();
        assert!(matches!(err, PartsyError::UndetectedFormat { .. }));
        assert_eq!(err.exit_code(), exit_codes::ERROR);
    }

    #[test]
    fn row_error_names_the_row() {
        let err = build_order(
            &fixture_database(),
            &single_row_table("1;R1;0805;two;10k;\n"),
            InputFormat::KiCad,
            OutputFormat::Farnell,
            1,
        )
        .unwrap_err();
        match err {
            PartsyError::RowFormat(row) => assert_eq!(row.row, 2),
            other => panic!("expected row error, got {other}"),
        }
    }
}

// ============================================================================
// Lookup command
// ============================================================================

mod lookup_command {
    use super::*;

    fn config(input: &str, output: &Path, format: OutputFormat, qty: u32) -> LookupConfig {
        let app = AppConfig::builder()
            .database(fixture_path("partsy.yaml"))
            .output_format(format)
            .quantity(qty)
            .quiet(true)
            .build();
        LookupConfig::from_app(&app, Some(fixture_path(input)), Some(output.to_path_buf()))
    }

    #[test]
    fn writes_order_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("order.csv");
        let code = run_lookup(config("kicad_bom.csv", &output, OutputFormat::Farnell, 2)).unwrap();

        assert_eq!(code, exit_codes::SUCCESS);
        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(written.lines().count(), 4);
        assert!(written.starts_with("ORD-1,6,"), "{written}");
    }

    #[test]
    fn unmatched_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("order.csv");
        let code =
            run_lookup(config("unmatched_bom.csv", &output, OutputFormat::Farnell, 1)).unwrap();

        assert_eq!(code, exit_codes::UNMATCHED_ITEMS);
        assert!(!output.exists());
    }

    #[test]
    fn explicit_delimiter_overrides_sniffing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("order.csv");
        let mut config = config("kicad_bom.csv", &output, OutputFormat::Farnell, 1);
        // wrong delimiter: header is one cell, format cannot be detected
        config.input.delimiter = Some('|');

        let err = run_lookup(config).unwrap_err();
        assert!(err.to_string().contains("Cannot determine input format"), "{err}");
        assert!(!output.exists());
    }
}
