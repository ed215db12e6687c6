//! BOM input formats.
//!
//! Input arrives as delimited text. [`parse_bom_str`] splits it into a
//! [`BomTable`]; the header row selects a format (or the caller names one),
//! and the matching [`BomReader`] turns each data row into an
//! [`Item`](crate::model::Item).
//!
//! ## Usage
//!
//! ```
//! use partsy::parsers::{create_reader, parse_bom_str, resolve_input_format, InputFormat};
//!
//! let bom = "Id;Designator;Package;Quantity;Designation;Supplier and ref\n\
//!            1;R1,R2;0805;2;10k;Farnell:123-456\n";
//! let table = parse_bom_str(bom, None).unwrap();
//! let format = resolve_input_format(InputFormat::Auto, &table.header).unwrap();
//! let reader = create_reader(format).unwrap();
//! let item = reader.handle_row(2, &table.rows[0]).unwrap();
//! assert_eq!(item.quantity, 2);
//! ```

mod detection;
mod kicad;
mod table;
mod traits;

pub use detection::{detect_input_format, sniff_delimiter, InputFormat};
pub use kicad::{KiCadReader, KICAD_HEADER};
pub use table::{parse_bom_str, read_bom, BomTable};
pub use traits::BomReader;

use crate::error::{FormatKind, PartsyError, Result, UnknownFormatError};

/// Reader for a concrete input format.
///
/// `auto` is not a reader; resolve it first with [`resolve_input_format`].
pub fn create_reader(format: InputFormat) -> Result<Box<dyn BomReader>> {
    match format {
        InputFormat::KiCad => Ok(Box::new(KiCadReader::new())),
        InputFormat::Auto => Err(UnknownFormatError {
            kind: FormatKind::Input,
            tag: format.name().to_string(),
            valid: "kicad",
        }
        .into()),
    }
}

/// Turn a requested format into a concrete one, consulting the header for
/// `auto`.
pub fn resolve_input_format(requested: InputFormat, header: &[String]) -> Result<InputFormat> {
    match requested {
        InputFormat::Auto => {
            detect_input_format(header).ok_or_else(|| PartsyError::UndetectedFormat {
                header: header.to_vec(),
            })
        }
        concrete => Ok(concrete),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(cells: &[&str]) -> Vec<String> {
        cells.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_create_reader() {
        let reader = create_reader(InputFormat::KiCad).expect("reader");
        assert_eq!(reader.format(), InputFormat::KiCad);
        assert_eq!(reader.header(), KICAD_HEADER);
    }

    #[test]
    fn test_create_reader_rejects_auto() {
        let err = create_reader(InputFormat::Auto).err().expect("error");
        assert!(matches!(err, PartsyError::UnknownFormat(ref e) if e.tag == "auto"));
    }

    #[test]
    fn test_resolve_explicit_format_ignores_header() {
        let format = resolve_input_format(InputFormat::KiCad, &cells(&["whatever"]));
        assert_eq!(format.expect("format"), InputFormat::KiCad);
    }

    #[test]
    fn test_resolve_auto_undetected() {
        let err = resolve_input_format(InputFormat::Auto, &cells(&["Ref", "Qty"])).unwrap_err();
        match err {
            PartsyError::UndetectedFormat { header } => assert_eq!(header, vec!["Ref", "Qty"]),
            other => panic!("unexpected error: {other}"),
        }
    }
}
