//! Raw tabular BOM input.

use std::io::Read;

use crate::error::Result;

use super::detection::sniff_delimiter;

/// A BOM file split into records, before any format-specific parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BomTable {
    /// First record; only used for format detection
    pub header: Vec<String>,
    /// Remaining records, in file order
    pub rows: Vec<Vec<String>>,
}

impl BomTable {
    /// Record number of the `index`-th data row (the header is record 1).
    #[must_use]
    pub const fn row_number(index: usize) -> usize {
        index + 2
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Split BOM text into records.
///
/// The delimiter is sniffed from the first line unless given. Records may
/// have differing lengths; arity is the reader's business.
pub fn parse_bom_str(content: &str, delimiter: Option<u8>) -> Result<BomTable> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let delimiter = delimiter.unwrap_or_else(|| {
        let first_line = content.lines().next().unwrap_or_default();
        sniff_delimiter(first_line)
    });

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(content.as_bytes());

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record?;
        records.push(record.iter().map(str::to_string).collect::<Vec<_>>());
    }

    let mut records = records.into_iter();
    let header = records.next().unwrap_or_default();
    let rows: Vec<_> = records.collect();
    tracing::debug!(
        "Read {} BOM rows (delimiter '{}')",
        rows.len(),
        char::from(delimiter)
    );
    Ok(BomTable { header, rows })
}

/// Read all of `source` and split it into records.
pub fn read_bom<R: Read>(mut source: R, delimiter: Option<u8>) -> Result<BomTable> {
    let mut content = String::new();
    source.read_to_string(&mut content)?;
    parse_bom_str(&content, delimiter)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KICAD_BOM: &str = "\"Id\";\"Designator\";\"Package\";\"Quantity\";\"Designation\";\"Supplier and ref\";\n\
        1;\"R1,R2\";\"0805\";2;\"10k resistor\";\"Farnell:123-456\";\n\
        2;\"C1\";\"0603\";1;\"100n\";\"\";\n";

    #[test]
    fn test_semicolon_table() {
        let table = parse_bom_str(KICAD_BOM, None).expect("parse");
        assert_eq!(table.header.len(), 7);
        assert_eq!(table.header[0], "Id");
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0][1], "R1,R2");
        assert_eq!(table.rows[1][4], "100n");
    }

    #[test]
    fn test_comma_table() {
        let bom = "Id,Designator,Package,Quantity,Designation,Supplier and ref\n\
            1,\"R1,R2\",0805,2,10k,Farnell:123-456\n";
        let table = parse_bom_str(bom, None).expect("parse");
        assert_eq!(table.header.len(), 6);
        assert_eq!(table.rows[0][1], "R1,R2");
    }

    #[test]
    fn test_explicit_delimiter_wins() {
        let bom = "a|b;c\n1|2;3\n";
        let table = parse_bom_str(bom, Some(b'|')).expect("parse");
        assert_eq!(table.header, vec!["a", "b;c"]);
    }

    #[test]
    fn test_byte_order_mark_stripped() {
        let bom = "\u{feff}Id,Designator\n1,R1\n";
        let table = parse_bom_str(bom, None).expect("parse");
        assert_eq!(table.header[0], "Id");
    }

    #[test]
    fn test_empty_input() {
        let table = parse_bom_str("", None).expect("parse");
        assert!(table.header.is_empty());
        assert!(table.is_empty());
    }

    #[test]
    fn test_row_numbers_count_header() {
        assert_eq!(BomTable::row_number(0), 2);
        assert_eq!(BomTable::row_number(9), 11);
    }
}
