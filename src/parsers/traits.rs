//! Reader trait definition.

use crate::error::RowFormatError;
use crate::model::Item;

use super::InputFormat;

/// Converts raw BOM rows of one input format into [`Item`]s.
///
/// Readers are pure: parsing a row has no side effects and does not depend
/// on rows parsed before it.
pub trait BomReader {
    /// The format this reader handles
    fn format(&self) -> InputFormat;

    /// Header cells the format's export starts with
    fn header(&self) -> &'static [&'static str];

    /// Parse one data row.
    ///
    /// `row` is the 1-based record number (the header is record 1) and is
    /// carried into the item and into any error.
    fn handle_row(&self, row: usize, fields: &[String]) -> Result<Item, RowFormatError>;
}
