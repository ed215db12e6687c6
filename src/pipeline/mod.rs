//! Lookup pipeline: Ingest, Resolve, Emit.
//!
//! ```text
//! BomTable --ingest--> [Item] --resolve--> Resolution --emit--> order sheet
//! ```
//!
//! The whole BOM is materialized before matching starts, and the order sheet
//! is produced in memory: a failed run leaves no partial output behind.

mod emit;
mod ingest;
mod output;
mod resolve;

pub use emit::{emit, emit_with};
pub use ingest::ingest;
pub use output::{write_output, InputSource, OutputTarget};
pub use resolve::{resolve, AmbiguousMatch, OrderLine, Resolution};

use crate::error::Result;
use crate::matching::ArticleMatcher;
use crate::parsers::{create_reader, resolve_input_format, BomTable, InputFormat};
use crate::writers::OutputFormat;

/// Exit codes for scripting integration
pub mod exit_codes {
    /// Order sheet produced
    pub const SUCCESS: i32 = 0;
    /// An error occurred
    pub const ERROR: i32 = 1;
    /// Some BOM items were not found in the parts database
    pub const UNMATCHED_ITEMS: i32 = 2;
}

/// Result of a successful lookup run
#[derive(Debug, Clone)]
pub struct Order {
    /// The encoded order sheet
    pub sheet: Vec<u8>,
    pub input_format: InputFormat,
    pub output_format: OutputFormat,
    /// Items parsed from the BOM
    pub items: usize,
    /// Lines written to the sheet
    pub lines: usize,
    pub ignored: usize,
    pub ambiguous: Vec<AmbiguousMatch>,
}

/// Run the whole pipeline over a BOM table.
///
/// Formats are resolved before any row is parsed, so an unknown or
/// undetectable format fails without touching the rows.
pub fn build_order<M: ArticleMatcher + ?Sized>(
    matcher: &M,
    table: &BomTable,
    input_format: InputFormat,
    output_format: OutputFormat,
    quantity: u32,
) -> Result<Order> {
    let input_format = resolve_input_format(input_format, &table.header)?;
    let output_format = output_format.resolve();
    let reader = create_reader(input_format)?;

    let items = ingest(reader.as_ref(), table)?;
    let resolution = resolve(matcher, &items, quantity)?;

    let mut sheet = Vec::new();
    let lines = emit(&resolution, output_format, &mut sheet)?;

    Ok(Order {
        sheet,
        input_format,
        output_format,
        items: items.len(),
        lines,
        ignored: resolution.ignored,
        ambiguous: resolution.ambiguous,
    })
}
