//! Ingest stage: raw rows to items.

use crate::error::Result;
use crate::model::Item;
use crate::parsers::{BomReader, BomTable};

/// Parse every data row with `reader`. The first bad row aborts the run.
pub fn ingest(reader: &dyn BomReader, table: &BomTable) -> Result<Vec<Item>> {
    let items = table
        .rows
        .iter()
        .enumerate()
        .map(|(index, fields)| reader.handle_row(BomTable::row_number(index), fields))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    tracing::info!("Parsed {} items ({} format)", items.len(), reader.format());
    Ok(items)
}
