//! Emit stage: resolved lines to the order sheet.

use std::io::Write;

use crate::error::{Result, UnmatchedItemError};
use crate::writers::{create_writer, OrderWriter, OutputFormat};

use super::Resolution;

/// Write the order sheet for a complete resolution.
///
/// Fails with [`UnmatchedItemError`] before any writer exists when an item
/// went unmatched, so the sink receives nothing. Returns the number of lines
/// written.
pub fn emit<W: Write>(resolution: &Resolution<'_>, format: OutputFormat, sink: W) -> Result<usize> {
    ensure_complete(resolution)?;
    let mut writer = create_writer(format, sink);
    emit_with(resolution, writer.as_mut())
}

/// [`emit`] with a caller-provided writer.
pub fn emit_with(resolution: &Resolution<'_>, writer: &mut dyn OrderWriter) -> Result<usize> {
    ensure_complete(resolution)?;
    for line in &resolution.lines {
        writer.output_article(&line.item, line.article)?;
    }
    writer.finish()?;
    tracing::debug!(
        "Wrote {} lines as {}",
        resolution.lines.len(),
        writer.format()
    );
    Ok(resolution.lines.len())
}

fn ensure_complete(resolution: &Resolution<'_>) -> Result<()> {
    if resolution.is_complete() {
        Ok(())
    } else {
        Err(UnmatchedItemError {
            items: resolution.unmatched.clone(),
        }
        .into())
    }
}
