//! Order sheet writers.
//!
//! Each output format implements [`OrderWriter`]. The pipeline calls
//! [`OrderWriter::output_article`] once per retained item, in BOM order, and
//! [`OrderWriter::finish`] once at the end. Writers never see ignored or
//! unmatched items.

mod csv;
mod farnell;
mod types;

pub use self::csv::CsvWriter;
pub use farnell::FarnellWriter;
pub use types::OutputFormat;

use std::io::Write;

use crate::error::Result;
use crate::model::{Article, Item};

/// Trait for order sheet writers
pub trait OrderWriter {
    /// The format this writer produces
    fn format(&self) -> OutputFormat;

    /// Append one order line for `item`, which resolved to `article`.
    fn output_article(&mut self, item: &Item, article: &Article) -> Result<()>;

    /// Flush buffered lines to the sink.
    fn finish(&mut self) -> Result<()>;
}

/// Create a writer for the given format over `sink`
pub fn create_writer<'a, W: Write + 'a>(
    format: OutputFormat,
    sink: W,
) -> Box<dyn OrderWriter + 'a> {
    match format.resolve() {
        OutputFormat::Auto | OutputFormat::Farnell => Box::new(FarnellWriter::new(sink)),
        OutputFormat::Csv => Box::new(CsvWriter::new(sink)),
    }
}
