//! Spreadsheet order sheet.

use std::io::Write;

use crate::error::{PartsyError, Result};
use crate::model::{Article, Item};

use super::{OrderWriter, OutputFormat};

const HEADER: [&str; 8] = [
    "Order Code",
    "Quantity",
    "Designators",
    "Package",
    "Designation",
    "Description",
    "Unit Price",
    "Line Total",
];

/// CSV with a header row, article descriptions and prices.
pub struct CsvWriter<W: Write> {
    writer: ::csv::Writer<W>,
    header_written: bool,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: ::csv::Writer::from_writer(sink),
            header_written: false,
        }
    }

    fn write_header(&mut self) -> Result<()> {
        if !self.header_written {
            self.writer.write_record(HEADER)?;
            self.header_written = true;
        }
        Ok(())
    }
}

fn format_price(price: Option<f64>) -> String {
    price.map(|p| format!("{p:.4}")).unwrap_or_default()
}

impl<W: Write> OrderWriter for CsvWriter<W> {
    fn format(&self) -> OutputFormat {
        OutputFormat::Csv
    }

    fn output_article(&mut self, item: &Item, article: &Article) -> Result<()> {
        self.write_header()?;
        let quantity = item.quantity.to_string();
        let designators = item.designator_list();
        let unit_price = format_price(article.price);
        let line_total = format_price(article.line_total(item.quantity));
        self.writer.write_record([
            article.order_code(),
            quantity.as_str(),
            designators.as_str(),
            item.package.as_str(),
            item.designation.as_str(),
            article.description.as_deref().unwrap_or_default(),
            unit_price.as_str(),
            line_total.as_str(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.write_header()?;
        self.writer
            .flush()
            .map_err(|source| PartsyError::Write { source })
    }
}
