//! Farnell bulk-order sheet.
//!
//! Headerless CSV, one line per article:
//!
//! ```text
//! 2447553,12,"R1,R2",10k
//! ```

use std::io::Write;

use crate::error::{PartsyError, Result};
use crate::model::{Article, Item};

use super::{OrderWriter, OutputFormat};

/// Writes the quick-paste format of the Farnell order upload.
pub struct FarnellWriter<W: Write> {
    writer: ::csv::Writer<W>,
}

impl<W: Write> FarnellWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: ::csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(sink),
        }
    }
}

impl<W: Write> OrderWriter for FarnellWriter<W> {
    fn format(&self) -> OutputFormat {
        OutputFormat::Farnell
    }

    fn output_article(&mut self, item: &Item, article: &Article) -> Result<()> {
        let quantity = item.quantity.to_string();
        let designators = item.designator_list();
        self.writer.write_record([
            article.order_code(),
            quantity.as_str(),
            designators.as_str(),
            item.designation.as_str(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|source| PartsyError::Write { source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::ArticleRecord;
    use indexmap::IndexMap;

    fn item(designators: &[&str], quantity: u32, designation: &str) -> Item {
        Item {
            row: 2,
            id: "1".to_string(),
            designators: designators.iter().map(ToString::to_string).collect(),
            package: "0805".to_string(),
            quantity,
            designation: designation.to_string(),
            suppliers: IndexMap::new(),
        }
    }

    #[test]
    fn test_rows_in_call_order() {
        let a = ArticleRecord::new("ORD-1").key("1").into_article(0).unwrap();
        let b = ArticleRecord::new("ORD-2").key("2").into_article(1).unwrap();

        let mut out = Vec::new();
        {
            let mut writer = FarnellWriter::new(&mut out);
            writer
                .output_article(&item(&["R1", "R2"], 12, "10k resistor"), &a)
                .unwrap();
            writer.output_article(&item(&["C1"], 1, "100n"), &b).unwrap();
            writer.finish().unwrap();
        }
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "ORD-1,12,\"R1,R2\",10k resistor\nORD-2,1,C1,100n\n");
    }

    #[test]
    fn test_no_rows_no_output() {
        let mut out = Vec::new();
        let mut writer = FarnellWriter::new(&mut out);
        writer.finish().unwrap();
        drop(writer);
        assert!(out.is_empty());
    }
}
