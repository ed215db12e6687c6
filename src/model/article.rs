//! Parts database record.

use indexmap::IndexMap;
use regex::Regex;

/// One purchasable part from the parts database.
///
/// Articles are built by the database loader, which normalizes the
/// designation and package keys and guarantees that every article has at
/// least one match key and that non-ignored articles carry an order code.
#[derive(Debug, Clone)]
pub struct Article {
    /// 0-based position in the database source (the tie-break order)
    pub position: usize,
    pub name: Option<String>,
    pub order_code: Option<String>,
    /// Items matching this article are dropped from the order sheet
    pub ignore: bool,
    pub description: Option<String>,
    pub price: Option<f64>,
    /// Supplier name -> reference code, as written in the database
    pub suppliers: IndexMap<String, String>,
    /// Reference codes matching under any supplier name
    pub keys: Vec<String>,
    /// Normalized designations
    pub designations: Vec<String>,
    /// Pattern tested against the raw item designation
    pub pattern: Option<Regex>,
    /// Normalized package constraint for designation matches
    pub package: Option<String>,
}

impl Article {
    /// Name used in logs and error messages: the article name if set,
    /// otherwise its 1-based position (`#4`).
    #[must_use]
    pub fn label(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("#{}", self.position + 1))
    }

    /// Order code written to the order sheet. Empty for ignored articles
    /// that were stored without one.
    #[must_use]
    pub fn order_code(&self) -> &str {
        self.order_code.as_deref().unwrap_or_default()
    }

    /// Line total for a quantity, when the article has a price.
    #[must_use]
    pub fn line_total(&self, quantity: u32) -> Option<f64> {
        self.price.map(|price| price * f64::from(quantity))
    }
}
