//! Database source records.
//!
//! The parts database is a YAML document with an `articles` sequence. The
//! records here mirror that document one-to-one; [`ArticleRecord::into_article`]
//! validates a record and turns it into a normalized [`Article`].

use indexmap::IndexMap;
use regex::Regex;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::error::DatabaseFormatError;
use crate::matching::{normalize_code, normalize_text};
use crate::model::Article;

/// Root of a parts database file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct DatabaseDocument {
    /// Articles, in tie-break order
    #[serde(default)]
    pub articles: Vec<ArticleRecord>,
}

/// One article as written in the database file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ArticleRecord {
    /// Optional name used in messages
    #[serde(default)]
    pub name: Option<String>,

    /// Supplier order code (required unless `ignore` is set)
    #[serde(default)]
    pub order_code: Option<String>,

    /// Drop matching items from the order sheet
    #[serde(default)]
    pub ignore: bool,

    #[serde(default)]
    pub description: Option<String>,

    /// Unit price
    #[serde(default)]
    pub price: Option<f64>,

    /// Supplier name -> supplier reference code
    #[serde(default)]
    pub suppliers: IndexMap<String, String>,

    /// Reference codes accepted under any supplier name
    #[serde(default)]
    pub keys: Vec<String>,

    /// Designations (compared case- and whitespace-insensitively)
    #[serde(default)]
    pub designations: Vec<String>,

    /// Regular expression tested against the item designation
    #[serde(default)]
    pub pattern: Option<String>,

    /// Package the item must have for a designation match
    #[serde(default)]
    pub package: Option<String>,
}

impl ArticleRecord {
    /// Start a record with an order code.
    #[must_use]
    pub fn new(order_code: impl Into<String>) -> Self {
        Self {
            order_code: Some(order_code.into()),
            ..Self::default()
        }
    }

    /// Start a record for parts that are never ordered.
    #[must_use]
    pub fn ignored() -> Self {
        Self {
            ignore: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn supplier(mut self, supplier: impl Into<String>, code: impl Into<String>) -> Self {
        self.suppliers.insert(supplier.into(), code.into());
        self
    }

    #[must_use]
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.keys.push(key.into());
        self
    }

    #[must_use]
    pub fn designation(mut self, designation: impl Into<String>) -> Self {
        self.designations.push(designation.into());
        self
    }

    #[must_use]
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    #[must_use]
    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    #[must_use]
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Validate and normalize this record into the article at `position`.
    pub fn into_article(self, position: usize) -> Result<Article, DatabaseFormatError> {
        let label = self
            .name
            .clone()
            .unwrap_or_else(|| format!("#{}", position + 1));

        let order_code = self
            .order_code
            .map(|code| code.trim().to_string())
            .filter(|code| !code.is_empty());
        if order_code.is_none() && !self.ignore {
            return Err(DatabaseFormatError::MissingField {
                article: label,
                field: "order_code",
            });
        }

        let mut suppliers = IndexMap::with_capacity(self.suppliers.len());
        for (supplier, code) in self.suppliers {
            let supplier = supplier.trim().to_string();
            let code = normalize_code(&code);
            if supplier.is_empty() || code.is_empty() {
                return Err(empty(&label, "suppliers"));
            }
            suppliers.insert(supplier, code);
        }

        let keys = self
            .keys
            .iter()
            .map(|key| non_empty(normalize_code(key), &label, "keys"))
            .collect::<Result<Vec<_>, _>>()?;

        let designations = self
            .designations
            .iter()
            .map(|d| non_empty(normalize_text(d), &label, "designations"))
            .collect::<Result<Vec<_>, _>>()?;

        let pattern = self
            .pattern
            .map(|pattern| {
                Regex::new(&pattern).map_err(|e| DatabaseFormatError::InvalidPattern {
                    article: label.clone(),
                    pattern: pattern.clone(),
                    message: e.to_string(),
                })
            })
            .transpose()?;

        let package = self
            .package
            .map(|p| non_empty(normalize_text(&p), &label, "package"))
            .transpose()?;

        if suppliers.is_empty() && keys.is_empty() && designations.is_empty() && pattern.is_none()
        {
            return Err(DatabaseFormatError::NoMatchKey { article: label });
        }

        Ok(Article {
            position,
            name: self.name,
            order_code,
            ignore: self.ignore,
            description: self.description,
            price: self.price,
            suppliers,
            keys,
            designations,
            pattern,
            package,
        })
    }
}

fn empty(label: &str, field: &'static str) -> DatabaseFormatError {
    DatabaseFormatError::EmptyValue {
        article: label.to_string(),
        field,
    }
}

fn non_empty(
    value: String,
    label: &str,
    field: &'static str,
) -> Result<String, DatabaseFormatError> {
    if value.is_empty() {
        Err(empty(label, field))
    } else {
        Ok(value)
    }
}
