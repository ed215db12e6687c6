//! Parts database.
//!
//! Holds the [`Article`]s loaded from a YAML source and answers "which
//! article corresponds to this item?" through [`ArticleMatcher`]. The set is
//! read-only once loaded.
//!
//! ```yaml
//! articles:
//!   - name: r-10k-0805
//!     order_code: "2447553"
//!     suppliers:
//!       Farnell: "2447553"
//!     designations: ["10k"]
//!     package: "0805"
//!   - name: test-point
//!     designations: ["TP"]
//!     ignore: true
//! ```

mod index;
mod source;

pub use source::{ArticleRecord, DatabaseDocument};

use std::io::Read;
use std::path::Path;

use crate::error::{DatabaseFormatError, PartsyError, Result};
use crate::matching::{ArticleMatcher, MatchResult, MatchTier};
use crate::model::{Article, Item};
use index::ArticleIndex;

/// The loaded article set and its key index.
#[derive(Debug)]
pub struct Database {
    articles: Vec<Article>,
    index: ArticleIndex,
}

impl Database {
    /// Load a database from any reader holding the YAML source.
    pub fn load<R: Read>(mut source: R) -> Result<Self> {
        let mut content = String::new();
        source.read_to_string(&mut content)?;
        Ok(Self::from_yaml(&content)?)
    }

    /// Load a database file, tagging errors with its path.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| PartsyError::io(path, e))?;
        let database =
            Self::from_yaml(&content).map_err(|e| PartsyError::database(Some(path), e))?;
        tracing::debug!(
            "Loaded {} articles ({} ignored) from {}",
            database.len(),
            database.ignored_count(),
            path.display()
        );
        Ok(database)
    }

    /// Parse a YAML database document.
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, DatabaseFormatError> {
        let document: DatabaseDocument =
            serde_yaml::from_str(yaml).map_err(|e| DatabaseFormatError::Syntax(e.to_string()))?;
        Self::from_records(document.articles)
    }

    /// Build a database from records, in tie-break order.
    pub fn from_records(
        records: Vec<ArticleRecord>,
    ) -> std::result::Result<Self, DatabaseFormatError> {
        let articles = records
            .into_iter()
            .enumerate()
            .map(|(position, record)| record.into_article(position))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let index = ArticleIndex::build(&articles)?;
        Ok(Self { articles, index })
    }

    /// All articles, in database order.
    #[must_use]
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Number of articles flagged `ignore`.
    #[must_use]
    pub fn ignored_count(&self) -> usize {
        self.articles.iter().filter(|a| a.ignore).count()
    }

    /// Designations listed by several articles. Items carrying one of these
    /// (and no supplier reference) resolve ambiguously.
    #[must_use]
    pub fn shared_designations(&self) -> Vec<(String, Vec<&Article>)> {
        self.index
            .shared_designations()
            .into_iter()
            .map(|(designation, positions)| {
                (
                    designation.to_string(),
                    positions.iter().map(|&p| &self.articles[p]).collect(),
                )
            })
            .collect()
    }

    fn pick(&self, positions: &[usize], tier: MatchTier) -> Option<MatchResult<'_>> {
        let (&first, rest) = positions.split_first()?;
        let mut result = MatchResult::new(&self.articles[first], tier);
        result.alternatives = rest.iter().map(|&p| &self.articles[p]).collect();
        Some(result)
    }
}

impl ArticleMatcher for Database {
    fn match_item<'a>(&'a self, item: &Item) -> Option<MatchResult<'a>> {
        let by_reference = self.index.supplier_candidates(item);
        if let Some(found) = self.pick(&by_reference, MatchTier::SupplierReference) {
            return Some(found);
        }
        let by_designation = self.index.designation_candidates(&self.articles, item);
        self.pick(&by_designation, MatchTier::Designation)
    }
}
