//! Match result types and the matcher abstraction.

use std::fmt;

use crate::model::{Article, Item};

/// The tier at which a match was found, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchTier {
    /// Exact supplier reference code
    SupplierReference,
    /// Normalized designation (and package) text
    Designation,
}

impl MatchTier {
    /// Human-readable tier name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SupplierReference => "supplier reference",
            Self::Designation => "designation",
        }
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of a successful lookup.
#[derive(Debug, Clone)]
#[must_use]
pub struct MatchResult<'a> {
    /// The winning article (first by database order within the tier)
    pub article: &'a Article,
    pub tier: MatchTier,
    /// Other articles that satisfied the same tier, in database order
    pub alternatives: Vec<&'a Article>,
}

impl<'a> MatchResult<'a> {
    pub const fn new(article: &'a Article, tier: MatchTier) -> Self {
        Self {
            article,
            tier,
            alternatives: Vec::new(),
        }
    }

    /// More than one article satisfied the winning tier.
    #[must_use]
    pub fn is_ambiguous(&self) -> bool {
        !self.alternatives.is_empty()
    }

    /// Labels of the losing candidates, for warnings.
    #[must_use]
    pub fn alternative_labels(&self) -> Vec<String> {
        self.alternatives.iter().map(|a| a.label()).collect()
    }
}

/// Anything that can resolve an item to an article.
///
/// Implementations must be pure and deterministic: the same item against the
/// same article set always yields the same result, and looking up an item
/// never logs, mutates or fails. Policy (ignore flags, unmatched items)
/// belongs to the caller.
pub trait ArticleMatcher {
    /// Find the article for an item, or `None` when nothing matches.
    fn match_item<'a>(&'a self, item: &Item) -> Option<MatchResult<'a>>;
}
