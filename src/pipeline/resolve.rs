//! Resolve stage: items to articles.
//!
//! Applies the lookup policy around [`ArticleMatcher::match_item`]: ignored
//! articles are dropped, unmatched items are collected, ambiguous matches are
//! reported, and every retained item is scaled by the run quantity once.

use crate::error::{Result, UnmatchedItem};
use crate::matching::{ArticleMatcher, MatchTier};
use crate::model::{Article, Item};

/// One line of the order sheet.
#[derive(Debug, Clone)]
pub struct OrderLine<'a> {
    /// The BOM item with its quantity already scaled
    pub item: Item,
    pub article: &'a Article,
    pub tier: MatchTier,
}

/// An item that several articles matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmbiguousMatch {
    pub row: usize,
    pub chosen: String,
    pub alternatives: Vec<String>,
}

/// Outcome of resolving all items of a BOM.
#[derive(Debug, Clone, Default)]
pub struct Resolution<'a> {
    /// Retained lines, in BOM order
    pub lines: Vec<OrderLine<'a>>,
    pub unmatched: Vec<UnmatchedItem>,
    /// Items whose article is flagged `ignore`
    pub ignored: usize,
    pub ambiguous: Vec<AmbiguousMatch>,
}

impl Resolution<'_> {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unmatched.is_empty()
    }
}

/// Match every item and apply the run quantity.
///
/// Every item is visited; unmatched items are recorded in the result so that
/// all of them can be reported together. A scaled quantity that overflows
/// fails the call only when nothing is unmatched, since an incomplete
/// resolution is never emitted anyway.
pub fn resolve<'a, M: ArticleMatcher + ?Sized>(
    matcher: &'a M,
    items: &[Item],
    quantity: u32,
) -> Result<Resolution<'a>> {
    let mut resolution = Resolution::default();
    let mut overflow = None;

    for item in items {
        let Some(found) = matcher.match_item(item) else {
            let unmatched = item.to_unmatched();
            tracing::warn!("No article found for {unmatched}");
            resolution.unmatched.push(unmatched);
            continue;
        };

        if found.is_ambiguous() {
            let alternatives = found.alternative_labels();
            tracing::warn!(
                "Row {} ({}) matches several articles by {}; using {} over {}",
                item.row,
                item.designation,
                found.tier,
                found.article.label(),
                alternatives.join(", ")
            );
            resolution.ambiguous.push(AmbiguousMatch {
                row: item.row,
                chosen: found.article.label(),
                alternatives,
            });
        }

        if found.article.ignore {
            tracing::debug!("Row {} ignored via article {}", item.row, found.article.label());
            resolution.ignored += 1;
            continue;
        }

        match item.scaled(quantity) {
            Ok(scaled) => resolution.lines.push(OrderLine {
                item: scaled,
                article: found.article,
                tier: found.tier,
            }),
            Err(err) => {
                tracing::warn!("Row {}: {err}", item.row);
                overflow.get_or_insert(err);
            }
        }
    }

    tracing::info!(
        "Resolved {} lines, {} ignored, {} unmatched",
        resolution.lines.len(),
        resolution.ignored,
        resolution.unmatched.len()
    );
    match overflow {
        Some(err) if resolution.is_complete() => Err(err),
        _ => Ok(resolution),
    }
}
