//! Key index over the loaded articles.
//!
//! Candidate lists are always returned sorted by database position, so the
//! tie-break never depends on hash iteration order.

use std::collections::HashMap;

use crate::error::DatabaseFormatError;
use crate::matching::{normalize_code, normalize_supplier, normalize_text};
use crate::model::{Article, Item};

#[derive(Debug, Default)]
pub(crate) struct ArticleIndex {
    /// (normalized supplier, code) -> article position
    by_supplier_ref: HashMap<(String, String), usize>,
    /// Bare key -> article position
    by_key: HashMap<String, usize>,
    /// Normalized designation -> article positions
    by_designation: HashMap<String, Vec<usize>>,
    /// Articles carrying a designation pattern
    with_pattern: Vec<usize>,
}

impl ArticleIndex {
    /// Index the articles, rejecting supplier references and bare keys
    /// that more than one article claims.
    pub(crate) fn build(articles: &[Article]) -> Result<Self, DatabaseFormatError> {
        let mut index = Self::default();

        for article in articles {
            for (supplier, code) in &article.suppliers {
                let key = (normalize_supplier(supplier), code.clone());
                claim(
                    &mut index.by_supplier_ref,
                    key,
                    article,
                    articles,
                    || format!("{supplier}:{code}"),
                )?;
            }

            for key in &article.keys {
                claim(&mut index.by_key, key.clone(), article, articles, || {
                    key.clone()
                })?;
            }

            for designation in &article.designations {
                let positions = index.by_designation.entry(designation.clone()).or_default();
                if !positions.contains(&article.position) {
                    positions.push(article.position);
                }
            }

            if article.pattern.is_some() {
                index.with_pattern.push(article.position);
            }
        }

        Ok(index)
    }

    /// Articles whose supplier references or bare keys equal one of the
    /// item's supplier codes.
    pub(crate) fn supplier_candidates(&self, item: &Item) -> Vec<usize> {
        let mut positions = Vec::new();
        for (supplier, code) in &item.suppliers {
            let code = normalize_code(code);
            if let Some(&pos) = self
                .by_supplier_ref
                .get(&(normalize_supplier(supplier), code.clone()))
            {
                positions.push(pos);
            }
            if let Some(&pos) = self.by_key.get(&code) {
                positions.push(pos);
            }
        }
        sorted(positions)
    }

    /// Articles matching the item's designation, filtered by package.
    pub(crate) fn designation_candidates(&self, articles: &[Article], item: &Item) -> Vec<usize> {
        let designation = normalize_text(&item.designation);
        let package = normalize_text(&item.package);

        let mut positions = Vec::new();
        if !designation.is_empty() {
            if let Some(found) = self.by_designation.get(&designation) {
                positions.extend_from_slice(found);
            }
        }
        positions.extend(self.with_pattern.iter().copied().filter(|&pos| {
            articles[pos]
                .pattern
                .as_ref()
                .is_some_and(|re| re.is_match(item.designation.trim()))
        }));

        positions.retain(|&pos| {
            articles[pos]
                .package
                .as_ref()
                .map_or(true, |wanted| *wanted == package)
        });
        sorted(positions)
    }

    /// Designations claimed by more than one article.
    pub(crate) fn shared_designations(&self) -> Vec<(&str, &[usize])> {
        let mut shared: Vec<_> = self
            .by_designation
            .iter()
            .filter(|(_, positions)| positions.len() > 1)
            .map(|(designation, positions)| (designation.as_str(), positions.as_slice()))
            .collect();
        shared.sort_by(|a, b| a.1.cmp(b.1).then_with(|| a.0.cmp(b.0)));
        shared
    }
}

fn claim<K, F>(
    map: &mut HashMap<K, usize>,
    key: K,
    article: &Article,
    articles: &[Article],
    describe: F,
) -> Result<(), DatabaseFormatError>
where
    K: std::hash::Hash + Eq,
    F: FnOnce() -> String,
{
    match map.get(&key).copied() {
        Some(owner) if owner != article.position => Err(DatabaseFormatError::DuplicateKey {
            key: describe(),
            first: articles[owner].label(),
            second: article.label(),
        }),
        Some(_) => Ok(()),
        None => {
            map.insert(key, article.position);
            Ok(())
        }
    }
}

fn sorted(mut positions: Vec<usize>) -> Vec<usize> {
    positions.sort_unstable();
    positions.dedup();
    positions
}
