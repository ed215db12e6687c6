//! Article matching.
//!
//! Matching is exact after normalization. There are two tiers, tried in
//! order:
//!
//! 1. **Supplier reference**: a supplier code on the item equals a supplier
//!    reference (or bare key) of an article.
//! 2. **Designation**: the normalized item designation equals one of the
//!    article's designations, or the article's pattern matches it, subject
//!    to the article's package constraint.
//!
//! When several articles satisfy the winning tier, the one that comes first
//! in the database wins and the others are reported as alternatives.

mod traits;

pub use traits::{ArticleMatcher, MatchResult, MatchTier};

/// Normalize free text for comparison: trimmed, lowercased, inner
/// whitespace collapsed to single spaces.
#[must_use]
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalize a supplier name (`Farnell`, ` farnell ` -> `farnell`).
#[must_use]
pub fn normalize_supplier(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Normalize a supplier reference code. Codes are case-sensitive, only
/// surrounding whitespace is dropped.
#[must_use]
pub fn normalize_code(code: &str) -> String {
    code.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("  10k   Resistor\t1% "), "10k resistor 1%");
        assert_eq!(normalize_text(""), "");
        assert_eq!(normalize_text("   "), "");
    }

    #[test]
    fn test_normalize_supplier() {
        assert_eq!(normalize_supplier(" Farnell "), "farnell");
    }

    #[test]
    fn test_normalize_code_keeps_case() {
        assert_eq!(normalize_code(" RC0805fr-0710KL "), "RC0805fr-0710KL");
    }
}
