// src/classify/rules.rs
// =============================================================================
// Product URL classification.
//
// A URL is a "product URL" if it contains any of a fixed list of path
// fragments, e.g. "/product/" or "/dp/". This is a heuristic: we expect
// some false positives (a "/shop/" landing page) and some misses.
//
// Matching rules:
// - plain substring search, anywhere in the URL
// - case-sensitive ("/Product/" does not match "/product/")
// - "/s?k=" is literal text, the '?' is not special
// =============================================================================

use std::collections::HashSet;

/// Built-in rule table, checked in this order.
///
/// The last entry catches Amazon search result pages.
pub const DEFAULT_PRODUCT_PATTERNS: [&str; 10] = [
    "/product/",
    "/item/",
    "/dp/",
    "/gp/",
    "/catalogue/",
    "/goods/",
    "/shop/",
    "/view/",
    "/detail/",
    "/s?k=",
];

/// Pure predicate over an ordered list of substring rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductClassifier {
    patterns: Vec<String>,
}

impl ProductClassifier {
    // Creates a classifier with a custom rule table
    //
    // An empty table is allowed and matches nothing
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// True if `url` contains at least one rule as a literal substring.
    pub fn is_product_url(&self, url: &str) -> bool {
        self.patterns.iter().any(|pattern| url.contains(pattern.as_str()))
    }

    /// Keeps the product URLs out of `urls`, dropping duplicates.
    pub fn filter<I, S>(&self, urls: I) -> HashSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        urls.into_iter()
            .filter(|url| self.is_product_url(url.as_ref()))
            .map(|url| url.as_ref().to_string())
            .collect()
    }
}

impl Default for ProductClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_PRODUCT_PATTERNS)
    }
}
