// src/crawl/result.rs
// =============================================================================
// CrawlResult: domain -> product URLs.
//
// Backed by an IndexMap so keys come out in the order domains were crawled.
// The order of URLs inside one domain's list is not meaningful (they come
// from a HashSet).
//
// A domain that yielded no links at all has NO key here. That is different
// from a key with an empty list, which means "links found, none were
// products".
// =============================================================================

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// Domain -> product URLs, in the order the domains were crawled
//
// #[serde(transparent)] makes it (de)serialize as the plain JSON object
// inside, with no wrapper
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CrawlResult(IndexMap<String, Vec<String>>);

impl CrawlResult {
    pub fn new() -> Self {
        Self::default()
    }

    // Assigns the product list for a domain
    //
    // Parameters:
    //   domain: the domain key, exactly as it was crawled
    //   products: the product URLs found on it (may be empty)
    //
    // Replaces any earlier value; the key keeps its first position
    pub fn insert(&mut self, domain: String, products: Vec<String>) {
        self.0.insert(domain, products);
    }

    pub fn get(&self, domain: &str) -> Option<&Vec<String>> {
        self.0.get(domain)
    }

    pub fn contains_domain(&self, domain: &str) -> bool {
        self.0.contains_key(domain)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    // Domain keys in insertion order
    pub fn domains(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    // Total number of product URLs across all domains
    pub fn product_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }
}

impl FromIterator<(String, Vec<String>)> for CrawlResult {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_overwrites_but_keeps_position() {
        let mut result = CrawlResult::new();
        result.insert("https://a.example".to_string(), vec!["x".to_string()]);
        result.insert("https://b.example".to_string(), vec![]);
        result.insert("https://a.example".to_string(), vec!["y".to_string()]);

        let domains: Vec<_> = result.domains().cloned().collect();
        assert_eq!(domains, vec!["https://a.example", "https://b.example"]);
        assert_eq!(result.get("https://a.example"), Some(&vec!["y".to_string()]));
        assert_eq!(result.product_count(), 1);
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let result: CrawlResult = [(
            "https://a.example".to_string(),
            vec!["https://a.example/product/1".to_string()],
        )]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"https://a.example":["https://a.example/product/1"]}"#);
    }
}
