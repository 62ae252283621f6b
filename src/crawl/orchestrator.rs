// src/crawl/orchestrator.rs
// =============================================================================
// Drives the crawl: for each domain, collect links, classify them, record.
//
// Per domain:
//   collect -> empty?  yes -> skip (no key in the result at all)
//                      no  -> filter to product URLs -> insert under domain
//
// Domains never affect each other. With concurrency = 1 (the default) the
// fetches happen strictly one after another. With more, up to N fetches run
// at once, but results are still consumed in input order and only this
// task ever writes to the CrawlResult.
// =============================================================================

use super::collector::PageLinkCollector;
use super::result::CrawlResult;
use crate::classify::ProductClassifier;
use futures::stream::{self, StreamExt};
use tracing::{debug, info};

// Runs collector + classifier over a list of domains
//
// concurrency: how many domain fetches may be in flight at once (>= 1)
#[derive(Debug, Clone)]
pub struct CrawlOrchestrator {
    collector: PageLinkCollector,
    classifier: ProductClassifier,
    concurrency: usize,
}

impl CrawlOrchestrator {
    pub fn new(collector: PageLinkCollector, classifier: ProductClassifier) -> Self {
        Self {
            collector,
            classifier,
            concurrency: 1,
        }
    }

    // Sets how many domains may be fetched at the same time
    //
    // Parameters:
    //   concurrency: maximum fetches in flight; 0 is treated as 1
    //
    // Returns: the orchestrator, for chaining after new()
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    // Crawls every domain once and returns the product URLs per domain
    //
    // Parameters:
    //   domains: absolute base URLs, processed in this order
    //
    // Returns: CrawlResult with one key per domain that yielded any links
    pub async fn run(&self, domains: &[String]) -> CrawlResult {
        let mut result = CrawlResult::new();

        // buffered() (not buffer_unordered) keeps results in input order
        let mut collected = stream::iter(domains)
            .map(|domain| async move { (domain, self.collector.collect(domain).await) })
            .buffered(self.concurrency);

        // Single writer: only this loop touches `result`
        while let Some((domain, links)) = collected.next().await {
            // Zero links (or a failed fetch) -> no key at all, not an empty list
            if links.is_empty() {
                info!(domain = %domain, "No links found, skipping");
                continue;
            }

            // filter() dedupes through a HashSet, so the Vec order is arbitrary
            let products: Vec<String> = self.classifier.filter(&links).into_iter().collect();

            info!(domain = %domain, count = products.len(), "Product URLs found");
            debug!(domain = %domain, ?products, "Product URLs");

            result.insert(domain.clone(), products);
        }

        result
    }
}
