// src/crawl/mod.rs
// =============================================================================
// This module handles fetching domains and assembling the crawl result.
//
// Features:
// - One GET per domain, no following of links (single depth)
// - Same-site filtering of the anchors found on each page
// - Per-domain results, with domains that yielded nothing left out
//
// Submodules:
// - collector: fetch one page, extract and filter its links
// - orchestrator: loop over the domains and build the CrawlResult
// - result: the CrawlResult map itself
// =============================================================================

mod collector;
mod orchestrator;
mod result;

pub use collector::{extract_domain_links, HostMatch, PageLinkCollector};
pub use orchestrator::CrawlOrchestrator;
pub use result::CrawlResult;
