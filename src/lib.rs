// src/lib.rs
// =============================================================================
// product-crawler as a library.
//
// The binary in main.rs is a thin wrapper around these modules:
//   CrawlOrchestrator -> PageLinkCollector -> ProductClassifier -> CrawlResult
//   and output::write_results for the JSON file
// =============================================================================

pub mod classify;
pub mod cli;
pub mod crawl;
pub mod error;
pub mod output;
pub mod session;

pub use classify::ProductClassifier;
pub use crawl::{CrawlOrchestrator, CrawlResult, HostMatch, PageLinkCollector};
pub use error::{FetchError, SessionError, WriteError};
pub use session::{Session, SessionConfig};
