// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Every option has a default, so running `product-crawler` with no arguments
// crawls the built-in shop list and writes output.json.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// =============================================================================

use crate::classify::ProductClassifier;
use crate::crawl::HostMatch;
use crate::output::DEFAULT_OUTPUT_FILE;
use crate::session::SessionConfig;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Shops crawled when no domains are given on the command line.
pub const DEFAULT_DOMAINS: [&str; 3] = [
    "https://books.toscrape.com",
    "https://www.amazon.com",
    "https://scrapeme.live/shop",
];

// #[derive(Parser)] tells clap to automatically generate parsing code
#[derive(Parser, Debug)]
#[command(
    name = "product-crawler",
    version,
    about = "Collects product-page links from the front page of each shop",
    long_about = "product-crawler fetches each domain once, keeps the same-site links \
                  that look like product pages and writes them to a JSON file. \
                  Domains that can't be fetched (or have no links) are left out."
)]
pub struct Cli {
    /// Domain URLs to crawl (e.g., https://books.toscrape.com)
    ///
    /// Defaults to a built-in list of three demo shops
    pub domains: Vec<String>,

    /// Where to write the JSON results
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// Use this User-Agent instead of a random browser one
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Product URL pattern (repeatable); replaces the built-in list
    ///
    /// Example: --pattern /p/ --pattern /products/
    #[arg(long = "pattern", value_name = "PATTERN")]
    pub patterns: Vec<String>,

    /// Only keep links whose host equals the domain's host
    ///
    /// By default a link is kept when its host appears anywhere in the
    /// domain string, which is looser
    #[arg(long)]
    pub strict_host: bool,

    /// How many domains to fetch at the same time
    #[arg(long, default_value_t = 1)]
    pub concurrency: usize,

    /// Show every link and product URL found (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    // The domains to crawl: the ones given, or DEFAULT_DOMAINS
    pub fn domains(&self) -> Vec<String> {
        if self.domains.is_empty() {
            DEFAULT_DOMAINS.iter().map(|d| d.to_string()).collect()
        } else {
            self.domains.clone()
        }
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            timeout: Duration::from_secs(self.timeout),
            user_agent: self.user_agent.clone(),
        }
    }

    pub fn classifier(&self) -> ProductClassifier {
        if self.patterns.is_empty() {
            ProductClassifier::default()
        } else {
            ProductClassifier::new(self.patterns.iter().cloned())
        }
    }

    pub fn host_match(&self) -> HostMatch {
        if self.strict_host {
            HostMatch::Exact
        } else {
            HostMatch::Containment
        }
    }
}
