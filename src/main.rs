// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (tracing)
// 3. Build the HTTP session (one random User-Agent for the whole run)
// 4. Crawl every domain and write the results to a JSON file
// 5. Exit with 0 no matter what: a failed write or a session that can't be
//    built is logged, not turned into an exit code
// =============================================================================

use anyhow::Result;
use clap::Parser;
use product_crawler::cli::Cli;
use product_crawler::output;
use product_crawler::{CrawlOrchestrator, PageLinkCollector, Session};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // There are no distinct exit codes: errors end up in the log only
    if let Err(e) = run(cli).await {
        error!("{:#}", e);
    }
}

// RUST_LOG wins; otherwise info, or debug with --verbose
fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

// The whole crawl
//
// Returns: Err only if the session can't be built (nothing was crawled)
async fn run(cli: Cli) -> Result<()> {
    let session = Session::new(cli.session_config(), &mut rand::thread_rng())?;
    info!(user_agent = session.user_agent(), "Session ready");

    let classifier = cli.classifier();
    let collector = PageLinkCollector::new(session, cli.host_match());
    let orchestrator = CrawlOrchestrator::new(collector, classifier).with_concurrency(cli.concurrency);

    let domains = cli.domains();
    info!(domains = domains.len(), "Starting crawl");

    let result = orchestrator.run(&domains).await;

    if result.is_empty() {
        warn!("No domain yielded any links");
    }
    info!(
        domains = result.len(),
        products = result.product_count(),
        "Crawl finished"
    );

    info!(path = %cli.output.display(), "Writing results");
    match output::write_results(&cli.output, &result) {
        Ok(()) => info!(path = %cli.output.display(), "Product URLs saved"),
        Err(e) => error!(error = %e, "Failed to write output file"),
    }

    Ok(())
}
