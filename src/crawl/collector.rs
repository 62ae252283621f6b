// src/crawl/collector.rs
// =============================================================================
// This module collects the links found on one domain's front page.
//
// How it works:
// 1. GET the domain URL once (bounded by the session timeout)
// 2. Parse the HTML and select every <a href="...">
// 3. Resolve each href against the domain URL
// 4. Keep only links whose host passes the host check
//
// Failures are not errors for the caller:
// - network error, timeout or non-2xx status -> warning + empty Vec
// - an href that can't be resolved -> silently skipped
// So "no links on the page" and "couldn't fetch the page" look the same.
//
// Rust concepts:
// - Result<T, E> internally, Vec<T> at the boundary
// - match with early returns
// =============================================================================

use crate::error::FetchError;
use crate::session::Session;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{debug, info, warn};
use url::Url;

// How a discovered link's host is compared with the domain being crawled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HostMatch {
    /// Keep the link when its netloc (host, plus ":port" if any) appears
    /// anywhere inside the domain string. Loose, false positives included.
    #[default]
    Containment,
    /// Keep the link only when its host equals the domain's host
    Exact,
}

// Fetches one domain's page and pulls the same-site links out of it
//
// Holds the session (shared HTTP client + User-Agent) and the host check
// to apply to every link found
#[derive(Debug, Clone)]
pub struct PageLinkCollector {
    session: Session,
    host_match: HostMatch,
}

impl PageLinkCollector {
    pub fn new(session: Session, host_match: HostMatch) -> Self {
        Self { session, host_match }
    }

    // Fetches `domain` and returns the same-site links found on it
    //
    // Parameters:
    //   domain: absolute base URL of the shop (e.g., "https://books.toscrape.com")
    //
    // Returns: absolute URLs in document order
    //   Empty if the domain is not a valid URL or the fetch fails
    pub async fn collect(&self, domain: &str) -> Vec<String> {
        // Reject garbage before touching the network
        if let Err(e) = Url::parse(domain) {
            warn!(domain, error = %e, "Skipping invalid domain URL");
            return Vec::new();
        }

        info!(domain, "Fetching links");

        // Any fetch failure is logged and treated like a page without links
        let html = match fetch_page(self.session.client(), domain).await {
            Ok(html) => html,
            Err(e) => {
                warn!(domain, error = %e, "Error fetching links");
                return Vec::new();
            }
        };

        let links = extract_domain_links(&html, domain, self.host_match);

        info!(domain, count = links.len(), "Found links");
        debug!(domain, ?links, "Fetched links");

        links
    }
}

// Fetches a web page and returns its HTML content
//
// Parameters:
//   client: the session's HTTP client (timeout and User-Agent already set)
//   url: the page to GET
//
// Returns: the response body, or FetchError::Status for non-2xx responses
async fn fetch_page(client: &Client, url: &str) -> Result<String, FetchError> {
    // Network errors (DNS, connect, timeout) come out of send() via ?
    let response = client.get(url).send().await?;

    // A response arrived, but only 2xx counts as a page
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    // Reading the body can still fail (connection dropped, timeout)
    let html = response.text().await?;
    Ok(html)
}

// Extracts the links in `html` that belong to `domain`
//
// Parameters:
//   html: the page content
//   domain: the URL the page was fetched from (base for relative hrefs)
//   host_match: which host check to apply
//
// Returns: absolute URLs in document order, duplicates included
pub fn extract_domain_links(html: &str, domain: &str, host_match: HostMatch) -> Vec<String> {
    let mut links = Vec::new();

    // Parse the domain once; every href is resolved against it
    let base = match Url::parse(domain) {
        Ok(url) => url,
        Err(_) => return links,
    };

    // "a[href]" means "all <a> tags that have an href attribute"
    let Ok(selector) = Selector::parse("a[href]") else {
        return links;
    };

    // html5ever is forgiving: broken markup still gives us a document
    let document = Html::parse_document(html);

    for element in document.select(&selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        // Relative or absolute, join() gives back an absolute URL
        // Unresolvable hrefs are dropped without a word
        let Ok(absolute) = base.join(href) else {
            continue;
        };

        if host_matches(&absolute, &base, domain, host_match) {
            links.push(absolute.to_string());
        }
    }

    links
}

// Decides whether `link` counts as part of the domain being crawled
//
// Parameters:
//   link: the resolved link
//   base: the parsed domain URL
//   domain: the domain exactly as it was given to us
//   host_match: which check to apply
//
// Containment looks in both the raw domain and its normalized form, because
// url::Url lowercases hosts and turns IDN hosts into punycode. Without the
// second lookup "https://Shop.Example" would reject its own links.
fn host_matches(link: &Url, base: &Url, domain: &str, host_match: HostMatch) -> bool {
    match host_match {
        HostMatch::Containment => match netloc(link) {
            Some(netloc) => domain.contains(&netloc) || base.as_str().contains(&netloc),
            // Deliberate break from pure substring semantics: an empty netloc
            // would match every domain, so mailto:, javascript: etc. are dropped
            None => false,
        },
        HostMatch::Exact => link.host_str().is_some() && link.host_str() == base.host_str(),
    }
}

// host[:port] of a URL, None when it has no host
//
// url::Url drops default ports, so "https://a.example:443" gives "a.example"
fn netloc(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}
