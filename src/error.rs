// src/error.rs
// =============================================================================
// Typed errors for the crawler.
//
// None of these errors end the program once a crawl has started:
// - FetchError: a domain could not be fetched -> that domain yields no links
// - WriteError: output.json could not be written -> we log it and move on
// - SessionError: the HTTP client could not be built -> nothing to crawl with
//
// Rust concepts:
// - thiserror: derives std::error::Error and Display from attributes
// - #[from]: generates From impls so the ? operator converts errors for us
// =============================================================================

use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

/// A single page fetch failed at the network or HTTP-status layer.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, DNS, TLS, timeout or body read failure
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered, but not with a 2xx status
    #[error("HTTP {0}")]
    Status(StatusCode),
}

/// The result file could not be produced.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("could not serialize results: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("could not write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("could not build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = FetchError::Status(StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "HTTP 404 Not Found");
    }

    #[test]
    fn test_io_error_names_path() {
        let err = WriteError::Io {
            path: PathBuf::from("out/output.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let message = err.to_string();
        assert!(message.contains("out/output.json"));
        assert!(message.contains("missing"));
    }
}
