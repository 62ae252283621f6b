// src/output.rs
// =============================================================================
// Writes the crawl result to disk as JSON.
//
// Format: one JSON object, domain -> [product URLs], indented with 4 spaces.
// No trailing newline.
//
// The JSON is built in memory first and written in one go, so a
// serialization problem never leaves a half-written file behind.
// =============================================================================

use crate::crawl::CrawlResult;
use crate::error::WriteError;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::Path;

pub const DEFAULT_OUTPUT_FILE: &str = "output.json";

// Serializes the result with a 4-space indent
//
// Parameters:
//   result: the crawl result to serialize
//
// Returns: the JSON text, without a trailing newline
pub fn to_json_string(result: &CrawlResult) -> Result<String, WriteError> {
    let mut buffer = Vec::new();

    // to_string_pretty() would indent with 2 spaces, so set up the
    // formatter ourselves
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    result.serialize(&mut serializer)?;

    // serde_json only ever emits valid UTF-8
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

// Writes the result to `path`, replacing any existing file
//
// Parameters:
//   path: where to write (e.g., "output.json")
//   result: the crawl result
//
// Returns: Ok(()) or a WriteError naming the path that failed
pub fn write_results(path: &Path, result: &CrawlResult) -> Result<(), WriteError> {
    // Serialize first, so a failure here never leaves a partial file
    let json = to_json_string(result)?;

    std::fs::write(path, json).map_err(|source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CrawlResult {
        [(
            "https://a.example".to_string(),
            vec!["https://a.example/product/1".to_string()],
        )]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_four_space_indent() {
        let json = to_json_string(&sample()).unwrap();
        let expected = "{\n    \"https://a.example\": [\n        \"https://a.example/product/1\"\n    ]\n}";
        assert_eq!(json, expected);
    }

    #[test]
    fn test_empty_result_is_empty_object() {
        assert_eq!(to_json_string(&CrawlResult::new()).unwrap(), "{}");
    }

    #[test]
    fn test_write_then_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_OUTPUT_FILE);

        write_results(&path, &sample()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let read_back: CrawlResult = serde_json::from_str(&contents).unwrap();
        assert_eq!(read_back, sample());
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("output.json");

        let err = write_results(&path, &sample()).unwrap_err();
        assert!(matches!(err, WriteError::Io { .. }));
    }
}
