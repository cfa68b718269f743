//! Error types for regex-query.
//!
//! Only faults of the adapter itself live here. A pattern that fails to
//! compile or does not match is a normal [`MatchResult`](crate::MatchResult)
//! state, not an error.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal adapter errors. Any of these aborts the run without emitting a result.
#[derive(Debug, Error)]
pub enum Error {
    /// The query descriptor file could not be read.
    #[error("failed to load query file {path}: {source}")]
    QueryFileLoad {
        /// Path to the descriptor.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The descriptor is not a JSON object with string `pattern` and `input`.
    #[error("malformed query descriptor {path}: {source}")]
    MalformedQuery {
        /// Path to the descriptor (`<inline>` for in-memory sources).
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The requested backend was not compiled into this binary.
    #[error("engine '{engine}' is not available in this build")]
    EngineUnavailable {
        /// Engine name as given on the command line.
        engine: String,
    },

    /// The engine gave up mid-search, so there is no verdict to report.
    #[error("{engine} engine aborted search: {reason}")]
    SearchAborted {
        /// Engine name.
        engine: String,
        /// Engine-provided reason.
        reason: String,
    },

    /// The result could not be serialized.
    #[error("failed to serialize match result: {source}")]
    Serialize {
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The result could not be written to the output stream.
    #[error("failed to write match result: {source}")]
    Output {
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a malformed-query error for a descriptor that did not come from a file.
    pub fn malformed_inline(source: serde_json::Error) -> Self {
        Self::MalformedQuery {
            path: PathBuf::from("<inline>"),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_path() {
        let err = Error::QueryFileLoad {
            path: PathBuf::from("/tmp/missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/missing.json"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn test_search_aborted_display() {
        let err = Error::SearchAborted {
            engine: "fancy".to_string(),
            reason: "backtrack limit exceeded".to_string(),
        };
        assert_eq!(err.to_string(), "fancy engine aborted search: backtrack limit exceeded");
    }

    #[test]
    fn test_malformed_inline() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::malformed_inline(source);
        assert!(err.to_string().starts_with("malformed query descriptor <inline>"));
    }
}
