//! Query descriptor loading.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// A `{pattern, input}` pair to evaluate.
///
/// Extra fields in the descriptor are ignored so that orchestrators can
/// annotate queries without breaking adapters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Query {
    /// Regex source text in the engine's native syntax.
    pub pattern: String,
    /// Subject text. May be empty.
    pub input: String,
}

impl Query {
    /// Create a query from a pattern and input.
    pub fn new(pattern: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            input: input.into(),
        }
    }

    /// Load a query descriptor from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading query from {:?}", path);

        let content = std::fs::read(path).map_err(|e| Error::QueryFileLoad {
            path: path.to_path_buf(),
            source: e,
        })?;
        debug!("Query file contents: {}", String::from_utf8_lossy(&content));

        // Encoding errors surface as JSON errors, not load errors.
        let query: Query = serde_json::from_slice(&content).map_err(|e| Error::MalformedQuery {
            path: path.to_path_buf(),
            source: e,
        })?;
        info!("Query: pattern /{}/ input length {}", query.pattern, query.input.len());

        Ok(query)
    }

    /// Parse a query descriptor from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::malformed_inline)
    }
}
