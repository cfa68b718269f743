//! Engine trait definitions.

use std::ops::Range;
use thiserror::Error;

/// Byte span of a match or capture group within the haystack.
pub type Span = Range<usize>;

/// A pattern the engine refused to compile.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct CompileError {
    /// Engine-provided reason.
    pub message: String,
}

impl CompileError {
    /// Create a compile error from any displayable engine error.
    pub fn new(message: impl ToString) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Result of a single search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Search {
    /// The pattern matched. Index 0 is the overall match, then one entry per
    /// capturing group; `None` for groups that did not participate.
    Found(Vec<Option<Span>>),
    /// The pattern did not match anywhere in the haystack.
    NotFound,
    /// The engine gave up before reaching a verdict, e.g. on an explicit
    /// backtrack limit.
    Aborted(String),
}

/// A host regex engine.
pub trait RegexEngine: Send + Sync {
    /// Compile a pattern.
    fn compile(&self, pattern: &str) -> Result<Box<dyn CompiledPattern>, CompileError>;

    /// Get the engine name.
    fn name(&self) -> &'static str;
}

/// A compiled pattern ready to search.
pub trait CompiledPattern: Send + Sync {
    /// Perform one unanchored, leftmost search with capture groups.
    fn search(&self, haystack: &str) -> Search;

    /// Number of capturing groups, not counting the implicit group 0.
    fn group_count(&self) -> usize;
}
