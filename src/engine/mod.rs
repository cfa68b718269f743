//! Host regex engines.

mod traits;
mod rust;
#[cfg(feature = "fancy-regex")]
mod fancy;

pub use traits::{CompileError, CompiledPattern, RegexEngine, Search, Span};
pub use rust::RustRegexEngine;
#[cfg(feature = "fancy-regex")]
pub use fancy::FancyRegexEngine;

use crate::error::Result;

/// Limits applied when compiling and searching.
///
/// `None` leaves the backend's own default in place. Each backend ignores the
/// limits it has no notion of.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Approximate cap on compiled program size, in bytes.
    pub size_limit: Option<usize>,
    /// Cap on the lazy DFA cache, in bytes.
    pub dfa_size_limit: Option<usize>,
    /// Maximum nesting depth of the pattern syntax tree (`rust` only).
    pub nest_limit: Option<u32>,
    /// Maximum backtracking steps per search (`fancy` only). Unbounded when
    /// unset.
    pub backtrack_limit: Option<usize>,
}

/// Available backends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum EngineKind {
    /// The `regex` crate.
    #[default]
    Rust,
    /// The `fancy-regex` crate (requires the `fancy-regex` feature).
    Fancy,
}

impl EngineKind {
    /// Get the engine name.
    pub fn name(&self) -> &'static str {
        match self {
            EngineKind::Rust => "rust",
            EngineKind::Fancy => "fancy",
        }
    }
}

/// Create an engine of the given kind.
pub fn create_engine(kind: EngineKind, config: &EngineConfig) -> Result<Box<dyn RegexEngine>> {
    match kind {
        EngineKind::Rust => Ok(Box::new(RustRegexEngine::new(config.clone()))),
        #[cfg(feature = "fancy-regex")]
        EngineKind::Fancy => Ok(Box::new(FancyRegexEngine::new(config.clone()))),
        #[cfg(not(feature = "fancy-regex"))]
        EngineKind::Fancy => Err(crate::error::Error::EngineUnavailable {
            engine: kind.name().to_string(),
        }),
    }
}
