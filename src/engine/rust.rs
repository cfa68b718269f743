//! Backend for the `regex` crate.

use super::traits::{CompileError, CompiledPattern, RegexEngine, Search};
use super::EngineConfig;
use regex::{Regex, RegexBuilder};

/// The `regex` crate: finite automata, linear-time search, no backreferences.
#[derive(Debug, Clone, Default)]
pub struct RustRegexEngine {
    config: EngineConfig,
}

impl RustRegexEngine {
    /// Create an engine with the given limits.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }
}

impl RegexEngine for RustRegexEngine {
    fn compile(&self, pattern: &str) -> Result<Box<dyn CompiledPattern>, CompileError> {
        let mut builder = RegexBuilder::new(pattern);
        if let Some(limit) = self.config.size_limit {
            builder.size_limit(limit);
        }
        if let Some(limit) = self.config.dfa_size_limit {
            builder.dfa_size_limit(limit);
        }
        if let Some(limit) = self.config.nest_limit {
            builder.nest_limit(limit);
        }

        let regex = builder.build().map_err(CompileError::new)?;
        Ok(Box::new(RustRegexPattern { regex }))
    }

    fn name(&self) -> &'static str {
        "rust"
    }
}

struct RustRegexPattern {
    regex: Regex,
}

impl CompiledPattern for RustRegexPattern {
    fn search(&self, haystack: &str) -> Search {
        match self.regex.captures(haystack) {
            Some(captures) => Search::Found(
                captures
                    .iter()
                    .map(|group| group.map(|m| m.range()))
                    .collect(),
            ),
            None => Search::NotFound,
        }
    }

    fn group_count(&self) -> usize {
        self.regex.captures_len() - 1
    }
}
