//! Backend for the `fancy-regex` crate.
//!
//! A backtracking engine layered over `regex`. It accepts backreferences and
//! lookaround, and can give up on a search once its backtrack limit is hit.

use super::traits::{CompileError, CompiledPattern, RegexEngine, Search};
use super::EngineConfig;
use fancy_regex::{Regex, RegexBuilder};

/// The `fancy-regex` backtracking engine.
#[derive(Debug, Clone, Default)]
pub struct FancyRegexEngine {
    config: EngineConfig,
}

impl FancyRegexEngine {
    /// Create an engine with the given limits.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }
}

impl RegexEngine for FancyRegexEngine {
    fn compile(&self, pattern: &str) -> Result<Box<dyn CompiledPattern>, CompileError> {
        let mut builder = RegexBuilder::new(pattern);
        // Unbounded unless a limit is configured.
        builder.backtrack_limit(self.config.backtrack_limit.unwrap_or(usize::MAX));
        if let Some(limit) = self.config.size_limit {
            builder.delegate_size_limit(limit);
        }
        if let Some(limit) = self.config.dfa_size_limit {
            builder.delegate_dfa_size_limit(limit);
        }

        let regex = builder.build().map_err(CompileError::new)?;
        Ok(Box::new(FancyRegexPattern { regex }))
    }

    fn name(&self) -> &'static str {
        "fancy"
    }
}

struct FancyRegexPattern {
    regex: Regex,
}

impl CompiledPattern for FancyRegexPattern {
    fn search(&self, haystack: &str) -> Search {
        match self.regex.captures(haystack) {
            Ok(Some(captures)) => Search::Found(
                (0..captures.len())
                    .map(|i| captures.get(i).map(|m| m.start()..m.end()))
                    .collect(),
            ),
            Ok(None) => Search::NotFound,
            Err(e) => Search::Aborted(e.to_string()),
        }
    }

    fn group_count(&self) -> usize {
        self.regex.captures_len() - 1
    }
}
