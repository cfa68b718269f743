//! Query evaluation.

use crate::engine::{create_engine, EngineConfig, EngineKind, RegexEngine, Search, Span};
use crate::error::{Error, Result};
use crate::query::Query;
use crate::result::{MatchContents, MatchResult, Outcome};
use std::path::Path;
use tracing::{debug, info};

/// Evaluates queries against one host engine.
pub struct Evaluator {
    engine: Box<dyn RegexEngine>,
}

impl Evaluator {
    /// Create an evaluator over an existing engine.
    pub fn new(engine: Box<dyn RegexEngine>) -> Self {
        Self { engine }
    }

    /// Create an evaluator for the given backend.
    pub fn with_engine(kind: EngineKind, config: &EngineConfig) -> Result<Self> {
        Ok(Self::new(create_engine(kind, config)?))
    }

    /// Name of the backing engine.
    pub fn engine_name(&self) -> &'static str {
        self.engine.name()
    }

    /// Evaluate a query.
    ///
    /// Compile errors and misses are result states. Only an engine giving up
    /// mid-search is an error, since it has no verdict to report.
    pub fn evaluate(&self, query: &Query) -> Result<MatchResult> {
        let outcome = self.classify(query)?;
        Ok(MatchResult::new(query, outcome))
    }

    /// Load a query descriptor and evaluate it.
    pub fn evaluate_file(&self, path: impl AsRef<Path>) -> Result<MatchResult> {
        let query = Query::from_file(path)?;
        self.evaluate(&query)
    }

    fn classify(&self, query: &Query) -> Result<Outcome> {
        let compiled = match self.engine.compile(&query.pattern) {
            Ok(c) => c,
            Err(e) => {
                info!("Invalid pattern /{}/ ({}): {}", query.pattern, self.engine.name(), e);
                return Ok(Outcome::InvalidPattern);
            }
        };

        debug!(
            "Matching pattern /{}/ ({} groups) against input of length {}",
            query.pattern,
            compiled.group_count(),
            query.input.len()
        );

        match compiled.search(&query.input) {
            Search::Found(spans) => {
                let contents = collect_contents(&query.input, &spans);
                debug!("matched: {:?}", contents);
                Ok(Outcome::Matched(contents))
            }
            Search::NotFound => {
                debug!("no match");
                Ok(Outcome::NoMatch)
            }
            Search::Aborted(reason) => Err(Error::SearchAborted {
                engine: self.engine.name().to_string(),
                reason,
            }),
        }
    }
}

impl std::fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Evaluator")
            .field("engine", &self.engine.name())
            .finish()
    }
}

fn collect_contents(input: &str, spans: &[Option<Span>]) -> MatchContents {
    let text = |span: &Option<Span>| {
        span.as_ref()
            .map(|s| input[s.clone()].to_string())
            .unwrap_or_default()
    };

    let mut groups = spans.iter().map(text);
    MatchContents {
        matched_string: groups.next().unwrap_or_default(),
        capture_groups: groups.collect(),
    }
}
