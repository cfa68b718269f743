//! # regex-query
//!
//! Evaluate a `{pattern, input}` query against a Rust regex engine and report
//! the outcome in the canonical schema shared by every adapter of a
//! cross-language regex differential-testing harness.
//!
//! ## Quick Start
//!
//! ```
//! use regex_query::{EngineConfig, EngineKind, Evaluator, Query};
//!
//! let evaluator = Evaluator::with_engine(EngineKind::Rust, &EngineConfig::default())?;
//! let result = evaluator.evaluate(&Query::new("a(b)c", "xabcY"))?;
//!
//! assert!(result.valid_pattern());
//! assert!(result.matched());
//! assert_eq!(result.match_contents().capture_groups, vec!["b"]);
//! # Ok::<(), regex_query::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod engine;
pub mod error;
pub mod evaluate;
pub mod query;
pub mod result;

// Re-export main types at crate root
pub use engine::{create_engine, EngineConfig, EngineKind, RegexEngine};
pub use error::{Error, Result};
pub use evaluate::Evaluator;
pub use query::Query;
pub use result::{MatchContents, MatchResult, Outcome};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
