//! Canonical match result and its serialization.
//!
//! Field names and nesting are shared with every other language adapter in
//! the harness, so they must not change.

use crate::error::{Error, Result};
use crate::query::Query;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Text of a successful match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchContents {
    /// Text of the overall match (group 0).
    pub matched_string: String,
    /// One entry per capturing group, in declaration order. Groups that did
    /// not participate are reported as empty strings.
    pub capture_groups: Vec<String>,
}

/// Classified outcome of evaluating a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The engine refused to compile the pattern.
    InvalidPattern,
    /// The pattern compiled but did not match.
    NoMatch,
    /// The pattern matched.
    Matched(MatchContents),
}

/// Engine-comparable result record.
///
/// Built only from an [`Outcome`], so an invalid pattern can never be
/// reported as matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pattern: String,
    input: String,
    input_length: usize,
    valid_pattern: bool,
    matched: bool,
    match_contents: MatchContents,
}

impl MatchResult {
    /// Build the result record for a query and its outcome.
    pub fn new(query: &Query, outcome: Outcome) -> Self {
        let (valid_pattern, matched, match_contents) = match outcome {
            Outcome::InvalidPattern => (false, false, MatchContents::default()),
            Outcome::NoMatch => (true, false, MatchContents::default()),
            Outcome::Matched(contents) => (true, true, contents),
        };

        Self {
            pattern: query.pattern.clone(),
            input: query.input.clone(),
            // UTF-8 bytes: the unit the host engines index by.
            input_length: query.input.len(),
            valid_pattern,
            matched,
            match_contents,
        }
    }

    /// The pattern, echoed from the query.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The input, echoed from the query.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Length of the input in UTF-8 bytes.
    pub fn input_length(&self) -> usize {
        self.input_length
    }

    /// Whether the pattern compiled.
    pub fn valid_pattern(&self) -> bool {
        self.valid_pattern
    }

    /// Whether the pattern matched.
    pub fn matched(&self) -> bool {
        self.matched
    }

    /// Match text. The placeholder value unless [`matched`](Self::matched).
    pub fn match_contents(&self) -> &MatchContents {
        &self.match_contents
    }

    /// Render as a single line of JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::Serialize { source: e })
    }

    /// Write the JSON line, newline terminated, and flush.
    pub fn write_to<W: Write>(&self, mut out: W) -> Result<()> {
        let json = self.to_json()?;
        writeln!(out, "{}", json).map_err(|e| Error::Output { source: e })?;
        out.flush().map_err(|e| Error::Output { source: e })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn as_value(result: &MatchResult) -> Value {
        serde_json::from_str(&result.to_json().unwrap()).unwrap()
    }

    #[test]
    fn test_matched_shape() {
        let query = Query::new("a(b)c", "xabcY");
        let result = MatchResult::new(
            &query,
            Outcome::Matched(MatchContents {
                matched_string: "abc".to_string(),
                capture_groups: vec!["b".to_string()],
            }),
        );
        assert_eq!(
            as_value(&result),
            json!({
                "pattern": "a(b)c",
                "input": "xabcY",
                "inputLength": 5,
                "validPattern": true,
                "matched": true,
                "matchContents": {
                    "matchedString": "abc",
                    "captureGroups": ["b"]
                }
            })
        );
    }

    #[test]
    fn test_invalid_pattern_placeholder() {
        let query = Query::new("a(b", "abc");
        let result = MatchResult::new(&query, Outcome::InvalidPattern);
        assert!(!result.valid_pattern());
        assert!(!result.matched());
        assert_eq!(result.match_contents(), &MatchContents::default());

        let value = as_value(&result);
        assert_eq!(value["matchContents"], json!({"matchedString": "", "captureGroups": []}));
    }

    #[test]
    fn test_no_match_placeholder() {
        let result = MatchResult::new(&Query::new("a(b)c", "xyz"), Outcome::NoMatch);
        assert!(result.valid_pattern());
        assert!(!result.matched());
        assert_eq!(result.match_contents(), &MatchContents::default());
    }

    #[test]
    fn test_input_length_bytes() {
        let result = MatchResult::new(&Query::new("x", "héllo"), Outcome::NoMatch);
        assert_eq!(result.input_length(), 6);
    }

    #[test]
    fn test_write_to() {
        let result = MatchResult::new(&Query::new("", ""), Outcome::NoMatch);
        let mut out = Vec::new();
        result.write_to(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with('\n'));
        assert_eq!(text.lines().count(), 1);

        let parsed: MatchResult = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(parsed, result);
    }

    #[test]
    fn test_non_ascii_escaping_is_stable() {
        let result = MatchResult::new(&Query::new("é", "\u{1F600}\n\""), Outcome::NoMatch);
        assert_eq!(result.to_json().unwrap(), result.to_json().unwrap());
        assert!(result.to_json().unwrap().contains(r#""input":"😀\n\"""#));
    }
}
