//! Free text to [`FilterCriteria`] translation.
//!
//! The search service only depends on [`QueryParser`]; concrete parsers range from the
//! offline keyword heuristics to adapters around an external completion service.

mod completion;
mod keyword;

pub use completion::{extract_criteria_json, Completion, CompletionQueryParser, CRITERIA_PROMPT};
pub use keyword::KeywordQueryParser;

use std::collections::HashMap;

use super::criteria::FilterCriteria;

/// Translates a raw query into structured criteria.
pub trait QueryParser: Send + Sync {
    fn parse(&self, query: &str) -> Result<FilterCriteria, QueryParseError>;
}

#[derive(Debug, thiserror::Error)]
pub enum QueryParseError {
    #[error("search query is empty")]
    Empty,
    #[error("parser reply did not contain a JSON object")]
    NoJsonObject,
    #[error("parser reply was not valid criteria JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("query parser unavailable: {0}")]
    Unavailable(String),
}

/// Deterministic parser for tests and demos: fixed replies keyed by exact query text.
#[derive(Debug, Clone, Default)]
pub struct CannedQueryParser {
    replies: HashMap<String, Result<FilterCriteria, String>>,
}

impl CannedQueryParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reply(mut self, query: impl Into<String>, criteria: FilterCriteria) -> Self {
        self.replies.insert(query.into(), Ok(criteria));
        self
    }

    pub fn with_failure(mut self, query: impl Into<String>, reason: impl Into<String>) -> Self {
        self.replies.insert(query.into(), Err(reason.into()));
        self
    }
}

impl QueryParser for CannedQueryParser {
    fn parse(&self, query: &str) -> Result<FilterCriteria, QueryParseError> {
        match self.replies.get(query) {
            Some(Ok(criteria)) => Ok(criteria.clone()),
            Some(Err(reason)) => Err(QueryParseError::Unavailable(reason.clone())),
            None => Err(QueryParseError::Unavailable(format!(
                "no canned reply for '{query}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canned_parser_replays_configured_outcomes() {
        let parser = CannedQueryParser::new()
            .with_reply(
                "two beds",
                FilterCriteria {
                    bedrooms: Some(2),
                    ..FilterCriteria::default()
                },
            )
            .with_failure("timeout", "upstream timed out");

        assert_eq!(parser.parse("two beds").expect("reply").bedrooms, Some(2));
        assert!(matches!(
            parser.parse("timeout"),
            Err(QueryParseError::Unavailable(reason)) if reason == "upstream timed out"
        ));
        assert!(parser.parse("unknown").is_err());
    }
}
