//! Search: criteria model, filter engine, query parsing, and the search service.

pub mod criteria;
pub mod engine;
pub mod parser;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use criteria::FilterCriteria;
pub use engine::{filter_listings, FilterEngine};
pub use parser::{
    extract_criteria_json, CannedQueryParser, Completion, CompletionQueryParser,
    KeywordQueryParser, QueryParseError, QueryParser,
};
pub use router::{search_router, SearchRequest, SearchResponse, SearchState};
pub use service::{SearchOutcome, SearchService};
