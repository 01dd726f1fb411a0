use std::sync::Arc;

use super::common::*;
use crate::workflows::search::parser::{KeywordQueryParser, QueryParseError};
use crate::workflows::search::service::SearchService;

#[test]
fn search_applies_parsed_criteria() {
    let service = SearchService::new(catalog(), Arc::new(canned_parser()));

    let outcome = service.search("2 bedroom under $4500");

    assert!(!outcome.degraded);
    assert!(outcome.message.is_none());
    assert_eq!(outcome.criteria, two_bed_under_4500());
    assert_eq!(ids(&outcome.listings), vec!["1"]);
}

#[test]
fn parser_failure_degrades_to_whole_catalog() {
    let service = SearchService::new(catalog(), Arc::new(canned_parser()));

    let outcome = service.search("anything nice");

    assert!(outcome.degraded);
    assert!(outcome.criteria.is_unconstrained());
    assert_eq!(outcome.count(), 6);
    let message = outcome.message.expect("degradation message");
    assert!(message.contains("completion backend timed out"), "{message}");
}

#[test]
fn parse_surfaces_parser_errors() {
    let service = SearchService::new(catalog(), Arc::new(canned_parser()));

    match service.parse("unknown query") {
        Err(QueryParseError::Unavailable(reason)) => assert!(reason.contains("unknown query")),
        other => panic!("expected unavailable parser, got {other:?}"),
    }
}

#[test]
fn keyword_parser_drives_end_to_end_search() {
    let catalog = catalog();
    let parser = Arc::new(KeywordQueryParser::from_catalog(&catalog));
    let service = SearchService::new(catalog, parser);

    let outcome = service.search("2 bedroom apartment under $4500");
    assert!(!outcome.degraded);
    assert_eq!(ids(&outcome.listings), vec!["1"]);

    let empty = service.search("   ");
    assert!(empty.degraded);
    assert_eq!(empty.count(), 6);
}
