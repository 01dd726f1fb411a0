use std::sync::Arc;

use rental_search::workflows::catalog::Catalog;
use rental_search::workflows::search::{
    extract_criteria_json, filter_listings, CannedQueryParser, FilterCriteria,
    KeywordQueryParser, SearchService,
};

fn ids(listings: &[rental_search::workflows::catalog::Listing]) -> Vec<&str> {
    listings.iter().map(|listing| listing.id.as_str()).collect()
}

#[test]
fn two_bedrooms_under_4500_matches_listing_one() {
    let catalog = Catalog::seed();
    let criteria = FilterCriteria {
        bedrooms: Some(2),
        max_price: Some(4500),
        ..FilterCriteria::default()
    };

    let matched: Vec<&str> = filter_listings(catalog.listings(), &criteria)
        .into_iter()
        .map(|listing| listing.id.as_str())
        .collect();
    assert_eq!(matched, vec!["1"]);
}

#[test]
fn assistant_reply_feeds_the_search_service() {
    let reply = "Here are the filters I found:\n```json\n{\"bedrooms\": null, \"maxPrice\": 3000, \
                 \"city\": \"San Francisco\", \"petFriendly\": true, \"propertyType\": \"\"}\n```";
    let criteria = extract_criteria_json(reply).expect("reply contains criteria");

    let parser = CannedQueryParser::new().with_reply("cheap pet friendly sf", criteria);
    let service = SearchService::new(Arc::new(Catalog::seed()), Arc::new(parser));

    let outcome = service.search("cheap pet friendly sf");
    assert!(!outcome.degraded);
    assert_eq!(ids(&outcome.listings), vec!["5"]);
}

#[test]
fn keyword_search_over_seed_catalog() {
    let catalog = Arc::new(Catalog::seed());
    let parser = Arc::new(KeywordQueryParser::from_catalog(&catalog));
    let service = SearchService::new(catalog, parser);

    let studios = service.search("furnished studio near transit");
    assert_eq!(ids(&studios.listings), vec!["2", "6"]);

    let oakland = service.search("pet friendly house in Oakland");
    assert_eq!(ids(&oakland.listings), vec!["3"]);
}

#[test]
fn failed_parse_shows_everything() {
    let parser = CannedQueryParser::new().with_failure("loft", "service unreachable");
    let service = SearchService::new(Arc::new(Catalog::seed()), Arc::new(parser));

    let outcome = service.search("loft");
    assert!(outcome.degraded);
    assert_eq!(ids(&outcome.listings), vec!["1", "2", "3", "4", "5", "6"]);
}
