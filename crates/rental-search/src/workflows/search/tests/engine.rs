use super::common::*;
use crate::workflows::catalog::Catalog;
use crate::workflows::search::criteria::FilterCriteria;
use crate::workflows::search::engine::{filter_listings, FilterEngine};

#[test]
fn empty_criteria_return_whole_catalog_in_order() {
    let catalog = catalog();
    let matched = FilterEngine::new(&FilterCriteria::unconstrained()).apply(catalog.iter());
    assert_eq!(ids(matched), vec!["1", "2", "3", "4", "5", "6"]);
}

#[test]
fn empty_catalog_yields_nothing() {
    let catalog = Catalog::empty();
    assert!(filter_listings(catalog.listings(), &two_bed_under_4500()).is_empty());
    assert!(filter_listings(catalog.listings(), &FilterCriteria::default()).is_empty());
}

#[test]
fn max_price_partitions_catalog() {
    let catalog = catalog();
    let criteria = FilterCriteria {
        max_price: Some(3500),
        ..FilterCriteria::default()
    };
    let engine = FilterEngine::new(&criteria);

    for listing in catalog.iter() {
        assert_eq!(engine.matches(listing), listing.price <= 3500, "{}", listing.id);
    }
    assert_eq!(ids(engine.apply(catalog.iter())), vec!["2", "3", "5", "6"]);
}

#[test]
fn price_bounds_are_inclusive() {
    let catalog = catalog();
    let criteria = FilterCriteria {
        min_price: Some(2800),
        max_price: Some(4200),
        ..FilterCriteria::default()
    };
    assert_eq!(ids(filter_listings(catalog.listings(), &criteria)), vec!["1", "2", "3"]);
}

#[test]
fn city_matches_case_insensitive_substring() {
    let catalog = catalog();
    let criteria = FilterCriteria {
        city: Some("san".to_string()),
        ..FilterCriteria::default()
    };
    assert_eq!(
        ids(filter_listings(catalog.listings(), &criteria)),
        vec!["1", "2", "4", "5"]
    );

    let criteria = FilterCriteria {
        neighborhood: Some("BERKELEY".to_string()),
        ..FilterCriteria::default()
    };
    assert_eq!(ids(filter_listings(catalog.listings(), &criteria)), vec!["6"]);
}

#[test]
fn unset_pet_flag_keeps_both_kinds_and_false_excludes_pet_friendly() {
    let catalog = catalog();

    let unset = filter_listings(catalog.listings(), &FilterCriteria::default());
    assert!(unset.iter().any(|listing| listing.pet_friendly));
    assert!(unset.iter().any(|listing| !listing.pet_friendly));

    let no_pets = FilterCriteria {
        pet_friendly: Some(false),
        ..FilterCriteria::default()
    };
    let matched = filter_listings(catalog.listings(), &no_pets);
    assert!(matched.iter().all(|listing| !listing.pet_friendly));
    assert_eq!(ids(matched), vec!["2", "6"]);
}

#[test]
fn property_type_is_exact_and_case_insensitive() {
    let catalog = catalog();
    let criteria = FilterCriteria {
        property_type: Some("studio".to_string()),
        ..FilterCriteria::default()
    };
    assert_eq!(ids(filter_listings(catalog.listings(), &criteria)), vec!["2", "6"]);

    let partial = FilterCriteria {
        property_type: Some("stud".to_string()),
        ..FilterCriteria::default()
    };
    assert!(filter_listings(catalog.listings(), &partial).is_empty());
}

#[test]
fn blank_text_criteria_do_not_filter() {
    let catalog = catalog();
    let criteria = FilterCriteria {
        city: Some(String::new()),
        property_type: Some(" ".to_string()),
        ..FilterCriteria::default()
    };
    let engine = FilterEngine::new(&criteria);
    assert!(engine.is_unconstrained());
    assert_eq!(engine.apply(catalog.iter()).len(), catalog.len());
}

#[test]
fn seed_catalog_two_bedrooms_under_4500_returns_listing_one() {
    let catalog = catalog();
    let matched = filter_listings(catalog.listings(), &two_bed_under_4500());
    assert_eq!(ids(matched), vec!["1"]);
}

#[test]
fn combined_constraints_are_a_conjunction() {
    let catalog = catalog();
    let criteria = FilterCriteria {
        city: Some("San Francisco".to_string()),
        near_transit: Some(true),
        furnished: Some(true),
        ..FilterCriteria::default()
    };
    let matched = filter_listings(catalog.listings(), &criteria);
    assert_eq!(ids(matched), vec!["2", "4"]);

    // Same result regardless of which single constraint is checked first.
    let by_parts: Vec<String> = ids(catalog.iter().filter(|listing| {
        listing.furnished
            && listing.near_transit
            && listing.location.city.to_lowercase().contains("san francisco")
    }));
    assert_eq!(by_parts, vec!["2", "4"]);
}

#[test]
fn filtering_does_not_mutate_catalog() {
    let catalog = catalog();
    let before = catalog.listings().to_vec();
    let _ = filter_listings(catalog.listings(), &two_bed_under_4500());
    assert_eq!(catalog.listings(), before.as_slice());
}
