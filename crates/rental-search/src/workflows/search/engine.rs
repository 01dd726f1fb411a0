use crate::workflows::catalog::Listing;

use super::criteria::{non_blank, FilterCriteria};

/// One compiled check derived from a criteria field.
#[derive(Debug, Clone, PartialEq)]
enum Constraint {
    Bedrooms(u8),
    MinPrice(u32),
    MaxPrice(u32),
    CityContains(String),
    NeighborhoodContains(String),
    NearTransit(bool),
    PetFriendly(bool),
    Furnished(bool),
    PropertyType(String),
}

impl Constraint {
    fn admits(&self, listing: &Listing) -> bool {
        match self {
            Constraint::Bedrooms(count) => listing.bedrooms == *count,
            Constraint::MinPrice(min) => listing.price >= *min,
            Constraint::MaxPrice(max) => listing.price <= *max,
            Constraint::CityContains(needle) => {
                listing.location.city.to_lowercase().contains(needle.as_str())
            }
            Constraint::NeighborhoodContains(needle) => listing
                .location
                .neighborhood
                .to_lowercase()
                .contains(needle.as_str()),
            Constraint::NearTransit(flag) => listing.near_transit == *flag,
            Constraint::PetFriendly(flag) => listing.pet_friendly == *flag,
            Constraint::Furnished(flag) => listing.furnished == *flag,
            Constraint::PropertyType(kind) => listing.property_type.to_lowercase() == *kind,
        }
    }
}

/// Stateless matcher built once per search.
///
/// Text criteria are lowercased at construction so each listing only pays for
/// lowercasing its own fields. A listing matches when every constraint admits it;
/// evaluation stops at the first rejection.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterEngine {
    constraints: Vec<Constraint>,
}

impl FilterEngine {
    pub fn new(criteria: &FilterCriteria) -> Self {
        let mut constraints = Vec::new();

        if let Some(count) = criteria.bedrooms {
            constraints.push(Constraint::Bedrooms(count));
        }
        if let Some(min) = criteria.min_price {
            constraints.push(Constraint::MinPrice(min));
        }
        if let Some(max) = criteria.max_price {
            constraints.push(Constraint::MaxPrice(max));
        }
        if let Some(city) = non_blank(&criteria.city) {
            constraints.push(Constraint::CityContains(city.to_lowercase()));
        }
        if let Some(neighborhood) = non_blank(&criteria.neighborhood) {
            constraints.push(Constraint::NeighborhoodContains(
                neighborhood.to_lowercase(),
            ));
        }
        if let Some(flag) = criteria.near_transit {
            constraints.push(Constraint::NearTransit(flag));
        }
        if let Some(flag) = criteria.pet_friendly {
            constraints.push(Constraint::PetFriendly(flag));
        }
        if let Some(flag) = criteria.furnished {
            constraints.push(Constraint::Furnished(flag));
        }
        if let Some(kind) = non_blank(&criteria.property_type) {
            constraints.push(Constraint::PropertyType(kind.to_lowercase()));
        }

        Self { constraints }
    }

    pub fn is_unconstrained(&self) -> bool {
        self.constraints.is_empty()
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        self.constraints
            .iter()
            .all(|constraint| constraint.admits(listing))
    }

    /// Matching listings in input order.
    pub fn apply<'a, I>(&self, listings: I) -> Vec<&'a Listing>
    where
        I: IntoIterator<Item = &'a Listing>,
    {
        listings
            .into_iter()
            .filter(|listing| self.matches(listing))
            .collect()
    }
}

/// Convenience wrapper: `filter(catalog, criteria)`.
pub fn filter_listings<'a>(listings: &'a [Listing], criteria: &FilterCriteria) -> Vec<&'a Listing> {
    FilterEngine::new(criteria).apply(listings)
}
