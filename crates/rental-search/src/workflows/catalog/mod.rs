//! Listing catalog: validated, read-only snapshot of the listings a search runs against.

pub mod domain;
mod importer;
mod seed;

pub use domain::{Coordinates, Listing, ListingId, ListingLocation, PLACEHOLDER_IMAGE};
pub use importer::CatalogImporter;

use std::collections::HashSet;

/// Errors raised while ingesting listings into a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid catalog CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("unsupported catalog format for '{path}' (expected .json or .csv)")]
    UnsupportedFormat { path: String },
    #[error("listing id '{0}' appears more than once")]
    DuplicateId(ListingId),
    #[error("listing '{id}' has an invalid {field}: {reason}")]
    InvalidField {
        id: ListingId,
        field: &'static str,
        reason: String,
    },
}

/// Ordered, immutable listing collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    listings: Vec<Listing>,
}

impl Catalog {
    /// Validates and wraps the listings, keeping their order.
    pub fn new(listings: Vec<Listing>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(listings.len());
        let mut validated = Vec::with_capacity(listings.len());

        for mut listing in listings {
            validate(&listing)?;
            if !seen.insert(listing.id.clone()) {
                return Err(CatalogError::DuplicateId(listing.id));
            }
            if listing.images.is_empty() {
                listing.images.push(PLACEHOLDER_IMAGE.to_string());
            }
            validated.push(listing);
        }

        Ok(Self {
            listings: validated,
        })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Six Bay Area listings used by the demo and as the service default.
    pub fn seed() -> Self {
        Self {
            listings: seed::listings(),
        }
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Listing> {
        self.listings.iter()
    }

    pub fn get(&self, id: &ListingId) -> Option<&Listing> {
        self.listings.iter().find(|listing| &listing.id == id)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Distinct city names in first-seen order.
    pub fn cities(&self) -> Vec<&str> {
        distinct(self.listings.iter().map(|l| l.location.city.as_str()))
    }

    /// Distinct neighborhood names in first-seen order.
    pub fn neighborhoods(&self) -> Vec<&str> {
        distinct(self.listings.iter().map(|l| l.location.neighborhood.as_str()))
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Listing;
    type IntoIter = std::slice::Iter<'a, Listing>;

    fn into_iter(self) -> Self::IntoIter {
        self.listings.iter()
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values
        .filter(|value| !value.trim().is_empty())
        .filter(|value| seen.insert(value.to_lowercase()))
        .collect()
}

fn validate(listing: &Listing) -> Result<(), CatalogError> {
    let invalid = |field: &'static str, reason: &str| CatalogError::InvalidField {
        id: listing.id.clone(),
        field,
        reason: reason.to_string(),
    };

    if listing.id.as_str().trim().is_empty() {
        return Err(invalid("id", "must not be blank"));
    }
    if !listing.bathrooms.is_finite() || listing.bathrooms < 0.0 {
        return Err(invalid("bathrooms", "must be a non-negative number"));
    }
    if !listing.rating.is_finite() || listing.rating < 0.0 {
        return Err(invalid("rating", "must be a non-negative number"));
    }
    if listing.square_feet == 0 {
        return Err(invalid("square footage", "must be positive"));
    }

    Ok(())
}
