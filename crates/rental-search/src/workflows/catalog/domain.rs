use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Image reference used when a listing arrives without photos.
pub const PLACEHOLDER_IMAGE: &str = "/images/listing-placeholder.svg";

/// Stable, opaque identifier for a listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(pub String);

impl ListingId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ListingId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ListingId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingLocation {
    pub city: String,
    pub neighborhood: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

/// One rentable property. Field names follow the camelCase shape of catalog exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: ListingId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Monthly rent in whole dollars.
    pub price: u32,
    pub bedrooms: u8,
    pub bathrooms: f32,
    #[serde(default)]
    pub images: Vec<String>,
    pub location: ListingLocation,
    #[serde(default)]
    pub amenities: BTreeSet<String>,
    pub near_transit: bool,
    pub pet_friendly: bool,
    pub furnished: bool,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub review_count: u32,
    pub property_type: String,
    pub square_feet: u32,
    pub available_date: NaiveDate,
}

impl Listing {
    /// First image reference; never empty once the listing has passed catalog ingestion.
    pub fn cover_image(&self) -> &str {
        self.images
            .first()
            .map(String::as_str)
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    pub fn is_studio(&self) -> bool {
        self.bedrooms == 0
    }

    pub fn has_amenity(&self, amenity: &str) -> bool {
        self.amenities
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(amenity))
    }

    /// Short "2 bd / 2 ba" style summary used by listings output.
    pub fn layout_label(&self) -> String {
        let bedrooms = if self.is_studio() {
            "studio".to_string()
        } else {
            format!("{} bd", self.bedrooms)
        };
        format!("{bedrooms} / {} ba", self.bathrooms)
    }
}
