use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use super::domain::{Coordinates, Listing, ListingId, ListingLocation};
use super::{Catalog, CatalogError};

/// Loads catalog snapshots from JSON or CSV exports.
pub struct CatalogImporter;

impl CatalogImporter {
    /// Picks the parser from the file extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Self::from_json_reader(File::open(path)?),
            Some("csv") => Self::from_csv_reader(File::open(path)?),
            _ => Err(CatalogError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }

    /// Expects a JSON array of listings.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Catalog, CatalogError> {
        let listings: Vec<Listing> = serde_json::from_reader(reader)?;
        Catalog::new(listings)
    }

    /// One listing per row; `amenities` and `images` are `;`-separated.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Catalog, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut listings = Vec::new();
        for row in csv_reader.deserialize::<CsvListingRow>() {
            listings.push(row?.into_listing()?);
        }

        Catalog::new(listings)
    }
}

#[derive(Debug, Deserialize)]
struct CsvListingRow {
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    price: u32,
    bedrooms: u8,
    bathrooms: f32,
    city: String,
    #[serde(default)]
    neighborhood: String,
    #[serde(default)]
    address: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    lat: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    lng: Option<f64>,
    #[serde(default)]
    amenities: String,
    near_transit: bool,
    pet_friendly: bool,
    furnished: bool,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    rating: Option<f32>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    review_count: Option<u32>,
    property_type: String,
    square_feet: u32,
    available_date: String,
    #[serde(default)]
    images: String,
}

impl CsvListingRow {
    fn into_listing(self) -> Result<Listing, CatalogError> {
        let id = ListingId::new(self.id);
        let available_date = NaiveDate::parse_from_str(&self.available_date, "%Y-%m-%d")
            .map_err(|err| CatalogError::InvalidField {
                id: id.clone(),
                field: "available date",
                reason: format!("'{}' is not YYYY-MM-DD ({err})", self.available_date),
            })?;

        let coordinates = match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(Coordinates { lat, lng }),
            _ => None,
        };

        Ok(Listing {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            images: split_list(&self.images),
            location: ListingLocation {
                city: self.city,
                neighborhood: self.neighborhood,
                address: self.address,
                coordinates,
            },
            amenities: split_list(&self.amenities)
                .into_iter()
                .collect::<BTreeSet<_>>(),
            near_transit: self.near_transit,
            pet_friendly: self.pet_friendly,
            furnished: self.furnished,
            rating: self.rating.unwrap_or_default(),
            review_count: self.review_count.unwrap_or_default(),
            property_type: self.property_type,
            square_feet: self.square_feet,
            available_date,
        })
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
