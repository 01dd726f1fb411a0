use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::domain::{Coordinates, Listing, ListingId, ListingLocation};

struct SeedListing {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    price: u32,
    bedrooms: u8,
    bathrooms: f32,
    images: &'static [&'static str],
    city: &'static str,
    neighborhood: &'static str,
    address: &'static str,
    coordinates: (f64, f64),
    amenities: &'static [&'static str],
    near_transit: bool,
    pet_friendly: bool,
    furnished: bool,
    rating: f32,
    review_count: u32,
    property_type: &'static str,
    square_feet: u32,
    available: (i32, u32, u32),
}

const SEED: [SeedListing; 6] = [
    SeedListing {
        id: "1",
        title: "Modern 2BR Apartment in Mission Bay",
        description: "Bright and spacious 2-bedroom apartment with city views and modern amenities.",
        price: 4200,
        bedrooms: 2,
        bathrooms: 2.0,
        images: &[
            "https://images.unsplash.com/photo-1560448204-e02f11c3d0e2?w=800&h=600&fit=crop",
            "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?w=800&h=600&fit=crop",
        ],
        city: "San Francisco",
        neighborhood: "Mission Bay",
        address: "123 Mission Bay Blvd",
        coordinates: (37.7749, -122.4194),
        amenities: &["Gym", "Pool", "Parking", "Laundry", "Pet Area"],
        near_transit: true,
        pet_friendly: true,
        furnished: false,
        rating: 4.8,
        review_count: 24,
        property_type: "Apartment",
        square_feet: 1200,
        available: (2024, 2, 1),
    },
    SeedListing {
        id: "2",
        title: "Cozy 1BR Studio near BART",
        description: "Walking distance to Montgomery BART station.",
        price: 2800,
        bedrooms: 1,
        bathrooms: 1.0,
        images: &[
            "https://images.unsplash.com/photo-1551963831-b3b1ca40c98e?w=800&h=600&fit=crop",
            "https://images.unsplash.com/photo-1586023492125-27b2c045efd7?w=800&h=600&fit=crop",
        ],
        city: "San Francisco",
        neighborhood: "Financial District",
        address: "456 Montgomery St",
        coordinates: (37.7849, -122.4094),
        amenities: &["Laundry", "Security", "Internet"],
        near_transit: true,
        pet_friendly: false,
        furnished: true,
        rating: 4.5,
        review_count: 18,
        property_type: "Studio",
        square_feet: 650,
        available: (2024, 1, 15),
    },
    SeedListing {
        id: "3",
        title: "Spacious 3BR House in Oakland",
        description: "Family home with a backyard, good for pets.",
        price: 3500,
        bedrooms: 3,
        bathrooms: 2.0,
        images: &[
            "https://images.unsplash.com/photo-1570129477492-45c003edd2be?w=800&h=600&fit=crop",
            "https://images.unsplash.com/photo-1564013799919-ab600027ffc6?w=800&h=600&fit=crop",
        ],
        city: "Oakland",
        neighborhood: "Temescal",
        address: "789 Temescal Ave",
        coordinates: (37.8044, -122.2711),
        amenities: &["Backyard", "Parking", "Washer/Dryer", "Garden"],
        near_transit: true,
        pet_friendly: true,
        furnished: false,
        rating: 4.9,
        review_count: 31,
        property_type: "House",
        square_feet: 1800,
        available: (2024, 3, 1),
    },
    SeedListing {
        id: "4",
        title: "Luxury 2BR in SOMA",
        description: "High-end apartment with premium finishes and rooftop access.",
        price: 5200,
        bedrooms: 2,
        bathrooms: 2.0,
        images: &[
            "https://images.unsplash.com/photo-1502672260266-1c1ef2d93688?w=800&h=600&fit=crop",
            "https://images.unsplash.com/photo-1560185007-cde436f6a4d0?w=800&h=600&fit=crop",
        ],
        city: "San Francisco",
        neighborhood: "SOMA",
        address: "321 Folsom St",
        coordinates: (37.7849, -122.4194),
        amenities: &["Rooftop", "Concierge", "Gym", "Pool", "Valet Parking"],
        near_transit: true,
        pet_friendly: true,
        furnished: true,
        rating: 4.7,
        review_count: 42,
        property_type: "Apartment",
        square_feet: 1400,
        available: (2024, 2, 15),
    },
    SeedListing {
        id: "5",
        title: "Affordable 1BR in Richmond",
        description: "Budget-friendly option near Golden Gate Park.",
        price: 2200,
        bedrooms: 1,
        bathrooms: 1.0,
        images: &[
            "https://images.unsplash.com/photo-1493663284031-b7e3aab21900?w=800&h=600&fit=crop",
            "https://images.unsplash.com/photo-1484154218962-a197022b5858?w=800&h=600&fit=crop",
        ],
        city: "San Francisco",
        neighborhood: "Richmond",
        address: "654 Geary Blvd",
        coordinates: (37.7849, -122.4594),
        amenities: &["Laundry", "Parking"],
        near_transit: false,
        pet_friendly: true,
        furnished: false,
        rating: 4.2,
        review_count: 15,
        property_type: "Apartment",
        square_feet: 800,
        available: (2024, 1, 20),
    },
    SeedListing {
        id: "6",
        title: "Modern Studio in Berkeley",
        description: "Contemporary studio near the UC Berkeley campus.",
        price: 2400,
        bedrooms: 0,
        bathrooms: 1.0,
        images: &[
            "https://images.unsplash.com/photo-1586023492125-27b2c045efd7?w=800&h=600&fit=crop",
            "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?w=800&h=600&fit=crop",
        ],
        city: "Berkeley",
        neighborhood: "Downtown Berkeley",
        address: "987 University Ave",
        coordinates: (37.8715, -122.2730),
        amenities: &["Study Area", "Bike Storage", "Internet", "Laundry"],
        near_transit: true,
        pet_friendly: false,
        furnished: true,
        rating: 4.6,
        review_count: 28,
        property_type: "Studio",
        square_feet: 500,
        available: (2024, 2, 1),
    },
];

/// Bay Area demo listings. Dates that fail to resolve fall back to the Unix epoch
/// rather than dropping the listing.
pub(crate) fn listings() -> Vec<Listing> {
    SEED.iter().map(SeedListing::to_listing).collect()
}

impl SeedListing {
    fn to_listing(&self) -> Listing {
        let (year, month, day) = self.available;
        let (lat, lng) = self.coordinates;

        Listing {
            id: ListingId::from(self.id),
            title: self.title.to_string(),
            description: self.description.to_string(),
            price: self.price,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            images: self.images.iter().map(|url| url.to_string()).collect(),
            location: ListingLocation {
                city: self.city.to_string(),
                neighborhood: self.neighborhood.to_string(),
                address: self.address.to_string(),
                coordinates: Some(Coordinates { lat, lng }),
            },
            amenities: self
                .amenities
                .iter()
                .map(|amenity| amenity.to_string())
                .collect::<BTreeSet<_>>(),
            near_transit: self.near_transit,
            pet_friendly: self.pet_friendly,
            furnished: self.furnished,
            rating: self.rating,
            review_count: self.review_count,
            property_type: self.property_type.to_string(),
            square_feet: self.square_feet,
            available_date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        }
    }
}
