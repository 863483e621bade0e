//! Property listings and the search filter applied to them.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::config::CENTS_PER_UNIT;

/// Convert a price in currency units to integer cents.
pub fn to_cents(units: f64) -> i64 {
    (units * CENTS_PER_UNIT as f64).round() as i64
}

fn default_active() -> bool {
    true
}

/// Rental property as stored in the `properties` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Property {
    #[serde(default)]
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = 1)]
    pub owner_id: i32,
    #[schema(example = "Speed lamp")]
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    /// Nightly price in cents
    #[schema(example = 93061)]
    pub cost_per_night: i32,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    #[schema(example = "Canada")]
    pub country: String,
    pub street: String,
    #[schema(example = "Namsub")]
    pub city: String,
    pub province: String,
    pub post_code: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

/// Property together with its average review rating
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PropertyListing {
    #[serde(flatten)]
    pub property: Property,
    /// Mean of all review ratings, absent when the property has no reviews
    #[schema(example = 4.2)]
    pub average_rating: Option<f64>,
}

/// Fields accepted when listing a new property
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NewProperty {
    #[validate(range(min = 1, message = "owner_id must be a positive id"))]
    pub owner_id: i32,
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail_photo_url: String,
    #[serde(default)]
    pub cover_photo_url: String,
    /// Nightly price in cents
    #[validate(range(min = 0, message = "cost_per_night cannot be negative"))]
    pub cost_per_night: i32,
    #[validate(length(min = 1, message = "Street is required"))]
    pub street: String,
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    #[validate(length(min = 1, message = "Province is required"))]
    pub province: String,
    #[validate(length(min = 1, message = "Post code is required"))]
    pub post_code: String,
    #[validate(length(min = 1, message = "Country is required"))]
    pub country: String,
    #[validate(range(min = 0, message = "parking_spaces cannot be negative"))]
    pub parking_spaces: i32,
    #[validate(range(min = 0, message = "number_of_bathrooms cannot be negative"))]
    pub number_of_bathrooms: i32,
    #[validate(range(min = 0, message = "number_of_bedrooms cannot be negative"))]
    pub number_of_bedrooms: i32,
}

impl NewProperty {
    /// Materialize the stored row once an id has been assigned.
    pub fn into_property(self, id: i32) -> Property {
        Property {
            id,
            owner_id: self.owner_id,
            title: self.title,
            description: self.description,
            thumbnail_photo_url: self.thumbnail_photo_url,
            cover_photo_url: self.cover_photo_url,
            cost_per_night: self.cost_per_night,
            parking_spaces: self.parking_spaces,
            number_of_bathrooms: self.number_of_bathrooms,
            number_of_bedrooms: self.number_of_bedrooms,
            country: self.country,
            street: self.street,
            city: self.city,
            province: self.province,
            post_code: self.post_code,
            active: true,
        }
    }
}

/// Optional filters for property search.
///
/// Prices are in currency units; stores compare them against
/// `cost_per_night` after conversion with [`to_cents`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertySearch {
    pub owner_id: Option<i32>,
    pub city: Option<String>,
    pub minimum_price_per_night: Option<f64>,
    pub maximum_price_per_night: Option<f64>,
    pub minimum_rating: Option<f64>,
}

impl PropertySearch {
    /// Drop filters that carry no constraint: blank cities and zero values.
    pub fn normalized(self) -> Self {
        let positive = |v: Option<f64>| v.filter(|v| *v != 0.0);
        Self {
            owner_id: self.owner_id.filter(|id| *id != 0),
            city: self
                .city
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty()),
            minimum_price_per_night: positive(self.minimum_price_per_night),
            maximum_price_per_night: positive(self.maximum_price_per_night),
            minimum_rating: positive(self.minimum_rating),
        }
    }

    /// Lower price bound in cents
    pub fn minimum_cents(&self) -> Option<i64> {
        self.minimum_price_per_night.map(to_cents)
    }

    /// Upper price bound in cents
    pub fn maximum_cents(&self) -> Option<i64> {
        self.maximum_price_per_night.map(to_cents)
    }

    /// `LIKE` pattern matching `city` as a literal substring, for use
    /// with `ESCAPE '\'`.
    pub fn city_pattern(&self) -> Option<String> {
        self.city.as_deref().map(|city| {
            let mut pattern = String::with_capacity(city.len() + 2);
            pattern.push('%');
            for c in city.chars() {
                if matches!(c, '\\' | '%' | '_') {
                    pattern.push('\\');
                }
                pattern.push(c);
            }
            pattern.push('%');
            pattern
        })
    }

    /// True if no filter is set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Whether a property row passes the WHERE-level filters.
    ///
    /// The rating bound applies to the aggregate and is checked separately.
    pub fn matches(&self, property: &Property) -> bool {
        let cost = i64::from(property.cost_per_night);
        self.owner_id.map_or(true, |id| property.owner_id == id)
            && self
                .city
                .as_deref()
                .map_or(true, |city| property.city.contains(city))
            && self.minimum_cents().map_or(true, |min| cost >= min)
            && self.maximum_cents().map_or(true, |max| cost <= max)
    }

    /// Whether an aggregate rating satisfies `minimum_rating`.
    pub fn accepts_rating(&self, average_rating: Option<f64>) -> bool {
        match self.minimum_rating {
            None => true,
            Some(min) => average_rating.map_or(false, |avg| avg >= min),
        }
    }
}
