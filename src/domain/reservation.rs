//! Reservations and the reviews that feed property ratings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Property;

/// Booking of a property by a guest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Reservation {
    #[serde(default)]
    pub id: i32,
    #[schema(value_type = String, format = Date, example = "2018-09-11")]
    pub start_date: NaiveDate,
    #[schema(value_type = String, format = Date, example = "2018-09-26")]
    pub end_date: NaiveDate,
    pub property_id: i32,
    pub guest_id: i32,
}

impl Reservation {
    /// A stay is complete once its end date has passed.
    pub fn is_completed(&self, today: NaiveDate) -> bool {
        self.end_date < today
    }
}

/// Guest review of a completed stay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyReview {
    #[serde(default)]
    pub id: i32,
    pub guest_id: i32,
    pub property_id: i32,
    pub reservation_id: i32,
    pub rating: i16,
    #[serde(default)]
    pub message: String,
}

/// Reservation joined with the booked property and its rating
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ReservationListing {
    pub reservation: Reservation,
    pub property: Property,
    pub average_rating: Option<f64>,
}

/// Mean of the ratings in `reviews` that belong to `property_id`.
pub fn average_rating<'a, I>(reviews: I, property_id: i32) -> Option<f64>
where
    I: IntoIterator<Item = &'a PropertyReview>,
{
    let (sum, count) = reviews
        .into_iter()
        .filter(|r| r.property_id == property_id)
        .fold((0i64, 0u32), |(sum, count), r| {
            (sum + i64::from(r.rating), count + 1)
        });

    (count > 0).then(|| sum as f64 / f64::from(count))
}
