//! Row mapping from raw query results to domain types.

use sea_orm::{DbErr, FromQueryResult, QueryResult};

use crate::domain::{Property, PropertyListing, Reservation, ReservationListing, User};

impl FromQueryResult for User {
    fn from_query_result(res: &QueryResult, pre: &str) -> Result<Self, DbErr> {
        Ok(User {
            id: res.try_get(pre, "id")?,
            name: res.try_get(pre, "name")?,
            email: res.try_get(pre, "email")?,
            password: res.try_get(pre, "password")?,
        })
    }
}

impl FromQueryResult for Property {
    fn from_query_result(res: &QueryResult, pre: &str) -> Result<Self, DbErr> {
        Ok(Property {
            id: res.try_get(pre, "id")?,
            owner_id: res.try_get(pre, "owner_id")?,
            title: res.try_get(pre, "title")?,
            description: res.try_get(pre, "description")?,
            thumbnail_photo_url: res.try_get(pre, "thumbnail_photo_url")?,
            cover_photo_url: res.try_get(pre, "cover_photo_url")?,
            cost_per_night: res.try_get(pre, "cost_per_night")?,
            parking_spaces: res.try_get(pre, "parking_spaces")?,
            number_of_bathrooms: res.try_get(pre, "number_of_bathrooms")?,
            number_of_bedrooms: res.try_get(pre, "number_of_bedrooms")?,
            country: res.try_get(pre, "country")?,
            street: res.try_get(pre, "street")?,
            city: res.try_get(pre, "city")?,
            province: res.try_get(pre, "province")?,
            post_code: res.try_get(pre, "post_code")?,
            active: res.try_get(pre, "active")?,
        })
    }
}

impl FromQueryResult for PropertyListing {
    fn from_query_result(res: &QueryResult, pre: &str) -> Result<Self, DbErr> {
        Ok(PropertyListing {
            property: Property::from_query_result(res, pre)?,
            average_rating: res.try_get(pre, "average_rating")?,
        })
    }
}

/// Expects the property columns plus `reservation_id`, `start_date`,
/// `end_date`, `guest_id` and `average_rating`.
impl FromQueryResult for ReservationListing {
    fn from_query_result(res: &QueryResult, pre: &str) -> Result<Self, DbErr> {
        let property = Property::from_query_result(res, pre)?;
        let reservation = Reservation {
            id: res.try_get(pre, "reservation_id")?,
            start_date: res.try_get(pre, "start_date")?,
            end_date: res.try_get(pre, "end_date")?,
            property_id: property.id,
            guest_id: res.try_get(pre, "guest_id")?,
        };

        Ok(ReservationListing {
            reservation,
            property,
            average_rating: res.try_get(pre, "average_rating")?,
        })
    }
}
