//! Property handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::extractors::{QueryParams, ValidatedJson};
use crate::api::AppState;
use crate::domain::{NewProperty, Property, PropertyListing, PropertySearch};
use crate::errors::AppResult;
use crate::types::empty_string_as_none;

/// Search filters; blank fields are ignored
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PropertyQuery {
    /// Only listings owned by this user
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub owner_id: Option<i32>,
    /// Substring of the city name
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub city: Option<String>,
    /// Lowest nightly price, in currency units
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub minimum_price_per_night: Option<f64>,
    /// Highest nightly price, in currency units
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub maximum_price_per_night: Option<f64>,
    /// Lowest average review rating
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub minimum_rating: Option<f64>,
    /// Maximum number of results (default 10, at most 100)
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub limit: Option<u64>,
}

impl PropertyQuery {
    fn split(self) -> (PropertySearch, Option<u64>) {
        let search = PropertySearch {
            owner_id: self.owner_id,
            city: self.city,
            minimum_price_per_night: self.minimum_price_per_night,
            maximum_price_per_night: self.maximum_price_per_night,
            minimum_rating: self.minimum_rating,
        };
        (search, self.limit)
    }
}

/// Create property routes
pub fn property_routes() -> Router<AppState> {
    Router::new().route("/", get(list_properties).post(create_property))
}

/// Search properties, cheapest first
#[utoipa::path(
    get,
    path = "/api/properties",
    tag = "Properties",
    params(PropertyQuery),
    responses(
        (status = 200, description = "Matching properties", body = [PropertyListing]),
        (status = 400, description = "Invalid filter")
    )
)]
pub async fn list_properties(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<PropertyQuery>,
) -> AppResult<Json<Vec<PropertyListing>>> {
    let (search, limit) = query.split();
    let properties = state.property_service.get_all_properties(search, limit).await?;
    Ok(Json(properties))
}

/// List a new property
#[utoipa::path(
    post,
    path = "/api/properties",
    tag = "Properties",
    request_body = NewProperty,
    responses(
        (status = 201, description = "Property created", body = Property),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_property(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewProperty>,
) -> AppResult<(StatusCode, Json<Property>)> {
    let property = state.property_service.add_property(payload).await?;
    Ok((StatusCode::CREATED, Json(property)))
}
