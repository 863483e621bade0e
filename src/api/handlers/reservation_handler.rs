//! Reservation handlers.

use axum::{extract::State, response::Json, routing::get, Router};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::extractors::QueryParams;
use crate::api::AppState;
use crate::domain::ReservationListing;
use crate::errors::AppResult;
use crate::types::empty_string_as_none;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReservationQuery {
    /// Guest whose past stays are listed
    pub guest_id: i32,
    /// Maximum number of results (default 10, at most 100)
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub limit: Option<u64>,
}

/// Create reservation routes
pub fn reservation_routes() -> Router<AppState> {
    Router::new().route("/", get(list_reservations))
}

/// Completed reservations for a guest, oldest first
#[utoipa::path(
    get,
    path = "/api/reservations",
    tag = "Reservations",
    params(ReservationQuery),
    responses(
        (status = 200, description = "Past reservations", body = [ReservationListing]),
        (status = 400, description = "Missing or invalid guest_id")
    )
)]
pub async fn list_reservations(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<ReservationQuery>,
) -> AppResult<Json<Vec<ReservationListing>>> {
    let reservations = state
        .reservation_service
        .get_all_reservations(query.guest_id, query.limit)
        .await?;
    Ok(Json(reservations))
}
