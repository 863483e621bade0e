//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{property_handler, reservation_handler, user_handler};
use crate::domain::{
    NewProperty, NewUser, Property, PropertyListing, Reservation, ReservationListing, User,
};

/// OpenAPI documentation for the LightBnB API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "LightBnB",
        version = "0.1.0",
        description = "Data-access API for LightBnB users, properties and reservations",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        user_handler::create_user,
        user_handler::get_user,
        user_handler::find_user_by_email,
        property_handler::list_properties,
        property_handler::create_property,
        reservation_handler::list_reservations,
    ),
    components(
        schemas(
            User,
            NewUser,
            Property,
            PropertyListing,
            NewProperty,
            Reservation,
            ReservationListing,
        )
    ),
    tags(
        (name = "Users", description = "User registration and lookup"),
        (name = "Properties", description = "Property search and listing"),
        (name = "Reservations", description = "Guest reservation history")
    )
)]
pub struct ApiDoc;
