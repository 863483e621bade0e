//! HTTP request handlers.

pub mod property_handler;
pub mod reservation_handler;
pub mod user_handler;

pub use property_handler::property_routes;
pub use reservation_handler::reservation_routes;
pub use user_handler::user_routes;
