//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! listing, booking and account concepts independent of the
//! backing store (fixtures or PostgreSQL).

pub mod password;
pub mod property;
pub mod reservation;
pub mod user;

pub use password::Password;
pub use property::{to_cents, NewProperty, Property, PropertyListing, PropertySearch};
pub use reservation::{PropertyReview, Reservation, ReservationListing};
pub use user::{NewUser, User};
