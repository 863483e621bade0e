//! Application services layer - Use cases over the data-access layer.
//!
//! Services validate input, resolve limits, and call repositories
//! obtained from a [`Store`](crate::infra::Store). Every failure is logged
//! once here and then propagated to the caller.

pub mod container;
mod property_service;
mod reservation_service;
mod user_service;

pub use container::Services;
pub use property_service::{PropertyManager, PropertyService};
pub use reservation_service::{ReservationManager, ReservationService};
pub use user_service::{UserManager, UserService};

use crate::errors::AppError;

/// Log a failed operation at a level matching who caused it.
pub(crate) fn report(operation: &'static str, err: &AppError) {
    if err.is_server_error() {
        tracing::error!(operation, error = ?err, "Data access failed");
    } else {
        tracing::warn!(operation, error = %err, "Request rejected");
    }
}
