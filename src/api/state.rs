//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and the store.

use std::sync::Arc;

use crate::infra::Store;
use crate::services::{PropertyService, ReservationService, Services, UserService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Property service
    pub property_service: Arc<dyn PropertyService>,
    /// Reservation service
    pub reservation_service: Arc<dyn ReservationService>,
    /// Backing store, used for health checks
    pub store: Arc<dyn Store>,
}

impl AppState {
    /// Create application state with every service built over `store`.
    pub fn from_store(store: Arc<dyn Store>) -> Self {
        Self::from_services(&Services::from_store(store))
    }

    /// Create application state from an existing service container.
    pub fn from_services(services: &Services) -> Self {
        Self {
            user_service: services.users(),
            property_service: services.properties(),
            reservation_service: services.reservations(),
            store: services.store(),
        }
    }
}
