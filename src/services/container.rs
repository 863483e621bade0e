//! Service container - one place to build every service over a store.

use std::sync::Arc;

use super::{
    PropertyManager, PropertyService, ReservationManager, ReservationService, UserManager,
    UserService,
};
use crate::infra::Store;

/// All application services sharing one store.
#[derive(Clone)]
pub struct Services {
    store: Arc<dyn Store>,
    user_service: Arc<dyn UserService>,
    property_service: Arc<dyn PropertyService>,
    reservation_service: Arc<dyn ReservationService>,
}

impl Services {
    /// Create a service container over `store`
    pub fn from_store(store: Arc<dyn Store>) -> Self {
        Self {
            user_service: Arc::new(UserManager::new(store.clone())),
            property_service: Arc::new(PropertyManager::new(store.clone())),
            reservation_service: Arc::new(ReservationManager::new(store.clone())),
            store,
        }
    }

    pub fn store(&self) -> Arc<dyn Store> {
        self.store.clone()
    }

    pub fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    pub fn properties(&self) -> Arc<dyn PropertyService> {
        self.property_service.clone()
    }

    pub fn reservations(&self) -> Arc<dyn ReservationService> {
        self.reservation_service.clone()
    }
}
