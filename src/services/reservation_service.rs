//! Reservation service - a guest's past stays.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::ReservationListing;
use crate::errors::AppResult;
use crate::infra::Store;
use crate::types::Limit;

use super::report;

/// Reservation service trait for dependency injection.
#[async_trait]
pub trait ReservationService: Send + Sync {
    /// Completed reservations for `guest_id`, oldest first
    async fn get_all_reservations(
        &self,
        guest_id: i32,
        limit: Option<u64>,
    ) -> AppResult<Vec<ReservationListing>>;
}

/// Concrete implementation of ReservationService over a Store.
pub struct ReservationManager<S: Store + ?Sized> {
    store: Arc<S>,
}

impl<S: Store + ?Sized> ReservationManager<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: Store + ?Sized> ReservationService for ReservationManager<S> {
    async fn get_all_reservations(
        &self,
        guest_id: i32,
        limit: Option<u64>,
    ) -> AppResult<Vec<ReservationListing>> {
        let reservations = self.store.reservations();

        let result = async move {
            let limit = Limit::resolve(limit)?;
            reservations.list_for_guest(guest_id, limit.get()).await
        }
        .await;

        result.inspect_err(|e| report("get_all_reservations", e))
    }
}
