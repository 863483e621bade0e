//! Reservation repository and its PostgreSQL implementation.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, FromQueryResult};

use super::queries;
use crate::domain::ReservationListing;
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Reservation repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// A guest's completed reservations, ordered by start date
    async fn list_for_guest(&self, guest_id: i32, limit: u64) -> AppResult<Vec<ReservationListing>>;
}

/// PostgreSQL implementation of ReservationRepository
pub struct ReservationStore {
    db: Arc<DatabaseConnection>,
}

impl ReservationStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReservationRepository for ReservationStore {
    async fn list_for_guest(&self, guest_id: i32, limit: u64) -> AppResult<Vec<ReservationListing>> {
        let listings = ReservationListing::find_by_statement(queries::reservations_for_guest(
            guest_id, limit,
        ))
        .all(self.db.as_ref())
        .await?;
        Ok(listings)
    }
}
