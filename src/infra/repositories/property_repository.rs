//! Property repository and its PostgreSQL implementation.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, FromQueryResult};

use super::property_query::PropertyQuery;
use super::queries;
use crate::domain::{NewProperty, Property, PropertyListing, PropertySearch};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Property repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// Properties matching `search`, cheapest first, with average ratings
    async fn search(&self, search: &PropertySearch, limit: u64) -> AppResult<Vec<PropertyListing>>;

    /// Insert a property and return the stored record
    async fn create(&self, property: NewProperty) -> AppResult<Property>;
}

/// PostgreSQL implementation of PropertyRepository
pub struct PropertyStore {
    db: Arc<DatabaseConnection>,
}

impl PropertyStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PropertyRepository for PropertyStore {
    async fn search(&self, search: &PropertySearch, limit: u64) -> AppResult<Vec<PropertyListing>> {
        let query = PropertyQuery::new(search, limit);
        tracing::debug!(sql = %query.sql(), params = ?query.values(), "Property search");

        let listings = PropertyListing::find_by_statement(query.into_statement())
            .all(self.db.as_ref())
            .await?;
        Ok(listings)
    }

    async fn create(&self, property: NewProperty) -> AppResult<Property> {
        Property::find_by_statement(queries::insert_property(&property))
            .one(self.db.as_ref())
            .await?
            .ok_or_else(|| AppError::internal("INSERT INTO properties returned no row"))
    }
}
