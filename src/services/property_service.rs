//! Property service - listing search and new listings.

use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

use crate::domain::{NewProperty, Property, PropertyListing, PropertySearch};
use crate::errors::{AppError, AppResult};
use crate::infra::Store;
use crate::types::Limit;

use super::report;

/// Property service trait for dependency injection.
#[async_trait]
pub trait PropertyService: Send + Sync {
    /// Properties matching the supplied filters, cheapest first
    async fn get_all_properties(
        &self,
        search: PropertySearch,
        limit: Option<u64>,
    ) -> AppResult<Vec<PropertyListing>>;

    /// List a new property
    async fn add_property(&self, property: NewProperty) -> AppResult<Property>;
}

/// Concrete implementation of PropertyService over a Store.
pub struct PropertyManager<S: Store + ?Sized> {
    store: Arc<S>,
}

impl<S: Store + ?Sized> PropertyManager<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

/// Reject filters no listing could meaningfully satisfy.
fn check_search(search: &PropertySearch) -> AppResult<()> {
    let fields = [
        ("minimum_price_per_night", search.minimum_price_per_night),
        ("maximum_price_per_night", search.maximum_price_per_night),
        ("minimum_rating", search.minimum_rating),
    ];

    for (name, value) in fields {
        if let Some(v) = value {
            if !v.is_finite() || v < 0.0 {
                return Err(AppError::validation(format!(
                    "{} must be a non-negative number",
                    name
                )));
            }
        }
    }

    Ok(())
}

#[async_trait]
impl<S: Store + ?Sized> PropertyService for PropertyManager<S> {
    async fn get_all_properties(
        &self,
        search: PropertySearch,
        limit: Option<u64>,
    ) -> AppResult<Vec<PropertyListing>> {
        let properties = self.store.properties();

        let result = async move {
            check_search(&search)?;
            let limit = Limit::resolve(limit)?;
            let search = search.normalized();
            properties.search(&search, limit.get()).await
        }
        .await;

        result.inspect_err(|e| report("get_all_properties", e))
    }

    async fn add_property(&self, property: NewProperty) -> AppResult<Property> {
        let properties = self.store.properties();

        let result = async move {
            property.validate()?;
            let created = properties.create(property).await?;
            tracing::info!(property_id = created.id, owner_id = created.owner_id, "Property added");
            Ok::<_, AppError>(created)
        }
        .await;

        result.inspect_err(|e| report("add_property", e))
    }
}
