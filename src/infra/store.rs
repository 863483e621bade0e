//! Store abstraction over the configured backend.
//!
//! A `Store` hands out the three repositories. Services depend on this
//! trait only, so the same service code runs against PostgreSQL or the
//! JSON fixtures.

use async_trait::async_trait;
use std::sync::Arc;

use super::db::Database;
use super::repositories::{
    FixtureStore, PropertyRepository, PropertyStore, ReservationRepository, ReservationStore,
    UserRepository, UserStore,
};
use crate::config::{Config, DataSource};
use crate::errors::AppResult;

/// Centralized access to all repositories.
#[async_trait]
pub trait Store: Send + Sync {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get property repository
    fn properties(&self) -> Arc<dyn PropertyRepository>;

    /// Get reservation repository
    fn reservations(&self) -> Arc<dyn ReservationRepository>;

    /// Backend serving this store
    fn source(&self) -> DataSource;

    /// Check that the backend is reachable
    async fn ping(&self) -> AppResult<()>;
}

/// PostgreSQL-backed store
pub struct Persistence {
    database: Database,
    user_repo: Arc<UserStore>,
    property_repo: Arc<PropertyStore>,
    reservation_repo: Arc<ReservationStore>,
}

impl Persistence {
    pub fn new(database: Database) -> Self {
        let db = database.get_connection();
        Self {
            user_repo: Arc::new(UserStore::new(db.clone())),
            property_repo: Arc::new(PropertyStore::new(db.clone())),
            reservation_repo: Arc::new(ReservationStore::new(db)),
            database,
        }
    }
}

#[async_trait]
impl Store for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn properties(&self) -> Arc<dyn PropertyRepository> {
        self.property_repo.clone()
    }

    fn reservations(&self) -> Arc<dyn ReservationRepository> {
        self.reservation_repo.clone()
    }

    fn source(&self) -> DataSource {
        DataSource::Postgres
    }

    async fn ping(&self) -> AppResult<()> {
        self.database.ping().await?;
        Ok(())
    }
}

/// Open the store selected by `config.data_source`.
pub async fn open_store(config: &Config) -> AppResult<Arc<dyn Store>> {
    tracing::info!("Opening {} store", config.data_source);

    match config.data_source {
        DataSource::Postgres => {
            let database = Database::connect(&config.database_url).await?;
            Ok(Arc::new(Persistence::new(database)))
        }
        DataSource::Fixtures => {
            let store = FixtureStore::open(&config.fixtures_dir).await?;
            Ok(Arc::new(store))
        }
    }
}
