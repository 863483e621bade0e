//! In-memory store backed by static JSON fixture tables.
//!
//! Each fixture file is a JSON object keyed by row id, e.g.
//! `{"1": {"name": "...", "email": "..."}}`. The key is authoritative for
//! the row's id. Inserts live in memory only.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;

use super::{PropertyRepository, ReservationRepository, UserRepository};
use crate::config::{
    DataSource, FIXTURE_PROPERTIES, FIXTURE_PROPERTY_REVIEWS, FIXTURE_RESERVATIONS, FIXTURE_USERS,
};
use crate::domain::reservation::average_rating;
use crate::domain::{
    NewProperty, NewUser, Property, PropertyListing, PropertyReview, PropertySearch, Reservation,
    ReservationListing, User,
};
use crate::errors::{AppError, AppResult};
use crate::infra::Store;

/// Rows that carry their own primary key.
trait Keyed {
    fn set_id(&mut self, id: i32);
}

macro_rules! keyed {
    ($($ty:ty),*) => {
        $(impl Keyed for $ty {
            fn set_id(&mut self, id: i32) {
                self.id = id;
            }
        })*
    };
}

keyed!(User, Property, Reservation, PropertyReview);

/// The four tables the data-access layer reads.
#[derive(Debug, Clone, Default)]
pub struct FixtureTables {
    pub users: BTreeMap<i32, User>,
    pub properties: BTreeMap<i32, Property>,
    pub reservations: BTreeMap<i32, Reservation>,
    pub reviews: BTreeMap<i32, PropertyReview>,
}

impl FixtureTables {
    /// Load every table from `dir`.
    ///
    /// `users.json` and `properties.json` are required; the reservation and
    /// review tables default to empty when absent.
    pub async fn load(dir: &Path) -> AppResult<Self> {
        Ok(Self {
            users: load_table(dir, FIXTURE_USERS, true).await?,
            properties: load_table(dir, FIXTURE_PROPERTIES, true).await?,
            reservations: load_table(dir, FIXTURE_RESERVATIONS, false).await?,
            reviews: load_table(dir, FIXTURE_PROPERTY_REVIEWS, false).await?,
        })
    }
}

async fn load_table<T>(dir: &Path, file: &str, required: bool) -> AppResult<BTreeMap<i32, T>>
where
    T: DeserializeOwned + Keyed,
{
    let path = dir.join(file);
    let json = match tokio::fs::read_to_string(&path).await {
        Ok(json) => json,
        Err(e) if e.kind() == ErrorKind::NotFound && !required => {
            tracing::debug!("Optional fixture {} not found, using empty table", path.display());
            return Ok(BTreeMap::new());
        }
        Err(e) => return Err(AppError::fixture(format!("{}: {}", path.display(), e))),
    };

    parse_table(&json).map_err(|e| AppError::fixture(format!("{}: {}", path.display(), e)))
}

fn parse_table<T>(json: &str) -> Result<BTreeMap<i32, T>, serde_json::Error>
where
    T: DeserializeOwned + Keyed,
{
    let mut rows: BTreeMap<i32, T> = serde_json::from_str(json)?;
    for (id, row) in rows.iter_mut() {
        row.set_id(*id);
    }
    Ok(rows)
}

fn next_id<T>(table: &BTreeMap<i32, T>) -> i32 {
    table.keys().next_back().map_or(1, |max| max + 1)
}

/// Store serving all repositories from fixture tables.
///
/// Cloning is cheap; clones share the same tables.
#[derive(Clone)]
pub struct FixtureStore {
    tables: Arc<RwLock<FixtureTables>>,
    today: Option<NaiveDate>,
}

impl FixtureStore {
    pub fn new(tables: FixtureTables) -> Self {
        Self {
            tables: Arc::new(RwLock::new(tables)),
            today: None,
        }
    }

    /// Load fixture tables from a directory.
    pub async fn open(dir: &Path) -> AppResult<Self> {
        let tables = FixtureTables::load(dir).await?;
        tracing::info!(
            users = tables.users.len(),
            properties = tables.properties.len(),
            reservations = tables.reservations.len(),
            reviews = tables.reviews.len(),
            "Loaded fixtures from {}",
            dir.display()
        );
        Ok(Self::new(tables))
    }

    /// Pin the date used to decide which reservations are in the past.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Utc::now().date_naive())
    }
}

#[async_trait]
impl UserRepository for FixtureStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| u.has_email(email)).cloned())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn create(&self, user: NewUser) -> AppResult<User> {
        let mut tables = self.tables.write().await;
        if tables.users.values().any(|u| u.has_email(&user.email)) {
            return Err(AppError::conflict("User"));
        }

        let id = next_id(&tables.users);
        let user = User {
            id,
            name: user.name,
            email: user.email,
            password: user.password,
        };
        tables.users.insert(id, user.clone());
        Ok(user)
    }
}

#[async_trait]
impl PropertyRepository for FixtureStore {
    async fn search(&self, search: &PropertySearch, limit: u64) -> AppResult<Vec<PropertyListing>> {
        let tables = self.tables.read().await;

        let mut listings: Vec<PropertyListing> = tables
            .properties
            .values()
            .filter(|p| search.matches(p))
            .map(|p| PropertyListing {
                property: p.clone(),
                average_rating: average_rating(tables.reviews.values(), p.id),
            })
            .filter(|l| search.accepts_rating(l.average_rating))
            .collect();

        listings.sort_by_key(|l| l.property.cost_per_night);
        listings.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        Ok(listings)
    }

    async fn create(&self, property: NewProperty) -> AppResult<Property> {
        let mut tables = self.tables.write().await;
        let id = next_id(&tables.properties);
        let property = property.into_property(id);
        tables.properties.insert(id, property.clone());
        Ok(property)
    }
}

#[async_trait]
impl ReservationRepository for FixtureStore {
    async fn list_for_guest(&self, guest_id: i32, limit: u64) -> AppResult<Vec<ReservationListing>> {
        let tables = self.tables.read().await;
        let today = self.today();

        let mut listings: Vec<ReservationListing> = tables
            .reservations
            .values()
            .filter(|r| r.guest_id == guest_id && r.is_completed(today))
            .filter_map(|r| {
                let property = tables.properties.get(&r.property_id)?;
                Some(ReservationListing {
                    reservation: r.clone(),
                    property: property.clone(),
                    average_rating: average_rating(tables.reviews.values(), property.id),
                })
            })
            .collect();

        listings.sort_by_key(|l| l.reservation.start_date);
        listings.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        Ok(listings)
    }
}

#[async_trait]
impl Store for FixtureStore {
    fn users(&self) -> Arc<dyn UserRepository> {
        Arc::new(self.clone())
    }

    fn properties(&self) -> Arc<dyn PropertyRepository> {
        Arc::new(self.clone())
    }

    fn reservations(&self) -> Arc<dyn ReservationRepository> {
        Arc::new(self.clone())
    }

    fn source(&self) -> DataSource {
        DataSource::Fixtures
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
