//! Infrastructure layer - Backing stores
//!
//! This module handles all storage concerns:
//! - PostgreSQL connection management
//! - Repositories over PostgreSQL and over JSON fixtures
//! - The `Store` abstraction services are built on

pub mod db;
pub mod repositories;
pub mod store;

pub use db::Database;
pub use repositories::{
    FixtureStore, FixtureTables, PropertyRepository, PropertyStore, ReservationRepository,
    ReservationStore, UserRepository, UserStore,
};
pub use store::{open_store, Persistence, Store};
