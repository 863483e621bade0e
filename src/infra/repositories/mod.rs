//! Repository layer - Data access abstraction
//!
//! One trait per table family, each with a PostgreSQL implementation
//! (`*Store`) issuing a single parameterized statement per call, and a
//! shared fixture-backed implementation (`FixtureStore`).

mod fixture_store;
mod property_query;
mod property_repository;
pub mod queries;
mod reservation_repository;
mod rows;
mod user_repository;

pub use fixture_store::{FixtureStore, FixtureTables};
pub use property_query::PropertyQuery;
pub use property_repository::{PropertyRepository, PropertyStore};
pub use reservation_repository::{ReservationRepository, ReservationStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use property_repository::MockPropertyRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use reservation_repository::MockReservationRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
