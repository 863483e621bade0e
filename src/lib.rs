//! LightBnB - data access for a property rental listing site
//!
//! Users, properties and reservations are served from either a
//! PostgreSQL database or a directory of JSON fixtures, behind one set
//! of services and an HTTP API.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and logic
//! - **services**: Application use cases
//! - **infra**: Stores, repositories and SQL
//! - **api**: HTTP handlers, extractors and routes
//! - **types**: Shared request types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server against the JSON fixtures
//! cargo run -- serve --source fixtures
//!
//! # Search properties
//! cargo run -- properties --city Vancouver --min-rating 4
//!
//! # A guest's past stays
//! cargo run -- reservations --guest-id 1 --limit 5
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::{Config, DataSource};
pub use domain::{NewProperty, NewUser, Property, PropertySearch, User};
pub use errors::{AppError, AppResult};
pub use infra::{open_store, Store};
