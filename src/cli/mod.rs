//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `properties` - Search properties
//! - `reservations` - List a guest's past reservations
//! - `user` - Look up a user by id or email

pub mod args;

pub use args::{Cli, Commands};
