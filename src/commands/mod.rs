//! Commands module - CLI command implementations.
//!
//! Each command is implemented in its own module for separation of concerns.

pub mod properties;
pub mod reservations;
pub mod serve;
pub mod users;

use serde::Serialize;

use crate::errors::AppResult;

/// Print `value` to stdout as pretty JSON.
fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
