//! Shared types.

mod limit;
mod query;

pub use limit::Limit;
pub use query::empty_string_as_none;
