//! Row limits for listing operations.

use crate::config::{DEFAULT_RESULT_LIMIT, MAX_RESULT_LIMIT};
use crate::errors::{AppError, AppResult};

/// Number of rows a listing query may return.
///
/// Defaults to 10 and is capped at 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit(u64);

impl Limit {
    /// Resolve a caller-supplied limit.
    ///
    /// # Errors
    /// A limit of zero is rejected; larger values are capped silently.
    pub fn resolve(requested: Option<u64>) -> AppResult<Self> {
        match requested {
            None => Ok(Self::default()),
            Some(0) => Err(AppError::validation("limit must be greater than 0")),
            Some(n) => Ok(Self(n.min(MAX_RESULT_LIMIT))),
        }
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl Default for Limit {
    fn default() -> Self {
        Self(DEFAULT_RESULT_LIMIT)
    }
}
