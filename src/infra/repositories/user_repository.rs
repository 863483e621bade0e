//! User repository and its PostgreSQL implementation.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, FromQueryResult, SqlErr};

use super::queries;
use crate::domain::{NewUser, User};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by email address, ignoring case
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Find a user by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Insert a user and return the stored record
    async fn create(&self, user: NewUser) -> AppResult<User>;
}

/// PostgreSQL implementation of UserRepository
pub struct UserStore {
    db: Arc<DatabaseConnection>,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// Map a unique-constraint violation on insert to a conflict.
fn insert_error(err: DbErr, entity: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::conflict(entity),
        _ => AppError::from(err),
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let user = User::find_by_statement(queries::user_by_email(email))
            .one(self.db.as_ref())
            .await?;
        Ok(user)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let user = User::find_by_statement(queries::user_by_id(id))
            .one(self.db.as_ref())
            .await?;
        Ok(user)
    }

    async fn create(&self, user: NewUser) -> AppResult<User> {
        User::find_by_statement(queries::insert_user(&user))
            .one(self.db.as_ref())
            .await
            .map_err(|e| insert_error(e, "User"))?
            .ok_or_else(|| AppError::internal("INSERT INTO users returned no row"))
    }
}
