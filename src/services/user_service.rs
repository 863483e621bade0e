//! User service - account lookups and registration.

use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

use crate::domain::{NewUser, Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::Store;

use super::report;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Look up a user by email (case-insensitive)
    async fn get_user_with_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Look up a user by ID
    async fn get_user_with_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Register a user, storing a hash of the supplied password
    async fn add_user(&self, user: NewUser) -> AppResult<User>;
}

/// Concrete implementation of UserService over a Store.
pub struct UserManager<S: Store + ?Sized> {
    store: Arc<S>,
}

impl<S: Store + ?Sized> UserManager<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: Store + ?Sized> UserService for UserManager<S> {
    async fn get_user_with_email(&self, email: &str) -> AppResult<Option<User>> {
        self.store
            .users()
            .find_by_email(email.trim())
            .await
            .inspect_err(|e| report("get_user_with_email", e))
    }

    async fn get_user_with_id(&self, id: i32) -> AppResult<Option<User>> {
        self.store
            .users()
            .find_by_id(id)
            .await
            .inspect_err(|e| report("get_user_with_id", e))
    }

    async fn add_user(&self, user: NewUser) -> AppResult<User> {
        let users = self.store.users();

        let result = async move {
            user.validate()?;

            if users.find_by_email(&user.email).await?.is_some() {
                return Err(AppError::conflict("User"));
            }

            let password = Password::new(&user.password)?;
            let created = users
                .create(NewUser {
                    password: password.into_string(),
                    ..user
                })
                .await?;

            tracing::info!(user_id = created.id, "User added");
            Ok::<_, AppError>(created)
        }
        .await;

        result.inspect_err(|e| report("add_user", e))
    }
}
