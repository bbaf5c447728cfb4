//! User service - Handles user-related business logic.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Password, User};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a new user; the credential is hashed before storage
    async fn create_user(
        &self,
        identity_code: String,
        name: String,
        credential: String,
    ) -> AppResult<User>;

    /// Get user by ID
    async fn get_user(&self, id: i32) -> AppResult<User>;

    /// List all users ordered by ID
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Replace identity code, name, and credential of an existing user
    async fn update_user(
        &self,
        id: i32,
        identity_code: String,
        name: String,
        credential: String,
    ) -> AppResult<User>;

    /// Delete user by ID
    async fn delete_user(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of UserService.
pub struct UserManager {
    users: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(
        &self,
        identity_code: String,
        name: String,
        credential: String,
    ) -> AppResult<User> {
        let password_hash = Password::new(&credential)?.into_string();
        self.users.create(identity_code, name, password_hash).await
    }

    async fn get_user(&self, id: i32) -> AppResult<User> {
        self.users.find_by_id(id).await?.ok_or_not_found()
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.users.list().await
    }

    async fn update_user(
        &self,
        id: i32,
        identity_code: String,
        name: String,
        credential: String,
    ) -> AppResult<User> {
        // The credential arrives in plaintext and is re-hashed on every
        // write path, never stored as given.
        let password_hash = Password::new(&credential)?.into_string();
        self.users
            .update(id, identity_code, name, password_hash)
            .await
    }

    async fn delete_user(&self, id: i32) -> AppResult<()> {
        self.users.delete(id).await
    }
}
