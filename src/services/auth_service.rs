//! Authentication service - Handles operator login.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Password, User, DUMMY_HASH};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// Authentication service trait for dependency injection.
///
/// Credential hashing is handled by the domain Password value object.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Verify an identity code / credential pair.
    ///
    /// On success returns the matching user; the caller must strip the
    /// hash before serializing (see `UserResponse`).
    async fn login(&self, identity_code: String, credential: String) -> AppResult<User>;
}

/// Concrete implementation of AuthService.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
}

impl Authenticator {
    /// Create new auth service instance
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn login(&self, identity_code: String, credential: String) -> AppResult<User> {
        let user = self.users.find_by_identity_code(&identity_code).await?;

        // Verify against a dummy hash when the lookup misses, so
        // response timing does not reveal whether the identity code
        // exists.
        let (stored_hash, user_exists) = match &user {
            Some(user) => (user.password_hash.as_str(), true),
            None => (DUMMY_HASH, false),
        };

        let stored = Password::from_hash(stored_hash.to_string());
        let credential_valid = stored.verify(&credential);

        // A single uniform failure for unknown identity code and wrong
        // credential alike: no account enumeration through messages.
        if !user_exists || !credential_valid {
            return Err(AppError::InvalidCredentials);
        }

        user.ok_or(AppError::InvalidCredentials)
    }
}
