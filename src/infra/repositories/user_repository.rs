//! User repository implementation.
//!
//! One parameterized statement per operation against the `usuarios`
//! table. Duplicate identity codes surface as `Conflict` straight from
//! the database UNIQUE constraint.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, SqlErr,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::User;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by storage-assigned identifier
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Find user by identity code (the login key); row includes the hash
    async fn find_by_identity_code(&self, identity_code: &str) -> AppResult<Option<User>>;

    /// List all users ordered by identifier ascending
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Insert a new user with an already-hashed credential
    async fn create(
        &self,
        identity_code: String,
        name: String,
        password_hash: String,
    ) -> AppResult<User>;

    /// Update all three mutable fields of an existing user
    async fn update(
        &self,
        id: i32,
        identity_code: String,
        name: String,
        password_hash: String,
    ) -> AppResult<User>;

    /// Delete user by identifier
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Map a write error, turning a UNIQUE violation on `cedula` into Conflict
fn map_write_err(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::conflict("User"),
        _ => AppError::from(err),
    }
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn find_by_identity_code(&self, identity_code: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::IdentityCode.eq(identity_code))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn create(
        &self,
        identity_code: String,
        name: String,
        password_hash: String,
    ) -> AppResult<User> {
        let active_model = ActiveModel {
            identity_code: Set(identity_code),
            name: Set(name),
            password_hash: Set(password_hash),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(map_write_err)?;
        Ok(User::from(model))
    }

    async fn update(
        &self,
        id: i32,
        identity_code: String,
        name: String,
        password_hash: String,
    ) -> AppResult<User> {
        let user = UserEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = user.into();
        active.identity_code = Set(identity_code);
        active.name = Set(name);
        active.password_hash = Set(password_hash);

        let model = active.update(&self.db).await.map_err(map_write_err)?;
        Ok(User::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = UserEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
