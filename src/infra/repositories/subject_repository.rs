//! Subject repository implementation.
//!
//! Case-insensitive name uniqueness is enforced by the unique index on
//! `LOWER(nombre)`; insertion never pre-checks, so concurrent creates
//! of the same name cannot both succeed.

use async_trait::async_trait;
use sea_orm::sea_query::{extension::postgres::PgExpr, Expr};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
    SqlErr,
};

use super::entities::subject::{self, ActiveModel, Entity as SubjectEntity};
use crate::domain::Subject;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Subject repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SubjectRepository: Send + Sync {
    /// Insert a new subject; duplicate names (case-insensitive) are Conflict
    async fn create(&self, name: String) -> AppResult<Subject>;

    /// Case-insensitive substring search, full catalog when no term.
    /// Results are ordered by code ascending.
    async fn search(&self, term: Option<String>) -> AppResult<Vec<Subject>>;
}

/// Map a write error, turning the LOWER(nombre) index violation into Conflict
fn map_write_err(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::conflict("Subject"),
        _ => AppError::from(err),
    }
}

/// Concrete implementation of SubjectRepository
pub struct SubjectStore {
    db: DatabaseConnection,
}

impl SubjectStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SubjectRepository for SubjectStore {
    async fn create(&self, name: String) -> AppResult<Subject> {
        let active_model = ActiveModel {
            name: Set(name),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(map_write_err)?;
        Ok(Subject::from(model))
    }

    async fn search(&self, term: Option<String>) -> AppResult<Vec<Subject>> {
        let mut query = SubjectEntity::find();

        if let Some(term) = term.filter(|t| !t.is_empty()) {
            query = query.filter(Expr::col(subject::Column::Name).ilike(format!("%{}%", term)));
        }

        let models = query
            .order_by_asc(subject::Column::Code)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Subject::from).collect())
    }
}
