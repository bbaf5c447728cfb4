//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::infra::{Database, SubjectRepository, SubjectStore, UserRepository, UserStore};
use crate::services::{
    AuthService, Authenticator, SubjectCatalog, SubjectService, UserManager, UserService,
};

/// Application state containing all services.
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Subject catalog service
    pub subject_service: Arc<dyn SubjectService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from a database connection.
    ///
    /// This is the recommended way to create AppState: repositories and
    /// services are wired over the shared connection pool.
    pub fn from_database(database: Arc<Database>) -> Self {
        let users: Arc<dyn UserRepository> = Arc::new(UserStore::new(database.get_connection()));
        let subjects: Arc<dyn SubjectRepository> =
            Arc::new(SubjectStore::new(database.get_connection()));

        Self {
            auth_service: Arc::new(Authenticator::new(users.clone())),
            user_service: Arc::new(UserManager::new(users)),
            subject_service: Arc::new(SubjectCatalog::new(subjects)),
            database,
        }
    }

    /// Create new application state with manually injected services
    /// (used by tests to swap in mocks).
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        user_service: Arc<dyn UserService>,
        subject_service: Arc<dyn SubjectService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            auth_service,
            user_service,
            subject_service,
            database,
        }
    }
}
