//! Subject service - Handles the subject catalog.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::Subject;
use crate::errors::AppResult;
use crate::infra::SubjectRepository;

/// Subject service trait for dependency injection.
#[async_trait]
pub trait SubjectService: Send + Sync {
    /// Register a new subject; a name already present in the catalog
    /// (compared case-insensitively) is a Conflict
    async fn create_subject(&self, name: String) -> AppResult<Subject>;

    /// Search the catalog; no term returns everything, ordered by code
    async fn search_subjects(&self, term: Option<String>) -> AppResult<Vec<Subject>>;
}

/// Concrete implementation of SubjectService.
pub struct SubjectCatalog {
    subjects: Arc<dyn SubjectRepository>,
}

impl SubjectCatalog {
    /// Create new subject service instance
    pub fn new(subjects: Arc<dyn SubjectRepository>) -> Self {
        Self { subjects }
    }
}

#[async_trait]
impl SubjectService for SubjectCatalog {
    async fn create_subject(&self, name: String) -> AppResult<Subject> {
        self.subjects.create(name).await
    }

    async fn search_subjects(&self, term: Option<String>) -> AppResult<Vec<Subject>> {
        self.subjects.search(term).await
    }
}
