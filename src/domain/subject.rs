//! Subject domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Subject catalog entry. Unrelated to the user entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub code: i32,
    pub name: String,
}

/// Subject response returned to clients
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SubjectResponse {
    /// Storage-assigned subject code (primary and sort key)
    #[schema(example = 7)]
    pub code: i32,
    /// Subject name, unique case-insensitively across the catalog
    #[schema(example = "Mathematics")]
    pub name: String,
}

impl From<Subject> for SubjectResponse {
    fn from(subject: Subject) -> Self {
        Self {
            code: subject.code,
            name: subject.name,
        }
    }
}
