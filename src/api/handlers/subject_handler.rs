//! Subject catalog handlers.

use axum::{
    extract::{Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::SubjectResponse;
use crate::errors::AppResult;

/// Subject registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateSubjectRequest {
    /// Subject name; must be new to the catalog, case-insensitively
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Mathematics")]
    pub name: String,
}

/// Catalog search parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct SubjectSearchQuery {
    /// Case-insensitive substring to match against subject names;
    /// omit to list the whole catalog
    pub search: Option<String>,
}

/// Create subject routes
pub fn subject_routes() -> Router<AppState> {
    Router::new().route("/", get(search_subjects).post(create_subject))
}

/// Register a new subject
#[utoipa::path(
    post,
    path = "/materia",
    tag = "Subjects",
    request_body = CreateSubjectRequest,
    responses(
        (status = 200, description = "Subject registered", body = SubjectResponse),
        (status = 400, description = "Missing or empty name"),
        (status = 409, description = "Subject name already in the catalog")
    )
)]
pub async fn create_subject(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateSubjectRequest>,
) -> AppResult<Json<SubjectResponse>> {
    let subject = state.subject_service.create_subject(payload.name).await?;
    Ok(Json(SubjectResponse::from(subject)))
}

/// Search the subject catalog
#[utoipa::path(
    get,
    path = "/materia",
    tag = "Subjects",
    params(SubjectSearchQuery),
    responses(
        (status = 200, description = "Matching subjects ordered by code", body = Vec<SubjectResponse>)
    )
)]
pub async fn search_subjects(
    State(state): State<AppState>,
    Query(query): Query<SubjectSearchQuery>,
) -> AppResult<Json<Vec<SubjectResponse>>> {
    let subjects = state.subject_service.search_subjects(query.search).await?;
    Ok(Json(
        subjects.into_iter().map(SubjectResponse::from).collect(),
    ))
}
