//! User handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::UserResponse;
use crate::errors::AppResult;
use crate::types::MessageResponse;

/// User registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// National identity code, unique per user
    #[validate(length(min = 1, message = "Identity code is required"))]
    #[schema(example = "12345678")]
    pub identity_code: String,
    /// Display name
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Maria Perez")]
    pub name: String,
    /// Plaintext credential; stored only as a salted hash
    #[validate(length(min = 1, message = "Credential is required"))]
    #[schema(example = "secreta123")]
    pub credential: String,
}

/// User update request; replaces all three mutable fields
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    /// New identity code
    #[validate(length(min = 1, message = "Identity code is required"))]
    #[schema(example = "87654321")]
    pub identity_code: String,
    /// New display name
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Maria Perez")]
    pub name: String,
    /// New plaintext credential; re-hashed before storage
    #[validate(length(min = 1, message = "Credential is required"))]
    #[schema(example = "otra-clave")]
    pub credential: String,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/usuarios",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User registered", body = UserResponse),
        (status = 400, description = "Missing or empty field"),
        (status = 409, description = "Identity code already registered")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    let user = state
        .user_service
        .create_user(payload.identity_code, payload.name, payload.credential)
        .await?;

    Ok(Json(UserResponse::from(user)))
}

/// List all users ordered by identifier
#[utoipa::path(
    get,
    path = "/usuarios",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = Vec<UserResponse>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/usuarios/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User record", body = UserResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Update all mutable fields of a user
#[utoipa::path(
    put,
    path = "/usuarios/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Missing or empty field"),
        (status = 404, description = "User not found"),
        (status = 409, description = "Identity code already registered")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    let user = state
        .user_service
        .update_user(id, payload.identity_code, payload.name, payload.credential)
        .await?;

    Ok(Json(UserResponse::from(user)))
}

/// Delete user by ID
#[utoipa::path(
    delete,
    path = "/usuarios/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.user_service.delete_user(id).await?;
    Ok(Json(MessageResponse::new("User deleted")))
}
