//! Authentication handlers.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::UserResponse;
use crate::errors::AppResult;

/// Login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// National identity code used as the login key
    #[validate(length(min = 1, message = "Identity code is required"))]
    #[schema(example = "12345678")]
    pub identity_code: String,
    /// Plaintext credential to verify against the stored hash
    #[validate(length(min = 1, message = "Credential is required"))]
    #[schema(example = "secreta123")]
    pub credential: String,
}

/// Login response: a greeting plus the user without its credential
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = "Welcome")]
    pub message: String,
    pub user: UserResponse,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Verify credentials and return the logged-in user
#[utoipa::path(
    post,
    path = "/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid identity code or credential")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let user = state
        .auth_service
        .login(payload.identity_code, payload.credential)
        .await?;

    Ok(Json(LoginResponse {
        message: "Welcome".to_string(),
        user: UserResponse::from(user),
    }))
}
