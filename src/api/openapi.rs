//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{auth_handler, subject_handler, user_handler};
use crate::domain::{SubjectResponse, UserResponse};
use crate::types::MessageResponse;

/// OpenAPI documentation for the Aula administration backend
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Aula",
        version = "0.1.0",
        description = "School administration backend: user accounts and subject catalog",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::login,
        // User endpoints
        user_handler::create_user,
        user_handler::list_users,
        user_handler::get_user,
        user_handler::update_user,
        user_handler::delete_user,
        // Subject endpoints
        subject_handler::create_subject,
        subject_handler::search_subjects,
    ),
    components(
        schemas(
            // Domain types
            UserResponse,
            SubjectResponse,
            MessageResponse,
            // Auth types
            auth_handler::LoginRequest,
            auth_handler::LoginResponse,
            // User handler types
            user_handler::CreateUserRequest,
            user_handler::UpdateUserRequest,
            // Subject handler types
            subject_handler::CreateSubjectRequest,
        )
    ),
    tags(
        (name = "Authentication", description = "Operator login"),
        (name = "Users", description = "User management operations"),
        (name = "Subjects", description = "Subject catalog operations")
    )
)]
pub struct ApiDoc;
