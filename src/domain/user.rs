//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User domain entity.
///
/// The credential hash never serializes; clients only ever see the
/// fields exposed through [`UserResponse`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub identity_code: String,
    pub name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Storage-assigned user identifier
    #[schema(example = 1)]
    pub id: i32,
    /// National identity code used as the login key
    #[schema(example = "12345678")]
    pub identity_code: String,
    /// Display name
    #[schema(example = "Maria Perez")]
    pub name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            identity_code: user.identity_code,
            name: user.name,
        }
    }
}
