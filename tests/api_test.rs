//! Integration tests for API endpoints.
//!
//! These tests drive the real router with hand-written mock services,
//! so no database is required.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use sea_orm::{DatabaseBackend, MockDatabase};
use tower::ServiceExt;

use aula::api::{create_router, AppState};
use aula::domain::{Subject, User};
use aula::errors::{AppError, AppResult};
use aula::infra::Database;
use aula::services::{AuthService, SubjectService, UserService};

// =============================================================================
// Mock Services
// =============================================================================

/// Knows exactly one operator: 12345678 / secreta123
struct FakeAuthService;

#[async_trait]
impl AuthService for FakeAuthService {
    async fn login(&self, identity_code: String, credential: String) -> AppResult<User> {
        if identity_code == "12345678" && credential == "secreta123" {
            Ok(User {
                id: 1,
                identity_code,
                name: "Maria Perez".to_string(),
                password_hash: "hashed".to_string(),
            })
        } else {
            Err(AppError::InvalidCredentials)
        }
    }
}

/// Pretends id 404 does not exist; everything else echoes back
struct FakeUserService;

const MISSING_ID: i32 = 404;

#[async_trait]
impl UserService for FakeUserService {
    async fn create_user(
        &self,
        identity_code: String,
        name: String,
        _credential: String,
    ) -> AppResult<User> {
        Ok(User {
            id: 1,
            identity_code,
            name,
            password_hash: "hashed".to_string(),
        })
    }

    async fn get_user(&self, id: i32) -> AppResult<User> {
        if id == MISSING_ID {
            return Err(AppError::NotFound);
        }
        Ok(User {
            id,
            identity_code: "12345678".to_string(),
            name: "Maria Perez".to_string(),
            password_hash: "hashed".to_string(),
        })
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        Ok(vec![
            User {
                id: 1,
                identity_code: "12345678".to_string(),
                name: "Maria Perez".to_string(),
                password_hash: "hashed".to_string(),
            },
            User {
                id: 2,
                identity_code: "87654321".to_string(),
                name: "Juan Gomez".to_string(),
                password_hash: "hashed".to_string(),
            },
        ])
    }

    async fn update_user(
        &self,
        id: i32,
        identity_code: String,
        name: String,
        _credential: String,
    ) -> AppResult<User> {
        if id == MISSING_ID {
            return Err(AppError::NotFound);
        }
        Ok(User {
            id,
            identity_code,
            name,
            password_hash: "hashed".to_string(),
        })
    }

    async fn delete_user(&self, id: i32) -> AppResult<()> {
        if id == MISSING_ID {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}

/// Catalog with Mathematics and Chemistry; creating either again conflicts
struct FakeSubjectService;

#[async_trait]
impl SubjectService for FakeSubjectService {
    async fn create_subject(&self, name: String) -> AppResult<Subject> {
        let taken = ["mathematics", "chemistry"];
        if taken.contains(&name.to_lowercase().as_str()) {
            return Err(AppError::conflict("Subject"));
        }
        Ok(Subject { code: 3, name })
    }

    async fn search_subjects(&self, term: Option<String>) -> AppResult<Vec<Subject>> {
        let all = vec![
            Subject {
                code: 1,
                name: "Mathematics".to_string(),
            },
            Subject {
                code: 2,
                name: "Chemistry".to_string(),
            },
        ];
        Ok(match term {
            Some(t) if !t.is_empty() => all
                .into_iter()
                .filter(|s| s.name.to_lowercase().contains(&t.to_lowercase()))
                .collect(),
            _ => all,
        })
    }
}

// =============================================================================
// Test Helpers
// =============================================================================

fn test_app() -> Router {
    let database = Arc::new(Database::from_connection(
        MockDatabase::new(DatabaseBackend::Postgres).into_connection(),
    ));
    let state = AppState::new(
        Arc::new(FakeAuthService),
        Arc::new(FakeUserService),
        Arc::new(FakeSubjectService),
        database,
    );
    create_router(state)
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// Login
// =============================================================================

#[tokio::test]
async fn test_login_success_strips_credential() {
    let app = test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/login",
            serde_json::json!({"identityCode": "12345678", "credential": "secreta123"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Welcome");
    assert_eq!(body["user"]["identityCode"], "12345678");
    assert_eq!(body["user"]["name"], "Maria Perez");

    // The credential never appears under any name
    let user_keys: Vec<&String> = body["user"].as_object().unwrap().keys().collect();
    assert_eq!(user_keys, ["id", "identityCode", "name"]);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = test_app();

    let wrong_credential = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/login",
            serde_json::json!({"identityCode": "12345678", "credential": "equivocada"}),
        ))
        .await
        .unwrap();
    assert_eq!(wrong_credential.status(), StatusCode::UNAUTHORIZED);

    let unknown_code = app
        .oneshot(json_request(
            "POST",
            "/login",
            serde_json::json!({"identityCode": "00000000", "credential": "secreta123"}),
        ))
        .await
        .unwrap();
    assert_eq!(unknown_code.status(), StatusCode::UNAUTHORIZED);

    // Identical bodies: no account enumeration through error text
    let first = body_json(wrong_credential).await;
    let second = body_json(unknown_code).await;
    assert_eq!(first, second);
    assert_eq!(first["error"]["code"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_login_missing_field_is_bad_request() {
    let app = test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/login",
            serde_json::json!({"identityCode": "12345678"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// User CRUD
// =============================================================================

#[tokio::test]
async fn test_create_user_returns_record_without_credential() {
    let app = test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/usuarios",
            serde_json::json!({
                "identityCode": "11223344",
                "name": "Ana Diaz",
                "credential": "clave-nueva"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["identityCode"], "11223344");
    assert_eq!(body["name"], "Ana Diaz");
    assert!(body.get("credential").is_none());
    assert!(body.get("clave").is_none());
}

#[tokio::test]
async fn test_create_user_missing_field_is_bad_request() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/usuarios",
            serde_json::json!({"identityCode": "11223344", "credential": "x"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Present but empty counts as missing
    let response = app
        .oneshot(json_request(
            "POST",
            "/usuarios",
            serde_json::json!({"identityCode": "11223344", "name": "", "credential": "x"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_users() {
    let app = test_app();

    let response = app.oneshot(get_request("/usuarios")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["id"], 1);
    assert_eq!(users[1]["id"], 2);
}

#[tokio::test]
async fn test_get_user_by_id() {
    let app = test_app();

    let response = app.clone().oneshot(get_request("/usuarios/7")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["id"], 7);

    let response = app.oneshot(get_request("/usuarios/404")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_user() {
    let app = test_app();

    let payload = serde_json::json!({
        "identityCode": "87654321",
        "name": "Maria Gomez",
        "credential": "otra-clave"
    });

    let response = app
        .clone()
        .oneshot(json_request("PUT", "/usuarios/7", payload.clone()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["identityCode"], "87654321");
    assert_eq!(body["name"], "Maria Gomez");

    let response = app
        .oneshot(json_request("PUT", "/usuarios/404", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_user() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/usuarios/7")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "User deleted");

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/usuarios/404")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Subject catalog
// =============================================================================

#[tokio::test]
async fn test_create_subject() {
    let app = test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/materia",
            serde_json::json!({"name": "Physics"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["name"], "Physics");
}

#[tokio::test]
async fn test_create_duplicate_subject_conflicts_case_insensitively() {
    let app = test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/materia",
            serde_json::json!({"name": "mathematics"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn test_create_subject_missing_name_is_bad_request() {
    let app = test_app();

    let response = app
        .oneshot(json_request("POST", "/materia", serde_json::json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_subjects() {
    let app = test_app();

    // No term: full catalog ordered by code
    let response = app.clone().oneshot(get_request("/materia")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let subjects = body.as_array().unwrap();
    assert_eq!(subjects.len(), 2);
    assert_eq!(subjects[0]["code"], 1);
    assert_eq!(subjects[1]["code"], 2);

    // Substring term: case-insensitive subset
    let response = app
        .clone()
        .oneshot(get_request("/materia?search=MATH"))
        .await
        .unwrap();
    let body = body_json(response).await;
    let subjects = body.as_array().unwrap();
    assert_eq!(subjects.len(), 1);
    assert_eq!(subjects[0]["name"], "Mathematics");

    // No match: empty list, not an error
    let response = app.oneshot(get_request("/materia?search=zzz")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body.as_array().unwrap().is_empty());
}
