//! HTTP-level integration tests for registration and login.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json};
use sqlx::PgPool;

/// Register a user via the API and return the parsed response body.
async fn register_user(app: axum::Router, name: &str, email: &str, password: &str) -> serde_json::Value {
    let body = serde_json::json!({ "name": name, "email": email, "password": password });
    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

/// Registration returns 201 with a safe user representation.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_success(pool: PgPool) {
    let app = common::build_test_app(pool);

    let json = register_user(app, "Ana", "ana@test.com", "secret-password").await;

    assert!(json["id"].as_i64().unwrap() >= 1);
    assert_eq!(json["name"], "Ana");
    assert_eq!(json["email"], "ana@test.com");
    assert_eq!(json["role"], "user");
    assert!(
        json.get("password_hash").is_none(),
        "password hash must never be serialized"
    );
}

/// Registration rejects passwords shorter than 6 characters with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_short_password(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "name": "Bo", "email": "bo@test.com", "password": "five5" });
    let response = post_json(app, "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(
        json["error"].as_str().unwrap().contains("at least 6"),
        "error should state the minimum length"
    );
}

/// Registering the same email twice returns 409.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_duplicate_email(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    register_user(app, "First", "dup@test.com", "password1").await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "name": "Second", "email": "dup@test.com", "password": "password2" });
    let response = post_json(app, "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

/// Emails are trimmed and lowercased before storage, so differently-cased
/// duplicates collide and login accepts any casing.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_normalizes_email(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let json = register_user(app, "Case", "  Mixed@Case.COM ", "password1").await;
    assert_eq!(json["email"], "mixed@case.com");

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "email": "MIXED@case.com", "password": "password1" });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// Successful login returns an access token and safe user info.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let registered = register_user(app, "Dana", "dana@test.com", "hunter2-plus").await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "email": "dana@test.com", "password": "hunter2-plus" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["access_token"].is_string(), "response must contain access_token");
    assert!(json["expires_in"].is_number(), "response must contain expires_in");
    assert_eq!(json["user"]["id"], registered["id"]);
    assert_eq!(json["user"]["role"], "user");
}

/// Login with an incorrect password returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    register_user(app, "Eve", "eve@test.com", "correct-password").await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "email": "eve@test.com", "password": "incorrect" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Login with an unknown email returns the same 401 as a wrong password.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_unknown_email(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": "ghost@test.com", "password": "whatever" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// The login token is accepted by the authenticated message surface.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_token_grants_access(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    register_user(app, "Flo", "flo@test.com", "flo-password").await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "email": "flo@test.com", "password": "flo-password" });
    let login = body_json(post_json(app, "/api/v1/auth/login", body).await).await;
    let token = login["access_token"].as_str().unwrap();

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/messages", token).await;
    assert_eq!(response.status(), StatusCode::OK);
}
