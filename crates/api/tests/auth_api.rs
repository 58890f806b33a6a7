//! HTTP-level integration tests for the `/auth` endpoints.
//!
//! Tests cover registration, duplicate usernames, the non-distinguishing
//! login failure, and the public user listing.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use sqlx::PgPool;

/// Registration returns 201 with a token and the username.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_success(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "alice", "password": "pw123" });
    let response = post_json(app, "/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["token"].is_string(), "response must contain a token");
    assert_eq!(json["username"], "alice");
}

/// Registering an already-taken username returns 409.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_duplicate_username(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "alice", "password": "pw123" });
    let response = post_json(app.clone(), "/auth/register", body.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json(app, "/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Username already exists");
}

/// Registration with a missing or empty field returns 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_missing_fields(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/auth/register",
        serde_json::json!({ "username": "alice" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Username and password required");

    let response = post_json(
        app,
        "/auth/register",
        serde_json::json!({ "username": "", "password": "pw123" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// The register -> login round-trip: wrong password is 401, correct
/// password is 200 with a token.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_flow(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "alice", "password": "pw123" });
    let response = post_json(app.clone(), "/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = serde_json::json!({ "username": "alice", "password": "wrong" });
    let response = post_json(app.clone(), "/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = serde_json::json!({ "username": "alice", "password": "pw123" });
    let response = post_json(app, "/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["token"].is_string(), "response must contain a token");
    assert_eq!(json["username"], "alice");
}

/// Unknown username and wrong password produce byte-identical 401 responses,
/// so the API never reveals whether an account exists.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_failure_is_non_distinguishing(pool: PgPool) {
    let (_user, _password) = common::create_test_user(&pool, "real_user").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "real_user", "password": "incorrect" });
    let wrong_password = post_json(app.clone(), "/auth/login", body).await;

    let body = serde_json::json!({ "username": "ghost", "password": "incorrect" });
    let no_such_user = post_json(app, "/auth/login", body).await;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(no_such_user.status(), StatusCode::UNAUTHORIZED);

    let body_a = body_json(wrong_password).await;
    let body_b = body_json(no_such_user).await;
    assert_eq!(body_a, body_b, "failure causes must be indistinguishable");
    assert_eq!(body_a["error"], "Invalid credentials");
}

/// GET /auth/users lists id + username for every registered user, by id.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_users(pool: PgPool) {
    let (alice, _) = common::create_test_user(&pool, "alice").await;
    let (bob, _) = common::create_test_user(&pool, "bob").await;
    let app = common::build_test_app(pool);

    let response = get(app, "/auth/users").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let users = json["users"].as_array().expect("users must be an array");
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["id"], alice.id);
    assert_eq!(users[0]["username"], "alice");
    assert_eq!(users[1]["id"], bob.id);
    assert_eq!(users[1]["username"], "bob");
    // No password hashes on the wire.
    assert!(users[0].get("password_hash").is_none());
}
