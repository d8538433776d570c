mod common;

use axum::http::{Method, StatusCode};
use guestlist::{app, auth};
use serde_json::{Value, json};

use common::{TEST_SECRET, json_body, send, test_state};

#[tokio::test]
async fn register_rejects_missing_username() {
    let app = app(test_state().await);

    let response = send(
        &app,
        Method::POST,
        "/api/users",
        None,
        Some(json!({"username": "", "password": "password"})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn register_rejects_missing_password() {
    let app = app(test_state().await);

    let response = send(
        &app,
        Method::POST,
        "/api/users",
        None,
        Some(json!({"username": "username", "password": ""})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn register_returns_public_user_and_token() {
    let app = app(test_state().await);

    let response = send(
        &app,
        Method::POST,
        "/api/users",
        None,
        Some(json!({"username": "username", "password": "password"})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let token = response
        .headers()
        .get("x-auth-token")
        .unwrap()
        .to_str()
        .unwrap()
        .to_owned();

    let user = json_body(response).await;
    assert!(!user["id"].as_str().unwrap().is_empty());
    assert_eq!(user["username"], "username");
    assert_eq!(user.get("password"), None);

    // The issued token identifies the new user.
    let claims = auth::verify(&token, TEST_SECRET).unwrap();
    assert_eq!(claims.sub, user["id"].as_str().unwrap());
}

#[tokio::test]
async fn register_persists_user() {
    let state = test_state().await;
    let app = app(state.clone());

    send(
        &app,
        Method::POST,
        "/api/users",
        None,
        Some(json!({"username": "username", "password": "password"})),
    )
    .await;

    let stored: Option<(String,)> = sqlx::query_as("SELECT id FROM users WHERE username=?")
        .bind("username")
        .fetch_optional(&state.db_pool)
        .await
        .unwrap();
    assert!(stored.is_some());
}

#[tokio::test]
async fn stored_password_is_a_salted_hash() {
    let state = test_state().await;
    let app = app(state.clone());

    send(
        &app,
        Method::POST,
        "/api/users",
        None,
        Some(json!({"username": "username", "password": "password"})),
    )
    .await;

    let (hash,): (String,) = sqlx::query_as("SELECT password FROM users WHERE username=?")
        .bind("username")
        .fetch_one(&state.db_pool)
        .await
        .unwrap();
    assert_ne!(hash, "password");
    assert!(bcrypt::verify("password", &hash).unwrap());
}

#[tokio::test]
async fn register_rejects_duplicate_username() {
    let state = test_state().await;
    let app = app(state.clone());
    let body = json!({"username": "username", "password": "password"});

    let first = send(&app, Method::POST, "/api/users", None, Some(body.clone())).await;
    assert_eq!(first.status(), StatusCode::OK);

    let (hash_before,): (String,) = sqlx::query_as("SELECT password FROM users WHERE username=?")
        .bind("username")
        .fetch_one(&state.db_pool)
        .await
        .unwrap();

    let second = send(
        &app,
        Method::POST,
        "/api/users",
        None,
        Some(json!({"username": "username", "password": "hunter2"})),
    )
    .await;
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);

    // The existing record is untouched.
    let (hash_after,): (String,) = sqlx::query_as("SELECT password FROM users WHERE username=?")
        .bind("username")
        .fetch_one(&state.db_pool)
        .await
        .unwrap();
    assert_eq!(hash_before, hash_after);
}

#[tokio::test]
async fn me_requires_token() {
    let app = app(test_state().await);

    let response = send(&app, Method::GET, "/api/users/me", None, None).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn me_rejects_garbage_token() {
    let app = app(test_state().await);

    let response = send(&app, Method::GET, "/api/users/me", Some("garbage"), None).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn me_returns_current_user_without_password() {
    let app = app(test_state().await);

    let registered = send(
        &app,
        Method::POST,
        "/api/users",
        None,
        Some(json!({"username": "username", "password": "password"})),
    )
    .await;
    let token = registered
        .headers()
        .get("x-auth-token")
        .unwrap()
        .to_str()
        .unwrap()
        .to_owned();
    let registered = json_body(registered).await;

    let response = send(&app, Method::GET, "/api/users/me", Some(&token), None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let user = json_body(response).await;
    assert_eq!(user["id"], registered["id"]);
    assert_eq!(user["username"], "username");
    assert_eq!(user.get("password"), None);
}

#[tokio::test]
async fn me_answers_404_for_unknown_identity() {
    let app = app(test_state().await);
    let token = auth::issue("no-such-user", TEST_SECRET).unwrap();

    let response = send(&app, Method::GET, "/api/users/me", Some(&token), None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn register_response_never_contains_plaintext_password() {
    let app = app(test_state().await);

    let response = send(
        &app,
        Method::POST,
        "/api/users",
        None,
        Some(json!({"username": "username", "password": "sup3rsecret"})),
    )
    .await;

    let user: Value = json_body(response).await;
    assert!(!user.to_string().contains("sup3rsecret"));
}
