//! Session lifecycle: authenticate, register, logout.

use pizza_stand_backend::seed;
use pizza_stand_integration_tests::TestContext;
use reqwest::StatusCode;
use serde_json::{Value, json};

async fn classic_ctx() -> TestContext {
    TestContext::launch(seed::classic().build()).await
}

// ============================================================================
// Authenticate
// ============================================================================

#[tokio::test]
async fn test_login_returns_seeded_record() {
    let ctx = classic_ctx().await;

    let response = ctx.login("d@jwt.com", "a").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("JSON body");
    assert_eq!(body["user"]["id"], 3);
    assert_eq!(body["user"]["name"], "Kai Chen");
    assert_eq!(body["user"]["email"], "d@jwt.com");
    assert_eq!(body["user"]["roles"], json!([{ "role": "diner" }]));
    assert!(
        body["user"].get("password").is_none(),
        "password must not leak into responses"
    );
    assert!(!body["token"].as_str().expect("token").is_empty());
}

#[tokio::test]
async fn test_login_rejects_wrong_password() {
    let ctx = classic_ctx().await;

    let response = ctx.login("d@jwt.com", "wrong").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: Value = response.json().await.expect("JSON body");
    assert_eq!(body["error"], "unauthorized");

    // Session is still anonymous.
    assert_eq!(ctx.get_json("/api/user/me").await, Value::Null);
}

#[tokio::test]
async fn test_login_rejects_unknown_email() {
    let ctx = classic_ctx().await;
    let response = ctx.login("ghost@jwt.com", "a").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_failed_login_keeps_existing_session() {
    let ctx = classic_ctx().await;

    assert_eq!(ctx.login("d@jwt.com", "a").await.status(), StatusCode::OK);
    assert_eq!(
        ctx.login("d@jwt.com", "wrong").await.status(),
        StatusCode::UNAUTHORIZED
    );

    let me = ctx.get_json("/api/user/me").await;
    assert_eq!(me["id"], 3, "prior session must survive the failed attempt");
}

#[tokio::test]
async fn test_every_seeded_credential_authenticates() {
    let ctx = classic_ctx().await;

    for (email, password, id) in [
        ("a@jwt.com", "admin", 1),
        ("f@jwt.com", "franchisee", 2),
        ("d@jwt.com", "a", 3),
    ] {
        let response = ctx.login(email, password).await;
        assert_eq!(response.status(), StatusCode::OK, "login {email}");
        let body: Value = response.json().await.expect("JSON body");
        assert_eq!(body["user"]["id"], id);
    }
}

// ============================================================================
// Register
// ============================================================================

#[tokio::test]
async fn test_register_creates_diner_and_opens_session() {
    let ctx = classic_ctx().await;

    let response = ctx
        .client
        .post(ctx.url("/api/auth"))
        .json(&json!({ "name": "Test Name", "email": "t@jwt.com", "password": "testPass" }))
        .send()
        .await
        .expect("register request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("JSON body");
    let id = body["user"]["id"].as_i64().expect("generated id");
    assert!(id > 3, "generated id must clear the seeded users");
    assert_eq!(body["user"]["roles"], json!([{ "role": "diner" }]));
    assert!(!body["token"].as_str().expect("token").is_empty());

    // Registration opened the session by default.
    let me = ctx.get_json("/api/user/me").await;
    assert_eq!(me["id"], id);
    assert_eq!(me["name"], "Test Name");
}

#[tokio::test]
async fn test_register_without_auto_login_leaves_session_anonymous() {
    let ctx = TestContext::launch(seed::classic().login_on_register(false).build()).await;

    let response = ctx
        .client
        .post(ctx.url("/api/auth"))
        .json(&json!({ "name": "Test Name", "email": "t@jwt.com", "password": "testPass" }))
        .send()
        .await
        .expect("register request");
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(ctx.get_json("/api/user/me").await, Value::Null);

    // The separate login step works with the registered credentials.
    assert_eq!(
        ctx.login("t@jwt.com", "testPass").await.status(),
        StatusCode::OK
    );
}

#[tokio::test]
async fn test_register_rejects_malformed_email() {
    let ctx = classic_ctx().await;

    let response = ctx
        .client
        .post(ctx.url("/api/auth"))
        .json(&json!({ "name": "x", "email": "not-an-email", "password": "pw" }))
        .send()
        .await
        .expect("register request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ============================================================================
// Logout
// ============================================================================

#[tokio::test]
async fn test_logout_clears_session() {
    let ctx = classic_ctx().await;
    ctx.login("f@jwt.com", "franchisee").await;

    let response = ctx
        .client
        .delete(ctx.url("/api/auth"))
        .send()
        .await
        .expect("logout request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    assert_eq!(ctx.get_json("/api/user/me").await, Value::Null);
}

#[tokio::test]
async fn test_logout_is_unconditional() {
    let ctx = classic_ctx().await;

    // Logging out an anonymous session still acknowledges.
    let response = ctx
        .client
        .delete(ctx.url("/api/auth"))
        .send()
        .await
        .expect("logout request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
