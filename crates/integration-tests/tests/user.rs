//! Current-user query and profile updates.

use pizza_stand_backend::seed;
use pizza_stand_integration_tests::TestContext;
use reqwest::StatusCode;
use serde_json::{Value, json};

async fn classic_ctx() -> TestContext {
    TestContext::launch(seed::classic().build()).await
}

#[tokio::test]
async fn test_me_is_null_when_anonymous() {
    let ctx = classic_ctx().await;
    assert_eq!(ctx.get_json("/api/user/me").await, Value::Null);
}

#[tokio::test]
async fn test_update_merges_partial_record() {
    let ctx = classic_ctx().await;
    ctx.login("d@jwt.com", "a").await;

    let response = ctx
        .client
        .put(ctx.url("/api/user/3"))
        .json(&json!({ "name": "Kai Updated" }))
        .send()
        .await
        .expect("update request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("JSON body");
    assert_eq!(body["user"]["name"], "Kai Updated");
    assert_eq!(body["user"]["email"], "d@jwt.com", "email not in update");
    assert!(
        !body["token"].as_str().expect("fresh token").is_empty(),
        "update returns a fresh session token"
    );

    // The merged record is what the current-user query now reflects.
    let me = ctx.get_json("/api/user/me").await;
    assert_eq!(me["name"], "Kai Updated");
    assert_eq!(me["roles"], json!([{ "role": "diner" }]));

    // The omitted password survived the merge.
    assert_eq!(ctx.login("d@jwt.com", "a").await.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_email_change_rekeys_the_directory() {
    let ctx = classic_ctx().await;
    ctx.login("d@jwt.com", "a").await;

    let response = ctx
        .client
        .put(ctx.url("/api/user/3"))
        .json(&json!({ "email": "kai@jwt.com" }))
        .send()
        .await
        .expect("update request");
    assert_eq!(response.status(), StatusCode::OK);

    // Old email no longer authenticates; the new one does, same password.
    assert_eq!(
        ctx.login("d@jwt.com", "a").await.status(),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(ctx.login("kai@jwt.com", "a").await.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_update_can_replace_password() {
    let ctx = classic_ctx().await;

    let response = ctx
        .client
        .put(ctx.url("/api/user/3"))
        .json(&json!({ "password": "better" }))
        .send()
        .await
        .expect("update request");
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(
        ctx.login("d@jwt.com", "a").await.status(),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        ctx.login("d@jwt.com", "better").await.status(),
        StatusCode::OK
    );
}

#[tokio::test]
async fn test_update_unknown_user_is_404() {
    let ctx = classic_ctx().await;

    let response = ctx
        .client
        .put(ctx.url("/api/user/4242"))
        .json(&json!({ "name": "nobody" }))
        .send()
        .await
        .expect("update request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_rejects_malformed_email() {
    let ctx = classic_ctx().await;

    let response = ctx
        .client
        .put(ctx.url("/api/user/3"))
        .json(&json!({ "email": "not-an-email" }))
        .send()
        .await
        .expect("update request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // The record is untouched.
    assert_eq!(ctx.login("d@jwt.com", "a").await.status(), StatusCode::OK);
}
