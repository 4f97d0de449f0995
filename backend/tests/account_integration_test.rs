//! Integration tests for account updates

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
#[ignore = "requires database"]
async fn test_update_name_only() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let (status, body) = app
        .put_auth("/api/v1/account", &user.access_token, &json!({ "name": "Renamed" }))
        .await;
    assert_eq!(status, StatusCode::OK);

    let body = common::parse(&body);
    assert_eq!(body["user"]["name"], "Renamed");
    assert_eq!(body["user"]["email"], user.email.as_str());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_change_password_requires_current_password() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let wrong = json!({
        "name": "Test User",
        "current_password": "not-it",
        "new_password": "newpass99"
    });
    let (status, _) = app.put_auth("/api/v1/account", &user.access_token, &wrong).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let right = json!({
        "name": "Test User",
        "current_password": user.password,
        "new_password": "newpass99"
    });
    let (status, _) = app.put_auth("/api/v1/account", &user.access_token, &right).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app
        .post("/api/v1/auth/login", &json!({ "email": user.email, "password": "newpass99" }))
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_new_password_alone_is_ignored() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let body = json!({ "name": "Test User", "new_password": "newpass99" });
    let (status, _) = app.put_auth("/api/v1/account", &user.access_token, &body).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app
        .post("/api/v1/auth/login", &json!({ "email": user.email, "password": user.password }))
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_email_taken_by_other_account() {
    let app = common::TestApp::new().await;
    let first = app.create_test_user().await;
    let second = app.create_test_user().await;

    let body = json!({ "name": "Test User", "email": first.email });
    let (status, _) = app.put_auth("/api/v1/account", &second.access_token, &body).await;
    assert_eq!(status, StatusCode::CONFLICT);

    // Keeping one's own email is fine
    let body = json!({ "name": "Test User", "email": second.email });
    let (status, _) = app.put_auth("/api/v1/account", &second.access_token, &body).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_deleted_user_is_not_found() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    sqlx::query("DELETE FROM users WHERE email = $1")
        .bind(&user.email)
        .execute(&app.pool)
        .await
        .unwrap();

    let (status, _) = app
        .put_auth("/api/v1/account", &user.access_token, &json!({ "name": "Ghost User" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
