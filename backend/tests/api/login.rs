use crate::helpers::spawn_app;
use backend::authentication::{DEMO_USER_EMAIL, DEMO_USER_SENHA};
use hyper::StatusCode;
use static_routes::*;

#[tokio::test]
async fn known_credentials_get_a_success_json_body() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let login_body = serde_json::json!({
        "email": DEMO_USER_EMAIL,
        "senha": DEMO_USER_SENHA,
    });
    let response = app.post_login(&login_body).await;

    // Assert
    assert_eq!(StatusCode::OK, response.status());
    let payload: serde_json::Value = response.json().await.unwrap();
    assert_eq!(payload["mensagem"], "Login efetuado com sucesso!");
}

#[tokio::test]
async fn wrong_senha_is_unauthorized() {
    let app = spawn_app().await;

    let login_body = serde_json::json!({
        "email": DEMO_USER_EMAIL,
        "senha": "1234",
    });
    let response = app.post_login(&login_body).await;

    assert_eq!(StatusCode::UNAUTHORIZED, response.status());
    // the status line text is what the browser side logs
    assert_eq!(Some("Unauthorized"), response.status().canonical_reason());
}

#[tokio::test]
async fn unknown_email_is_unauthorized() {
    let app = spawn_app().await;

    let login_body = serde_json::json!({
        "email": "maria@email.com",
        "senha": DEMO_USER_SENHA,
    });
    let response = app.post_login(&login_body).await;

    assert_eq!(StatusCode::UNAUTHORIZED, response.status());
}

#[tokio::test]
async fn empty_credentials_are_unauthorized() {
    // empty strings are legal input, they just match no account
    let app = spawn_app().await;

    let response = app
        .post_login(&serde_json::json!({"email": "", "senha": ""}))
        .await;

    assert_eq!(StatusCode::UNAUTHORIZED, response.status());
}

#[tokio::test]
async fn body_without_senha_is_a_bad_request() {
    let app = spawn_app().await;

    let login_body = serde_json::json!({
        "email": DEMO_USER_EMAIL,
        "password": DEMO_USER_SENHA,
    });
    let response = app.post_login(&login_body).await;

    assert_eq!(StatusCode::BAD_REQUEST, response.status());
}

#[tokio::test]
async fn non_json_body_is_a_bad_request() {
    let app = spawn_app().await;

    let response = app
        .post(routes().api.login)
        .header("Content-Type", "text/plain")
        .body("email=joaozinho@email.com&senha=123")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(StatusCode::BAD_REQUEST, response.status());
}

#[tokio::test]
async fn overlapping_submissions_are_independent() {
    let app = spawn_app().await;

    let good = serde_json::json!({"email": DEMO_USER_EMAIL, "senha": DEMO_USER_SENHA});
    let bad = serde_json::json!({"email": DEMO_USER_EMAIL, "senha": "1234"});

    let (first, second) = tokio::join!(app.post_login(&good), app.post_login(&bad));

    assert_eq!(StatusCode::OK, first.status());
    assert_eq!(StatusCode::UNAUTHORIZED, second.status());
}
