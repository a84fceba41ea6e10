//! Token acquisition and reuse.

use super::common::{failure, results, settings_for};
use cirrusdb::{CirrusApi, Credentials};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer};

#[tokio::test]
async fn test_authenticate_then_use_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth"))
        .and(body_json(json!({"email": "ops@example.com", "password": "hunter2"})))
        .respond_with(results(json!("fresh-token")))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/app1/roles"))
        .and(header("Authorization", "Bearer fresh-token"))
        .respond_with(results(json!([{"id": "admin"}])))
        .expect(1)
        .mount(&server)
        .await;

    let api = CirrusApi::new(settings_for(&server).build()).unwrap();
    assert!(!api.is_authenticated());

    let token = api
        .authenticate(Credentials::new("ops@example.com", "hunter2"))
        .await
        .expect("authenticate should succeed");
    assert_eq!(token, "fresh-token");
    assert!(api.is_authenticated());

    let roles = api.get_roles("app1").await.unwrap();
    assert_eq!(roles.into_value()[0]["id"], "admin");
}

#[tokio::test]
async fn test_authenticate_uses_configured_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth"))
        .and(body_json(json!({"email": "cfg@example.com", "password": "cfg-pass"})))
        .respond_with(results(json!("cfg-token")))
        .expect(1)
        .mount(&server)
        .await;

    let settings = settings_for(&server)
        .with_email("cfg@example.com")
        .with_password("cfg-pass")
        .build();
    let api = CirrusApi::new(settings).unwrap();

    let token = api.authenticate(Credentials::default()).await.unwrap();
    assert_eq!(token, "cfg-token");
}

#[tokio::test]
async fn test_rejected_credentials_keep_client_unauthenticated() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth"))
        .respond_with(failure(401, "Invalid email or password"))
        .mount(&server)
        .await;

    let api = CirrusApi::new(settings_for(&server).build()).unwrap();
    let err = api
        .authenticate(Credentials::new("ops@example.com", "wrong"))
        .await
        .unwrap_err();

    assert!(err.is_application_error());
    assert_eq!(err.status(), Some(401));
    assert!(!api.is_authenticated());
}

#[tokio::test]
async fn test_token_is_shared_between_clones() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth"))
        .respond_with(results(json!("shared-token")))
        .mount(&server)
        .await;

    let api = CirrusApi::new(settings_for(&server).build()).unwrap();
    let other = api.clone();

    api.authenticate(Credentials::new("a@b.c", "p")).await.unwrap();
    assert_eq!(other.inner().user_token().as_deref(), Some("shared-token"));
}
