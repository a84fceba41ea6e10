//! Dispatch pipeline: path resolution, headers and envelope handling.

use super::common::{authorized_api, bearer, failure, results, settings_for};
use cirrusdb::client::{RequestMethod, RequestOptions};
use cirrusdb::{CirrusApi, CirrusClient};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_table_path_resolves_under_base_and_version() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/app1/tables/t1"))
        .and(header("Authorization", bearer().as_str()))
        .respond_with(results(json!({"id": "t1"})))
        .expect(1)
        .mount(&server)
        .await;

    let api = authorized_api(&server);
    let table = api.get_table("app1", "t1").await.expect("get_table should succeed");
    assert_eq!(table.into_value(), json!({"id": "t1"}));
}

#[tokio::test]
async fn test_custom_base_path_and_version() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/db/v2/app1/tables"))
        .respond_with(results(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let settings = settings_for(&server)
        .with_path("/db")
        .with_version("v2")
        .with_user_token("abc")
        .build();
    let api = CirrusApi::new(settings).expect("Failed to create API client");

    api.get_tables("app1").await.expect("get_tables should succeed");
}

#[tokio::test]
async fn test_repeated_reads_return_equal_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/app1/tables/t1/records/r1"))
        .respond_with(results(json!({"id": "r1", "qty": 3})))
        .expect(2)
        .mount(&server)
        .await;

    let api = authorized_api(&server);
    let first = api.get_table_record("app1", "t1", "r1").await.unwrap();
    let second = api.get_table_record("app1", "t1", "r1").await.unwrap();
    assert_eq!(first.into_value(), second.into_value());
}

#[tokio::test]
async fn test_success_without_results_is_acknowledged() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/app1/tables/t1/records/r1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&server)
        .await;

    let api = authorized_api(&server);
    let reply = api
        .put_table_record("app1", "t1", "r1", &json!({"qty": 4}))
        .await
        .unwrap();
    assert!(reply.is_acknowledged());
    assert_eq!(reply.into_value(), json!(true));
}

#[tokio::test]
async fn test_null_results_are_still_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/app1/variables/v1"))
        .respond_with(results(json!(null)))
        .mount(&server)
        .await;

    let api = authorized_api(&server);
    let reply = api.get_variable("app1", "v1").await.unwrap();
    assert!(!reply.is_acknowledged());
    assert_eq!(reply.into_value(), json!(null));
}

#[tokio::test]
async fn test_failure_envelope_carries_message_and_status() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/app1/tables/t1"))
        .respond_with(failure(403, "Insufficient permissions"))
        .mount(&server)
        .await;

    let api = authorized_api(&server);
    let err = api.delete_table("app1", "t1").await.unwrap_err();
    assert!(err.is_application_error());
    assert_eq!(err.status(), Some(403));
    assert_eq!(err.to_string(), "Insufficient permissions");
}

#[tokio::test]
async fn test_failure_envelope_on_http_200() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/app1"))
        .respond_with(failure(200, "Application is suspended"))
        .mount(&server)
        .await;

    let api = authorized_api(&server);
    let err = api.get_application("app1").await.unwrap_err();
    assert!(err.is_application_error());
    assert_eq!(err.status(), Some(200));
}

#[tokio::test]
async fn test_non_json_reply_is_protocol_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/app1"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let api = authorized_api(&server);
    let err = api.get_application("app1").await.unwrap_err();
    assert!(err.is_protocol_error());
}

#[tokio::test]
async fn test_extra_headers_are_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/app1/pages"))
        .and(header("X-Request-Source", "integration"))
        .and(header("Authorization", bearer().as_str()))
        .respond_with(results(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let api = authorized_api(&server);
    let options =
        RequestOptions::authorized(RequestMethod::Get).header("X-Request-Source", "integration");
    api.inner()
        .dispatch(["app1", "pages"], options)
        .await
        .expect("dispatch should succeed");
}

#[tokio::test]
async fn test_missing_token_never_reaches_network() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(results(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let client = CirrusClient::new(settings_for(&server).build()).unwrap();
    let err = client
        .dispatch("users", RequestOptions::authorized(RequestMethod::Get))
        .await
        .unwrap_err();
    assert!(err.is_config_error());
    assert_eq!(err.to_string(), "Missing user token");
}

#[tokio::test]
async fn test_array_reply_is_protocol_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/app1/roles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([true])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/app1/pages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([false, "boom"])))
        .mount(&server)
        .await;

    let api = authorized_api(&server);
    assert!(api.get_roles("app1").await.unwrap_err().is_protocol_error());
    assert!(api.get_pages("app1").await.unwrap_err().is_protocol_error());
}
