//! Every endpoint method hits its documented verb and path.

use super::common::{authorized_api, bearer, results, settings_for};
use cirrusdb::{CirrusApi, Reply, Result};
use serde::{Deserialize, Serialize};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer};

async fn expect_call(server: &MockServer, verb: &str, route: &str) {
    Mock::given(method(verb))
        .and(path(route))
        .and(header("Authorization", bearer().as_str()))
        .respond_with(results(json!({"route": route})))
        .expect(1)
        .named(format!("{verb} {route}"))
        .mount(server)
        .await;
}

fn route_of(reply: Result<Reply>) -> String {
    let value = reply.expect("endpoint call should succeed").into_value();
    value["route"].as_str().unwrap_or_default().to_string()
}

#[tokio::test]
async fn test_application_scoped_endpoints() {
    let server = MockServer::start().await;
    let body = json!({"name": "x"});

    for (verb, route) in [
        ("GET", "/api/v1/app1"),
        ("PUT", "/api/v1/app1"),
        ("DELETE", "/api/v1/app1"),
        ("GET", "/api/v1/app1/settings"),
        ("GET", "/api/v1/app1/files/t1/r1/f1"),
        ("GET", "/api/v1/app1/pages"),
        ("POST", "/api/v1/app1/pages"),
        ("GET", "/api/v1/app1/pages/p1"),
        ("PUT", "/api/v1/app1/pages/p1"),
        ("DELETE", "/api/v1/app1/pages/p1"),
        ("GET", "/api/v1/app1/roles/ro1"),
        ("GET", "/api/v1/app1/variables"),
        ("POST", "/api/v1/app1/variables"),
        ("GET", "/api/v1/app1/users"),
        ("DELETE", "/api/v1/app1/users/u1"),
    ] {
        expect_call(&server, verb, route).await;
    }

    let api = authorized_api(&server);
    assert_eq!(route_of(api.get_application("app1").await), "/api/v1/app1");
    api.put_application("app1", &body).await.unwrap();
    api.delete_application("app1").await.unwrap();
    api.get_application_settings("app1").await.unwrap();
    assert_eq!(
        route_of(api.get_file("app1", "t1", "r1", "f1").await),
        "/api/v1/app1/files/t1/r1/f1"
    );
    api.get_pages("app1").await.unwrap();
    api.post_page("app1", &body).await.unwrap();
    api.get_page("app1", "p1").await.unwrap();
    api.put_page("app1", "p1", &body).await.unwrap();
    api.delete_page("app1", "p1").await.unwrap();
    api.get_role("app1", "ro1").await.unwrap();
    api.get_variables("app1").await.unwrap();
    api.post_variable("app1", &body).await.unwrap();
    api.get_application_users("app1").await.unwrap();
    api.delete_application_user("app1", "u1").await.unwrap();
}

#[tokio::test]
async fn test_table_scoped_endpoints() {
    let server = MockServer::start().await;
    let body = json!({"label": "y"});

    for (verb, route) in [
        ("GET", "/api/v1/app1/tables"),
        ("POST", "/api/v1/app1/tables"),
        ("PUT", "/api/v1/app1/tables/t1"),
        ("GET", "/api/v1/app1/tables/t1/fields"),
        ("POST", "/api/v1/app1/tables/t1/fields"),
        ("GET", "/api/v1/app1/tables/t1/forms/fo1"),
        ("PUT", "/api/v1/app1/tables/t1/notifications/n1"),
        ("DELETE", "/api/v1/app1/tables/t1/reports/rp1"),
        ("GET", "/api/v1/app1/tables/t1/webhooks"),
        ("POST", "/api/v1/app1/tables/t1/records"),
        ("DELETE", "/api/v1/app1/tables/t1/records/r1"),
    ] {
        expect_call(&server, verb, route).await;
    }

    let api = authorized_api(&server);
    api.get_tables("app1").await.unwrap();
    api.post_table("app1", &body).await.unwrap();
    api.put_table("app1", "t1", &body).await.unwrap();
    api.get_table_fields("app1", "t1").await.unwrap();
    api.post_table_field("app1", "t1", &body).await.unwrap();
    api.get_table_form("app1", "t1", "fo1").await.unwrap();
    api.put_table_notification("app1", "t1", "n1", &body)
        .await
        .unwrap();
    api.delete_table_report("app1", "t1", "rp1").await.unwrap();
    api.get_table_webhooks("app1", "t1").await.unwrap();
    api.post_table_record("app1", "t1", &body).await.unwrap();
    api.delete_table_record("app1", "t1", "r1").await.unwrap();
}

#[tokio::test]
async fn test_user_and_token_endpoints() {
    let server = MockServer::start().await;
    let body = json!({"name": "z"});

    for (verb, route) in [
        ("POST", "/api/v1/users"),
        ("GET", "/api/v1/users/u1"),
        ("PUT", "/api/v1/users/u1"),
        ("DELETE", "/api/v1/users/u1"),
        ("GET", "/api/v1/users/u1/tokens"),
        ("GET", "/api/v1/users/u1/tokens/k1"),
        ("PUT", "/api/v1/users/u1/tokens/k1"),
        ("GET", "/api/v1/id"),
    ] {
        expect_call(&server, verb, route).await;
    }

    let api = authorized_api(&server);
    api.post_user(&body).await.unwrap();
    api.get_user("u1").await.unwrap();
    api.put_user("u1", &body).await.unwrap();
    api.delete_user("u1").await.unwrap();
    api.get_user_tokens("u1").await.unwrap();
    api.get_user_token("u1", "k1").await.unwrap();
    api.put_user_token("u1", "k1", &body).await.unwrap();
    assert_eq!(route_of(api.get_id().await), "/api/v1/id");
}

#[tokio::test]
async fn test_manifest_needs_no_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/manifest"))
        .respond_with(results(json!({"version": "4.2.0"})))
        .expect(1)
        .mount(&server)
        .await;

    let api = CirrusApi::new(settings_for(&server).build()).unwrap();
    let manifest = api.get_manifest().await.expect("manifest should be public");
    assert_eq!(manifest.into_value()["version"], "4.2.0");

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("Authorization").is_none());
}

#[derive(Debug, Serialize)]
struct RecordQuery<'a> {
    status: &'a str,
    limit: u32,
}

#[derive(Debug, Deserialize, PartialEq)]
struct Order {
    id: String,
    status: String,
}

#[tokio::test]
async fn test_query_records_into_typed_rows() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/app1/tables/orders/records"))
        .and(query_param("status", "open"))
        .and(query_param("limit", "25"))
        .respond_with(results(json!([
            {"id": "o1", "status": "open"},
            {"id": "o2", "status": "open"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let api = authorized_api(&server);
    let orders: Vec<Order> = api
        .query_table_records(
            "app1",
            "orders",
            &RecordQuery {
                status: "open",
                limit: 25,
            },
        )
        .await
        .unwrap()
        .deserialize()
        .expect("rows should decode");

    assert_eq!(orders.len(), 2);
    assert_eq!(
        orders[0],
        Order {
            id: "o1".to_string(),
            status: "open".to_string()
        }
    );
}
