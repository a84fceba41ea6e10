//! Connection limit and overflow policy over real HTTP exchanges.

use std::time::Duration;

use super::common::{results, settings_for, TOKEN};
use cirrusdb::CirrusApi;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer};

const SLOW: Duration = Duration::from_millis(300);

/// Poll until `check` holds, failing the test after two seconds.
async fn wait_until(mut check: impl FnMut() -> bool) {
    tokio::time::timeout(Duration::from_secs(2), async {
        while !check() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("condition was not reached in time");
}

async fn slow_tables(server: &MockServer, expected: u64) {
    Mock::given(method("GET"))
        .and(path("/api/v1/app1/tables"))
        .respond_with(results(json!([])).set_delay(SLOW))
        .expect(expected)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_in_flight_requests_never_exceed_limit() {
    let server = MockServer::start().await;
    slow_tables(&server, 5).await;

    let settings = settings_for(&server)
        .with_user_token(TOKEN)
        .with_connection_limit(2)
        .build();
    let api = CirrusApi::new(settings).unwrap();

    let handles: Vec<_> = (0..5)
        .map(|_| {
            let api = api.clone();
            tokio::spawn(async move { api.get_tables("app1").await })
        })
        .collect();

    let throttle = api.inner().throttle().clone();
    wait_until(|| throttle.queued() == 3).await;
    assert_eq!(throttle.active(), 2);

    for handle in handles {
        handle.await.unwrap().expect("queued request should succeed");
    }
    assert_eq!(throttle.active(), 0);
    assert_eq!(throttle.queued(), 0);
}

#[tokio::test]
async fn test_reject_when_limit_reached() {
    let server = MockServer::start().await;
    slow_tables(&server, 1).await;

    let settings = settings_for(&server)
        .with_user_token(TOKEN)
        .with_connection_limit(1)
        .with_error_on_connection_limit(true)
        .build();
    let api = CirrusApi::new(settings).unwrap();

    let first = {
        let api = api.clone();
        tokio::spawn(async move { api.get_tables("app1").await })
    };

    let throttle = api.inner().throttle().clone();
    wait_until(|| throttle.active() == 1).await;

    let err = api.get_tables("app1").await.unwrap_err();
    assert!(err.is_capacity_error());

    first.await.unwrap().expect("admitted request should succeed");
}

#[tokio::test]
async fn test_reject_only_once_queue_is_full() {
    let server = MockServer::start().await;
    slow_tables(&server, 2).await;

    let settings = settings_for(&server)
        .with_user_token(TOKEN)
        .with_connection_limit(1)
        .with_error_on_connection_limit(true)
        .with_max_queue_length(1)
        .build();
    let api = CirrusApi::new(settings).unwrap();
    let throttle = api.inner().throttle().clone();

    let first = {
        let api = api.clone();
        tokio::spawn(async move { api.get_tables("app1").await })
    };
    wait_until(|| throttle.active() == 1).await;

    let second = {
        let api = api.clone();
        tokio::spawn(async move { api.get_tables("app1").await })
    };
    wait_until(|| throttle.queued() == 1).await;

    let err = api.get_tables("app1").await.unwrap_err();
    assert!(err.is_capacity_error());

    first.await.unwrap().unwrap();
    second.await.unwrap().expect("queued request should run after the first");
}

#[tokio::test]
async fn test_failed_requests_release_their_slot() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/app1/tables"))
        .respond_with(wiremock::ResponseTemplate::new(500).set_body_string("oops"))
        .expect(3)
        .mount(&server)
        .await;

    let settings = settings_for(&server)
        .with_user_token(TOKEN)
        .with_connection_limit(1)
        .build();
    let api = CirrusApi::new(settings).unwrap();

    for _ in 0..3 {
        let err = api.get_tables("app1").await.unwrap_err();
        assert!(err.is_protocol_error());
    }
    assert_eq!(api.inner().throttle().active(), 0);
}
