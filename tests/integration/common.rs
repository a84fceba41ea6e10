use cirrusdb::{CirrusApi, ClientSettings};
use cirrusdb::client::ClientSettingsBuilder;
use serde_json::Value;
use tracing_subscriber::EnvFilter;
use wiremock::{MockServer, ResponseTemplate};

pub const TOKEN: &str = "integration-token";

/// Install a test-writer subscriber once per binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Settings pointed at the mock server with tracing on and no token.
pub fn settings_for(server: &MockServer) -> ClientSettingsBuilder {
    init_tracing();
    ClientSettings::builder()
        .with_endpoint(&server.uri())
        .expect("mock server URI should parse")
        .with_tracing(true)
}

/// An API client pointed at the mock server, already holding a token.
pub fn authorized_api(server: &MockServer) -> CirrusApi {
    CirrusApi::new(settings_for(server).with_user_token(TOKEN).build())
        .expect("Failed to create API client")
}

pub fn bearer() -> String {
    format!("Bearer {TOKEN}")
}

pub fn results(results: Value) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_json(serde_json::json!({"success": true, "results": results}))
}

pub fn failure(status: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status)
        .set_body_json(serde_json::json!({"success": false, "message": message}))
}
