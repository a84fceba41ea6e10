//! CirrusDB API client.
//!
//! This client wraps `CirrusClient` from `cirrusdb-client` and provides one
//! method per CirrusDB endpoint. Each method is a fixed path plus a verb;
//! all of them go through the same dispatch pipeline.

use cirrusdb_client::{CirrusClient, ClientSettings, RequestMethod, RequestOptions};

use crate::Result;

mod account;
mod app_users;
mod applications;
mod fields;
mod forms;
mod notifications;
mod pages;
mod records;
mod reports;
mod roles;
mod tables;
mod users;
mod variables;
mod webhooks;

/// CirrusDB API client.
///
/// Provides typed methods for every endpoint:
/// - Authentication and account information
/// - Applications and their settings, pages, roles, users and variables
/// - Tables with their fields, forms, notifications, records, reports and webhooks
/// - Platform users and their API tokens
///
/// All methods except `authenticate`, `verify_token` and `get_manifest`
/// require a user token.
///
/// # Example
///
/// ```rust,ignore
/// use cirrusdb_api::CirrusApi;
/// use cirrusdb_client::{ClientSettings, Credentials};
///
/// let api = CirrusApi::new(ClientSettings::default())?;
/// api.authenticate(Credentials::new("me@example.com", "secret")).await?;
///
/// // List tables
/// let tables = api.get_tables("app1").await?;
///
/// // Create a record
/// let created = api
///     .post_table_record("app1", "t1", &json!({"name": "Widget"}))
///     .await?;
///
/// // Delete it again
/// api.delete_table_record("app1", "t1", "r1").await?;
/// ```
#[derive(Debug, Clone)]
pub struct CirrusApi {
    client: CirrusClient,
}

impl CirrusApi {
    /// Create a new API client with the given settings.
    pub fn new(settings: ClientSettings) -> Result<Self> {
        let client = CirrusClient::new(settings)?;
        Ok(Self { client })
    }

    /// Create an API client from `CIRRUSDB_*` environment variables.
    pub fn from_env() -> Result<Self> {
        let client = CirrusClient::from_env()?;
        Ok(Self { client })
    }

    /// Create an API client from an existing CirrusClient.
    pub fn from_client(client: CirrusClient) -> Self {
        Self { client }
    }

    /// Get the underlying CirrusClient.
    pub fn inner(&self) -> &CirrusClient {
        &self.client
    }

    /// Returns true once a user token is held.
    pub fn is_authenticated(&self) -> bool {
        self.client.is_authenticated()
    }
}

fn authorized(method: RequestMethod) -> RequestOptions {
    RequestOptions::authorized(method)
}
