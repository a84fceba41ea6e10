//! # cirrusdb-api
//!
//! CirrusDB REST API client with one method per endpoint.
//!
//! ## Features
//!
//! - **Account** - Authenticate, verify tokens, identity, usage and the public manifest
//! - **Applications** - CRUD plus settings, pages, roles, users, variables and files
//! - **Tables** - CRUD plus settings, fields, forms, notifications, reports and webhooks
//! - **Records** - CRUD and query-string listing
//! - **Users** - Platform users and their API tokens
//!
//! Every method returns a [`Reply`]: either the `results` payload of the
//! response envelope or a bare acknowledgement.
//!
//! ## Example
//!
//! ```rust,ignore
//! use cirrusdb_api::{CirrusApi, ClientSettings, Credentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), cirrusdb_api::Error> {
//!     let api = CirrusApi::new(ClientSettings::default())?;
//!     api.authenticate(Credentials::new("me@example.com", "secret"))
//!         .await?;
//!
//!     let records = api
//!         .query_table_records("app1", "t1", &[("limit", "10")])
//!         .await?;
//!     println!("{}", records.into_value());
//!
//!     Ok(())
//! }
//! ```

mod client;

pub use client::CirrusApi;

// Re-export cirrusdb-client types that users might need
pub use cirrusdb_client::{
    ClientSettings, ClientSettingsBuilder, Credentials, Error, ErrorKind, Reply, Result,
};
