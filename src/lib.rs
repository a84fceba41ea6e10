//! # cirrusdb
//!
//! A CirrusDB REST API client library for Rust.
//!
//! This library gives typed, async access to a CirrusDB service with
//! token authentication, a concurrency throttle and uniform handling of the
//! service's `{success, message, results}` response envelope.
//!
//! ## Security
//!
//! - Passwords and tokens are redacted in Debug output
//! - Tracing skips credential parameters
//!
//! ## Crates
//!
//! - **cirrusdb-client** - Dispatch pipeline: settings, throttle, request building, envelope parsing
//! - **cirrusdb-api** - One method per CirrusDB endpoint
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cirrusdb::{CirrusApi, ClientSettings, Credentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = ClientSettings::builder()
//!         .with_hostname("db.example.com")
//!         .with_connection_limit(4)
//!         .build();
//!     let api = CirrusApi::new(settings)?;
//!
//!     api.authenticate(Credentials::new("me@example.com", "secret"))
//!         .await?;
//!
//!     let tables = api.get_tables("app1").await?;
//!     for table in tables.into_value().as_array().into_iter().flatten() {
//!         println!("{}", table["name"]);
//!     }
//!
//!     Ok(())
//! }
//! ```

#[cfg(feature = "api")]
pub use cirrusdb_api as api;
#[cfg(feature = "client")]
pub use cirrusdb_client as client;

// Re-export commonly used types at the top level
#[cfg(feature = "api")]
pub use cirrusdb_api::CirrusApi;
#[cfg(feature = "client")]
pub use cirrusdb_client::{
    CirrusClient, ClientSettings, Credentials, Error, ErrorKind, Reply, Result,
};
