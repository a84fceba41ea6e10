//! # cirrusdb-client
//!
//! Core request pipeline for the CirrusDB REST API.
//!
//! This crate provides the one dispatch path every endpoint goes through:
//! - Path resolution below `{base path}/{version}`
//! - Bearer token injection for authorized calls
//! - JSON body encoding
//! - Per-client connection limit with a FIFO wait queue
//! - Response envelope interpretation into a value or a typed error
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Endpoint Layer                           │
//! │  (cirrusdb-api: applications, tables, records, users, ...)  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    CirrusClient                             │
//! │  - Holds settings + user token                              │
//! │  - Builds RequestDescriptors, interprets envelopes          │
//! │  - authenticate() stores the token                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Throttle                                 │
//! │  - At most `connection_limit` requests in flight            │
//! │  - FIFO queue, or reject when configured                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use cirrusdb_client::{CirrusClient, ClientSettings, Credentials, RequestMethod, RequestOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), cirrusdb_client::Error> {
//!     let client = CirrusClient::new(
//!         ClientSettings::builder()
//!             .with_connection_limit(4)
//!             .build(),
//!     )?;
//!
//!     client.authenticate(Credentials::new("me@example.com", "secret")).await?;
//!
//!     let table = client
//!         .dispatch(["app1", "tables", "t1"], RequestOptions::authorized(RequestMethod::Get))
//!         .await?;
//!
//!     println!("{}", table.into_value());
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod request;
mod response;
mod throttle;

pub use client::{CirrusClient, Credentials};
pub use config::{
    ClientSettings, ClientSettingsBuilder, DEFAULT_CONNECTION_LIMIT, DEFAULT_HOSTNAME,
    DEFAULT_PATH, DEFAULT_PORT,
};
pub use error::{Error, ErrorKind, Result};
pub use request::{resolve_path, PathSpec, RequestDescriptor, RequestMethod, RequestOptions};
pub use response::{Reply, ResponseEnvelope};
pub use throttle::{Throttle, ThrottleSlot};

/// Default API version segment.
pub const DEFAULT_API_VERSION: &str = "v1";

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("cirrusdb-rs/", env!("CARGO_PKG_VERSION"));
