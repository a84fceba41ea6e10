//! Client settings.

use std::time::Duration;

use crate::error::{Error, ErrorKind, Result};

/// Default CirrusDB host.
pub const DEFAULT_HOSTNAME: &str = "www.cirrusdb.com";

/// Default port. Port 443 implies TLS unless overridden.
pub const DEFAULT_PORT: u16 = 443;

/// Default API base path.
pub const DEFAULT_PATH: &str = "/api";

/// Default maximum number of in-flight requests per client.
pub const DEFAULT_CONNECTION_LIMIT: usize = 10;

/// Settings for a [`CirrusClient`](crate::CirrusClient).
///
/// Held by the client behind a lock. After construction only
/// `authenticate` writes to it (the user token, and email/password the
/// first time they are supplied).
///
/// ## Security
///
/// The password and user token are redacted in Debug output.
#[derive(Clone)]
pub struct ClientSettings {
    /// Remote hostname.
    pub hostname: String,
    /// Remote port.
    pub port: u16,
    /// Force TLS on or off. `None` means TLS iff the port is 443.
    pub tls: Option<bool>,
    /// API base path, e.g. `/api`.
    pub path: String,
    /// API version segment, e.g. `v1`.
    pub version: String,
    /// Account email used by `authenticate`.
    pub email: Option<String>,
    /// Account password used by `authenticate`.
    pub password: Option<String>,
    /// Bearer token attached to authorized calls.
    pub user_token: Option<String>,
    /// Maximum concurrent requests. `0` disables throttling.
    pub connection_limit: usize,
    /// Reject calls instead of queueing them once the limit is reached.
    pub error_on_connection_limit: bool,
    /// Queue length tolerated before rejecting. `None` rejects as soon as
    /// every slot is busy.
    pub max_queue_length: Option<usize>,
    /// Transport request timeout. Unset by default.
    pub timeout: Option<Duration>,
    /// Transport connect timeout. Unset by default.
    pub connect_timeout: Option<Duration>,
    /// User-Agent header value.
    pub user_agent: String,
    /// Whether to emit per-request tracing events.
    pub enable_tracing: bool,
}

impl std::fmt::Debug for ClientSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientSettings")
            .field("hostname", &self.hostname)
            .field("port", &self.port)
            .field("tls", &self.tls)
            .field("path", &self.path)
            .field("version", &self.version)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("user_token", &self.user_token.as_ref().map(|_| "[REDACTED]"))
            .field("connection_limit", &self.connection_limit)
            .field("error_on_connection_limit", &self.error_on_connection_limit)
            .field("max_queue_length", &self.max_queue_length)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("user_agent", &self.user_agent)
            .field("enable_tracing", &self.enable_tracing)
            .finish()
    }
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            hostname: DEFAULT_HOSTNAME.to_string(),
            port: DEFAULT_PORT,
            tls: None,
            path: DEFAULT_PATH.to_string(),
            version: crate::DEFAULT_API_VERSION.to_string(),
            email: None,
            password: None,
            user_token: None,
            connection_limit: DEFAULT_CONNECTION_LIMIT,
            error_on_connection_limit: false,
            max_queue_length: None,
            timeout: None,
            connect_timeout: None,
            user_agent: crate::USER_AGENT.to_string(),
            enable_tracing: true,
        }
    }
}

impl ClientSettings {
    /// Create a new settings builder.
    pub fn builder() -> ClientSettingsBuilder {
        ClientSettingsBuilder::default()
    }

    /// Load settings from `CIRRUSDB_*` environment variables.
    ///
    /// Unset or empty variables keep their defaults.
    ///
    /// - `CIRRUSDB_HOSTNAME`, `CIRRUSDB_PORT`, `CIRRUSDB_TLS`, `CIRRUSDB_PATH`, `CIRRUSDB_VERSION`
    /// - `CIRRUSDB_EMAIL`, `CIRRUSDB_PASSWORD`, `CIRRUSDB_USER_TOKEN`
    /// - `CIRRUSDB_CONNECTION_LIMIT`, `CIRRUSDB_ERROR_ON_CONNECTION_LIMIT`,
    ///   `CIRRUSDB_MAX_QUEUE_LENGTH`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let mut builder = Self::builder();

        if let Some(hostname) = var("CIRRUSDB_HOSTNAME") {
            builder = builder.with_hostname(hostname);
        }
        if let Some(port) = var("CIRRUSDB_PORT") {
            builder = builder.with_port(parse_var("CIRRUSDB_PORT", &port)?);
        }
        if let Some(tls) = var("CIRRUSDB_TLS") {
            builder = builder.with_tls(parse_var("CIRRUSDB_TLS", &tls)?);
        }
        if let Some(path) = var("CIRRUSDB_PATH") {
            builder = builder.with_path(path);
        }
        if let Some(version) = var("CIRRUSDB_VERSION") {
            builder = builder.with_version(version);
        }
        if let Some(email) = var("CIRRUSDB_EMAIL") {
            builder = builder.with_email(email);
        }
        if let Some(password) = var("CIRRUSDB_PASSWORD") {
            builder = builder.with_password(password);
        }
        if let Some(token) = var("CIRRUSDB_USER_TOKEN") {
            builder = builder.with_user_token(token);
        }
        if let Some(limit) = var("CIRRUSDB_CONNECTION_LIMIT") {
            builder = builder.with_connection_limit(parse_var("CIRRUSDB_CONNECTION_LIMIT", &limit)?);
        }
        if let Some(flag) = var("CIRRUSDB_ERROR_ON_CONNECTION_LIMIT") {
            builder = builder
                .with_error_on_connection_limit(parse_var("CIRRUSDB_ERROR_ON_CONNECTION_LIMIT", &flag)?);
        }
        if let Some(length) = var("CIRRUSDB_MAX_QUEUE_LENGTH") {
            builder = builder.with_max_queue_length(parse_var("CIRRUSDB_MAX_QUEUE_LENGTH", &length)?);
        }

        Ok(builder.build())
    }

    /// Whether requests go over TLS.
    pub fn uses_tls(&self) -> bool {
        self.tls.unwrap_or(self.port == 443)
    }

    /// URL scheme for requests.
    pub fn scheme(&self) -> &'static str {
        if self.uses_tls() {
            "https"
        } else {
            "http"
        }
    }

    /// Returns true if a non-empty user token is held.
    pub fn has_user_token(&self) -> bool {
        self.user_token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, value: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| Error::new(ErrorKind::Config(format!("{key}: {e}"))))
}

/// Builder for ClientSettings.
#[derive(Debug, Default)]
pub struct ClientSettingsBuilder {
    settings: ClientSettings,
}

impl ClientSettingsBuilder {
    /// Set the remote hostname.
    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.settings.hostname = hostname.into();
        self
    }

    /// Set the remote port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.settings.port = port;
        self
    }

    /// Force TLS on or off regardless of port.
    pub fn with_tls(mut self, tls: bool) -> Self {
        self.settings.tls = Some(tls);
        self
    }

    /// Take hostname, port and TLS from a base URL such as
    /// `http://127.0.0.1:8080`.
    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self> {
        let url = url::Url::parse(endpoint)?;
        let hostname = url
            .host_str()
            .ok_or_else(|| Error::new(ErrorKind::InvalidUrl(format!("{endpoint}: missing host"))))?;
        let port = url
            .port_or_known_default()
            .ok_or_else(|| Error::new(ErrorKind::InvalidUrl(format!("{endpoint}: missing port"))))?;

        self.settings.hostname = hostname.to_string();
        self.settings.port = port;
        self.settings.tls = Some(url.scheme() == "https");
        Ok(self)
    }

    /// Set the API base path.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.settings.path = path.into();
        self
    }

    /// Set the API version segment.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.settings.version = version.into();
        self
    }

    /// Set the account email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.settings.email = non_empty(email.into());
        self
    }

    /// Set the account password.
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.settings.password = non_empty(password.into());
        self
    }

    /// Start with a bearer token already held.
    pub fn with_user_token(mut self, token: impl Into<String>) -> Self {
        self.settings.user_token = non_empty(token.into());
        self
    }

    /// Set the maximum number of concurrent requests (`0` = unlimited).
    pub fn with_connection_limit(mut self, limit: usize) -> Self {
        self.settings.connection_limit = limit;
        self
    }

    /// Reject calls instead of queueing them when the limit is reached.
    pub fn with_error_on_connection_limit(mut self, enabled: bool) -> Self {
        self.settings.error_on_connection_limit = enabled;
        self
    }

    /// Number of calls allowed to wait before rejection kicks in.
    pub fn with_max_queue_length(mut self, length: usize) -> Self {
        self.settings.max_queue_length = Some(length);
        self
    }

    /// Set the transport request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.settings.timeout = Some(timeout);
        self
    }

    /// Set the transport connect timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.settings.connect_timeout = Some(timeout);
        self
    }

    /// Set custom User-Agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.settings.user_agent = user_agent.into();
        self
    }

    /// Enable or disable per-request tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.settings.enable_tracing = enabled;
        self
    }

    /// Build the client settings.
    pub fn build(self) -> ClientSettings {
        self.settings
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
