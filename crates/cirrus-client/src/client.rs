//! The CirrusDB client: request dispatch and authentication.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::config::ClientSettings;
use crate::error::{Error, ErrorKind, Result};
use crate::request::{PathSpec, RequestDescriptor, RequestMethod, RequestOptions};
use crate::response::{Reply, ResponseEnvelope};
use crate::throttle::Throttle;

/// Local path of the authentication endpoint.
const AUTH_PATH: &str = "auth";

/// Email and password sent to the authentication endpoint.
///
/// The password is redacted in Debug output.
#[derive(Clone, Default, Serialize)]
pub struct Credentials {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Credentials {
    /// Credentials with both fields set.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            password: Some(password.into()),
        }
    }
}

/// CirrusDB API client.
///
/// Every call goes through one pipeline: resolve the path, attach headers,
/// wait for a throttle slot, send, and interpret the reply envelope.
///
/// Clones share settings, the throttle and the sequence counter, so a token
/// obtained through one clone is used by all of them.
///
/// ## Token races
///
/// The token is read once per call while the request is assembled. A call
/// assembled while `authenticate` is running sees either the old or the new
/// token; the last write wins.
///
/// # Example
///
/// ```rust,ignore
/// use cirrusdb_client::{CirrusClient, ClientSettings, Credentials, RequestMethod, RequestOptions};
///
/// let client = CirrusClient::new(ClientSettings::default())?;
/// client.authenticate(Credentials::new("me@example.com", "secret")).await?;
///
/// let tables = client
///     .dispatch(["app1", "tables"], RequestOptions::authorized(RequestMethod::Get))
///     .await?;
/// ```
#[derive(Clone)]
pub struct CirrusClient {
    http: reqwest::Client,
    settings: Arc<RwLock<ClientSettings>>,
    throttle: Throttle,
    sequence: Arc<AtomicU64>,
}

impl std::fmt::Debug for CirrusClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CirrusClient")
            .field("settings", &*self.read_settings())
            .field("throttle", &self.throttle)
            .finish_non_exhaustive()
    }
}

impl CirrusClient {
    /// Create a new client.
    pub fn new(settings: ClientSettings) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(&settings.user_agent);
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }

        let http = builder
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        let throttle = if settings.error_on_connection_limit {
            Throttle::new(
                settings.connection_limit,
                Some(settings.max_queue_length.unwrap_or(0)),
                true,
            )
        } else {
            Throttle::new(settings.connection_limit, None, false)
        };

        debug!(target: "cirrusdb::core", settings = ?settings, "Client initialised");

        Ok(Self {
            http,
            settings: Arc::new(RwLock::new(settings)),
            throttle,
            sequence: Arc::new(AtomicU64::new(0)),
        })
    }

    /// Create a client with default settings.
    pub fn default_client() -> Result<Self> {
        Self::new(ClientSettings::default())
    }

    /// Create a client from `CIRRUSDB_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientSettings::from_env()?)
    }

    /// A snapshot of the current settings.
    pub fn settings(&self) -> ClientSettings {
        self.read_settings().clone()
    }

    /// The bearer token currently held, if any.
    pub fn user_token(&self) -> Option<String> {
        self.read_settings().user_token.clone()
    }

    /// Returns true once a token is held.
    pub fn is_authenticated(&self) -> bool {
        self.read_settings().has_user_token()
    }

    /// The admission gate shared by this client's requests.
    pub fn throttle(&self) -> &Throttle {
        &self.throttle
    }

    fn read_settings(&self) -> RwLockReadGuard<'_, ClientSettings> {
        self.settings.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_settings(&self) -> RwLockWriteGuard<'_, ClientSettings> {
        self.settings.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn next_sequence(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::Relaxed)
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Send a request without a body.
    pub async fn dispatch(
        &self,
        path: impl Into<PathSpec>,
        options: RequestOptions,
    ) -> Result<Reply> {
        self.execute::<()>(path.into(), options, None).await
    }

    /// Send a request with a JSON body.
    pub async fn dispatch_with_body<B: Serialize + ?Sized>(
        &self,
        path: impl Into<PathSpec>,
        options: RequestOptions,
        body: &B,
    ) -> Result<Reply> {
        self.execute(path.into(), options, Some(body)).await
    }

    /// Send a request to the API root without a body.
    pub async fn dispatch_root(&self, options: RequestOptions) -> Result<Reply> {
        self.execute::<()>(PathSpec::Root, options, None).await
    }

    /// Send a request to the API root with a JSON body.
    pub async fn dispatch_root_with_body<B: Serialize + ?Sized>(
        &self,
        options: RequestOptions,
        body: &B,
    ) -> Result<Reply> {
        self.execute(PathSpec::Root, options, Some(body)).await
    }

    async fn execute<B: Serialize + ?Sized>(
        &self,
        path: PathSpec,
        options: RequestOptions,
        body: Option<&B>,
    ) -> Result<Reply> {
        let seq = self.next_sequence();

        let (request, url, tracing_enabled) = {
            let settings = self.read_settings();
            let request = RequestDescriptor::build(seq, &settings, &path, options, body)?;
            let url = request.url(&settings)?;
            (request, url, settings.enable_tracing)
        };

        if tracing_enabled {
            debug!(
                target: "cirrusdb::request",
                seq,
                method = %request.method,
                path = %request.path,
                authorized = request.requires_authorization,
                has_body = request.body.is_some(),
                "Sending request"
            );
        }

        let (status, raw) = self
            .throttle
            .submit(|| self.send(&request, url))
            .await?;

        let result = ResponseEnvelope::parse(&raw).and_then(|envelope| envelope.into_reply(status));

        if tracing_enabled {
            match &result {
                Ok(reply) => debug!(
                    target: "cirrusdb::response",
                    seq,
                    status,
                    acknowledged = reply.is_acknowledged(),
                    "Response received"
                ),
                Err(err) => info!(
                    target: "cirrusdb::response",
                    seq,
                    status,
                    error = %err,
                    "Request failed"
                ),
            }
        }

        result
    }

    /// The transport step: one HTTP exchange, body read to the end.
    async fn send(&self, request: &RequestDescriptor, url: url::Url) -> Result<(u16, String)> {
        let mut req = self.http.request(request.method.to_reqwest(), url);

        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }

        if let Some(ref body) = request.body {
            req = req.body(body.clone());
        }

        let response = req.send().await?;
        let status = response.status().as_u16();
        let raw = response.text().await?;

        Ok((status, raw))
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    /// Exchange email and password for a user token.
    ///
    /// Missing credentials are filled from the settings, and credentials the
    /// settings lack are stored there. On success the returned token is held
    /// for every later authorized call and also returned.
    ///
    /// The reply's `results` must be a non-empty string. Any other payload is
    /// a protocol error and the stored token is left unchanged.
    #[instrument(skip(self, credentials))]
    pub async fn authenticate(&self, mut credentials: Credentials) -> Result<String> {
        {
            let mut settings = self.write_settings();
            merge_credential(&mut credentials.email, &mut settings.email);
            merge_credential(&mut credentials.password, &mut settings.password);
        }

        let reply = self
            .dispatch_with_body(
                AUTH_PATH,
                RequestOptions::with_method(RequestMethod::Post),
                &credentials,
            )
            .await?;

        let token = match reply {
            Reply::Results(serde_json::Value::String(token)) if !token.is_empty() => token,
            _ => {
                return Err(Error::new(ErrorKind::Protocol(
                    "authentication reply did not contain a token".to_string(),
                )))
            }
        };

        self.write_settings().user_token = Some(token.clone());
        debug!(target: "cirrusdb::core", "User token stored");

        Ok(token)
    }
}

/// First write wins in both directions: the call borrows a stored value it
/// lacks, and the settings keep a value the call supplies first.
fn merge_credential(call: &mut Option<String>, stored: &mut Option<String>) {
    let call_value = call.as_deref().filter(|v| !v.is_empty());
    let stored_value = stored.as_deref().filter(|v| !v.is_empty());

    match (call_value, stored_value) {
        (None, Some(value)) => *call = Some(value.to_string()),
        (Some(value), None) => *stored = Some(value.to_string()),
        _ => {}
    }
}
