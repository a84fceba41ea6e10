//! Request descriptors: path resolution, headers and body encoding.

use std::collections::HashMap;

use serde::Serialize;

use crate::config::ClientSettings;
use crate::error::{Error, ErrorKind, Result};

/// HTTP request method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequestMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl RequestMethod {
    /// Convert to reqwest::Method.
    pub fn to_reqwest(&self) -> reqwest::Method {
        match self {
            RequestMethod::Get => reqwest::Method::GET,
            RequestMethod::Post => reqwest::Method::POST,
            RequestMethod::Put => reqwest::Method::PUT,
            RequestMethod::Patch => reqwest::Method::PATCH,
            RequestMethod::Delete => reqwest::Method::DELETE,
        }
    }

    /// The method name as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestMethod::Get => "GET",
            RequestMethod::Post => "POST",
            RequestMethod::Put => "PUT",
            RequestMethod::Patch => "PATCH",
            RequestMethod::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The local part of a request path, below `{base path}/{version}`.
///
/// Built from a single segment (`"manifest"`, `"auth/verify-token"`) or a
/// sequence of segments joined with `/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PathSpec {
    /// The API root itself.
    #[default]
    Root,
    /// A single path string, used as-is.
    Segment(String),
    /// Path segments joined with `/`.
    Segments(Vec<String>),
}

impl PathSpec {
    /// The local path with segments joined.
    pub fn local_path(&self) -> String {
        match self {
            PathSpec::Root => String::new(),
            PathSpec::Segment(segment) => segment.clone(),
            PathSpec::Segments(segments) => segments.join("/"),
        }
    }
}

impl From<&str> for PathSpec {
    fn from(segment: &str) -> Self {
        PathSpec::Segment(segment.to_string())
    }
}

impl From<String> for PathSpec {
    fn from(segment: String) -> Self {
        PathSpec::Segment(segment)
    }
}

impl From<&String> for PathSpec {
    fn from(segment: &String) -> Self {
        PathSpec::Segment(segment.clone())
    }
}

impl From<Vec<String>> for PathSpec {
    fn from(segments: Vec<String>) -> Self {
        PathSpec::Segments(segments)
    }
}

impl From<Vec<&str>> for PathSpec {
    fn from(segments: Vec<&str>) -> Self {
        PathSpec::Segments(segments.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for PathSpec {
    fn from(segments: &[&str]) -> Self {
        PathSpec::Segments(segments.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for PathSpec {
    fn from(segments: [&str; N]) -> Self {
        PathSpec::Segments(segments.iter().map(|s| s.to_string()).collect())
    }
}

/// Per-call options.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub(crate) method: RequestMethod,
    pub(crate) requires_authorization: bool,
    pub(crate) headers: HashMap<String, String>,
}

impl RequestOptions {
    /// GET without authorization.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for options with the given method.
    pub fn with_method(method: RequestMethod) -> Self {
        Self::new().method(method)
    }

    /// Shorthand for authorized options with the given method.
    pub fn authorized(method: RequestMethod) -> Self {
        Self::new().method(method).requires_authorization(true)
    }

    /// Set the HTTP method.
    pub fn method(mut self, method: RequestMethod) -> Self {
        self.method = method;
        self
    }

    /// Require a bearer token for this call.
    pub fn requires_authorization(mut self, required: bool) -> Self {
        self.requires_authorization = required;
        self
    }

    /// Add a header. `Authorization` and `Content-Type` are overwritten by
    /// the pipeline when it sets them.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// The HTTP method.
    pub fn http_method(&self) -> RequestMethod {
        self.method
    }

    /// Whether a bearer token is required.
    pub fn is_authorized(&self) -> bool {
        self.requires_authorization
    }
}

/// A fully resolved request, ready for the transport.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    /// Sequence number used to correlate trace events.
    pub seq: u64,
    /// HTTP method.
    pub method: RequestMethod,
    /// Absolute request path, e.g. `/api/v1/app1/tables`.
    pub path: String,
    /// Request headers.
    pub headers: HashMap<String, String>,
    /// JSON-encoded body.
    pub body: Option<String>,
    /// Whether the request carries the bearer token.
    pub requires_authorization: bool,
}

impl RequestDescriptor {
    /// Resolve a logical call against the current settings.
    ///
    /// Fails with `MissingToken` if authorization is required and no token
    /// is held, and with a serialization error if the body cannot be
    /// encoded. Neither case touches the network.
    pub fn build<B: Serialize + ?Sized>(
        seq: u64,
        settings: &ClientSettings,
        path: &PathSpec,
        options: RequestOptions,
        body: Option<&B>,
    ) -> Result<Self> {
        let RequestOptions {
            method,
            requires_authorization,
            mut headers,
        } = options;

        if requires_authorization {
            let token = settings
                .user_token
                .as_deref()
                .filter(|t| !t.is_empty())
                .ok_or_else(|| Error::new(ErrorKind::MissingToken))?;
            headers.insert("Authorization".to_string(), format!("Bearer {token}"));
        }

        let body = match body {
            Some(body) => {
                let encoded = serde_json::to_string(body).map_err(|e| {
                    Error::with_source(ErrorKind::Serialization(e.to_string()), e)
                })?;
                headers.insert("Content-Type".to_string(), "application/json".to_string());
                Some(encoded)
            }
            None => None,
        };

        Ok(Self {
            seq,
            method,
            path: resolve_path(&settings.path, &settings.version, &path.local_path()),
            headers,
            body,
            requires_authorization,
        })
    }

    /// Absolute URL for this request.
    pub fn url(&self, settings: &ClientSettings) -> Result<url::Url> {
        let raw = format!(
            "{}://{}:{}{}",
            settings.scheme(),
            settings.hostname,
            settings.port,
            self.path
        );
        url::Url::parse(&raw).map_err(|e| {
            Error::with_source(ErrorKind::InvalidUrl(format!("{raw}: {e}")), e)
        })
    }
}

/// Join base path, version and local path with `/`.
pub fn resolve_path(base_path: &str, version: &str, local_path: &str) -> String {
    [base_path, version, local_path].join("/")
}
