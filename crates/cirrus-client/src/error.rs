//! Error types for cirrusdb-client.

/// Result type alias for cirrusdb-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for cirrusdb-client operations.
///
/// Every failed call produces exactly one of these. The message shown by
/// `Display` comes from the remote envelope when one was received.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Returns true if the client was misconfigured for this call
    /// (missing token, bad settings, unusable URL).
    pub fn is_config_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::MissingToken | ErrorKind::Config(_) | ErrorKind::InvalidUrl(_)
        )
    }

    /// Returns true if the throttle refused the call.
    pub fn is_capacity_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Capacity { .. })
    }

    /// Returns true if the underlying connection or IO failed.
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Timeout | ErrorKind::Connection(_) | ErrorKind::Transport(_)
        )
    }

    /// Returns true if the reply could not be read as an envelope.
    pub fn is_protocol_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Protocol(_))
    }

    /// Returns true if the remote service answered with `success: false`.
    pub fn is_application_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Api { .. })
    }

    /// Returns true if the request body could not be encoded.
    pub fn is_serialization_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization(_))
    }

    /// Returns the HTTP status code reported alongside an application error.
    pub fn status(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// An authorized call was made before any token was held.
    #[error("Missing user token")]
    MissingToken,

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The request URL could not be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The connection limit was reached and the overflow policy rejects.
    #[error("Connection limit reached ({active} active, {queued} queued)")]
    Capacity { active: usize, queued: usize },

    /// Request timeout.
    #[error("Request timeout")]
    Timeout,

    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Any other transport failure.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The reply was not a valid envelope.
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// The remote service reported `success: false`.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request body could not be encoded as JSON.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A reply payload could not be decoded into the requested type.
    #[error("JSON error: {0}")]
    Json(String),

    /// Other error.
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            ErrorKind::Timeout
        } else if err.is_connect() {
            ErrorKind::Connection(err.to_string())
        } else if err.is_builder() {
            ErrorKind::Config(err.to_string())
        } else {
            ErrorKind::Transport(err.to_string())
        };

        Error::with_source(kind, err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(ErrorKind::InvalidUrl(err.to_string()), err)
    }
}
