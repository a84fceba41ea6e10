//! Response envelope interpretation.
//!
//! Every CirrusDB reply is a JSON object of the form
//!
//! ```json
//! { "success": true, "message": "optional text", "results": <anything> }
//! ```
//!
//! `success: false` becomes an application error carrying `message` and the
//! HTTP status. A successful reply resolves to [`Reply::Results`] when the
//! `results` key is present (even if it is `null`) and to
//! [`Reply::Acknowledged`] otherwise.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::error::{Error, ErrorKind, Result};

/// The decoded wrapper every reply is expected to have.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResponseEnvelope {
    /// Whether the remote operation succeeded.
    pub success: bool,
    /// Human-readable message, usually set on failure. Non-string values
    /// are kept in their JSON text form.
    #[serde(default, deserialize_with = "message_text")]
    pub message: Option<String>,
    /// Payload. `Some(Value::Null)` when the key is present with `null`.
    #[serde(default, deserialize_with = "present")]
    pub results: Option<serde_json::Value>,
}

/// Distinguishes `"results": null` from a missing key.
fn present<'de, D>(deserializer: D) -> std::result::Result<Option<serde_json::Value>, D::Error>
where
    D: Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(Some)
}

fn message_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => None,
        serde_json::Value::String(text) => Some(text),
        other => Some(other.to_string()),
    })
}

impl ResponseEnvelope {
    /// Parse a raw reply body.
    ///
    /// Anything that is not a JSON object with a boolean `success` field is
    /// a protocol error.
    pub fn parse(body: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(body).map_err(|e| {
            Error::with_source(ErrorKind::Protocol(format!("invalid response envelope: {e}")), e)
        })?;

        // Only objects are envelopes; a derived struct would also take an array.
        if !value.is_object() {
            return Err(Error::new(ErrorKind::Protocol(
                "invalid response envelope: expected a JSON object".to_string(),
            )));
        }

        serde_json::from_value(value).map_err(|e| {
            Error::with_source(ErrorKind::Protocol(format!("invalid response envelope: {e}")), e)
        })
    }

    /// Turn the envelope into the call's outcome.
    pub fn into_reply(self, status: u16) -> Result<Reply> {
        if !self.success {
            let message = self
                .message
                .unwrap_or_else(|| format!("Request failed with status {status}"));
            return Err(Error::new(ErrorKind::Api { status, message }));
        }

        Ok(match self.results {
            Some(results) => Reply::Results(results),
            None => Reply::Acknowledged,
        })
    }
}

/// Outcome of a successful call.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// The reply carried a `results` payload.
    Results(serde_json::Value),
    /// The operation was acknowledged without a payload.
    Acknowledged,
}

impl Reply {
    /// Returns true if the reply had no payload.
    pub fn is_acknowledged(&self) -> bool {
        matches!(self, Reply::Acknowledged)
    }

    /// Borrow the payload, if any.
    pub fn results(&self) -> Option<&serde_json::Value> {
        match self {
            Reply::Results(value) => Some(value),
            Reply::Acknowledged => None,
        }
    }

    /// The payload as JSON. An acknowledgement becomes `true`.
    pub fn into_value(self) -> serde_json::Value {
        match self {
            Reply::Results(value) => value,
            Reply::Acknowledged => serde_json::Value::Bool(true),
        }
    }

    /// Decode the payload into `T`. An acknowledgement decodes from `true`.
    pub fn deserialize<T: DeserializeOwned>(self) -> Result<T> {
        serde_json::from_value(self.into_value()).map_err(Into::into)
    }
}
