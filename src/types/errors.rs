//! Application error types.
//!
//! All errors use `thiserror` for automatic Error trait derivation and provide
//! clear error messages with context.

use super::ToolId;
use serde_json::Value;
use thiserror::Error;

/// Application result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Normalized failure of a single catalog service request.
///
/// Every transport-level failure (connection refused, timeout, non-2xx status)
/// takes this one shape regardless of which endpoint produced it.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ApiError {
    /// Human-readable message.
    pub message: String,
    /// HTTP status code, if a response was received.
    pub status: Option<u16>,
    /// Decoded JSON response body, if the body was JSON.
    pub body: Option<Value>,
    /// Request path relative to the base URL (e.g. `/api/tools/2`).
    pub path: String,
}

impl ApiError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            body: None,
            path: path.into(),
        }
    }

    /// Failure before any response was received.
    pub fn transport(path: &str, err: impl std::fmt::Display) -> Self {
        Self::new(path, format!("request to {} failed: {}", path, err))
    }

    /// Non-success response. The message prefers the body's `error`, then its
    /// `message`, then a generic `HTTP {status} on {path}`.
    pub fn from_status(path: &str, status: u16, body: Option<Value>) -> Self {
        let message = body
            .as_ref()
            .and_then(|b| message_field(b, "error").or_else(|| message_field(b, "message")))
            .unwrap_or_else(|| format!("HTTP {} on {}", status, path));

        Self {
            message,
            status: Some(status),
            body,
            path: path.to_string(),
        }
    }

    /// True when no response was received at all.
    pub fn is_transport(&self) -> bool {
        self.status.is_none()
    }

    pub fn is_status(&self, code: u16) -> bool {
        self.status == Some(code)
    }
}

fn message_field(body: &Value, field: &str) -> Option<String> {
    body.get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Main error enum for the catalog client.
#[derive(Error, Debug)]
pub enum Error {
    /// Catalog service request failed and no fallback applied.
    #[error("api error: {0}")]
    Api(#[from] ApiError),

    /// Tool absent from both the catalog service and the fallback table.
    #[error("tool {id} not found")]
    ToolNotFound { id: ToolId },

    /// Invalid configuration value.
    #[error("configuration error: {0}")]
    Config(String),

    /// Invalid caller input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Process exit code for the command-line front end.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::ToolNotFound { .. } => 2,
            Error::Validation(_) => 64,
            Error::Api(_) => 69,
            Error::Config(_) => 78,
            Error::Serialization(_) => 70,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::ToolNotFound { .. })
    }
}

// Convenience constructors
impl Error {
    pub fn tool_not_found(id: impl Into<ToolId>) -> Self {
        Self::ToolNotFound { id: id.into() }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
