//! Tagged results for catalog operations.
//!
//! Every catalog operation reports whether its value came from the catalog
//! service or from local substitute data, and why the substitution happened.

use crate::types::{ApiError, ToolId};
use thiserror::Error;

/// Why a catalog operation served substitute data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FallbackReason {
    /// Transport failure or non-success status.
    #[error(transparent)]
    Request(#[from] ApiError),

    /// The response decoded but matched no accepted shape.
    #[error("unexpected response shape from {path}")]
    Shape { path: String },

    /// The service returned a different tool than the one requested.
    #[error("tool {requested} not found or response shape changed (got {received})")]
    Mismatch { requested: ToolId, received: ToolId },

    /// The client is running without a catalog service.
    #[error("catalog service disabled (offline mode)")]
    Offline,
}

/// Value produced by a catalog operation, tagged with its provenance.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    /// Served by the catalog service.
    Live(T),
    /// Substituted locally after the catalog service could not be used.
    Fallback { value: T, reason: FallbackReason },
}

impl<T> Fetched<T> {
    pub fn fallback(value: T, reason: impl Into<FallbackReason>) -> Self {
        Fetched::Fallback {
            value,
            reason: reason.into(),
        }
    }

    pub fn value(&self) -> &T {
        match self {
            Fetched::Live(value) | Fetched::Fallback { value, .. } => value,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Fetched::Live(value) | Fetched::Fallback { value, .. } => value,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Fetched::Live(_))
    }

    pub fn is_fallback(&self) -> bool {
        !self.is_live()
    }

    pub fn fallback_reason(&self) -> Option<&FallbackReason> {
        match self {
            Fetched::Live(_) => None,
            Fetched::Fallback { reason, .. } => Some(reason),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Fetched<U> {
        match self {
            Fetched::Live(value) => Fetched::Live(f(value)),
            Fetched::Fallback { value, reason } => Fetched::Fallback {
                value: f(value),
                reason,
            },
        }
    }
}
