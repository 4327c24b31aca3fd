use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the notizia workspace.
///
/// Covers the three failure surfaces of a fetch (HTTP status, transport,
/// parsing), capability mismatches, argument validation, and opaque
/// connector-tagged failures.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotiziaError {
    /// The endpoint answered with a non-success status code.
    #[error("HTTP {status}")]
    Http {
        /// Status code outside the 2xx range.
        status: u16,
    },

    /// The request never completed at the transport level.
    #[error("network error: {0}")]
    Network(String),

    /// The response body was not the JSON shape we expect.
    #[error("parse error: {0}")]
    Parse(String),

    /// The requested capability is not implemented by the target connector.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested (e.g. "articles").
        capability: String,
    },

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// An individual connector returned an error.
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl NotiziaError {
    /// Helper: build an `Http` error from a status code.
    #[must_use]
    pub const fn http(status: u16) -> Self {
        Self::Http { status }
    }

    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub fn unsupported(capability: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: capability.into(),
        }
    }

    /// Helper: build a `Connector` error with the connector name and message.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Whether a retry of the same request could plausibly succeed.
    ///
    /// Capability absence and argument errors are deterministic; everything
    /// that involved the network is worth re-triggering manually.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        !matches!(self, Self::Unsupported { .. } | Self::InvalidArg(_))
    }
}
