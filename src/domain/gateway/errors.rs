//! Gateway-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | InvalidSignature | 401 |
//! | InvalidUrl | 400 |
//! | MalformedBody | 400 |
//! | UnsupportedPayload | 400 |
//! | Catalog | 500 |
//!
//! Callback delivery failures are deliberately absent: they are captured into
//! the execute response, never raised.

use thiserror::Error;

/// Errors raised while handling a single gateway request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// Provided `x_signature` was absent or did not match.
    #[error("Invalid signature")]
    InvalidSignature,

    /// A cancel/callback URL was missing or could not be parsed.
    #[error("Invalid URL in '{field}': {reason}")]
    InvalidUrl { field: String, reason: String },

    /// The request body could not be parsed.
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// The body parsed, but is not a field object.
    #[error("Unsupported payload: {0}")]
    UnsupportedPayload(String),

    /// The calculator field catalog could not be loaded.
    #[error("Field catalog unavailable: {0}")]
    Catalog(String),
}

impl GatewayError {
    pub fn invalid_url(field: impl Into<String>, reason: impl Into<String>) -> Self {
        GatewayError::InvalidUrl {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn malformed_body(reason: impl Into<String>) -> Self {
        GatewayError::MalformedBody(reason.into())
    }

    pub fn unsupported_payload(reason: impl Into<String>) -> Self {
        GatewayError::UnsupportedPayload(reason.into())
    }

    pub fn catalog(reason: impl Into<String>) -> Self {
        GatewayError::Catalog(reason.into())
    }

    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            GatewayError::InvalidSignature => "INVALID_SIGNATURE",
            GatewayError::InvalidUrl { .. } => "INVALID_URL",
            GatewayError::MalformedBody(_) => "MALFORMED_BODY",
            GatewayError::UnsupportedPayload(_) => "UNSUPPORTED_PAYLOAD",
            GatewayError::Catalog(_) => "CATALOG_UNAVAILABLE",
        }
    }
}
