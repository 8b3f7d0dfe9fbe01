//! CallbackDispatcher port - Outbound delivery of signed outcomes.
//!
//! Delivery is a single attempt. Failures are classified into a
//! [`DeliveryOutcome`] and reported back to the execute caller, never
//! retried and never raised as errors.

use async_trait::async_trait;
use serde::Serialize;
use url::Url;

use crate::domain::gateway::OutcomePayload;

/// Port for posting an outcome payload to a merchant callback endpoint.
#[async_trait]
pub trait CallbackDispatcher: Send + Sync {
    /// POST `payload` to `url` once.
    ///
    /// Only an HTTP 200 response counts as delivered. Any other status,
    /// timeout or transport error yields [`DeliveryOutcome::Failed`].
    async fn deliver(&self, url: &Url, payload: &OutcomePayload) -> DeliveryOutcome;
}

/// Classified result of a callback attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The callback was not requested; nothing was sent.
    Skipped,

    /// The merchant answered 200.
    Delivered,

    /// The merchant answered non-200, or could not be reached.
    Failed(CallbackFailure),
}

/// Upstream detail captured from a failed callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallbackFailure {
    /// HTTP status, absent when no response was received.
    pub status: Option<u16>,

    /// Response body, or the transport error text.
    pub body: String,
}

impl CallbackFailure {
    pub fn from_response(status: u16, body: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            body: body.into(),
        }
    }

    pub fn transport(reason: impl Into<String>) -> Self {
        Self {
            status: None,
            body: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_serializes_status_and_body() {
        let json = serde_json::to_value(CallbackFailure::from_response(500, "boom")).unwrap();
        assert_eq!(json, serde_json::json!({"status": 500, "body": "boom"}));

        let json = serde_json::to_value(CallbackFailure::transport("timed out")).unwrap();
        assert_eq!(json, serde_json::json!({"status": null, "body": "timed out"}));
    }
}
