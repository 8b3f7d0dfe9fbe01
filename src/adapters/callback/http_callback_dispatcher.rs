//! HTTP callback dispatcher.
//!
//! Posts the signed outcome payload form-encoded to the merchant callback URL.
//! One attempt per execute request, bounded by the configured timeout.
//!
//! # Configuration
//!
//! ```ignore
//! let config = HttpCallbackConfig::default().with_timeout(Duration::from_secs(5));
//! let dispatcher = HttpCallbackDispatcher::new(config)?;
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use url::Url;

use crate::domain::gateway::OutcomePayload;
use crate::ports::{CallbackDispatcher, CallbackFailure, DeliveryOutcome};

/// Longest merchant response body kept in a callback failure, in bytes.
pub const MAX_FAILURE_BODY_BYTES: usize = 4096;

/// Configuration for outbound callback delivery.
#[derive(Debug, Clone)]
pub struct HttpCallbackConfig {
    /// Upper bound for the whole request, connect through body.
    pub timeout: Duration,
    /// User-Agent sent to merchants.
    pub user_agent: String,
}

impl Default for HttpCallbackConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            user_agent: concat!("offsite-gateway-sim/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl HttpCallbackConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// reqwest-backed `CallbackDispatcher`.
pub struct HttpCallbackDispatcher {
    http_client: Client,
}

impl HttpCallbackDispatcher {
    /// Builds the dispatcher and its pooled HTTP client.
    pub fn new(config: HttpCallbackConfig) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .build()?;
        Ok(Self { http_client })
    }
}

#[async_trait]
impl CallbackDispatcher for HttpCallbackDispatcher {
    async fn deliver(&self, url: &Url, payload: &OutcomePayload) -> DeliveryOutcome {
        let form: Vec<(&str, String)> = payload.fields().query_pairs().collect();

        let response = match self.http_client.post(url.clone()).form(&form).send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(
                    callback_url = %url,
                    timeout = err.is_timeout(),
                    error = %err,
                    "Callback delivery failed before a response"
                );
                return DeliveryOutcome::Failed(CallbackFailure::transport(err.to_string()));
            }
        };

        let status = response.status();
        if status == StatusCode::OK {
            tracing::info!(callback_url = %url, "Callback delivered");
            return DeliveryOutcome::Delivered;
        }

        let body = read_failure_body(response).await;
        tracing::warn!(
            callback_url = %url,
            status = status.as_u16(),
            "Callback rejected by merchant"
        );
        DeliveryOutcome::Failed(CallbackFailure::from_response(status.as_u16(), body))
    }
}

/// Reads at most [`MAX_FAILURE_BODY_BYTES`] of a rejected callback's body.
///
/// A read error replaces the body with the error text.
async fn read_failure_body(mut response: Response) -> String {
    let mut buf = Vec::new();
    loop {
        match response.chunk().await {
            Ok(Some(chunk)) => {
                let room = MAX_FAILURE_BODY_BYTES - buf.len();
                buf.extend_from_slice(&chunk[..chunk.len().min(room)]);
                if buf.len() == MAX_FAILURE_BODY_BYTES {
                    break;
                }
            }
            Ok(None) => break,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to read callback response body");
                return format!("failed to read callback response body: {err}");
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateway::{ExecuteResult, FieldSet, SigningKey};
    use httpmock::prelude::*;

    fn payload(action: &str) -> OutcomePayload {
        OutcomePayload::build(
            &ExecuteResult::new(action),
            &FieldSet::from_params(vec![("x_reference", "R1"), ("x_amount", "10.00")]),
            "abc123",
            "2024-01-01T12:00:00Z",
            &SigningKey::new("secret"),
        )
    }

    fn dispatcher(timeout: Duration) -> HttpCallbackDispatcher {
        HttpCallbackDispatcher::new(HttpCallbackConfig::default().with_timeout(timeout)).unwrap()
    }

    #[test]
    fn config_defaults() {
        let config = HttpCallbackConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("offsite-gateway-sim/"));
    }

    #[tokio::test]
    async fn ok_response_is_delivered() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/callback")
                    .header("content-type", "application/x-www-form-urlencoded")
                    .body_contains("x_result=success")
                    .body_contains("x_reference=R1")
                    .body_contains("x_signature=");
                then.status(200).body("ok");
            })
            .await;

        let url = Url::parse(&server.url("/callback")).unwrap();
        let outcome = dispatcher(Duration::from_secs(5))
            .deliver(&url, &payload("success"))
            .await;

        mock.assert_async().await;
        assert_eq!(outcome, DeliveryOutcome::Delivered);
    }

    #[tokio::test]
    async fn server_error_captures_status_and_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/callback");
                then.status(500).body("merchant exploded");
            })
            .await;

        let url = Url::parse(&server.url("/callback")).unwrap();
        let outcome = dispatcher(Duration::from_secs(5))
            .deliver(&url, &payload("failed"))
            .await;

        assert_eq!(
            outcome,
            DeliveryOutcome::Failed(CallbackFailure::from_response(500, "merchant exploded"))
        );
    }

    #[tokio::test]
    async fn oversized_failure_body_is_truncated() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/callback");
                then.status(502).body("x".repeat(MAX_FAILURE_BODY_BYTES * 4));
            })
            .await;

        let url = Url::parse(&server.url("/callback")).unwrap();
        let outcome = dispatcher(Duration::from_secs(5))
            .deliver(&url, &payload("success"))
            .await;

        match outcome {
            DeliveryOutcome::Failed(failure) => {
                assert_eq!(failure.status, Some(502));
                assert_eq!(failure.body, "x".repeat(MAX_FAILURE_BODY_BYTES));
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn ok_response_with_large_body_is_delivered() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/callback");
                then.status(200).body("y".repeat(MAX_FAILURE_BODY_BYTES * 16));
            })
            .await;

        let url = Url::parse(&server.url("/callback")).unwrap();
        let outcome = dispatcher(Duration::from_secs(5))
            .deliver(&url, &payload("success"))
            .await;

        assert_eq!(outcome, DeliveryOutcome::Delivered);
    }

    #[tokio::test]
    async fn non_200_success_status_is_still_a_failure() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/callback");
                then.status(201);
            })
            .await;

        let url = Url::parse(&server.url("/callback")).unwrap();
        let outcome = dispatcher(Duration::from_secs(5))
            .deliver(&url, &payload("success"))
            .await;

        match outcome {
            DeliveryOutcome::Failed(failure) => assert_eq!(failure.status, Some(201)),
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn slow_merchant_times_out() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/callback");
                then.status(200).delay(Duration::from_millis(500));
            })
            .await;

        let url = Url::parse(&server.url("/callback")).unwrap();
        let outcome = dispatcher(Duration::from_millis(50))
            .deliver(&url, &payload("success"))
            .await;

        match outcome {
            DeliveryOutcome::Failed(failure) => assert_eq!(failure.status, None),
            other => panic!("expected timeout failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreachable_merchant_is_a_transport_failure() {
        let url = Url::parse("http://127.0.0.1:1/callback").unwrap();
        let outcome = dispatcher(Duration::from_secs(2))
            .deliver(&url, &payload("success"))
            .await;

        match outcome {
            DeliveryOutcome::Failed(failure) => {
                assert_eq!(failure.status, None);
                assert!(!failure.body.is_empty());
            }
            other => panic!("expected transport failure, got {other:?}"),
        }
    }
}
