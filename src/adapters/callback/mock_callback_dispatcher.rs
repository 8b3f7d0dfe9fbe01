//! Mock callback dispatcher for testing.
//!
//! Records every delivery and answers with a scripted outcome, so handler
//! and router tests never touch the network.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use url::Url;

use crate::domain::gateway::OutcomePayload;
use crate::ports::{CallbackDispatcher, CallbackFailure, DeliveryOutcome};

/// A delivery captured by the mock.
#[derive(Debug, Clone)]
pub struct RecordedDelivery {
    pub url: Url,
    pub payload: OutcomePayload,
}

/// Mock dispatcher with call tracking.
///
/// # Example
///
/// ```ignore
/// let mock = MockCallbackDispatcher::rejecting(502, "bad gateway");
/// // ... run an execute request ...
/// assert_eq!(mock.delivery_count(), 1);
/// ```
#[derive(Clone)]
pub struct MockCallbackDispatcher {
    outcome: DeliveryOutcome,
    deliveries: Arc<Mutex<Vec<RecordedDelivery>>>,
}

impl Default for MockCallbackDispatcher {
    fn default() -> Self {
        Self::accepting()
    }
}

impl MockCallbackDispatcher {
    /// Every delivery succeeds.
    pub fn accepting() -> Self {
        Self::with_outcome(DeliveryOutcome::Delivered)
    }

    /// Every delivery fails with the given upstream status and body.
    pub fn rejecting(status: u16, body: impl Into<String>) -> Self {
        Self::with_outcome(DeliveryOutcome::Failed(CallbackFailure::from_response(
            status, body,
        )))
    }

    pub fn with_outcome(outcome: DeliveryOutcome) -> Self {
        Self {
            outcome,
            deliveries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn deliveries(&self) -> Vec<RecordedDelivery> {
        self.deliveries.lock().unwrap().clone()
    }

    pub fn delivery_count(&self) -> usize {
        self.deliveries.lock().unwrap().len()
    }
}

#[async_trait]
impl CallbackDispatcher for MockCallbackDispatcher {
    async fn deliver(&self, url: &Url, payload: &OutcomePayload) -> DeliveryOutcome {
        self.deliveries.lock().unwrap().push(RecordedDelivery {
            url: url.clone(),
            payload: payload.clone(),
        });
        self.outcome.clone()
    }
}
