//! ExecuteActionHandler - Builds, signs and routes a simulated outcome.
//!
//! Execute requests are not signature-checked: the simulator always answers
//! with a payload signed by the process key, whatever the caller sent.

use std::sync::Arc;

use url::Url;

use crate::domain::gateway::{
    format_timestamp, parse_field_url, redirect_for, ExecuteResult, FieldSet, GatewayError,
    OutcomePayload, SigningKey, CALLBACK_URL_FIELD,
};
use crate::ports::{CallbackDispatcher, CallbackFailure, Clock, DeliveryOutcome, ReferenceGenerator};

/// Command to execute a simulated gateway action.
#[derive(Debug, Clone)]
pub struct ExecuteActionCommand {
    pub action: ExecuteResult,
    pub fields: FieldSet,
    /// Set by the `fire_callback=true` request parameter.
    pub fire_callback: bool,
}

/// Where the execute flow ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecuteResolution {
    /// Send the shopper to this URL.
    Redirect(Url),
    /// The merchant callback failed; no redirect is offered.
    CallbackFailed(CallbackFailure),
}

/// Result of a completed execute action.
#[derive(Debug, Clone)]
pub struct ExecuteActionResult {
    /// Same instant as the payload's `x_timestamp`.
    pub timestamp: String,
    pub payload: OutcomePayload,
    pub delivery: DeliveryOutcome,
    pub resolution: ExecuteResolution,
}

/// Handler for execute actions.
pub struct ExecuteActionHandler {
    signing_key: SigningKey,
    references: Arc<dyn ReferenceGenerator>,
    clock: Arc<dyn Clock>,
    dispatcher: Arc<dyn CallbackDispatcher>,
}

impl ExecuteActionHandler {
    pub fn new(
        signing_key: SigningKey,
        references: Arc<dyn ReferenceGenerator>,
        clock: Arc<dyn Clock>,
        dispatcher: Arc<dyn CallbackDispatcher>,
    ) -> Self {
        Self {
            signing_key,
            references,
            clock,
            dispatcher,
        }
    }

    pub async fn handle(
        &self,
        cmd: ExecuteActionCommand,
    ) -> Result<ExecuteActionResult, GatewayError> {
        // 1. Build and sign the outcome with the process key
        let timestamp = format_timestamp(self.clock.now());
        let reference = self.references.next_reference();
        let payload = OutcomePayload::build(
            &cmd.action,
            &cmd.fields,
            &reference,
            &timestamp,
            &self.signing_key,
        );

        // 2. Compose the redirect before anything leaves the process
        let redirect = redirect_for(&cmd.fields, payload.fields())?;

        // 3. Optionally notify the merchant
        let delivery = self
            .maybe_deliver(&payload, &cmd.fields, cmd.fire_callback)
            .await?;

        let resolution = match &delivery {
            DeliveryOutcome::Failed(failure) => ExecuteResolution::CallbackFailed(failure.clone()),
            DeliveryOutcome::Skipped | DeliveryOutcome::Delivered => {
                ExecuteResolution::Redirect(redirect)
            }
        };

        tracing::info!(
            action = %cmd.action,
            gateway_reference = %reference,
            fire_callback = cmd.fire_callback,
            redirected = matches!(resolution, ExecuteResolution::Redirect(_)),
            "Execute action completed"
        );

        Ok(ExecuteActionResult {
            timestamp,
            payload,
            delivery,
            resolution,
        })
    }

    /// Delivers `payload` to `x_url_callback` when `fire_callback` is set.
    ///
    /// The callback URL is validated before any request is made.
    pub async fn maybe_deliver(
        &self,
        payload: &OutcomePayload,
        inbound: &FieldSet,
        fire_callback: bool,
    ) -> Result<DeliveryOutcome, GatewayError> {
        if !fire_callback {
            return Ok(DeliveryOutcome::Skipped);
        }

        let url = parse_field_url(inbound, CALLBACK_URL_FIELD)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(GatewayError::invalid_url(
                CALLBACK_URL_FIELD,
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }

        Ok(self.dispatcher.deliver(&url, payload).await)
    }
}
