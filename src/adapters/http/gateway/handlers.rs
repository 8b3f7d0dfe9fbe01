//! HTTP handlers for the simulated gateway endpoints.
//!
//! These handlers connect Axum routes to the application layer gateway
//! handlers. None of them keep state between requests.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use crate::application::handlers::gateway::{
    CalculateSignatureCommand, CalculateSignatureHandler, CapturePaymentCommand,
    CapturePaymentHandler, CheckSignatureHandler, ExecuteActionCommand, ExecuteActionHandler,
    ExecuteResolution, RefundPaymentCommand, RefundPaymentHandler,
};
use crate::domain::gateway::{ExecuteResult, GatewayError, SigningKey, FIELD_PREFIX, SIGNATURE_FIELD};
use crate::ports::{CallbackDispatcher, Clock, FieldCatalog, ReferenceGenerator};

use super::dto::{
    CalculatorResponse, ErrorResponse, ExecuteResponse, GatewayInfoResponse,
    SignatureCheckResponse, SignatureFailureResponse,
};
use super::extract::{GatewayRequest, SECRET_KEY_PARAM};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
///
/// The signing key is read-only process configuration; every other
/// collaborator is an Arc-wrapped port.
#[derive(Clone)]
pub struct GatewayAppState {
    pub signing_key: SigningKey,
    pub reference_generator: Arc<dyn ReferenceGenerator>,
    pub clock: Arc<dyn Clock>,
    pub callback_dispatcher: Arc<dyn CallbackDispatcher>,
    pub field_catalog: Arc<dyn FieldCatalog>,
}

impl GatewayAppState {
    /// Create handlers on demand from the shared state.
    pub fn execute_handler(&self) -> ExecuteActionHandler {
        ExecuteActionHandler::new(
            self.signing_key.clone(),
            self.reference_generator.clone(),
            self.clock.clone(),
            self.callback_dispatcher.clone(),
        )
    }

    pub fn capture_handler(&self) -> CapturePaymentHandler {
        CapturePaymentHandler::new(self.signing_key.clone())
    }

    pub fn refund_handler(&self) -> RefundPaymentHandler {
        RefundPaymentHandler::new(
            self.signing_key.clone(),
            self.reference_generator.clone(),
            self.clock.clone(),
        )
    }

    pub fn check_signature_handler(&self) -> CheckSignatureHandler {
        CheckSignatureHandler::new(self.signing_key.clone())
    }

    pub fn calculator_handler(&self) -> CalculateSignatureHandler {
        CalculateSignatureHandler::new(self.signing_key.clone(), self.field_catalog.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tester-facing endpoints
// ════════════════════════════════════════════════════════════════════════════════

/// GET / - Show the shared key and field conventions
pub async fn gateway_info(State(state): State<GatewayAppState>) -> impl IntoResponse {
    Json(GatewayInfoResponse {
        key: state.signing_key.expose().to_string(),
        field_prefix: FIELD_PREFIX,
        signature_field: SIGNATURE_FIELD,
    })
}

/// POST / and POST /incontext - Report whether the payment request is signed
pub async fn payment_page(
    State(state): State<GatewayAppState>,
    request: GatewayRequest,
) -> impl IntoResponse {
    let signature_ok = state.check_signature_handler().handle(&request.fields);
    if !signature_ok {
        tracing::debug!("Payment page request carries an invalid signature");
    }
    Json(SignatureCheckResponse {
        signature_ok,
        fields: request.fields,
    })
}

/// GET /calculator - Sign arbitrary fields, optionally with a tester's key
pub async fn calculate_signature(
    State(state): State<GatewayAppState>,
    request: GatewayRequest,
) -> Result<impl IntoResponse, GatewayApiError> {
    let cmd = CalculateSignatureCommand {
        secret_key: request.param(SECRET_KEY_PARAM).map(str::to_string),
        fields: request.fields,
    };

    let result = state.calculator_handler().handle(cmd)?;

    Ok(Json(CalculatorResponse {
        signature: result.signature.into_string(),
        fields: result.fields,
        request_fields: result.request_fields,
        response_fields: result.response_fields,
    }))
}

// ════════════════════════════════════════════════════════════════════════════════
// Merchant-facing endpoints
// ════════════════════════════════════════════════════════════════════════════════

/// POST /capture - Acknowledge a signed capture
pub async fn capture_payment(
    State(state): State<GatewayAppState>,
    request: GatewayRequest,
) -> Result<impl IntoResponse, GatewayApiError> {
    state.capture_handler().handle(CapturePaymentCommand {
        fields: request.fields,
    })?;
    Ok((StatusCode::OK, Json(json!({}))))
}

/// POST /refund - Acknowledge a signed refund with a synthetic receipt
pub async fn refund_payment(
    State(state): State<GatewayAppState>,
    request: GatewayRequest,
) -> Result<impl IntoResponse, GatewayApiError> {
    let receipt = state.refund_handler().handle(RefundPaymentCommand {
        fields: request.fields,
    })?;
    Ok(Json(receipt))
}

/// POST /execute/:action - Simulate an outcome, then redirect or report
pub async fn execute_action(
    State(state): State<GatewayAppState>,
    Path(action): Path<String>,
    request: GatewayRequest,
) -> Result<impl IntoResponse, GatewayApiError> {
    let cmd = ExecuteActionCommand {
        action: ExecuteResult::new(action),
        fire_callback: request.fire_callback(),
        fields: request.fields,
    };

    let result = state.execute_handler().handle(cmd).await?;

    let response = match result.resolution {
        ExecuteResolution::Redirect(url) => ExecuteResponse {
            timestamp: result.timestamp,
            redirect: Some(url.into()),
            error: None,
        },
        ExecuteResolution::CallbackFailed(failure) => ExecuteResponse {
            timestamp: result.timestamp,
            redirect: None,
            error: Some(failure),
        },
    };

    Ok(Json(response))
}

/// GET /healthz - Liveness probe
pub async fn health() -> &'static str {
    "ok"
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts gateway errors to HTTP responses.
#[derive(Debug)]
pub struct GatewayApiError(GatewayError);

impl GatewayApiError {
    pub fn into_inner(self) -> GatewayError {
        self.0
    }
}

impl From<GatewayError> for GatewayApiError {
    fn from(err: GatewayError) -> Self {
        Self(err)
    }
}

impl IntoResponse for GatewayApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            GatewayError::InvalidSignature => {
                return (
                    StatusCode::UNAUTHORIZED,
                    Json(SignatureFailureResponse::default()),
                )
                    .into_response();
            }
            GatewayError::InvalidUrl { .. }
            | GatewayError::MalformedBody(_)
            | GatewayError::UnsupportedPayload(_) => StatusCode::BAD_REQUEST,
            GatewayError::Catalog(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self.0, "Gateway request failed");
        } else {
            tracing::debug!(error = %self.0, "Gateway request rejected");
        }

        let body = ErrorResponse::new(self.0.code(), self.0.to_string());
        (status, Json(body)).into_response()
    }
}
