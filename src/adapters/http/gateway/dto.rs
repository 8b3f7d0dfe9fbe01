//! Response DTOs for the gateway endpoints.

use serde::Serialize;
use serde_json::Value;

use crate::domain::gateway::FieldSet;
use crate::ports::CallbackFailure;

/// Standard error response for API errors.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
        }
    }
}

/// Wire-compatible rejection body for failed signature checks.
#[derive(Debug, Clone, Serialize)]
pub struct SignatureFailureResponse {
    pub x_status: &'static str,
    pub x_error_message: &'static str,
}

impl Default for SignatureFailureResponse {
    fn default() -> Self {
        Self {
            x_status: "failed",
            x_error_message: "Invalid signature",
        }
    }
}

/// GET / - what a tester needs to start signing requests.
#[derive(Debug, Clone, Serialize)]
pub struct GatewayInfoResponse {
    pub key: String,
    pub field_prefix: &'static str,
    pub signature_field: &'static str,
}

/// POST / and /incontext - signature verdict for the payment page stand-ins.
#[derive(Debug, Clone, Serialize)]
pub struct SignatureCheckResponse {
    pub signature_ok: bool,
    pub fields: FieldSet,
}

/// GET /calculator
#[derive(Debug, Clone, Serialize)]
pub struct CalculatorResponse {
    pub signature: String,
    pub fields: FieldSet,
    pub request_fields: Option<Value>,
    pub response_fields: Option<Value>,
}

/// POST /execute/:action - exactly one of `redirect` and `error` is set.
#[derive(Debug, Clone, Serialize)]
pub struct ExecuteResponse {
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CallbackFailure>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn signature_failure_body_is_exact() {
        let json = serde_json::to_string(&SignatureFailureResponse::default()).unwrap();
        assert_eq!(json, r#"{"x_status":"failed","x_error_message":"Invalid signature"}"#);
    }

    #[test]
    fn execute_response_omits_unset_branch() {
        let redirect = ExecuteResponse {
            timestamp: "2024-01-01T12:00:00Z".to_string(),
            redirect: Some("https://merchant.example/cancel?x_result=success".to_string()),
            error: None,
        };
        assert_eq!(
            serde_json::to_value(&redirect).unwrap(),
            json!({
                "timestamp": "2024-01-01T12:00:00Z",
                "redirect": "https://merchant.example/cancel?x_result=success"
            })
        );

        let failed = ExecuteResponse {
            timestamp: "2024-01-01T12:00:00Z".to_string(),
            redirect: None,
            error: Some(CallbackFailure::from_response(502, "bad gateway")),
        };
        assert_eq!(
            serde_json::to_value(&failed).unwrap(),
            json!({
                "timestamp": "2024-01-01T12:00:00Z",
                "error": {"status": 502, "body": "bad gateway"}
            })
        );
    }
}
