//! Execute outcomes - synthetic signed payloads for simulated transactions.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::field_set::{FieldSet, SIGNATURE_FIELD};
use super::signing::{sign, SigningKey};

/// Inbound fields echoed verbatim into every outcome payload.
pub const ECHOED_FIELDS: [&str; 5] = [
    "x_account_id",
    "x_reference",
    "x_currency",
    "x_test",
    "x_amount",
];

pub const RESULT_FIELD: &str = "x_result";
pub const GATEWAY_REFERENCE_FIELD: &str = "x_gateway_reference";
pub const TIMESTAMP_FIELD: &str = "x_timestamp";
pub const MESSAGE_FIELD: &str = "x_message";

/// Message attached to `failed` outcomes.
pub const FAILURE_MESSAGE: &str = "This is a custom error message.";

/// Outcome code chosen by the caller of an execute action.
///
/// The set is open: any token is accepted and echoed as `x_result`. Only
/// `failed` changes the payload shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExecuteResult(String);

impl ExecuteResult {
    pub const SUCCESS: &'static str = "success";
    pub const FAILED: &'static str = "failed";

    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_failed(&self) -> bool {
        self.0 == Self::FAILED
    }
}

impl fmt::Display for ExecuteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Formats a UTC instant the way the gateway reports timestamps,
/// e.g. `2024-01-01T12:00:00Z`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Signed field set produced for an execute action.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct OutcomePayload {
    fields: FieldSet,
}

impl OutcomePayload {
    /// Assembles and signs an outcome payload.
    ///
    /// Field order is fixed: echoed fields, `x_result`,
    /// `x_gateway_reference`, `x_timestamp`, `x_message` (failed only), then
    /// `x_signature` over everything before it. Echoed fields missing from the
    /// input are carried as `null`.
    pub fn build(
        action: &ExecuteResult,
        inbound: &FieldSet,
        gateway_reference: &str,
        timestamp: &str,
        key: &SigningKey,
    ) -> Self {
        let mut fields = FieldSet::new();
        for name in ECHOED_FIELDS {
            fields.insert(name, inbound.get(name).cloned().unwrap_or(Value::Null));
        }
        fields.insert(RESULT_FIELD, action.as_str());
        fields.insert(GATEWAY_REFERENCE_FIELD, gateway_reference);
        fields.insert(TIMESTAMP_FIELD, timestamp);
        if action.is_failed() {
            fields.insert(MESSAGE_FIELD, FAILURE_MESSAGE);
        }

        let signature = sign(&fields, key);
        fields.insert(SIGNATURE_FIELD, signature.into_string());

        Self { fields }
    }

    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    pub fn result(&self) -> Option<String> {
        self.fields.text(RESULT_FIELD)
    }

    pub fn gateway_reference(&self) -> Option<String> {
        self.fields.text(GATEWAY_REFERENCE_FIELD)
    }

    pub fn timestamp(&self) -> Option<String> {
        self.fields.text(TIMESTAMP_FIELD)
    }

    pub fn message(&self) -> Option<String> {
        self.fields.text(MESSAGE_FIELD)
    }

    pub fn signature(&self) -> Option<String> {
        self.fields.text(SIGNATURE_FIELD)
    }
}
