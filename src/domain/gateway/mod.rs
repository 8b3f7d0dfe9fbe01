//! Gateway domain - the signed offsite payment protocol.
//!
//! Pure logic only: field sets, HMAC signing, outcome payloads and redirect
//! composition. Entropy, clocks and outbound HTTP live behind ports.

mod errors;
mod field_set;
mod outcome;
mod receipt;
mod redirect;
mod signing;

pub use errors::GatewayError;
pub use field_set::{canonical_text, FieldSet, FIELD_PREFIX, SIGNATURE_FIELD};
pub use outcome::{
    format_timestamp, ExecuteResult, OutcomePayload, ECHOED_FIELDS, FAILURE_MESSAGE,
    GATEWAY_REFERENCE_FIELD, MESSAGE_FIELD, RESULT_FIELD, TIMESTAMP_FIELD,
};
pub use receipt::{refund_receipt, STATUS_FIELD, STATUS_SUCCESS};
pub use redirect::{
    compose_redirect, parse_field_url, redirect_for, CALLBACK_URL_FIELD, CANCEL_URL_FIELD,
};
pub use signing::{canonical_message, is_valid, sign, verify_fields, Signature, SigningKey};
