//! Refund receipts - echoed fields plus a synthetic gateway reference.

use super::field_set::FieldSet;
use super::outcome::{GATEWAY_REFERENCE_FIELD, TIMESTAMP_FIELD};

pub const STATUS_FIELD: &str = "x_status";
pub const STATUS_SUCCESS: &str = "success";

/// Echoes every inbound field and appends the refund status fields.
///
/// The receipt is not re-signed; the inbound `x_signature` is echoed as-is.
pub fn refund_receipt(inbound: &FieldSet, gateway_reference: &str, timestamp: &str) -> FieldSet {
    let mut receipt = inbound.clone();
    receipt.insert(STATUS_FIELD, STATUS_SUCCESS);
    receipt.insert(GATEWAY_REFERENCE_FIELD, gateway_reference);
    receipt.insert(TIMESTAMP_FIELD, timestamp);
    receipt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn receipt_echoes_inbound_and_appends_status() {
        let inbound = FieldSet::from_params(vec![
            ("x_reference", "R1"),
            ("x_amount", "5.00"),
            ("x_signature", "abc"),
        ]);
        let receipt = refund_receipt(&inbound, "ref-1", "2024-01-01T00:00:00Z");

        assert_eq!(receipt.text("x_reference").as_deref(), Some("R1"));
        assert_eq!(receipt.text("x_signature").as_deref(), Some("abc"));
        assert_eq!(receipt.text(STATUS_FIELD).as_deref(), Some("success"));
        assert_eq!(receipt.text(GATEWAY_REFERENCE_FIELD).as_deref(), Some("ref-1"));
        assert_eq!(receipt.text(TIMESTAMP_FIELD).as_deref(), Some("2024-01-01T00:00:00Z"));
    }

    #[test]
    fn receipt_overrides_inbound_status() {
        let inbound = FieldSet::from_params(vec![(STATUS_FIELD, "pending")]);
        let receipt = refund_receipt(&inbound, "ref-1", "2024-01-01T00:00:00Z");
        assert_eq!(receipt.text(STATUS_FIELD).as_deref(), Some("success"));
    }
}
