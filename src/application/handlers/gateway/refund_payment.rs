//! RefundPaymentHandler - Signature-gated refund with a synthetic receipt.

use std::sync::Arc;

use crate::domain::gateway::{
    format_timestamp, refund_receipt, verify_fields, FieldSet, GatewayError, SigningKey,
};
use crate::ports::{Clock, ReferenceGenerator};

/// Command to refund a payment.
#[derive(Debug, Clone)]
pub struct RefundPaymentCommand {
    pub fields: FieldSet,
}

/// Handler for refunds.
pub struct RefundPaymentHandler {
    signing_key: SigningKey,
    references: Arc<dyn ReferenceGenerator>,
    clock: Arc<dyn Clock>,
}

impl RefundPaymentHandler {
    pub fn new(
        signing_key: SigningKey,
        references: Arc<dyn ReferenceGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            signing_key,
            references,
            clock,
        }
    }

    /// Returns the inbound fields plus status, gateway reference and timestamp.
    pub fn handle(&self, cmd: RefundPaymentCommand) -> Result<FieldSet, GatewayError> {
        if let Err(e) = verify_fields(&cmd.fields, &self.signing_key) {
            tracing::warn!(
                reference = cmd.fields.text("x_reference").as_deref().unwrap_or("-"),
                "Refund rejected: invalid signature"
            );
            return Err(e);
        }

        let reference = self.references.next_reference();
        let timestamp = format_timestamp(self.clock.now());
        Ok(refund_receipt(&cmd.fields, &reference, &timestamp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::FixedClock;
    use crate::adapters::reference::SequenceReferenceGenerator;
    use crate::domain::gateway::{sign, SIGNATURE_FIELD};
    use chrono::{TimeZone, Utc};

    fn handler() -> RefundPaymentHandler {
        RefundPaymentHandler::new(
            SigningKey::new("secret"),
            Arc::new(SequenceReferenceGenerator::new("refund-")),
            Arc::new(FixedClock::at(Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap())),
        )
    }

    #[test]
    fn valid_refund_returns_receipt() {
        let mut fields = FieldSet::from_params(vec![("x_reference", "R1"), ("x_amount", "5.00")]);
        let signature = sign(&fields, &SigningKey::new("secret"));
        fields.insert(SIGNATURE_FIELD, signature.into_string());

        let receipt = handler().handle(RefundPaymentCommand { fields }).unwrap();

        assert_eq!(receipt.text("x_status").as_deref(), Some("success"));
        assert_eq!(receipt.text("x_gateway_reference").as_deref(), Some("refund-1"));
        assert_eq!(receipt.text("x_timestamp").as_deref(), Some("2024-03-01T08:30:00Z"));
        assert_eq!(receipt.text("x_amount").as_deref(), Some("5.00"));
    }

    #[test]
    fn invalid_refund_is_rejected() {
        let fields = FieldSet::from_params(vec![("x_reference", "R1"), ("x_signature", "beef")]);
        assert_eq!(
            handler().handle(RefundPaymentCommand { fields }),
            Err(GatewayError::InvalidSignature)
        );
    }
}
