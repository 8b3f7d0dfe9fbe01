//! CapturePaymentHandler - Signature-gated capture acknowledgement.

use crate::domain::gateway::{verify_fields, FieldSet, GatewayError, SigningKey};

/// Command to capture a previously authorised payment.
#[derive(Debug, Clone)]
pub struct CapturePaymentCommand {
    pub fields: FieldSet,
}

/// Handler for captures. A valid signature is the only requirement.
pub struct CapturePaymentHandler {
    signing_key: SigningKey,
}

impl CapturePaymentHandler {
    pub fn new(signing_key: SigningKey) -> Self {
        Self { signing_key }
    }

    pub fn handle(&self, cmd: CapturePaymentCommand) -> Result<(), GatewayError> {
        verify_fields(&cmd.fields, &self.signing_key).map_err(|e| {
            tracing::warn!(
                reference = cmd.fields.text("x_reference").as_deref().unwrap_or("-"),
                "Capture rejected: invalid signature"
            );
            e
        })
    }
}
