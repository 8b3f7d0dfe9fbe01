//! CalculateSignatureHandler - Diagnostic signing for integration testers.
//!
//! Unlike the protected endpoints, the calculator accepts a per-request key
//! override so testers can check signatures for their own merchant keys.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::gateway::{sign, FieldSet, GatewayError, Signature, SigningKey, SIGNATURE_FIELD};
use crate::ports::FieldCatalog;

/// Command to compute a signature.
#[derive(Debug, Clone)]
pub struct CalculateSignatureCommand {
    pub fields: FieldSet,
    /// Overrides the process key when present and non-empty.
    pub secret_key: Option<String>,
}

/// Signature plus the catalog metadata the calculator displays.
#[derive(Debug, Clone)]
pub struct CalculateSignatureResult {
    pub signature: Signature,
    /// The fields actually signed, after dropping empty values.
    pub fields: FieldSet,
    pub request_fields: Option<Value>,
    pub response_fields: Option<Value>,
}

pub struct CalculateSignatureHandler {
    signing_key: SigningKey,
    catalog: Arc<dyn FieldCatalog>,
}

impl CalculateSignatureHandler {
    pub fn new(signing_key: SigningKey, catalog: Arc<dyn FieldCatalog>) -> Self {
        Self {
            signing_key,
            catalog,
        }
    }

    pub fn handle(
        &self,
        cmd: CalculateSignatureCommand,
    ) -> Result<CalculateSignatureResult, GatewayError> {
        let mut fields = cmd.fields;
        fields.remove(SIGNATURE_FIELD);
        fields.drop_empty();

        let signature = match cmd.secret_key.filter(|k| !k.is_empty()) {
            Some(override_key) => sign(&fields, &SigningKey::new(override_key)),
            None => sign(&fields, &self.signing_key),
        };

        Ok(CalculateSignatureResult {
            signature,
            fields,
            request_fields: self.catalog.request_fields()?,
            response_fields: self.catalog.response_fields()?,
        })
    }
}
