//! CheckSignatureHandler - Reports whether an inbound request is signed.
//!
//! Backs the offsite and in-context payment page stand-ins, which show the
//! tester the verdict instead of rejecting the request.

use crate::domain::gateway::{is_valid, FieldSet, SigningKey, SIGNATURE_FIELD};

pub struct CheckSignatureHandler {
    signing_key: SigningKey,
}

impl CheckSignatureHandler {
    pub fn new(signing_key: SigningKey) -> Self {
        Self { signing_key }
    }

    pub fn handle(&self, fields: &FieldSet) -> bool {
        let provided = fields.text(SIGNATURE_FIELD);
        is_valid(fields, provided.as_deref(), &self.signing_key)
    }
}
