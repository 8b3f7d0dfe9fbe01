//! HMAC-SHA256 signing and verification of gateway field sets.
//!
//! # Canonical form
//!
//! The signed message is built from field *values only*: every value is turned
//! into its canonical text, the list is sorted bytewise, and the entries are
//! concatenated without separators. Keys never take part. Existing merchant
//! clients compute signatures this way, so the scheme must not change.
//!
//! # Security
//!
//! - Comparison is case-insensitive over hex digits and constant-time.
//! - The key is held in a `SecretString` and never logged.

use std::fmt;

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::errors::GatewayError;
use super::field_set::{FieldSet, SIGNATURE_FIELD};

type HmacSha256 = Hmac<Sha256>;

/// Shared secret used to sign and verify field sets.
#[derive(Clone)]
pub struct SigningKey(SecretString);

impl SigningKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(SecretString::new(key.into()))
    }

    /// Exposes the raw key. Only the gateway info endpoint shows it.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }

    pub fn is_empty(&self) -> bool {
        self.0.expose_secret().is_empty()
    }
}

impl From<SecretString> for SigningKey {
    fn from(secret: SecretString) -> Self {
        Self(secret)
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningKey([REDACTED])")
    }
}

/// Lowercase hex HMAC-SHA256 digest of a field set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Signature(String);

impl Signature {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Compares against a provided digest, ignoring hex case.
    pub fn matches(&self, provided: &str) -> bool {
        let provided = provided.to_ascii_lowercase();
        self.0.as_bytes().ct_eq(provided.as_bytes()).unwrap_u8() == 1
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builds the message that gets signed: sorted values, concatenated.
pub fn canonical_message(fields: &FieldSet) -> String {
    let mut values = fields.canonical_values();
    values.sort();
    values.concat()
}

/// Signs every field of `fields` with `key`.
///
/// Callers are responsible for leaving [`SIGNATURE_FIELD`] out of the set.
pub fn sign(fields: &FieldSet, key: &SigningKey) -> Signature {
    let mut mac =
        HmacSha256::new_from_slice(key.expose().as_bytes()).expect("HMAC can take key of any size");
    mac.update(canonical_message(fields).as_bytes());
    Signature(hex::encode(mac.finalize().into_bytes()))
}

/// Checks `provided` against a fresh signature of `fields`.
///
/// The signature field is removed before recomputing. An absent or empty
/// `provided` value is never valid.
pub fn is_valid(fields: &FieldSet, provided: Option<&str>, key: &SigningKey) -> bool {
    let Some(provided) = provided.filter(|p| !p.is_empty()) else {
        return false;
    };
    sign(&fields.without(SIGNATURE_FIELD), key).matches(provided)
}

/// Verifies the `x_signature` carried inside `fields`.
pub fn verify_fields(fields: &FieldSet, key: &SigningKey) -> Result<(), GatewayError> {
    let provided = fields.text(SIGNATURE_FIELD);
    if is_valid(fields, provided.as_deref(), key) {
        Ok(())
    } else {
        Err(GatewayError::InvalidSignature)
    }
}
