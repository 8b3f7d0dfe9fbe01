//! FieldSet value object - the ordered gateway field mapping.
//!
//! A `FieldSet` keeps insertion order so that echoed payloads, JSON bodies and
//! redirect query strings list fields in the order they were produced.
//! Signing never depends on that order (see [`super::signing`]).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::errors::GatewayError;

/// Prefix carried by every gateway field sourced from form/query parameters.
pub const FIELD_PREFIX: &str = "x_";

/// Name of the field carrying the request signature.
pub const SIGNATURE_FIELD: &str = "x_signature";

/// Ordered mapping from field name to string or primitive JSON value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldSet(Map<String, Value>);

impl FieldSet {
    /// Creates an empty field set.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Parses a JSON body into a field set.
    ///
    /// No prefix filtering is applied: every top-level key of the object
    /// becomes a field. Anything other than an object is rejected.
    pub fn from_json_slice(body: &[u8]) -> Result<Self, GatewayError> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| GatewayError::malformed_body(e.to_string()))?;

        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(GatewayError::unsupported_payload(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Builds a field set from form/query parameters.
    ///
    /// Only parameters whose name starts with [`FIELD_PREFIX`] are kept. A
    /// repeated name keeps its first position and its last value.
    pub fn from_params<I, K, V>(params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map = Map::new();
        for (name, value) in params {
            let name = name.into();
            if name.starts_with(FIELD_PREFIX) {
                map.insert(name, Value::String(value.into()));
            }
        }
        Self(map)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Canonical text of a field, `None` when absent or null.
    pub fn text(&self, name: &str) -> Option<String> {
        match self.0.get(name) {
            None | Some(Value::Null) => None,
            Some(value) => Some(canonical_text(value)),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Inserts or replaces a field. Replaced fields keep their position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.0.shift_remove(name)
    }

    /// Returns a copy with the named field removed.
    pub fn without(&self, name: &str) -> FieldSet {
        let mut copy = self.clone();
        copy.remove(name);
        copy
    }

    /// Drops every field whose canonical text is empty.
    pub fn drop_empty(&mut self) {
        self.0.retain(|_, value| !canonical_text(value).is_empty());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Canonical text of every value, in field order.
    pub fn canonical_values(&self) -> Vec<String> {
        self.0.values().map(canonical_text).collect()
    }

    /// Field names paired with their canonical text, in field order.
    pub fn query_pairs(&self) -> impl Iterator<Item = (&str, String)> {
        self.0
            .iter()
            .map(|(name, value)| (name.as_str(), canonical_text(value)))
    }
}

impl From<Map<String, Value>> for FieldSet {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for FieldSet {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

/// String form of a field value as it takes part in signing and query strings.
///
/// Strings are used verbatim, `null` is empty, every other value is its
/// compact JSON text.
pub fn canonical_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
