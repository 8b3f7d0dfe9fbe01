//! `GatewayRequest` extractor - one parse of the gateway fields per request.
//!
//! JSON bodies become the field set as-is. Urlencoded bodies and the query
//! string are read as parameters: `x_`-prefixed names become fields, the rest
//! are control parameters such as `fire_callback` and `secret_key`. Any other
//! body media type, multipart included, is rejected. Handlers take
//! the extracted value once and move it into the application layer, so
//! verification and any later mutation observe a single parse.

use std::collections::HashMap;

use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use url::form_urlencoded;

use crate::domain::gateway::{FieldSet, GatewayError, FIELD_PREFIX};

use super::handlers::GatewayApiError;

/// Parameter that asks the execute flow to notify the merchant callback.
pub const FIRE_CALLBACK_PARAM: &str = "fire_callback";

/// Parameter carrying the calculator's key override.
pub const SECRET_KEY_PARAM: &str = "secret_key";

const JSON_MEDIA_TYPE: &str = "application/json";
const FORM_MEDIA_TYPE: &str = "application/x-www-form-urlencoded";

/// Gateway fields plus non-field control parameters of one request.
#[derive(Debug, Clone, Default)]
pub struct GatewayRequest {
    pub fields: FieldSet,
    pub params: HashMap<String, String>,
}

impl GatewayRequest {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// True only for the literal `fire_callback=true`.
    pub fn fire_callback(&self) -> bool {
        self.param(FIRE_CALLBACK_PARAM) == Some("true")
    }
}

#[async_trait]
impl<S> FromRequest<S> for GatewayRequest
where
    S: Send + Sync,
{
    type Rejection = GatewayApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let media = media_type(req.headers());
        let mut params: Vec<(String, String)> = req
            .uri()
            .query()
            .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
            .unwrap_or_default();

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| GatewayError::malformed_body(e.body_text()))?;

        let fields = match media.as_deref() {
            Some(JSON_MEDIA_TYPE) => FieldSet::from_json_slice(&body)?,
            Some(other) if other != FORM_MEDIA_TYPE && !body.is_empty() => {
                return Err(GatewayError::unsupported_payload(format!(
                    "unsupported content type '{other}'"
                ))
                .into());
            }
            _ => {
                params.extend(form_urlencoded::parse(&body).into_owned());
                FieldSet::from_params(params.iter().cloned())
            }
        };

        let params = params
            .into_iter()
            .filter(|(name, _)| !name.starts_with(FIELD_PREFIX))
            .collect();

        Ok(Self { fields, params })
    }
}

/// Lowercased media type of the request body, without parameters.
fn media_type(headers: &HeaderMap) -> Option<String> {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|media| media.trim().to_ascii_lowercase())
        .filter(|media| !media.is_empty())
}
