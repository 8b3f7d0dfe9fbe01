//! Redirect composition and URL field parsing.

use url::Url;

use super::errors::GatewayError;
use super::field_set::FieldSet;

/// Inbound field naming the merchant page to send the shopper back to.
pub const CANCEL_URL_FIELD: &str = "x_url_cancel";

/// Inbound field naming the merchant callback endpoint.
pub const CALLBACK_URL_FIELD: &str = "x_url_callback";

/// Parses the URL carried in `field`, failing when absent, blank or invalid.
pub fn parse_field_url(fields: &FieldSet, field: &str) -> Result<Url, GatewayError> {
    let raw = fields
        .text(field)
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| GatewayError::invalid_url(field, "missing"))?;

    Url::parse(raw.trim()).map_err(|e| GatewayError::invalid_url(field, e.to_string()))
}

/// Builds the shopper redirect from the base cancel URL and a payload.
///
/// The base URL's query string is replaced entirely by the payload fields,
/// each value form-urlencoded. Path and fragment are kept.
pub fn compose_redirect(base: &Url, payload: &FieldSet) -> Url {
    let mut url = base.clone();
    url.set_query(None);
    if !payload.is_empty() {
        url.query_pairs_mut().extend_pairs(payload.query_pairs());
    }
    url
}

/// Reads `x_url_cancel` from `inbound` and composes the redirect for `payload`.
pub fn redirect_for(inbound: &FieldSet, payload: &FieldSet) -> Result<Url, GatewayError> {
    let base = parse_field_url(inbound, CANCEL_URL_FIELD)?;
    Ok(compose_redirect(&base, payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn payload() -> FieldSet {
        vec![
            ("x_reference", json!("R 1")),
            ("x_amount", json!("10.00")),
            ("x_test", Value::Null),
            ("x_message", json!("a&b=c")),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn replaces_existing_query_entirely() {
        let base = Url::parse("https://merchant.example/cancel?order=42&x_amount=1").unwrap();
        let url = compose_redirect(&base, &payload());

        assert_eq!(url.path(), "/cancel");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("x_reference".to_string(), "R 1".to_string()),
                ("x_amount".to_string(), "10.00".to_string()),
                ("x_test".to_string(), String::new()),
                ("x_message".to_string(), "a&b=c".to_string()),
            ]
        );
    }

    #[test]
    fn encodes_reserved_characters() {
        let base = Url::parse("https://merchant.example/cancel").unwrap();
        let url = compose_redirect(&base, &payload());
        let query = url.query().unwrap();

        assert!(query.contains("x_message=a%26b%3Dc"));
        assert!(query.contains("x_reference=R+1"));
    }

    #[test]
    fn keeps_fragment() {
        let base = Url::parse("https://merchant.example/cancel#top").unwrap();
        let url = compose_redirect(&base, &payload());
        assert_eq!(url.fragment(), Some("top"));
    }

    #[test]
    fn empty_payload_clears_query() {
        let base = Url::parse("https://merchant.example/cancel?order=42").unwrap();
        let url = compose_redirect(&base, &FieldSet::new());
        assert_eq!(url.as_str(), "https://merchant.example/cancel");
    }

    #[test]
    fn missing_cancel_url_is_invalid() {
        let err = redirect_for(&FieldSet::new(), &payload()).unwrap_err();
        assert_eq!(err, GatewayError::invalid_url(CANCEL_URL_FIELD, "missing"));
    }

    #[test]
    fn blank_cancel_url_is_invalid() {
        let inbound = FieldSet::from_params(vec![(CANCEL_URL_FIELD, "  ")]);
        assert!(matches!(
            redirect_for(&inbound, &payload()),
            Err(GatewayError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn unparsable_cancel_url_is_invalid() {
        let inbound = FieldSet::from_params(vec![(CANCEL_URL_FIELD, "not a url")]);
        let err = redirect_for(&inbound, &payload()).unwrap_err();
        match err {
            GatewayError::InvalidUrl { field, .. } => assert_eq!(field, CANCEL_URL_FIELD),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
