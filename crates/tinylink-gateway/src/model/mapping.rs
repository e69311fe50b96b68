use serde::{Deserialize, Serialize};
use tinylink_core::UrlMapping;

/// The `url` field carried by a query string, JSON body or form body.
#[derive(Debug, Default, Deserialize)]
pub struct UrlInput {
    pub url: Option<String>,
}

/// Body of a successful resolve.
///
/// Serializes as `{ "shortCode", "originalUrl", "shortUrl" }`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveResponse {
    #[serde(flatten)]
    pub mapping: UrlMapping,
    pub short_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tinylink_core::ShortCode;

    #[test]
    fn resolve_response_shape() {
        let response = ResolveResponse {
            mapping: UrlMapping {
                short_code: ShortCode::new("abc").unwrap(),
                original_url: "https://example.com/a".to_string(),
            },
            short_url: "https://tiny.link/s/abc".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "shortCode": "abc",
                "originalUrl": "https://example.com/a",
                "shortUrl": "https://tiny.link/s/abc",
            })
        );
    }

    #[test]
    fn url_input_ignores_other_fields() {
        let input: UrlInput =
            serde_json::from_str(r#"{"url":"https://example.com","extra":1}"#).unwrap();
        assert_eq!(input.url.as_deref(), Some("https://example.com"));

        let input: UrlInput = serde_json::from_str("{}").unwrap();
        assert!(input.url.is_none());
    }
}
