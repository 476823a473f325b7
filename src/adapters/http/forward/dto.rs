//! DTOs for the passthrough endpoint.

use serde::{Deserialize, Serialize};

/// Error body returned by the passthrough endpoint.
///
/// Kept separate from [`ErrorResponse`](crate::adapters::http::ErrorResponse)
/// because browser clients of the passthrough read `error` and `details`,
/// both plain strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyErrorResponse {
    pub error: String,
    pub details: String,
}

impl ProxyErrorResponse {
    pub fn transport(details: impl Into<String>) -> Self {
        Self {
            error: "Proxy server error".to_string(),
            details: details.into(),
        }
    }

    /// The upstream body is passed through verbatim, JSON or not.
    pub fn upstream(status: u16, body: &str) -> Self {
        Self {
            error: format!("Upstream request failed (status {})", status),
            details: body.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn upstream_json_body_is_kept_as_text() {
        let error = ProxyErrorResponse::upstream(401, r#"{"error":"bad key"}"#);
        assert_eq!(error.error, "Upstream request failed (status 401)");
        assert_eq!(
            serde_json::to_value(&error).unwrap(),
            json!({
                "error": "Upstream request failed (status 401)",
                "details": r#"{"error":"bad key"}"#
            })
        );
    }

    #[test]
    fn upstream_html_body_is_kept_verbatim() {
        let error = ProxyErrorResponse::upstream(502, "<html>bad gateway</html>");
        assert_eq!(error.details, "<html>bad gateway</html>");
    }
}
