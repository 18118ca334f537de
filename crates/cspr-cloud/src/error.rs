//! Error types for the CSPR.cloud client

use thiserror::Error;

/// Result type alias for upstream calls
pub type CloudResult<T> = std::result::Result<T, CloudError>;

/// Errors raised while talking to CSPR.cloud.
///
/// A 404 is not an error: lookups return `Ok(None)` for it.
#[derive(Error, Debug)]
pub enum CloudError {
    /// Non-2xx answer; the message is what the API reported, verbatim.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
}

impl CloudError {
    /// Build an API error from a status code and the raw response body.
    ///
    /// CSPR.cloud answers failures with `{"error": {"code", "message"}}`; a
    /// few gateways use a flat `{"message"}` or `{"error": "..."}` instead.
    pub fn api(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|json| {
                json.pointer("/error/message")
                    .or_else(|| json.get("message"))
                    .or_else(|| json.get("error"))
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .or_else(|| {
                let trimmed = body.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .unwrap_or_else(|| {
                reqwest::StatusCode::from_u16(status)
                    .ok()
                    .and_then(|s| s.canonical_reason())
                    .map(|reason| format!("{} {}", status, reason))
                    .unwrap_or_else(|| format!("HTTP {}", status))
            });

        CloudError::Api { status, message }
    }

    /// HTTP status of an API error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            CloudError::Api { status, .. } => Some(*status),
            CloudError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_error_message() {
        let err = CloudError::api(400, r#"{"error":{"code":"invalid_param","message":"Invalid public key"}}"#);
        assert_eq!(err.to_string(), "Invalid public key");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_flat_and_raw_messages() {
        let err = CloudError::api(401, r#"{"message":"Unauthorized"}"#);
        assert_eq!(err.to_string(), "Unauthorized");

        let err = CloudError::api(502, "upstream timed out");
        assert_eq!(err.to_string(), "upstream timed out");
    }

    #[test]
    fn test_empty_body_falls_back_to_status() {
        let err = CloudError::api(503, "");
        assert_eq!(err.to_string(), "503 Service Unavailable");
    }
}
