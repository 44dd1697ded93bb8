use serde::{Deserialize, Serialize};

/// Error body returned by the backend.
///
/// The prediction service reports `detail` on HTTP errors, `message` on
/// auth acknowledgements and `error` when the model is missing, so all
/// three are optional.
#[derive(Debug, Default, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Validation or HTTP failure detail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Human-readable message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Application-level error reported with a success status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    /// Creates an error response carrying only a detail.
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: Some(detail.into()),
            ..Self::default()
        }
    }

    /// Parse a response body, keeping only bodies that carry at least one field.
    #[must_use]
    pub fn from_body(body: &str) -> Option<Self> {
        serde_json::from_str::<Self>(body)
            .ok()
            .filter(|parsed| parsed.summary().is_some())
    }

    /// The most specific message available: `detail`, then `message`, then `error`.
    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.detail
            .as_deref()
            .or(self.message.as_deref())
            .or(self.error.as_deref())
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.summary().unwrap_or("unknown error"))
    }
}

impl std::error::Error for ErrorResponse {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_new() {
        let error = ErrorResponse::new("Invalid or expired token");
        assert_eq!(error.summary(), Some("Invalid or expired token"));
        assert_eq!(error.to_string(), "Invalid or expired token");
    }

    #[test]
    fn test_detail_takes_precedence() {
        let error = ErrorResponse {
            detail: Some("Email is required".into()),
            message: Some("ignored".into()),
            error: None,
        };
        assert_eq!(error.summary(), Some("Email is required"));
    }

    #[test]
    fn test_from_body_fastapi_detail() {
        let error = ErrorResponse::from_body(r#"{"detail":"Missing authorization"}"#).unwrap();
        assert_eq!(error.detail.as_deref(), Some("Missing authorization"));
    }

    #[test]
    fn test_from_body_model_missing() {
        let error =
            ErrorResponse::from_body(r#"{"error":"Model not found. Train it first."}"#).unwrap();
        assert_eq!(error.to_string(), "Model not found. Train it first.");
    }

    #[test]
    fn test_from_body_rejects_unrelated_payloads() {
        assert!(ErrorResponse::from_body("Internal Server Error").is_none());
        assert!(ErrorResponse::from_body(r#"{"dropout_prediction":true}"#).is_none());
    }

    #[test]
    fn test_empty_display() {
        assert_eq!(ErrorResponse::default().to_string(), "unknown error");
    }
}
