use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error body returned by the todo API for non-success statuses.
///
/// `detail` is usually a human readable string, but request validation
/// failures carry a structured list instead.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct ErrorResponse {
    /// Server supplied description of the failure.
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorResponse {
    /// Creates an error response carrying a plain string detail.
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: Some(Value::String(detail.into())),
        }
    }

    /// Returns the detail when it is a non-empty string.
    ///
    /// # Returns
    /// `None` when the detail is absent, empty, or not a string.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match &self.detail {
            Some(Value::String(text)) if !text.trim().is_empty() => Some(text.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_string_detail() {
        let error: ErrorResponse = serde_json::from_str(r#"{"detail":"Todo not found"}"#).unwrap();
        assert_eq!(error.message(), Some("Todo not found"));
    }

    #[test]
    fn test_error_response_missing_detail() {
        let error: ErrorResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(error.message(), None);
    }

    #[test]
    fn test_error_response_structured_detail_has_no_message() {
        let json = r#"{"detail":[{"loc":["body","priority"],"msg":"value is not a valid integer"}]}"#;
        let error: ErrorResponse = serde_json::from_str(json).unwrap();

        assert!(error.detail.is_some());
        assert_eq!(error.message(), None);
    }

    #[test]
    fn test_error_response_blank_detail_has_no_message() {
        assert_eq!(ErrorResponse::new("   ").message(), None);
    }

    #[test]
    fn test_error_response_serialization() {
        let json = serde_json::to_string(&ErrorResponse::new("Invalid token")).unwrap();
        assert_eq!(json, r#"{"detail":"Invalid token"}"#);
    }
}
