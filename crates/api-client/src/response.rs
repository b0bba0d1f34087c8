//! Response envelope shared by all endpoints

use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Decoded response of an API call.
///
/// Successful calls carry a `data` object; failed calls carry an `error`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiResponse<T> {
    /// The call succeeded
    Success {
        /// Endpoint-specific payload
        data: T,
    },
    /// The API reported an error
    Failure(ErrorPayload),
}

/// Error body returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorPayload {
    /// Error description, usually a string
    pub error: Value,
    /// Any other fields sent along with the error
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ErrorPayload {
    /// Human-readable error message
    #[must_use]
    pub fn message(&self) -> String {
        match &self.error {
            Value::String(message) => message.clone(),
            other => other.to_string(),
        }
    }
}

impl<T> ApiResponse<T> {
    /// Whether the call succeeded
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The payload on success, [`ApiError::Remote`] otherwise
    pub fn into_result(self) -> ApiResult<T> {
        match self {
            Self::Success { data } => Ok(data),
            Self::Failure(payload) => Err(ApiError::Remote {
                message: payload.message(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Data {
        payment_code: String,
    }

    #[test]
    fn test_success_decodes() {
        let response: ApiResponse<Data> =
            serde_json::from_str(r#"{"data": {"payment_code": "abc"}}"#).unwrap();
        assert!(response.is_success());
        assert_eq!(response.into_result().unwrap().payment_code, "abc");
    }

    #[test]
    fn test_failure_decodes() {
        let response: ApiResponse<Data> =
            serde_json::from_str(r#"{"error": "profile not found", "code": 404}"#).unwrap();
        assert!(!response.is_success());

        match response {
            ApiResponse::Failure(ref payload) => {
                assert_eq!(payload.message(), "profile not found");
                assert_eq!(payload.extra.get("code"), Some(&Value::from(404)));
            }
            ApiResponse::Success { .. } => panic!("expected failure"),
        }

        let err = response.into_result().unwrap_err();
        assert!(matches!(err, ApiError::Remote { ref message } if message == "profile not found"));
    }

    #[test]
    fn test_structured_error_message() {
        let response: ApiResponse<Data> =
            serde_json::from_str(r#"{"error": {"field": "dst_amount"}}"#).unwrap();
        let err = response.into_result().unwrap_err();
        assert_eq!(err.to_string(), r#"Remote error: {"field":"dst_amount"}"#);
    }

    #[test]
    fn test_unrecognized_shape_fails() {
        let result: Result<ApiResponse<Data>, _> = serde_json::from_str(r#"{"status": "ok"}"#);
        assert!(result.is_err());
    }
}
