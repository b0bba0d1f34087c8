//! Error types for the API client

use thiserror::Error;

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API client errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Missing environment variable
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    /// The response had no body
    #[error("Empty response from endpoint {endpoint}")]
    EmptyResponse {
        /// Endpoint that was called
        endpoint: String,
    },

    /// The response body could not be decoded
    #[error("Error deserializing response from endpoint {endpoint}: {source}")]
    Decode {
        /// Endpoint that was called
        endpoint: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Non-success HTTP status with a body that is not an API payload
    #[error("API error ({status}): {message}")]
    ApiResponse {
        /// HTTP status code
        status: u16,
        /// Raw response body
        message: String,
    },

    /// The API answered with an error payload
    #[error("Remote error: {message}")]
    Remote {
        /// Error message reported by the API
        message: String,
    },

    /// An optional field would overwrite a required one
    #[error("Optional field `{key}` collides with a required field")]
    FieldCollision {
        /// Offending key
        key: String,
    },

    /// A request payload did not serialize to a JSON object
    #[error("Payload must be a JSON object, got {0}")]
    InvalidPayload(&'static str),

    /// A successful response lacked a field the caller needs
    #[error("Response is missing field `{0}`")]
    MissingField(&'static str),
}

impl ApiError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a missing env var error
    pub fn missing_env(var: impl Into<String>) -> Self {
        Self::MissingEnvVar(var.into())
    }

    /// Create an API response error
    pub fn api_response(status: u16, message: impl Into<String>) -> Self {
        Self::ApiResponse {
            status,
            message: message.into(),
        }
    }

    /// Check if this error is worth retrying.
    ///
    /// The client never retries on its own; this is a hint for callers that do.
    /// A retried call is signed again with a fresh nonce.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Request(e) => e.is_connect() || e.is_timeout(),
            Self::ApiResponse { status, .. } => *status >= 500 || *status == 429,
            Self::EmptyResponse { .. } => true,
            Self::Json(_)
            | Self::Config(_)
            | Self::MissingEnvVar(_)
            | Self::Decode { .. }
            | Self::Remote { .. }
            | Self::FieldCollision { .. }
            | Self::InvalidPayload(_)
            | Self::MissingField(_) => false,
        }
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiResponse { status, .. } if (400..500).contains(status))
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiResponse { status, .. } if *status >= 500)
    }
}
