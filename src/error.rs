//! Error types for the Independent Reserve client library.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// The main error type for all Independent Reserve client operations.
#[derive(Error, Debug)]
pub enum IndependentReserveError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Independent Reserve API rejected the request
    #[error("Independent Reserve API error: {0}")]
    Api(ApiError),

    /// Authentication error
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Missing required credentials
    #[error("Missing credentials: API key and secret required for private methods")]
    MissingCredentials,

    /// The method name is not part of the API
    #[error("The method [{0}] does not exist in the API")]
    UnsupportedMethod(String),

    /// A currency code is absent from the volume tables
    #[error("No volume configuration for currency [{0}]")]
    UnknownCurrency(String),

    /// Request parameters could not be encoded
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// An error returned by the Independent Reserve API itself.
///
/// The exchange reports client errors as a 4xx response whose JSON body
/// carries a `Message` field. When the body has no such field the raw
/// response is kept instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status of the rejected request
    pub status: StatusCode,
    /// Human-readable error message from the exchange
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ApiError {
    /// Create a new API error from a status and message.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Extract the exchange's error message from a 4xx response body.
    ///
    /// Falls back to a raw dump of the response when the body is not the
    /// expected `{"Message": "..."}` shape.
    pub fn from_response_body(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.message)
            .unwrap_or_else(|| format!("HTTP {status}: {body}"));
        Self { status, message }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(rename = "Message")]
    message: Option<String>,
}
