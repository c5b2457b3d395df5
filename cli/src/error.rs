use reqwest::StatusCode;
use thiserror::Error;

/// Message stored when the backend did not explain what went wrong.
pub const FALLBACK_ERROR: &str = "ERROR NOT FROM BACKEND";

/// Failure of a single request against the JournalKeeper API.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The request never got a response (connection refused, DNS, TLS...).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server responded {status}: {message}")]
    Server { status: StatusCode, message: String },

    /// 401 from the backend, or no token to send in the first place.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// A 2xx response whose body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl RequestError {
    /// The string that ends up in `request_error` and in the user-facing alert.
    pub fn message(&self) -> String {
        match self {
            RequestError::Server { message, .. } | RequestError::Unauthorized(message) => {
                message.clone()
            }
            RequestError::Network(_) | RequestError::Decode(_) => FALLBACK_ERROR.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, RequestError::Unauthorized(_))
    }
}

/// Pulls `{"error": "..."}` out of a failed response body.
///
/// Anything else (HTML error pages, empty bodies, JSON without the field)
/// collapses to [`FALLBACK_ERROR`].
pub fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<crate::models::ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_ERROR.to_string())
}
