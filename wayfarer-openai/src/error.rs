//! Error types for the chat completions client

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

// ============================================================================
// API Error Types
// ============================================================================

/// API error response wrapper
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Parse an error body
    ///
    /// OpenAI returns a single object. The Gemini compatibility layer wraps
    /// the same object in a one-element array.
    pub fn parse(body: &str) -> Option<ApiError> {
        if let Ok(response) = serde_json::from_str::<ApiErrorResponse>(body) {
            return Some(response.error);
        }
        serde_json::from_str::<Vec<ApiErrorResponse>>(body)
            .ok()
            .and_then(|responses| responses.into_iter().next())
            .map(|response| response.error)
    }
}

/// API error details
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub message: String,

    /// OpenAI-style error type (e.g. `invalid_request_error`)
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,

    /// Google-style status (e.g. `INVALID_ARGUMENT`)
    #[serde(default)]
    pub status: Option<String>,

    /// Numeric or string code, depending on the provider
    #[serde(default)]
    pub code: Option<Value>,
}

impl ApiError {
    /// Normalized error kind: the type, else the status, else a string code
    fn kind(&self) -> String {
        self.error_type
            .clone()
            .or_else(|| self.status.clone())
            .or_else(|| {
                self.code
                    .as_ref()
                    .and_then(|c| c.as_str().map(String::from))
            })
            .unwrap_or_default()
            .to_ascii_lowercase()
    }
}

// ============================================================================
// SDK Error Types
// ============================================================================

/// Errors that can occur when calling a chat completions endpoint
#[derive(Debug, Error)]
pub enum OpenAiError {
    /// Authentication failed (missing or invalid API key)
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Rate limited or out of quota
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Service unavailable or overloaded
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Invalid request (bad parameters, unknown model, etc.)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid response (failed to parse API response)
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Network error
    #[error("Network error: {0}")]
    Network(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error (bad base URL, unusable header value, etc.)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Other/unknown error
    #[error("{0}")]
    Other(String),
}

impl OpenAiError {
    /// Classify an API error response into an appropriate error variant
    pub fn from_api_error(error: &ApiError, status_code: u16) -> Self {
        let msg = error.message.clone();
        let kind = error.kind();

        // Gemini reports a bad key as a 400 INVALID_ARGUMENT
        if msg.contains("API key not valid") || msg.contains("API key expired") {
            return OpenAiError::Authentication(msg);
        }

        match (status_code, kind.as_str()) {
            (401, _) | (403, _) => OpenAiError::Authentication(msg),
            (_, "authentication_error" | "invalid_api_key" | "unauthenticated") => {
                OpenAiError::Authentication(msg)
            }
            (_, "permission_denied") => OpenAiError::Authentication(msg),
            (429, _) | (_, "rate_limit_exceeded" | "insufficient_quota" | "resource_exhausted") => {
                OpenAiError::RateLimited(msg)
            }
            (500..=599, _) | (_, "server_error" | "unavailable") => {
                OpenAiError::ServiceUnavailable(msg)
            }
            (400 | 404 | 422, _) | (_, "invalid_request_error" | "invalid_argument") => {
                OpenAiError::InvalidRequest(msg)
            }
            (_, "not_found") => OpenAiError::InvalidRequest(msg),
            _ => OpenAiError::Other(msg),
        }
    }

    /// Classify an HTTP error into an appropriate error variant
    pub fn from_reqwest_error(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            OpenAiError::Network(format!("Request timed out: {}", err))
        } else if err.is_connect() {
            OpenAiError::Network(format!("Connection failed: {}", err))
        } else if err.is_request() {
            OpenAiError::Network(format!("Request failed: {}", err))
        } else if let Some(status) = err.status() {
            match status.as_u16() {
                401 | 403 => OpenAiError::Authentication(err.to_string()),
                429 => OpenAiError::RateLimited(err.to_string()),
                500..=599 => OpenAiError::ServiceUnavailable(err.to_string()),
                _ => OpenAiError::Other(err.to_string()),
            }
        } else {
            OpenAiError::Other(err.to_string())
        }
    }

    /// Returns true for missing or rejected credentials
    pub fn is_authentication(&self) -> bool {
        matches!(self, OpenAiError::Authentication(_))
    }
}
