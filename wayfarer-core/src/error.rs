//! Top-level error types for wayfarer
//!
//! This module provides a simplified, user-facing error type that flattens
//! the internal error hierarchy into actionable categories.

use thiserror::Error;

use crate::agent::AgentError;
use crate::provider::ProviderError;
use crate::tool::ToolError;

/// Top-level error type for wayfarer operations
///
/// - [`Error::Auth`] - missing or rejected API key
/// - [`Error::RateLimited`] - quota or request rate exceeded
/// - [`Error::Network`] - connectivity problem
/// - [`Error::Unavailable`] - service is down
/// - [`Error::Model`] - model-side issues (content filtered, runaway tool loop)
/// - [`Error::Tool`] - tool execution failed
/// - [`Error::Config`] - bad configuration (no provider, bad base URL)
#[derive(Debug, Error)]
pub enum Error {
    /// Authentication failed (missing, invalid or expired credentials)
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Rate limited - slow down requests
    #[error("rate limited: {0}")]
    RateLimited(String),

    /// Network connectivity issue
    #[error("network error: {0}")]
    Network(String),

    /// Service temporarily unavailable
    #[error("service unavailable: {0}")]
    Unavailable(String),

    /// Model error (content filtered, too many turns, empty response, etc.)
    #[error("model error: {0}")]
    Model(String),

    /// Tool execution failed
    #[error("tool error: {0}")]
    Tool(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Returns true if this is an authentication error
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }

    /// Returns true if this is a rate limiting error
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited(_))
    }

    /// Returns true if this is a network error
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// Returns true if the service is unavailable
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }

    /// Returns true if this is a model error
    pub fn is_model(&self) -> bool {
        matches!(self, Self::Model(_))
    }

    /// Returns true if this is a tool error
    pub fn is_tool(&self) -> bool {
        matches!(self, Self::Tool(_))
    }

    /// Returns true if this is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

impl From<ProviderError> for Error {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Authentication(msg) => Self::Auth(msg),
            ProviderError::RateLimited(msg) => Self::RateLimited(msg),
            ProviderError::Network(msg) => Self::Network(msg),
            ProviderError::ServiceUnavailable(msg) => Self::Unavailable(msg),
            ProviderError::Model(msg) => Self::Model(msg),
            ProviderError::Configuration(msg) => Self::Config(msg),
            ProviderError::Other(msg) => Self::Other(msg),
        }
    }
}

impl From<ToolError> for Error {
    fn from(err: ToolError) -> Self {
        Self::Tool(err.to_string())
    }
}

impl From<AgentError> for Error {
    fn from(err: AgentError) -> Self {
        match err {
            AgentError::Provider(e) => e.into(),
            AgentError::Tool(e) => e.into(),
            AgentError::NoResponse => Self::Model("model returned no response".to_string()),
            AgentError::MaxTokensExceeded => Self::Model(
                "response exceeded maximum token limit - try asking the model to be more concise"
                    .to_string(),
            ),
            AgentError::MaxTurnsExceeded(turns) => {
                Self::Model(format!("no final answer after {} model turns", turns))
            }
            AgentError::ContentFiltered => {
                Self::Model("response was filtered by content moderation".to_string())
            }
            AgentError::ToolNotFound(name) => Self::Tool(format!("not found: {}", name)),
            AgentError::InvalidToolInput(msg) => Self::Tool(format!("invalid input: {}", msg)),
            AgentError::UnexpectedStopReason(reason) => {
                Self::Model(format!("unexpected stop reason: {}", reason))
            }
        }
    }
}

#[cfg(feature = "openai")]
impl From<wayfarer_openai::OpenAiError> for Error {
    fn from(err: wayfarer_openai::OpenAiError) -> Self {
        crate::provider::openai::classify_openai_error(&err).into()
    }
}

/// Result type for wayfarer operations
pub type Result<T> = std::result::Result<T, Error>;
