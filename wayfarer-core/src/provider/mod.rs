//! Model providers for LLM interactions
//!
//! This module contains the `ModelProvider` trait and the OpenAI-compatible
//! implementation used to reach Gemini and friends.

#[cfg(feature = "openai")]
pub mod openai;

use std::sync::Arc;

use crate::types::{Message, ToolDefinition};

#[cfg(feature = "openai")]
pub use openai::OpenAiProvider;

// Re-export ModelResponse from model module
pub use crate::model::ModelResponse;

/// Error types for model providers
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Authentication or authorization failed (missing key, invalid credentials, etc.)
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Rate limiting or throttling
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Network or connectivity issues
    #[error("Network error: {0}")]
    Network(String),

    /// Model-specific errors (malformed response, context too long, etc.)
    #[error("Model error: {0}")]
    Model(String),

    /// Service unavailable or temporary issues
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Invalid configuration (bad model ID, rejected parameters, etc.)
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Other provider-specific errors that don't fit above categories
    #[error("{0}")]
    Other(String),
}

/// Trait for model providers
///
/// This trait abstracts over LLM backends so the Agent works with any
/// implementation. Every stage of the travel designer shares one provider
/// through `Arc<dyn ModelProvider>`.
#[async_trait::async_trait]
pub trait ModelProvider: Send + Sync {
    /// Get the model name for display (e.g., "gemini-2.0-flash")
    fn name(&self) -> &str;

    /// Send a request to the model and get a response
    ///
    /// # Arguments
    /// * `messages` - The conversation history
    /// * `tools` - Available tools for the model to use
    /// * `system_prompt` - Optional system prompt
    async fn generate(
        &self,
        messages: Vec<Message>,
        tools: Vec<ToolDefinition>,
        system_prompt: Option<String>,
    ) -> Result<ModelResponse, ProviderError>;
}

// Implement ModelProvider for Arc<dyn ModelProvider> to support dynamic dispatch
#[async_trait::async_trait]
impl ModelProvider for Arc<dyn ModelProvider> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn generate(
        &self,
        messages: Vec<Message>,
        tools: Vec<ToolDefinition>,
        system_prompt: Option<String>,
    ) -> Result<ModelResponse, ProviderError> {
        (**self).generate(messages, tools, system_prompt).await
    }
}
