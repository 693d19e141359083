//! Agent-related types

use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

use crate::provider::ProviderError;
use crate::tool::ToolError;

/// Errors that can occur during agent execution
#[derive(Debug, Error)]
pub enum AgentError {
    /// Model provider errors (API calls, authentication, rate limits)
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Tool execution errors
    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    /// Model returned no text response
    #[error("Model returned no text response")]
    NoResponse,

    /// Response exceeded maximum token limit
    #[error("Response exceeded maximum token limit. Try asking the model to be more concise.")]
    MaxTokensExceeded,

    /// The model kept requesting tools past the turn limit
    #[error("No final answer after {0} model turns")]
    MaxTurnsExceeded(usize),

    /// Response was filtered by content moderation
    #[error("Response was filtered by content moderation")]
    ContentFiltered,

    /// Tool not found
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// Invalid tool input from model
    #[error("Invalid tool input: {0}")]
    InvalidToolInput(String),

    /// Unexpected stop reason from model
    #[error("Unexpected stop reason: {0}")]
    UnexpectedStopReason(String),
}

/// Default number of model calls allowed per run
pub const DEFAULT_MAX_TURNS: usize = 10;

/// Response from Agent.run() containing the result and execution statistics
#[derive(Debug, Clone)]
pub struct AgentResponse {
    /// The final text response from the agent
    pub text: String,
    /// All tool calls made during this run
    pub tool_calls: Vec<ToolCallInfo>,
    /// Total token usage across all model calls (if available)
    pub token_usage: Option<TokenUsageStats>,
    /// Total execution time
    pub duration: Duration,
    /// Number of model calls made (includes follow-ups after tool use)
    pub model_calls: usize,
}

impl AgentResponse {
    /// Get just the text response
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for AgentResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl From<AgentResponse> for String {
    fn from(response: AgentResponse) -> Self {
        response.text
    }
}

impl PartialEq<&str> for AgentResponse {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

/// Information about a tool call made during agent execution
#[derive(Debug, Clone)]
pub struct ToolCallInfo {
    /// Tool name
    pub name: String,
    /// Input parameters as sent by the model
    pub input: Value,
    /// Output text (or the error message sent back to the model)
    pub output: String,
    /// Whether the tool executed successfully
    pub success: bool,
    /// Execution time
    pub duration: Duration,
}

/// Token usage statistics accumulated over a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsageStats {
    pub input_tokens: usize,
    pub output_tokens: usize,
}

impl TokenUsageStats {
    pub fn total(&self) -> usize {
        self.input_tokens + self.output_tokens
    }
}
