//! Model response type shared by all providers

use crate::events::TokenUsage;
use crate::types::{Message, StopReason};

/// Response from a model provider
#[derive(Debug, Clone)]
pub struct ModelResponse {
    /// The assistant message (text and/or tool use blocks)
    pub message: Message,
    /// Why the model stopped
    pub stop_reason: StopReason,
    /// Token usage for this call, if the endpoint reported it
    pub usage: Option<TokenUsage>,
}

impl ModelResponse {
    /// A plain text response that ends the turn
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            message: Message::assistant(text),
            stop_reason: StopReason::EndTurn,
            usage: None,
        }
    }
}
