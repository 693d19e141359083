//! Chat completion request and response types
//!
//! Requests are built with [`ChatCompletionRequest::builder`]; responses
//! arrive as [`ChatCompletion`]. Only the fields the client actually uses are
//! modelled. Unknown response fields are ignored.
//!
//! # Example
//!
//! ```
//! use wayfarer_openai::{ChatCompletionRequest, ChatMessage};
//!
//! let request = ChatCompletionRequest::builder("gemini-2.0-flash")
//!     .system("You recommend travel destinations based on the user's mood.")
//!     .user("adventure")
//!     .build();
//!
//! assert_eq!(request.messages.len(), 2);
//! assert_eq!(request.messages[1], ChatMessage::user("adventure"));
//! ```

use crate::tools::{ChatTool, ToolCall};
use serde::{Deserialize, Serialize};

// ============================================================================
// Request Types
// ============================================================================

/// Parameters for `POST /chat/completions`
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    /// The model to use (e.g., "gemini-2.0-flash")
    pub model: String,

    /// The conversation, including any system message
    pub messages: Vec<ChatMessage>,

    /// Tools available to the model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<ChatTool>>,

    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl ChatCompletionRequest {
    /// Start building a request for the given model
    pub fn builder(model: impl Into<String>) -> ChatCompletionRequestBuilder {
        ChatCompletionRequestBuilder {
            model: model.into(),
            messages: Vec::new(),
            tools: Vec::new(),
            max_tokens: None,
            temperature: None,
        }
    }
}

/// Builder for [`ChatCompletionRequest`]
#[derive(Debug, Clone)]
pub struct ChatCompletionRequestBuilder {
    model: String,
    messages: Vec<ChatMessage>,
    tools: Vec<ChatTool>,
    max_tokens: Option<u32>,
    temperature: Option<f32>,
}

impl ChatCompletionRequestBuilder {
    /// Append a system message
    pub fn system(mut self, content: impl Into<String>) -> Self {
        self.messages.push(ChatMessage::system(content));
        self
    }

    /// Append a user message
    pub fn user(mut self, content: impl Into<String>) -> Self {
        self.messages.push(ChatMessage::user(content));
        self
    }

    /// Append any message
    pub fn message(mut self, message: ChatMessage) -> Self {
        self.messages.push(message);
        self
    }

    /// Append several messages
    pub fn messages(mut self, messages: impl IntoIterator<Item = ChatMessage>) -> Self {
        self.messages.extend(messages);
        self
    }

    /// Set the available tools
    ///
    /// An empty list omits the field entirely; compatible endpoints reject
    /// `"tools": []`.
    pub fn tools(mut self, tools: Vec<ChatTool>) -> Self {
        self.tools = tools;
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn build(self) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model,
            messages: self.messages,
            tools: if self.tools.is_empty() {
                None
            } else {
                Some(self.tools)
            },
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }
}

/// A message in the conversation, tagged by role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum ChatMessage {
    /// Instruction for the model
    System { content: String },

    /// Input from the user
    User { content: String },

    /// Earlier model output, echoed back so tool results line up with calls
    Assistant {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tool_calls: Option<Vec<ToolCall>>,
    },

    /// Output of a tool call
    Tool {
        tool_call_id: String,
        content: String,
    },
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        ChatMessage::System {
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        ChatMessage::User {
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        ChatMessage::Assistant {
            content: Some(content.into()),
            tool_calls: None,
        }
    }

    pub fn tool(tool_call_id: impl Into<String>, content: impl Into<String>) -> Self {
        ChatMessage::Tool {
            tool_call_id: tool_call_id.into(),
            content: content.into(),
        }
    }
}

// ============================================================================
// Response Types
// ============================================================================

/// Response from `POST /chat/completions`
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletion {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub model: String,

    pub choices: Vec<Choice>,

    #[serde(default)]
    pub usage: Option<Usage>,
}

impl ChatCompletion {
    /// The first (and usually only) choice
    pub fn first_choice(&self) -> Option<&Choice> {
        self.choices.first()
    }

    /// Text content of the first choice, if any
    pub fn text(&self) -> Option<&str> {
        self.first_choice()
            .and_then(|choice| choice.message.content.as_deref())
    }
}

/// One completion alternative
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub index: u32,

    pub message: ResponseMessage,

    #[serde(default)]
    pub finish_reason: Option<FinishReason>,
}

/// The assistant message inside a [`Choice`]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,

    #[serde(default)]
    pub tool_calls: Option<Vec<ToolCall>>,
}

impl ResponseMessage {
    /// Requested tool calls, empty when the model answered in text
    pub fn tool_calls(&self) -> &[ToolCall] {
        self.tool_calls.as_deref().unwrap_or_default()
    }
}

/// Why the model stopped generating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Stop,
    Length,
    ToolCalls,
    ContentFilter,
    FunctionCall,
    #[serde(other)]
    Unknown,
}

/// Token accounting for one completion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}
