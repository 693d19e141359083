//! Minimal OpenAI-compatible chat completions client for wayfarer
//!
//! This crate provides a small client for the `/chat/completions` endpoint
//! shared by OpenAI and the providers that mirror its schema (for example the
//! Gemini OpenAI compatibility layer). It supports plain text turns and
//! function-style tool calls. Streaming and retries are not supported.
//!
//! # Quick Start
//!
//! ```no_run
//! // Requires OPENAI_API_KEY environment variable
//! use wayfarer_openai::{ChatCompletionRequest, OpenAi};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenAi::from_env()?;
//!
//! let request = ChatCompletionRequest::builder("gpt-4o-mini")
//!     .system("You are a terse assistant.")
//!     .user("Hello!")
//!     .build();
//!
//! let completion = client.chat().create(request).await?;
//! println!("{:?}", completion.text());
//! # Ok(())
//! # }
//! ```
//!
//! # Other Providers
//!
//! Point the client at any compatible base URL:
//!
//! ```no_run
//! use wayfarer_openai::OpenAi;
//!
//! # fn main() -> Result<(), wayfarer_openai::OpenAiError> {
//! let client = OpenAi::builder()
//!     .api_key("my-gemini-key")
//!     .api_base("https://generativelanguage.googleapis.com/v1beta/openai/")
//!     .build()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Tool Use
//!
//! ```no_run
//! use wayfarer_openai::{ChatCompletionRequest, ChatTool, OpenAi};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenAi::from_env()?;
//!
//! let tool = ChatTool::function(
//!     "get_flights",
//!     "Look up flights to a destination",
//!     serde_json::json!({
//!         "type": "object",
//!         "properties": {"destination": {"type": "string"}},
//!         "required": ["destination"]
//!     }),
//! );
//!
//! let request = ChatCompletionRequest::builder("gpt-4o-mini")
//!     .user("Find me flights to Lisbon")
//!     .tools(vec![tool])
//!     .build();
//!
//! let completion = client.chat().create(request).await?;
//! if let Some(choice) = completion.first_choice() {
//!     for call in choice.message.tool_calls() {
//!         println!("{} -> {}", call.function.name, call.function.arguments);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod chat;
mod client;
mod error;
mod tools;

pub use chat::{
    ChatCompletion, ChatCompletionRequest, ChatCompletionRequestBuilder, ChatMessage, Choice,
    FinishReason, ResponseMessage, Usage,
};
pub use client::{Chat, OpenAi, OpenAiBuilder};
pub use error::{ApiError, ApiErrorResponse, OpenAiError};
pub use tools::{ChatTool, FunctionCall, FunctionDefinition, ToolCall};
