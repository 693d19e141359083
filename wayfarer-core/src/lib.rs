//! # wayfarer-core
//!
//! Agents, tools and model providers behind the wayfarer travel designer.
//!
//! An [`Agent`] pairs a system prompt and a table of [`Tool`]s with a
//! [`ModelProvider`]. Each call to [`Agent::run`] starts a fresh
//! conversation, sends it to the model, runs whatever tools the model asks
//! for, and returns the model's final text.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use wayfarer_core::{Agent, ModelProvider, OpenAiProvider};
//! use wayfarer_openai::OpenAi;
//!
//! #[tokio::main]
//! async fn main() -> wayfarer_core::Result<()> {
//!     let client = OpenAi::builder()
//!         .api_key(std::env::var("GEMINI_API_KEY").unwrap_or_default())
//!         .api_base("https://generativelanguage.googleapis.com/v1beta/openai/")
//!         .build()?;
//!     let provider: Arc<dyn ModelProvider> =
//!         Arc::new(OpenAiProvider::new(client, "gemini-2.0-flash"));
//!
//!     let agent = Agent::builder()
//!         .name("DestinationAgent")
//!         .provider(provider)
//!         .with_system_prompt("You recommend travel destinations based on the user's mood.")
//!         .build()?;
//!
//!     let response = agent.run("relaxing").await?;
//!     println!("{}", response.text.trim());
//!     Ok(())
//! }
//! ```
//!
//! ## Tools
//!
//! Tools declare a typed input; its JSON schema is derived with `schemars`
//! and sent to the model alongside the conversation.
//!
//! ```ignore
//! use wayfarer_core::{Tool, ToolError, ToolResult};
//! use schemars::JsonSchema;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, JsonSchema)]
//! struct VisaInput {
//!     /// Country to check
//!     country: String,
//! }
//!
//! struct VisaTool;
//!
//! impl Tool for VisaTool {
//!     type Input = VisaInput;
//!
//!     fn name(&self) -> &str { "visa_rules" }
//!     fn description(&self) -> &str { "Visa rules for a country" }
//!
//!     async fn execute(&self, input: VisaInput) -> Result<ToolResult, ToolError> {
//!         Ok(format!("No visa needed for {}", input.country).into())
//!     }
//! }
//! ```
//!
//! ## Observing Runs
//!
//! Register an [`AgentHook`] (or any `Fn(&AgentEvent)`) to follow model and
//! tool activity:
//!
//! ```ignore
//! agent.add_hook(|event: &AgentEvent| {
//!     if let AgentEvent::ToolRequested { name, .. } = event {
//!         log::info!("tool requested: {}", name);
//!     }
//! });
//! ```
//!
//! ## Feature Flags
//!
//! - `openai` - [`OpenAiProvider`] over the `wayfarer-openai` client
//! - `test-utils` - [`test_utils::MockProvider`] and [`test_utils::EventCollector`]

pub mod agent;
pub mod error;
pub mod events;
pub mod model;
pub mod provider;
pub mod tool;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use agent::{
    Agent, AgentBuilder, AgentError, AgentResponse, TokenUsageStats, ToolCallInfo,
    DEFAULT_MAX_TURNS,
};
pub use error::{Error, Result};
pub use events::{AgentEvent, AgentHook, TokenUsage};
pub use model::ModelResponse;
pub use provider::{ModelProvider, ProviderError};
pub use tool::{box_tool, DynTool, Tool, ToolError, ToolResult};
pub use types::{
    ContentBlock, Message, Role, StopReason, ToolDefinition, ToolResultBlock, ToolResultStatus,
    ToolUseBlock,
};

#[cfg(feature = "openai")]
pub use provider::OpenAiProvider;
