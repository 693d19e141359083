//! Test utilities for wayfarer-core.
//!
//! Mock implementations for testing agents without a real completion
//! endpoint or API key.
//!
//! Enable with the `test-utils` feature:
//!
//! ```toml
//! [dev-dependencies]
//! wayfarer-core = { workspace = true, features = ["test-utils"] }
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use wayfarer_core::{Agent, test_utils::MockProvider};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = MockProvider::new().with_text("Kyoto");
//!
//! let agent = Agent::builder()
//!     .provider(Arc::new(provider.clone()))
//!     .build()?;
//!
//! let response = agent.run("calm").await?;
//! assert_eq!(response.text(), "Kyoto");
//! assert_eq!(provider.requests()[0].messages[0].text(), "calm");
//! # Ok(())
//! # }
//! ```

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::events::{AgentEvent, AgentHook};
use crate::model::ModelResponse;
use crate::provider::{ModelProvider, ProviderError};
use crate::tool::{Tool, ToolError, ToolResult};
use crate::types::{ContentBlock, Message, Role, StopReason, ToolDefinition, ToolUseBlock};

/// One `generate` call as seen by [`MockProvider`]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Conversation sent to the model
    pub messages: Vec<Message>,
    /// Names of the tools offered, in order
    pub tool_names: Vec<String>,
    /// System prompt, if any
    pub system_prompt: Option<String>,
}

/// A mock model provider for testing.
///
/// Returns pre-programmed responses (or errors) in order and records every
/// request. Clones share the same script and record, so a test can keep a
/// handle after giving the provider to an agent.
///
/// ```rust
/// use wayfarer_core::test_utils::MockProvider;
/// use serde_json::json;
///
/// // Tool use followed by final response
/// let provider = MockProvider::new()
///     .with_tool_use("get_flights", json!({"destination": "Lima"}))
///     .with_text("Two flights found");
/// ```
#[derive(Clone)]
pub struct MockProvider {
    name: String,
    responses: Arc<Mutex<VecDeque<Result<ModelResponse, ProviderError>>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockProvider {
    /// Create a new mock provider with no responses.
    pub fn new() -> Self {
        Self {
            name: "mock".to_string(),
            responses: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Override the model name reported by `name()`
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Queue a text response with `StopReason::EndTurn`.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_response(ModelResponse::text(text))
    }

    /// Queue a single tool use response with `StopReason::ToolUse`.
    pub fn with_tool_use(
        self,
        tool_name: impl Into<String>,
        tool_input: serde_json::Value,
    ) -> Self {
        let tool_use = ToolUseBlock {
            id: format!("call_{}", uuid::Uuid::new_v4().simple()),
            name: tool_name.into(),
            input: tool_input,
            raw_input: None,
        };

        self.with_response(ModelResponse {
            message: Message {
                role: Role::Assistant,
                content: vec![ContentBlock::ToolUse(tool_use)],
            },
            stop_reason: StopReason::ToolUse,
            usage: None,
        })
    }

    /// Queue an arbitrary response.
    pub fn with_response(self, response: ModelResponse) -> Self {
        self.responses.lock().push_back(Ok(response));
        self
    }

    /// Queue an error.
    pub fn with_error(self, error: ProviderError) -> Self {
        self.responses.lock().push_back(Err(error));
        self
    }

    /// Get the number of times `generate` was called.
    pub fn call_count(&self) -> usize {
        self.requests.lock().len()
    }

    /// Every request received so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ModelProvider for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate(
        &self,
        messages: Vec<Message>,
        tools: Vec<ToolDefinition>,
        system_prompt: Option<String>,
    ) -> Result<ModelResponse, ProviderError> {
        self.requests.lock().push(RecordedRequest {
            messages,
            tool_names: tools.into_iter().map(|t| t.name).collect(),
            system_prompt,
        });

        self.responses.lock().pop_front().unwrap_or_else(|| {
            Err(ProviderError::Other(
                "MockProvider: no more responses configured".to_string(),
            ))
        })
    }
}

/// Collects agent events for verification in tests.
///
/// ```rust
/// use std::sync::Arc;
/// use wayfarer_core::{Agent, test_utils::{MockProvider, EventCollector}};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let agent = Agent::builder()
///     .provider(Arc::new(MockProvider::new().with_text("Hello!")))
///     .build()?;
///
/// let collector = EventCollector::new();
/// agent.add_hook(collector.clone());
/// agent.run("Hi").await?;
///
/// assert!(collector.has_event("run_completed"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct EventCollector {
    events: Arc<Mutex<Vec<AgentEvent>>>,
}

impl EventCollector {
    /// Create a new event collector.
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get all collected events.
    pub fn events(&self) -> Vec<AgentEvent> {
        self.events.lock().clone()
    }

    /// Get all collected event type names.
    pub fn event_types(&self) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .map(|e| Self::event_type_name(e).to_string())
            .collect()
    }

    /// Clear all collected events.
    pub fn clear(&self) {
        self.events.lock().clear();
    }

    /// Check if a specific event type was collected.
    pub fn has_event(&self, event_type: &str) -> bool {
        self.count_event(event_type) > 0
    }

    /// Count occurrences of a specific event type.
    pub fn count_event(&self, event_type: &str) -> usize {
        self.events
            .lock()
            .iter()
            .filter(|e| Self::event_type_name(e) == event_type)
            .count()
    }

    /// Get the number of collected events.
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// Check if no events have been collected.
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    fn event_type_name(event: &AgentEvent) -> &'static str {
        match event {
            AgentEvent::RunStarted { .. } => "run_started",
            AgentEvent::RunCompleted { .. } => "run_completed",
            AgentEvent::RunFailed { .. } => "run_failed",
            AgentEvent::ModelCallStarted { .. } => "model_call_started",
            AgentEvent::ModelCallCompleted { .. } => "model_call_completed",
            AgentEvent::ModelCallFailed { .. } => "model_call_failed",
            AgentEvent::ToolRequested { .. } => "tool_requested",
            AgentEvent::ToolCompleted { .. } => "tool_completed",
            AgentEvent::ToolFailed { .. } => "tool_failed",
        }
    }
}

impl Default for EventCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl AgentHook for EventCollector {
    fn on_event(&self, event: &AgentEvent) {
        self.events.lock().push(event.clone());
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct EchoInput {
    /// Text to send back
    pub text: String,
}

/// Returns its input text unchanged
pub struct EchoTool;

impl Tool for EchoTool {
    type Input = EchoInput;

    fn name(&self) -> &str {
        "echo"
    }

    fn description(&self) -> &str {
        "Echo the input text"
    }

    async fn execute(&self, input: Self::Input) -> Result<ToolResult, ToolError> {
        Ok(input.text.into())
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct FailingInput {}

/// Always fails with a custom error
pub struct FailingTool;

impl Tool for FailingTool {
    type Input = FailingInput;

    fn name(&self) -> &str {
        "fail"
    }

    fn description(&self) -> &str {
        "Always fails"
    }

    async fn execute(&self, _input: Self::Input) -> Result<ToolResult, ToolError> {
        Err(ToolError::Custom("tool exploded".to_string()))
    }
}
