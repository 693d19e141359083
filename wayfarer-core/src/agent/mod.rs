//! Agent module - the model/tool loop behind each travel stage
//!
//! An agent is a name, a system prompt and a tool table bound to a shared
//! [`ModelProvider`]. Every [`Agent::run`] starts from an empty
//! conversation.

mod builder;
mod helpers;
mod run;
mod tools;
mod types;

pub use builder::AgentBuilder;
pub use types::{
    AgentError, AgentResponse, TokenUsageStats, ToolCallInfo, DEFAULT_MAX_TURNS,
};

use std::sync::Arc;

use crate::events::{AgentEvent, AgentHook};
use crate::provider::ModelProvider;
use crate::tool::DynTool;
use crate::types::ToolDefinition;

/// An agent that runs one conversation per input against a model provider
///
/// # Example
///
/// ```ignore
/// let agent = Agent::builder()
///     .name("BookingAgent")
///     .provider(provider.clone())
///     .with_system_prompt("You provide flight and hotel information using tools.")
///     .add_tools(wayfarer_tools::travel::booking_tools())
///     .build()?;
///
/// let response = agent.run("Lisbon").await?;
/// println!("{}", response.text);
/// ```
pub struct Agent {
    pub(super) name: String,
    pub(super) provider: Arc<dyn ModelProvider>,
    pub(super) system_prompt: Option<String>,
    pub(super) tools: Vec<Box<dyn DynTool>>,
    pub(super) hooks: Arc<parking_lot::RwLock<Vec<Arc<dyn AgentHook>>>>,
    pub(super) max_turns: usize,
}

impl std::fmt::Debug for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agent")
            .field("name", &self.name)
            .field("model", &self.provider.name())
            .field("tools", &self.tool_names())
            .field("max_turns", &self.max_turns)
            .finish()
    }
}

impl Agent {
    /// Create a new builder
    pub fn builder() -> AgentBuilder {
        AgentBuilder::new()
    }

    /// Register a hook that receives every event this agent emits
    ///
    /// ```ignore
    /// agent.add_hook(|event: &AgentEvent| {
    ///     if let AgentEvent::RunFailed { error, .. } = event {
    ///         eprintln!("run failed: {}", error);
    ///     }
    /// });
    /// ```
    pub fn add_hook(&self, hook: impl AgentHook + 'static) {
        self.hooks.write().push(Arc::new(hook));
    }

    /// Emit an event to all registered hooks
    pub(crate) fn emit_event(&self, event: AgentEvent) {
        let hooks = self.hooks.read();
        for hook in hooks.iter() {
            hook.on_event(&event);
        }
    }

    /// Display name used in logs and errors
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the model name for display
    pub fn model_name(&self) -> &str {
        self.provider.name()
    }

    /// The system prompt sent with every model call
    pub fn system_prompt(&self) -> Option<&str> {
        self.system_prompt.as_deref()
    }

    /// Turn limit for a single run
    pub fn max_turns(&self) -> usize {
        self.max_turns
    }

    /// Names of the tools in this agent's table, in registration order
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    /// Tool definitions sent to the model
    pub fn tool_definitions(&self) -> Vec<ToolDefinition> {
        self.tools
            .iter()
            .map(|t| ToolDefinition {
                name: t.name().to_string(),
                description: t.description().to_string(),
                input_schema: t.input_schema(),
            })
            .collect()
    }
}
