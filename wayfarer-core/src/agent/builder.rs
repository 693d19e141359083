//! AgentBuilder for fluent agent construction

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::provider::ModelProvider;
use crate::tool::{box_tool, DynTool, Tool};

use super::types::DEFAULT_MAX_TURNS;
use super::Agent;

/// Builder for creating an Agent with fluent configuration
///
/// Use `Agent::builder()` to create a new builder, configure it, and call
/// `.build()` to create the agent. A provider is required; everything else
/// has a default.
///
/// # Example
///
/// ```ignore
/// use wayfarer_core::{Agent, Result};
///
/// fn destination_agent(provider: Arc<dyn ModelProvider>) -> Result<Agent> {
///     Agent::builder()
///         .name("DestinationAgent")
///         .provider(provider)
///         .with_system_prompt("You recommend travel destinations based on the user's mood.")
///         .build()
/// }
/// ```
pub struct AgentBuilder {
    name: Option<String>,
    provider: Option<Arc<dyn ModelProvider>>,
    tools: Vec<Box<dyn DynTool>>,
    system_prompt: Option<String>,
    max_turns: usize,
}

impl Default for AgentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AgentBuilder {
    /// Create a new AgentBuilder with default settings
    pub fn new() -> Self {
        Self {
            name: None,
            provider: None,
            tools: Vec::new(),
            system_prompt: None,
            max_turns: DEFAULT_MAX_TURNS,
        }
    }

    /// Set the display name (defaults to "Agent")
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Use a shared provider
    pub fn provider(mut self, provider: Arc<dyn ModelProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Set the system prompt
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    /// Add a tool to the agent's table
    pub fn add_tool<T: Tool + 'static>(mut self, tool: T) -> Self {
        self.tools.push(box_tool(tool));
        self
    }

    /// Add already boxed tools (see [`crate::box_tools!`])
    pub fn add_tools(mut self, tools: impl IntoIterator<Item = Box<dyn DynTool>>) -> Self {
        self.tools.extend(tools);
        self
    }

    /// Limit the number of model calls in one run (minimum 1)
    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns.max(1);
        self
    }

    /// Build the agent
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when no provider was set or two tools share
    /// a name.
    pub fn build(self) -> Result<Agent> {
        let name = self.name.unwrap_or_else(|| "Agent".to_string());

        let provider = self
            .provider
            .ok_or_else(|| Error::Config(format!("{}: no model provider configured", name)))?;

        for (i, tool) in self.tools.iter().enumerate() {
            if self.tools[..i].iter().any(|t| t.name() == tool.name()) {
                return Err(Error::Config(format!(
                    "{}: tool '{}' is registered more than once",
                    name,
                    tool.name()
                )));
            }
        }

        Ok(Agent {
            name,
            provider,
            system_prompt: self.system_prompt,
            tools: self.tools,
            hooks: Arc::new(parking_lot::RwLock::new(Vec::new())),
            max_turns: self.max_turns,
        })
    }
}
