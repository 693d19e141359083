//! Common test utilities shared across test files.
//!
//! Items here may not be used by all test files, hence the module-level allow.
#![allow(dead_code)]

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::{Arc, Mutex};
use wayfarer_core::{
    AgentEvent, AgentHook, ContentBlock, Message, ModelProvider, ModelResponse, ProviderError,
    Role, StopReason, Tool, ToolDefinition, ToolError, ToolResult, ToolUseBlock,
};

// ===== Test Tools =====

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CityInput {
    /// City to look up
    pub city: String,
}

/// Looks up a made-up airport code
pub struct AirportCode;

impl Tool for AirportCode {
    type Input = CityInput;

    fn name(&self) -> &str {
        "airport_code"
    }

    fn description(&self) -> &str {
        "Find the main airport code for a city"
    }

    async fn execute(&self, input: Self::Input) -> Result<ToolResult, ToolError> {
        let code = match input.city.as_str() {
            "Lima" => "LIM",
            "Lisbon" => "LIS",
            _ => "???",
        };
        Ok(code.into())
    }
}

/// Returns structured JSON
pub struct WeatherTool;

impl Tool for WeatherTool {
    type Input = CityInput;

    fn name(&self) -> &str {
        "weather"
    }

    fn description(&self) -> &str {
        "Current weather for a city"
    }

    async fn execute(&self, input: Self::Input) -> Result<ToolResult, ToolError> {
        Ok(ToolResult::json(serde_json::json!({
            "city": input.city,
            "celsius": 21
        }))?)
    }
}

/// Always fails
pub struct ClosedTool;

impl Tool for ClosedTool {
    type Input = CityInput;

    fn name(&self) -> &str {
        "closed"
    }

    fn description(&self) -> &str {
        "A tool whose backend is down"
    }

    async fn execute(&self, _input: Self::Input) -> Result<ToolResult, ToolError> {
        Err("backend is closed".into())
    }
}

// ===== Scripted Provider =====

/// A provider that plays back a script and remembers what it was sent
#[derive(Clone, Default)]
pub struct ScriptedProvider {
    script: Arc<Mutex<Vec<Result<ModelResponse, ProviderError>>>>,
    seen: Arc<Mutex<Vec<Vec<Message>>>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(self, text: &str) -> Self {
        self.script
            .lock()
            .unwrap()
            .push(Ok(ModelResponse::text(text)));
        self
    }

    pub fn tool_calls(self, calls: &[(&str, &str, serde_json::Value)]) -> Self {
        let content = calls
            .iter()
            .map(|(id, name, input)| {
                ContentBlock::ToolUse(ToolUseBlock {
                    id: id.to_string(),
                    name: name.to_string(),
                    input: input.clone(),
                    raw_input: None,
                })
            })
            .collect();

        self.script.lock().unwrap().push(Ok(ModelResponse {
            message: Message {
                role: Role::Assistant,
                content,
            },
            stop_reason: StopReason::ToolUse,
            usage: Some(wayfarer_core::TokenUsage {
                input_tokens: 10,
                output_tokens: 5,
            }),
        }));
        self
    }

    pub fn error(self, error: ProviderError) -> Self {
        self.script.lock().unwrap().push(Err(error));
        self
    }

    pub fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    pub fn conversation(&self, call: usize) -> Vec<Message> {
        self.seen.lock().unwrap()[call].clone()
    }
}

#[async_trait]
impl ModelProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn generate(
        &self,
        messages: Vec<Message>,
        _tools: Vec<ToolDefinition>,
        _system_prompt: Option<String>,
    ) -> Result<ModelResponse, ProviderError> {
        self.seen.lock().unwrap().push(messages);

        let mut script = self.script.lock().unwrap();
        if script.is_empty() {
            return Err(ProviderError::Other("script exhausted".to_string()));
        }
        script.remove(0)
    }
}

// ===== Event Recording =====

/// Records tool events with their payloads
#[derive(Clone, Default)]
pub struct ToolEventLog {
    entries: Arc<Mutex<Vec<String>>>,
}

impl ToolEventLog {
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }
}

impl AgentHook for ToolEventLog {
    fn on_event(&self, event: &AgentEvent) {
        let entry = match event {
            AgentEvent::ToolRequested { name, input, .. } => format!("requested {} {}", name, input),
            AgentEvent::ToolCompleted { name, output, .. } => {
                format!("completed {} {}", name, output.as_text())
            }
            AgentEvent::ToolFailed { name, error, .. } => format!("failed {} {}", name, error),
            _ => return,
        };
        self.entries.lock().unwrap().push(entry);
    }
}
