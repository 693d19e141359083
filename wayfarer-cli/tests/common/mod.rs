#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;

use serde_json::Value;
use wayfarer_cli::{CliError, Config, LineReader, TravelDesigner};
use wayfarer_core::test_utils::MockProvider;
use wiremock::{Match, Request};

/// Answers prompts from a fixed list of lines, then reports end of input
pub struct ScriptedInput {
    lines: VecDeque<String>,
    pub prompts: usize,
}

impl ScriptedInput {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
            prompts: 0,
        }
    }
}

impl LineReader for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>, CliError> {
        self.prompts += 1;
        Ok(self.lines.pop_front())
    }
}

pub fn designer(provider: &MockProvider) -> TravelDesigner {
    TravelDesigner::new(Arc::new(provider.clone()), &Config::default()).unwrap()
}

/// Matches chat requests whose leading system message is the given text
pub struct SystemPrompt(pub &'static str);

impl Match for SystemPrompt {
    fn matches(&self, request: &Request) -> bool {
        serde_json::from_slice::<Value>(&request.body)
            .ok()
            .and_then(|body| {
                body["messages"][0]["content"]
                    .as_str()
                    .map(|content| content == self.0)
            })
            .unwrap_or(false)
    }
}

/// A chat-completions body with a plain text answer
pub fn text_completion(text: &str) -> Value {
    serde_json::json!({
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": text},
            "finish_reason": "stop"
        }]
    })
}

/// A chat-completions body requesting the given tool calls
pub fn tool_call_completion(calls: &[(&str, &str, &str)]) -> Value {
    let tool_calls: Vec<Value> = calls
        .iter()
        .map(|(id, name, arguments)| {
            serde_json::json!({
                "id": id,
                "type": "function",
                "function": {"name": name, "arguments": arguments}
            })
        })
        .collect();

    serde_json::json!({
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": null, "tool_calls": tool_calls},
            "finish_reason": "tool_calls"
        }]
    })
}
