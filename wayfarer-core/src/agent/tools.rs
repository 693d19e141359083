//! Tool execution for Agent

use std::time::Instant;

use serde_json::Value;

use crate::events::AgentEvent;
use crate::tool::ToolResult;
use crate::types::{Message, ToolResultBlock, ToolResultStatus, ToolUseBlock};

use super::types::{AgentError, ToolCallInfo};
use super::Agent;

impl Agent {
    /// Execute one tool call requested by the model
    pub(super) async fn execute_tool(
        &self,
        tool_use: &ToolUseBlock,
    ) -> Result<ToolResult, AgentError> {
        let tool_start = Instant::now();
        let tool_id = tool_use.id.clone();
        let tool_name = tool_use.name.clone();
        let input = tool_use.input.clone();

        // Emit ToolRequested (always fires exactly once)
        self.emit_event(AgentEvent::ToolRequested {
            tool_use_id: tool_id.clone(),
            name: tool_name.clone(),
            input: input.clone(),
        });

        if !input.is_object() {
            let type_name = match &input {
                Value::Null => "null",
                Value::Bool(_) => "boolean",
                Value::Number(_) => "number",
                Value::String(_) => "string",
                Value::Array(_) => "array",
                Value::Object(_) => "object",
            };
            let error_msg = format!("Tool input must be a JSON object, got: {}", type_name);
            self.emit_event(AgentEvent::ToolFailed {
                tool_use_id: tool_id,
                name: tool_name,
                error: error_msg.clone(),
                duration: tool_start.elapsed(),
            });
            return Err(AgentError::InvalidToolInput(error_msg));
        }

        let Some(tool) = self.tools.iter().find(|t| t.name() == tool_name) else {
            self.emit_event(AgentEvent::ToolFailed {
                tool_use_id: tool_id,
                name: tool_name.clone(),
                error: format!("Tool not found: {}", tool_name),
                duration: tool_start.elapsed(),
            });
            return Err(AgentError::ToolNotFound(tool_name));
        };

        match tool.execute_raw(input).await {
            Ok(result) => {
                self.emit_event(AgentEvent::ToolCompleted {
                    tool_use_id: tool_id,
                    name: tool_name,
                    output: result.clone(),
                    duration: tool_start.elapsed(),
                });
                Ok(result)
            }
            Err(e) => {
                self.emit_event(AgentEvent::ToolFailed {
                    tool_use_id: tool_id,
                    name: tool_name,
                    error: e.to_string(),
                    duration: tool_start.elapsed(),
                });
                Err(AgentError::Tool(e))
            }
        }
    }

    /// Process tool calls from a model response
    ///
    /// Calls run one after another in the order the model listed them.
    /// Failures become error results for the model to read; they never end
    /// the run.
    pub(super) async fn process_tool_calls(
        &self,
        message: &Message,
        tool_call_infos: &mut Vec<ToolCallInfo>,
    ) -> Vec<ToolResultBlock> {
        let mut results = Vec::new();

        for tool_use in message.tool_uses() {
            let start = Instant::now();
            let result = self.execute_tool(tool_use).await;
            let duration = start.elapsed();

            let block = match result {
                Ok(tool_result) => {
                    tool_call_infos.push(ToolCallInfo {
                        name: tool_use.name.clone(),
                        input: tool_use.input.clone(),
                        output: tool_result.as_text(),
                        success: true,
                        duration,
                    });

                    ToolResultBlock {
                        tool_use_id: tool_use.id.clone(),
                        content: tool_result,
                        status: ToolResultStatus::Success,
                    }
                }
                Err(e) => {
                    let error_msg = format!("Error: {}", e);

                    tool_call_infos.push(ToolCallInfo {
                        name: tool_use.name.clone(),
                        input: tool_use.input.clone(),
                        output: error_msg.clone(),
                        success: false,
                        duration,
                    });

                    ToolResultBlock {
                        tool_use_id: tool_use.id.clone(),
                        content: ToolResult::Text(error_msg),
                        status: ToolResultStatus::Error,
                    }
                }
            };

            results.push(block);
        }

        results
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{EchoTool, EventCollector, FailingTool, MockProvider};
    use crate::types::ContentBlock;
    use serde_json::json;
    use std::sync::Arc;

    fn agent() -> Agent {
        Agent::builder()
            .provider(Arc::new(MockProvider::new()))
            .add_tool(EchoTool)
            .add_tool(FailingTool)
            .build()
            .unwrap()
    }

    fn tool_use(id: &str, name: &str, input: Value) -> ToolUseBlock {
        ToolUseBlock {
            id: id.to_string(),
            name: name.to_string(),
            input,
            raw_input: None,
        }
    }

    #[tokio::test]
    async fn test_execute_tool_success() {
        let agent = agent();
        let collector = EventCollector::new();
        agent.add_hook(collector.clone());

        let result = agent
            .execute_tool(&tool_use("t1", "echo", json!({"text": "hola"})))
            .await
            .unwrap();

        assert_eq!(result.as_text(), "hola");
        assert_eq!(collector.event_types(), vec!["tool_requested", "tool_completed"]);
    }

    #[tokio::test]
    async fn test_execute_tool_not_found() {
        let agent = agent();
        let collector = EventCollector::new();
        agent.add_hook(collector.clone());

        let err = agent
            .execute_tool(&tool_use("t1", "get_weather", json!({})))
            .await
            .unwrap_err();

        assert!(matches!(err, AgentError::ToolNotFound(ref name) if name == "get_weather"));
        assert_eq!(collector.event_types(), vec!["tool_requested", "tool_failed"]);
    }

    #[tokio::test]
    async fn test_execute_tool_rejects_non_object_input() {
        let cases = [
            (json!("{oops"), "string"),
            (json!(null), "null"),
            (json!([1]), "array"),
            (json!(7), "number"),
        ];

        let agent = agent();
        for (input, type_name) in cases {
            let err = agent
                .execute_tool(&tool_use("t1", "echo", input))
                .await
                .unwrap_err();
            match err {
                AgentError::InvalidToolInput(msg) => assert!(msg.ends_with(type_name)),
                other => panic!("expected InvalidToolInput, got {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn test_process_tool_calls_keeps_order_and_reports_errors() {
        let agent = agent();
        let message = Message::assistant_with_content(vec![
            ContentBlock::ToolUse(tool_use("a", "echo", json!({"text": "first"}))),
            ContentBlock::ToolUse(tool_use("b", "fail", json!({}))),
            ContentBlock::ToolUse(tool_use("c", "missing", json!({}))),
        ]);

        let mut infos = Vec::new();
        let results = agent.process_tool_calls(&message, &mut infos).await;

        let ids: Vec<_> = results.iter().map(|r| r.tool_use_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);

        assert_eq!(results[0].status, ToolResultStatus::Success);
        assert_eq!(results[0].content.as_text(), "first");
        assert_eq!(results[1].status, ToolResultStatus::Error);
        assert!(results[1].content.as_text().starts_with("Error: "));
        assert_eq!(results[2].status, ToolResultStatus::Error);
        assert!(results[2].content.as_text().contains("Tool not found: missing"));

        assert_eq!(infos.len(), 3);
        assert!(infos[0].success);
        assert!(!infos[1].success);
    }
}
