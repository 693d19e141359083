//! The agentic loop - core execution logic for Agent

use std::time::Instant;

use crate::events::AgentEvent;
use crate::types::{Message, StopReason};

use super::helpers::extract_text_response;
use super::types::{AgentError, AgentResponse, TokenUsageStats, ToolCallInfo};
use super::Agent;

impl Agent {
    /// Run the agent with a user message
    ///
    /// Starts a fresh conversation holding only `user_message`, then calls
    /// the model and executes tools until the model returns a final text
    /// response.
    ///
    /// # Errors
    ///
    /// Returns `AgentError` which can be:
    /// - `Provider` - API errors (authentication, rate limits, network issues)
    /// - `NoResponse` - Model finished without any text
    /// - `MaxTokensExceeded` - Response hit token limit
    /// - `MaxTurnsExceeded` - Model still wanted tools after `max_turns` calls
    /// - `ContentFiltered` - Response was filtered
    /// - `UnexpectedStopReason` - Model stopped for an unrecognized reason
    pub async fn run(&self, user_message: &str) -> Result<AgentResponse, AgentError> {
        let run_start = Instant::now();

        self.emit_event(AgentEvent::RunStarted {
            input: user_message.to_string(),
            timestamp: run_start,
        });

        let result = self.run_loop(user_message, run_start).await;

        match &result {
            Ok(response) => self.emit_event(AgentEvent::RunCompleted {
                output: response.text.clone(),
                duration: response.duration,
            }),
            Err(e) => self.emit_event(AgentEvent::RunFailed {
                error: e.to_string(),
                duration: run_start.elapsed(),
            }),
        }

        result
    }

    async fn run_loop(
        &self,
        user_message: &str,
        run_start: Instant,
    ) -> Result<AgentResponse, AgentError> {
        let mut tool_call_infos: Vec<ToolCallInfo> = Vec::new();
        let mut total_input_tokens: usize = 0;
        let mut total_output_tokens: usize = 0;
        let mut model_call_count: usize = 0;

        let mut conversation = vec![Message::user(user_message)];
        let tool_defs = self.tool_definitions();

        loop {
            if model_call_count >= self.max_turns {
                return Err(AgentError::MaxTurnsExceeded(self.max_turns));
            }

            let model_call_start = Instant::now();
            self.emit_event(AgentEvent::ModelCallStarted {
                message_count: conversation.len(),
                tool_count: tool_defs.len(),
                timestamp: model_call_start,
            });

            let response = match self
                .provider
                .generate(
                    conversation.clone(),
                    tool_defs.clone(),
                    self.system_prompt.clone(),
                )
                .await
            {
                Ok(response) => response,
                Err(e) => {
                    self.emit_event(AgentEvent::ModelCallFailed {
                        error: e.to_string(),
                        duration: model_call_start.elapsed(),
                    });
                    return Err(e.into());
                }
            };

            model_call_count += 1;
            if let Some(ref usage) = response.usage {
                total_input_tokens += usage.input_tokens;
                total_output_tokens += usage.output_tokens;
            }

            self.emit_event(AgentEvent::ModelCallCompleted {
                response_content: response.message.text(),
                tokens: response.usage,
                duration: model_call_start.elapsed(),
                stop_reason: Some(response.stop_reason),
            });

            match response.stop_reason {
                StopReason::ToolUse => {
                    let tool_results = self
                        .process_tool_calls(&response.message, &mut tool_call_infos)
                        .await;

                    conversation.push(response.message);
                    conversation.push(Message::tool_results(tool_results));
                }
                StopReason::EndTurn | StopReason::StopSequence => {
                    let text =
                        extract_text_response(&response.message).ok_or(AgentError::NoResponse)?;

                    let token_usage = if total_input_tokens > 0 || total_output_tokens > 0 {
                        Some(TokenUsageStats {
                            input_tokens: total_input_tokens,
                            output_tokens: total_output_tokens,
                        })
                    } else {
                        None
                    };

                    return Ok(AgentResponse {
                        text,
                        tool_calls: tool_call_infos,
                        token_usage,
                        duration: run_start.elapsed(),
                        model_calls: model_call_count,
                    });
                }
                StopReason::MaxTokens => return Err(AgentError::MaxTokensExceeded),
                StopReason::ContentFiltered => return Err(AgentError::ContentFiltered),
                StopReason::Unknown => {
                    return Err(AgentError::UnexpectedStopReason("Unknown".to_string()))
                }
            }
        }
    }
}
