//! Type conversions between wayfarer and chat-completion types

use super::ProviderError;
use crate::events::TokenUsage;
use crate::types::{ContentBlock, Message, Role, StopReason, ToolDefinition, ToolUseBlock};
use serde_json::Value;
use wayfarer_openai::{
    ChatCompletion, ChatMessage, ChatTool, FinishReason, ResponseMessage, ToolCall, Usage,
};

// ===== Type Conversion: wayfarer -> chat completions =====

/// Convert a conversation, with its system prompt, to chat messages
pub fn to_chat_messages(messages: &[Message], system_prompt: Option<&str>) -> Vec<ChatMessage> {
    let mut chat_messages = Vec::with_capacity(messages.len() + 1);

    if let Some(system) = system_prompt {
        chat_messages.push(ChatMessage::system(system));
    }

    for message in messages {
        match message.role {
            Role::User => push_user_message(message, &mut chat_messages),
            Role::Assistant => chat_messages.push(to_assistant_message(message)),
        }
    }

    chat_messages
}

/// A user message carries either text or tool results; each tool result
/// becomes its own `tool` message
fn push_user_message(message: &Message, out: &mut Vec<ChatMessage>) {
    let mut text = String::new();
    let has_tool_results = message
        .content
        .iter()
        .any(|block| matches!(block, ContentBlock::ToolResult(_)));

    for block in &message.content {
        match block {
            ContentBlock::Text(t) => text.push_str(t),
            ContentBlock::ToolResult(result) => out.push(ChatMessage::tool(
                result.tool_use_id.clone(),
                result.content.as_text(),
            )),
            ContentBlock::ToolUse(_) => {}
        }
    }

    // Every user turn without tool results is sent, even when its text is empty
    if !has_tool_results {
        out.push(ChatMessage::user(text));
    }
}

fn to_assistant_message(message: &Message) -> ChatMessage {
    let text = message.text();
    let tool_calls: Vec<ToolCall> = message
        .tool_uses()
        .into_iter()
        .map(|tool_use| {
            let arguments = tool_use
                .raw_input
                .clone()
                .unwrap_or_else(|| tool_use.input.to_string());
            ToolCall::function(tool_use.id.clone(), tool_use.name.clone(), arguments)
        })
        .collect();

    ChatMessage::Assistant {
        content: if text.is_empty() { None } else { Some(text) },
        tool_calls: if tool_calls.is_empty() {
            None
        } else {
            Some(tool_calls)
        },
    }
}

pub fn to_chat_tool(tool: &ToolDefinition) -> Result<ChatTool, ProviderError> {
    if !tool.input_schema.is_object() {
        return Err(ProviderError::Configuration(format!(
            "Tool '{}' input_schema must be an object",
            tool.name
        )));
    }

    Ok(ChatTool::function(
        tool.name.clone(),
        tool.description.clone(),
        tool.input_schema.clone(),
    ))
}

// ===== Type Conversion: chat completions -> wayfarer =====

pub fn from_chat_completion(
    completion: ChatCompletion,
) -> Result<(Message, StopReason, Option<TokenUsage>), ProviderError> {
    let usage = completion.usage.map(from_usage);

    let choice = completion
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::Model("response contained no choices".to_string()))?;

    let message = from_response_message(&choice.message);
    let stop_reason = from_finish_reason(choice.finish_reason, &message);

    Ok((message, stop_reason, usage))
}

fn from_response_message(response: &ResponseMessage) -> Message {
    let mut content = Vec::new();

    if let Some(text) = response.content.as_deref().filter(|t| !t.is_empty()) {
        content.push(ContentBlock::Text(text.to_string()));
    }

    for call in response.tool_calls() {
        content.push(ContentBlock::ToolUse(from_tool_call(call)));
    }

    Message::assistant_with_content(content)
}

fn from_tool_call(call: &ToolCall) -> ToolUseBlock {
    let id = if call.id.is_empty() {
        format!("call_{}", uuid::Uuid::new_v4().simple())
    } else {
        call.id.clone()
    };

    let input = call.function.parse_arguments().unwrap_or_else(|e| {
        log::warn!(
            "tool call '{}' has malformed arguments ({}); passing them through as text",
            call.function.name,
            e
        );
        Value::String(call.function.arguments.clone())
    });

    ToolUseBlock {
        id,
        name: call.function.name.clone(),
        input,
        raw_input: Some(call.function.arguments.clone()),
    }
}

/// Map the finish reason; tool calls win over whatever the endpoint claims
pub fn from_finish_reason(reason: Option<FinishReason>, message: &Message) -> StopReason {
    if !message.tool_uses().is_empty() {
        return StopReason::ToolUse;
    }

    match reason {
        None | Some(FinishReason::Stop) => StopReason::EndTurn,
        Some(FinishReason::Length) => StopReason::MaxTokens,
        Some(FinishReason::ContentFilter) => StopReason::ContentFiltered,
        Some(FinishReason::ToolCalls) | Some(FinishReason::FunctionCall) => StopReason::EndTurn,
        Some(FinishReason::Unknown) if !message.text().is_empty() => StopReason::EndTurn,
        Some(FinishReason::Unknown) => StopReason::Unknown,
    }
}

fn from_usage(usage: Usage) -> TokenUsage {
    TokenUsage {
        input_tokens: usage.prompt_tokens as usize,
        output_tokens: usage.completion_tokens as usize,
    }
}
