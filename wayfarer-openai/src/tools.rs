//! Function-calling types shared by requests and responses

use serde::{Deserialize, Serialize};
use serde_json::Value;

const FUNCTION_TYPE: &str = "function";

fn function_type() -> String {
    FUNCTION_TYPE.to_string()
}

// ============================================================================
// Tool Definitions (request side)
// ============================================================================

/// A tool the model may call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTool {
    /// Always `"function"` for chat completions
    #[serde(rename = "type", default = "function_type")]
    pub tool_type: String,

    /// The function signature exposed to the model
    pub function: FunctionDefinition,
}

impl ChatTool {
    /// Create a function tool from a name, description and JSON schema
    pub fn function(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: Value,
    ) -> Self {
        Self {
            tool_type: function_type(),
            function: FunctionDefinition {
                name: name.into(),
                description: Some(description.into()),
                parameters,
            },
        }
    }
}

/// Function signature for a [`ChatTool`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDefinition {
    /// Function name the model will use when calling it
    pub name: String,

    /// Human-readable description shown to the model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// JSON schema of the arguments object
    pub parameters: Value,
}

// ============================================================================
// Tool Calls (response side, echoed back in assistant messages)
// ============================================================================

/// A tool call requested by the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Call identifier, echoed back in the matching tool message
    #[serde(default)]
    pub id: String,

    /// Always `"function"` for chat completions
    #[serde(rename = "type", default = "function_type")]
    pub call_type: String,

    /// The function being called
    pub function: FunctionCall,
}

impl ToolCall {
    /// Create a function call
    pub fn function(
        id: impl Into<String>,
        name: impl Into<String>,
        arguments: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            call_type: function_type(),
            function: FunctionCall {
                name: name.into(),
                arguments: arguments.into(),
            },
        }
    }
}

/// Name and raw arguments of a called function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    /// Function name
    pub name: String,

    /// Arguments as a JSON-encoded string, exactly as the model produced them
    #[serde(default)]
    pub arguments: String,
}

impl FunctionCall {
    /// Decode the arguments string
    ///
    /// An empty string decodes to an empty object. The model is free to emit
    /// invalid JSON, so callers should expect this to fail.
    pub fn parse_arguments(&self) -> Result<Value, serde_json::Error> {
        if self.arguments.trim().is_empty() {
            return Ok(Value::Object(Default::default()));
        }
        serde_json::from_str(&self.arguments)
    }
}
