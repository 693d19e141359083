use futures::future::BoxFuture;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result types that tools can return.
///
/// Chat-completion endpoints only accept text tool output, so JSON results
/// are sent to the model in their serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ToolResult {
    /// Plain text response
    Text(String),

    /// Structured JSON data - use for complex responses
    Json(Value),
}

impl ToolResult {
    /// Create a JSON result from any serializable type
    pub fn json<T: Serialize>(value: T) -> Result<Self, serde_json::Error> {
        Ok(Self::Json(serde_json::to_value(value)?))
    }

    /// Create a text result from a string
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Get the text content, serializing JSON results
    pub fn as_text(&self) -> String {
        match self {
            ToolResult::Text(s) => s.clone(),
            ToolResult::Json(v) => v.to_string(),
        }
    }

    /// Get a reference to the text content if this is a Text variant
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ToolResult::Text(s) => Some(s),
            ToolResult::Json(_) => None,
        }
    }
}

/// Convert strings directly to ToolResult::Text
impl From<String> for ToolResult {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for ToolResult {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Errors that can occur during tool execution
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    Custom(String),
}

impl From<String> for ToolError {
    fn from(s: String) -> Self {
        Self::Custom(s)
    }
}

impl From<&str> for ToolError {
    fn from(s: &str) -> Self {
        Self::Custom(s.to_string())
    }
}

/// Trait for implementing tools that can be used by agents.
///
/// Tools define an input type with `#[derive(Deserialize, JsonSchema)]`; the
/// JSON schema sent to the model is generated from that type, and the
/// model's arguments are deserialized back into it before `execute` runs.
///
/// # Example
///
/// ```rust
/// use wayfarer_core::{Tool, ToolResult, ToolError};
/// use schemars::JsonSchema;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, JsonSchema)]
/// struct CurrencyInput {
///     /// ISO country code
///     country: String,
/// }
///
/// struct CurrencyTool;
///
/// impl Tool for CurrencyTool {
///     type Input = CurrencyInput;
///
///     fn name(&self) -> &str { "local_currency" }
///     fn description(&self) -> &str { "Currency used in a country" }
///
///     fn execute(&self, input: Self::Input) -> impl std::future::Future<Output = Result<ToolResult, ToolError>> + Send {
///         async move {
///             let currency = if input.country == "JP" { "JPY" } else { "unknown" };
///             Ok(currency.into())
///         }
///     }
/// }
/// ```
pub trait Tool: Send + Sync {
    /// The input type for this tool. Must implement `Deserialize` and `JsonSchema`.
    type Input: DeserializeOwned + JsonSchema;

    /// The name of the tool (e.g., "get_flights")
    fn name(&self) -> &str;

    /// A description of what the tool does
    fn description(&self) -> &str;

    /// Execute the tool with typed input
    fn execute(
        &self,
        input: Self::Input,
    ) -> impl std::future::Future<Output = Result<ToolResult, ToolError>> + Send;

    /// Get the JSON schema for this tool's input.
    ///
    /// This is automatically implemented using the `JsonSchema` derive on `Input`.
    fn input_schema(&self) -> Value {
        let schema = schemars::schema_for!(Self::Input);
        serde_json::to_value(schema).unwrap_or_default()
    }
}

/// Object-safe trait for dynamic tool dispatch (used internally by the agent).
///
/// Users should implement `Tool` instead and use `box_tool()` to convert.
pub trait DynTool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn input_schema(&self) -> Value;
    fn execute_raw(&self, input: Value) -> BoxFuture<'_, Result<ToolResult, ToolError>>;
}

/// Convert a `Tool` into a type-erased `Box<dyn DynTool>` for storage in collections.
///
/// ```rust
/// use schemars::JsonSchema;
/// use serde::Deserialize;
/// use wayfarer_core::{box_tool, Tool, ToolError, ToolResult};
///
/// #[derive(Deserialize, JsonSchema)]
/// struct CityInput {
///     city: String,
/// }
///
/// struct Shout;
///
/// impl Tool for Shout {
///     type Input = CityInput;
///
///     fn name(&self) -> &str { "shout" }
///     fn description(&self) -> &str { "Upper-cases a city name" }
///
///     async fn execute(&self, input: CityInput) -> Result<ToolResult, ToolError> {
///         Ok(input.city.to_uppercase().into())
///     }
/// }
///
/// let tool = box_tool(Shout);
/// # tokio_test::block_on(async {
/// let result = tool
///     .execute_raw(serde_json::json!({"city": "Kyoto"}))
///     .await
///     .unwrap();
/// assert_eq!(result.as_text(), "KYOTO");
/// # });
/// ```
pub fn box_tool<T: Tool + 'static>(tool: T) -> Box<dyn DynTool> {
    Box::new(ToolWrapper(tool))
}

/// Create a `Vec<Box<dyn DynTool>>` from heterogeneous tool types.
///
/// ```ignore
/// let agent = Agent::builder()
///     .provider(provider)
///     .add_tools(box_tools![GetFlightsTool, SuggestHotelsTool])
///     .build()?;
/// ```
#[macro_export]
macro_rules! box_tools {
    ($($tool:expr),* $(,)?) => {
        vec![$($crate::tool::box_tool($tool)),*]
    };
}

/// Internal wrapper that implements DynTool for any Tool
struct ToolWrapper<T>(T);

impl<T: Tool + 'static> DynTool for ToolWrapper<T> {
    fn name(&self) -> &str {
        self.0.name()
    }

    fn description(&self) -> &str {
        self.0.description()
    }

    fn input_schema(&self) -> Value {
        self.0.input_schema()
    }

    fn execute_raw(&self, input: Value) -> BoxFuture<'_, Result<ToolResult, ToolError>> {
        Box::pin(async move {
            let typed_input: T::Input = serde_json::from_value(input)
                .map_err(|e| ToolError::InvalidInput(e.to_string()))?;

            self.0.execute(typed_input).await
        })
    }
}

// ============================================================================
// Formatting helpers
// ============================================================================

const MAX_PARAMS: usize = 10;
const MAX_VALUE_LEN: usize = 80;

/// Format a JSON value for display, with truncation
fn format_value_preview(value: &Value) -> String {
    match value {
        Value::String(s) => {
            if s.chars().count() > MAX_VALUE_LEN {
                let truncated: String = s.chars().take(MAX_VALUE_LEN).collect();
                format!("\"{}…\"", truncated)
            } else {
                format!("\"{}\"", s)
            }
        }
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} keys}}", obj.len()),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
    }
}

/// Format a tool call on one line, e.g. `get_flights(destination: "Lima")`
pub fn format_tool_call(tool_name: &str, params: &Value) -> String {
    let args = match params.as_object() {
        Some(obj) => {
            let mut parts: Vec<String> = obj
                .iter()
                .take(MAX_PARAMS)
                .map(|(key, value)| format!("{}: {}", key, format_value_preview(value)))
                .collect();
            if obj.len() > MAX_PARAMS {
                parts.push(format!("… +{} more", obj.len() - MAX_PARAMS));
            }
            parts.join(", ")
        }
        None => format_value_preview(params),
    };

    format!("{}({})", tool_name, args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, JsonSchema)]
    struct GreetInput {
        /// Who to greet
        name: String,
    }

    struct GreetTool;

    impl Tool for GreetTool {
        type Input = GreetInput;

        fn name(&self) -> &str {
            "greet"
        }

        fn description(&self) -> &str {
            "Greet someone"
        }

        async fn execute(&self, input: Self::Input) -> Result<ToolResult, ToolError> {
            Ok(format!("Hello, {}!", input.name).into())
        }
    }

    #[test]
    fn test_input_schema_from_derive() {
        let schema = GreetTool.input_schema();
        assert_eq!(schema["type"], "object");
        assert!(schema["properties"]["name"].is_object());
        assert_eq!(schema["required"], json!(["name"]));
    }

    #[tokio::test]
    async fn test_execute_raw_deserializes_input() {
        let tool = box_tool(GreetTool);
        let result = tool.execute_raw(json!({"name": "Ada"})).await.unwrap();
        assert_eq!(result.as_text(), "Hello, Ada!");
    }

    #[tokio::test]
    async fn test_execute_raw_rejects_bad_input() {
        let tool = box_tool(GreetTool);
        let err = tool.execute_raw(json!({"nome": "Ada"})).await.unwrap_err();
        assert!(matches!(err, ToolError::InvalidInput(_)));
    }

    #[test]
    fn test_box_tools_macro() {
        let tools: Vec<Box<dyn DynTool>> = crate::box_tools![GreetTool, GreetTool];
        assert_eq!(tools.len(), 2);
        assert_eq!(tools[0].name(), "greet");
    }

    #[test]
    fn test_tool_result_text() {
        assert_eq!(ToolResult::text("hi").as_str(), Some("hi"));
        assert_eq!(
            ToolResult::json(json!({"a": 1})).unwrap().as_text(),
            r#"{"a":1}"#
        );
        assert_eq!(ToolResult::Json(json!(1)).as_str(), None);
    }

    #[test]
    fn test_format_tool_call() {
        let formatted = format_tool_call("get_flights", &json!({"destination": "Lima"}));
        assert_eq!(formatted, r#"get_flights(destination: "Lima")"#);

        let formatted = format_tool_call("get_flights", &json!("raw"));
        assert_eq!(formatted, r#"get_flights("raw")"#);
    }

    #[test]
    fn test_format_value_preview_truncates_long_strings() {
        let preview = format_value_preview(&json!("é".repeat(100)));
        assert!(preview.ends_with("…\""));
        assert_eq!(preview.chars().count(), MAX_VALUE_LEN + 3);
    }
}
