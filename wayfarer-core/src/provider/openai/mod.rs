//! OpenAI-compatible chat completions provider
//!
//! Works with any endpoint that speaks the `/chat/completions` protocol,
//! including Gemini's OpenAI compatibility layer.

mod conversion;

use super::{ModelProvider, ModelResponse, ProviderError};
use crate::types::{Message, ToolDefinition};
use conversion::{from_chat_completion, to_chat_messages, to_chat_tool};
use wayfarer_openai::{ChatCompletionRequest, OpenAi, OpenAiError};

/// Classify chat-completion errors into ProviderError
pub(crate) fn classify_openai_error(err: &OpenAiError) -> ProviderError {
    match err {
        OpenAiError::Authentication(msg) => ProviderError::Authentication(msg.clone()),
        OpenAiError::RateLimited(msg) => ProviderError::RateLimited(msg.clone()),
        OpenAiError::ServiceUnavailable(msg) => ProviderError::ServiceUnavailable(msg.clone()),
        OpenAiError::Network(msg) => ProviderError::Network(msg.clone()),
        OpenAiError::InvalidRequest(msg) => ProviderError::Configuration(msg.clone()),
        OpenAiError::Configuration(msg) => ProviderError::Configuration(msg.clone()),
        OpenAiError::InvalidResponse(msg) => ProviderError::Model(msg.clone()),
        OpenAiError::Json(e) => ProviderError::Model(e.to_string()),
        OpenAiError::Other(msg) => ProviderError::Other(msg.clone()),
    }
}

/// Provider backed by an OpenAI-compatible chat completions endpoint
///
/// # Example
///
/// ```no_run
/// use wayfarer_core::OpenAiProvider;
/// use wayfarer_openai::OpenAi;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = OpenAi::builder()
///     .api_key("your-api-key")
///     .api_base("https://generativelanguage.googleapis.com/v1beta/openai")
///     .build()?;
///
/// let provider = OpenAiProvider::new(client, "gemini-2.0-flash").with_temperature(0.7);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct OpenAiProvider {
    client: OpenAi,
    model: String,
    max_tokens: Option<u32>,
    temperature: Option<f32>,
}

impl OpenAiProvider {
    /// Create a provider for `model` using an already configured client
    pub fn new(client: OpenAi, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
            max_tokens: None,
            temperature: None,
        }
    }

    /// Cap the number of tokens generated per call
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// The model ID sent with every request
    pub fn model_id(&self) -> &str {
        &self.model
    }

    fn build_request(
        &self,
        messages: &[Message],
        tools: &[ToolDefinition],
        system_prompt: Option<&str>,
    ) -> Result<ChatCompletionRequest, ProviderError> {
        let chat_tools = tools
            .iter()
            .map(to_chat_tool)
            .collect::<Result<Vec<_>, _>>()?;

        let mut builder = ChatCompletionRequest::builder(&self.model)
            .messages(to_chat_messages(messages, system_prompt))
            .tools(chat_tools);

        if let Some(max_tokens) = self.max_tokens {
            builder = builder.max_tokens(max_tokens);
        }
        if let Some(temperature) = self.temperature {
            builder = builder.temperature(temperature);
        }

        Ok(builder.build())
    }
}

#[async_trait::async_trait]
impl ModelProvider for OpenAiProvider {
    fn name(&self) -> &str {
        &self.model
    }

    async fn generate(
        &self,
        messages: Vec<Message>,
        tools: Vec<ToolDefinition>,
        system_prompt: Option<String>,
    ) -> Result<ModelResponse, ProviderError> {
        let request = self.build_request(&messages, &tools, system_prompt.as_deref())?;

        let completion = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| classify_openai_error(&e))?;

        let (message, stop_reason, usage) = from_chat_completion(completion)?;

        Ok(ModelResponse {
            message,
            stop_reason,
            usage,
        })
    }
}
