//! Chat completions API client

use crate::chat::{ChatCompletion, ChatCompletionRequest};
use crate::error::{ApiErrorResponse, OpenAiError};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use std::time::Duration;

/// Default API base URL
const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Path of the chat completions endpoint, relative to the API base
const CHAT_COMPLETIONS_PATH: &str = "chat/completions";

// ============================================================================
// Client
// ============================================================================

/// OpenAI-compatible API client
///
/// The API key is optional at construction time. Requests made without one
/// fail with [`OpenAiError::Authentication`] before anything is sent.
#[derive(Clone)]
pub struct OpenAi {
    client: reqwest::Client,
    api_key: Option<String>,
    api_base: String,
}

impl std::fmt::Debug for OpenAi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAi")
            .field("api_base", &self.api_base)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl OpenAi {
    /// Create a new client with an explicit API key
    pub fn new(api_key: impl Into<String>) -> Result<Self, OpenAiError> {
        Self::builder().api_key(api_key).build()
    }

    /// Create a new client from `OPENAI_API_KEY` and `OPENAI_BASE_URL`
    ///
    /// Neither variable is required.
    pub fn from_env() -> Result<Self, OpenAiError> {
        let mut builder = Self::builder();
        if let Ok(api_key) = std::env::var("OPENAI_API_KEY") {
            builder = builder.api_key(api_key);
        }
        if let Ok(api_base) = std::env::var("OPENAI_BASE_URL") {
            builder = builder.api_base(api_base);
        }
        builder.build()
    }

    /// Create a builder for more advanced configuration
    pub fn builder() -> OpenAiBuilder {
        OpenAiBuilder::new()
    }

    /// Get a handle to the chat completions API
    pub fn chat(&self) -> Chat<'_> {
        Chat { client: self }
    }

    /// The base URL requests are sent to
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Whether a non-empty API key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }

    /// POST a JSON body and decode the JSON response
    async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, OpenAiError>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize,
    {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| OpenAiError::Authentication("no API key configured".to_string()))?;

        let url = format!("{}/{}", self.api_base, path);
        let headers = build_headers(api_key)?;

        log::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .headers(headers)
            .json(body)
            .send()
            .await
            .map_err(OpenAiError::from_reqwest_error)?;

        let status = response.status();
        if status.is_success() {
            return response.json::<T>().await.map_err(|e| {
                OpenAiError::InvalidResponse(format!("Failed to parse response: {}", e))
            });
        }

        let status_code = status.as_u16();
        let error_body = response.text().await.unwrap_or_default();
        log::debug!("POST {} failed with HTTP {}", url, status_code);
        Err(parse_error_response(&error_body, status_code))
    }
}

/// Builder for [`OpenAi`] client configuration
///
/// Create with [`OpenAi::builder()`] and configure using the fluent API.
pub struct OpenAiBuilder {
    api_key: Option<String>,
    api_base: Option<String>,
    timeout: Option<Duration>,
}

impl OpenAiBuilder {
    fn new() -> Self {
        Self {
            api_key: None,
            api_base: None,
            timeout: None,
        }
    }

    /// Set the API key
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set a custom API base URL
    ///
    /// The base is the URL that `chat/completions` is appended to, e.g.
    /// `https://generativelanguage.googleapis.com/v1beta/openai/`.
    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    /// Set the request timeout (default: none beyond the HTTP client's own)
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<OpenAi, OpenAiError> {
        let api_base = self
            .api_base
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let api_base = api_base.trim_end_matches('/').to_string();

        if !(api_base.starts_with("http://") || api_base.starts_with("https://")) {
            return Err(OpenAiError::Configuration(format!(
                "API base must be an http(s) URL, got: {}",
                api_base
            )));
        }

        let mut client = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            client = client.timeout(timeout);
        }
        let client = client.build().map_err(|e| {
            OpenAiError::Configuration(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(OpenAi {
            client,
            api_key: self.api_key,
            api_base,
        })
    }
}

// ============================================================================
// Chat Completions API
// ============================================================================

/// Chat completions API handle
pub struct Chat<'a> {
    client: &'a OpenAi,
}

impl Chat<'_> {
    /// Create a chat completion (non-streaming)
    pub async fn create(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletion, OpenAiError> {
        log::debug!(
            "chat completion: model={} messages={} tools={}",
            request.model,
            request.messages.len(),
            request.tools.as_ref().map_or(0, Vec::len)
        );
        self.client.post(CHAT_COMPLETIONS_PATH, &request).await
    }
}

// ============================================================================
// Shared Helpers
// ============================================================================

fn build_headers(api_key: &str) -> Result<HeaderMap, OpenAiError> {
    let mut headers = HeaderMap::new();

    let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_key))
        .map_err(|e| OpenAiError::Configuration(format!("Invalid API key: {}", e)))?;
    auth.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth);

    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    Ok(headers)
}

fn parse_error_response(body: &str, status_code: u16) -> OpenAiError {
    if let Some(error) = ApiErrorResponse::parse(body) {
        return OpenAiError::from_api_error(&error, status_code);
    }

    // Fallback to generic error based on status code
    let msg = if body.is_empty() {
        format!("HTTP {}", status_code)
    } else {
        body.to_string()
    };

    match status_code {
        401 | 403 => OpenAiError::Authentication(msg),
        429 => OpenAiError::RateLimited(msg),
        500..=599 => OpenAiError::ServiceUnavailable(msg),
        400 | 404 | 422 => OpenAiError::InvalidRequest(msg),
        _ => OpenAiError::Other(msg),
    }
}
