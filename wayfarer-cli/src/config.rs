//! Startup configuration read from the environment

use std::sync::Arc;
use std::time::Duration;

use wayfarer_core::{ModelProvider, OpenAiProvider, DEFAULT_MAX_TURNS};
use wayfarer_openai::OpenAi;

use crate::error::CliError;

/// Gemini's OpenAI-compatible endpoint
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai/";

/// Model used when `WAYFARER_MODEL` is unset
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const BASE_URL_VAR: &str = "WAYFARER_BASE_URL";
pub const MODEL_VAR: &str = "WAYFARER_MODEL";
pub const TIMEOUT_VAR: &str = "WAYFARER_TIMEOUT_SECS";
pub const MAX_TURNS_VAR: &str = "WAYFARER_MAX_TURNS";

/// Everything the travel designer needs to reach the model
///
/// Built once at startup. A missing API key is not an error here; the first
/// model call fails with an authentication error instead.
#[derive(Clone, PartialEq)]
pub struct Config {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub timeout: Option<Duration>,
    pub max_turns: usize,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .field("max_turns", &self.max_turns)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: None,
            max_turns: DEFAULT_MAX_TURNS,
        }
    }
}

impl Config {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let defaults = Self::default();

        let timeout = get(TIMEOUT_VAR)
            .map(|v| parse_positive(TIMEOUT_VAR, &v))
            .transpose()?
            .map(Duration::from_secs);

        let max_turns = match get(MAX_TURNS_VAR) {
            Some(v) => parse_positive(MAX_TURNS_VAR, &v)? as usize,
            None => defaults.max_turns,
        };

        Ok(Self {
            api_key: get(API_KEY_VAR),
            base_url: get(BASE_URL_VAR).unwrap_or(defaults.base_url),
            model: get(MODEL_VAR).unwrap_or(defaults.model),
            timeout,
            max_turns,
        })
    }

    /// Build the shared model provider
    pub fn provider(&self) -> Result<Arc<dyn ModelProvider>, CliError> {
        let mut builder = OpenAi::builder().api_base(&self.base_url);
        if let Some(api_key) = &self.api_key {
            builder = builder.api_key(api_key);
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| CliError::Config(format!("{}: {}", BASE_URL_VAR, e)))?;

        if !client.has_api_key() {
            log::warn!("{} is not set; model calls will be rejected", API_KEY_VAR);
        }

        Ok(Arc::new(OpenAiProvider::new(client, &self.model)))
    }
}

fn parse_positive(key: &str, value: &str) -> Result<u64, CliError> {
    match value.parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CliError::Config(format!(
            "{} must be a positive integer, got '{}'",
            key, value
        ))),
    }
}
