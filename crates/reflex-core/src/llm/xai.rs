//! x.ai Grok Provider
//!
//! Implements the OpenAI-compatible chat-completions API exposed at
//! api.x.ai. Any endpoint speaking the same wire format works via
//! [`XaiConfig::with_base_url`].

use super::provider::LLMProvider;
use super::types::*;
use async_trait::async_trait;
use std::time::Duration;

/// Substituted when no API key is configured. Lets the demo run far enough to
/// show the fallback path; it is not a functional credential.
const PLACEHOLDER_API_KEY: &str = "your-api-key-here";

/// x.ai provider configuration
#[derive(Debug, Clone)]
pub struct XaiConfig {
    /// API key
    pub api_key: String,
    /// Base URL (default: https://api.x.ai/v1)
    pub base_url: String,
    /// Default model id, e.g., grok-beta
    pub default_model: String,
    /// Default temperature
    pub default_temperature: f32,
    /// Default max output tokens
    pub default_max_tokens: u32,
    /// Request timeout
    pub timeout_secs: u64,
}

impl Default for XaiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.x.ai/v1".to_string(),
            default_model: "grok-beta".to_string(),
            default_temperature: 0.7,
            default_max_tokens: 2048,
            timeout_secs: 60,
        }
    }
}

impl XaiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Read `XAI_API_KEY`, `XAI_BASE_URL`, and `XAI_MODEL` from the
    /// environment. A missing key falls back to a non-functional placeholder
    /// so callers can still exercise the error path.
    pub fn from_env() -> Self {
        let mut cfg = Self {
            api_key: std::env::var("XAI_API_KEY")
                .unwrap_or_else(|_| PLACEHOLDER_API_KEY.to_string()),
            ..Default::default()
        };

        if let Ok(model) = std::env::var("XAI_MODEL") {
            cfg.default_model = model;
        }
        if let Ok(base_url) = std::env::var("XAI_BASE_URL") {
            cfg.base_url = base_url;
        }
        cfg
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    pub fn with_temperature(mut self, temp: f32) -> Self {
        self.default_temperature = temp;
        self
    }

    pub fn with_max_tokens(mut self, tokens: u32) -> Self {
        self.default_max_tokens = tokens;
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// x.ai provider (text-only, single request/response)
pub struct XaiProvider {
    client: reqwest::Client,
    config: XaiConfig,
}

impl XaiProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_config(XaiConfig::new(api_key))
    }

    pub fn from_env() -> Self {
        Self::with_config(XaiConfig::from_env())
    }

    pub fn with_config(config: XaiConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to build reqwest client");
        Self { client, config }
    }

    fn map_error(err: reqwest::Error) -> LLMError {
        if err.is_timeout() {
            LLMError::Timeout(err.to_string())
        } else if err.is_connect() || err.is_request() {
            LLMError::NetworkError(err.to_string())
        } else {
            LLMError::Other(err.to_string())
        }
    }
}

#[async_trait]
impl LLMProvider for XaiProvider {
    fn name(&self) -> &str {
        "xai"
    }

    fn default_model(&self) -> &str {
        &self.config.default_model
    }

    async fn chat(&self, request: ChatCompletionRequest) -> LLMResult<ChatCompletionResponse> {
        let model = if request.model.is_empty() {
            self.config.default_model.clone()
        } else {
            request.model.clone()
        };

        let body = serde_json::json!({
            "model": model,
            "messages": request.messages,
            "temperature": request
                .temperature
                .unwrap_or(self.config.default_temperature),
            "max_tokens": request
                .max_tokens
                .unwrap_or(self.config.default_max_tokens),
        });

        let url = format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(Self::map_error)?;

        let status = resp.status();
        let text = resp.text().await.map_err(Self::map_error)?;

        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(LLMError::AuthError(text));
        }
        if !status.is_success() {
            return Err(LLMError::ApiError {
                code: Some(status.as_u16().to_string()),
                message: text,
            });
        }

        serde_json::from_str(&text).map_err(|e| LLMError::SerializationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_targets_xai() {
        let cfg = XaiConfig::default();
        assert_eq!(cfg.base_url, "https://api.x.ai/v1");
        assert_eq!(cfg.default_model, "grok-beta");
    }

    #[test]
    fn test_builder_overrides() {
        let cfg = XaiConfig::new("sk-test")
            .with_base_url("http://localhost:8080/v1")
            .with_model("grok-2")
            .with_timeout(5);
        assert_eq!(cfg.api_key, "sk-test");
        assert_eq!(cfg.base_url, "http://localhost:8080/v1");
        assert_eq!(cfg.default_model, "grok-2");
        assert_eq!(cfg.timeout_secs, 5);
    }
}
