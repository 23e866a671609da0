//! Review agent
//!
//! A fixed-preamble wrapper over an [`LLMProvider`]: submit one prompt,
//! receive one text response. No conversation state is kept between calls;
//! each [`ReviewAgent::prompt`] is an independent exchange.

use super::provider::LLMProvider;
use super::types::{ChatCompletionRequest, LLMError, LLMResult};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Single-exchange LLM agent with a fixed system preamble
pub struct ReviewAgent {
    provider: Arc<dyn LLMProvider>,
    preamble: Option<String>,
    model: Option<String>,
}

impl ReviewAgent {
    /// Create an agent over a provider
    pub fn new(provider: Arc<dyn LLMProvider>) -> Self {
        Self {
            provider,
            preamble: None,
            model: None,
        }
    }

    /// Set the system preamble sent with every prompt
    pub fn with_preamble(mut self, preamble: impl Into<String>) -> Self {
        self.preamble = Some(preamble.into());
        self
    }

    /// Override the provider's default model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Get the underlying provider
    pub fn provider(&self) -> &Arc<dyn LLMProvider> {
        &self.provider
    }

    /// Submit one prompt and return the response text
    pub async fn prompt(&self, text: impl Into<String>) -> LLMResult<String> {
        let model = self
            .model
            .clone()
            .unwrap_or_else(|| self.provider.default_model().to_string());

        let mut request = ChatCompletionRequest::new(model);
        if let Some(preamble) = &self.preamble {
            request = request.system(preamble.clone());
        }
        request = request.user(text);

        debug!(provider = self.provider.name(), "submitting prompt");
        let response = self.provider.chat(request).await?;

        response
            .content()
            .map(|s| s.to_string())
            .ok_or_else(|| LLMError::Other("No content in response".to_string()))
    }

    /// Submit one prompt with a deadline
    ///
    /// Wraps [`prompt`](Self::prompt) in a cooperative timeout; when the
    /// deadline elapses the in-flight request is dropped and
    /// [`LLMError::Timeout`] is returned.
    pub async fn prompt_with_timeout(
        &self,
        text: impl Into<String>,
        deadline: Duration,
    ) -> LLMResult<String> {
        tokio::time::timeout(deadline, self.prompt(text))
            .await
            .map_err(|_| {
                LLMError::Timeout(format!("prompt did not complete within {deadline:?}"))
            })?
    }
}
