use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::{
    error::{CapsuleError, Result},
    llm::summarizer::CompletionService,
    provider::Provider,
};

/// Client for OpenAI-compatible `/chat/completions` endpoints.
pub struct ChatCompletions {
    client: Client,
    provider: Provider,
    api_url: String,
    model: String,
}

impl ChatCompletions {
    const MAX_TOKENS: u32 = 150;
    const TEMPERATURE: f32 = 0.5;

    pub fn new(provider: Provider, timeout: Duration) -> Result<Self> {
        let config = provider.config();
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            provider,
            api_url: config.api_url.into(),
            model: config.model.into(),
        })
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn send_completion_request(
        &self,
        api_key: &str,
        user_content: &str,
    ) -> Result<CompletionResponse> {
        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                {
                    "role": "user",
                    "content": user_content
                }
            ],
            "max_tokens": Self::MAX_TOKENS,
            "temperature": Self::TEMPERATURE,
            "n": 1
        });

        let resp = self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::debug!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(CapsuleError::Api { status, message });
        }

        Ok(resp.json::<CompletionResponse>().await?)
    }
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    pub message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
pub struct CompletionMessage {
    pub content: Option<String>,
}

impl CompletionService for ChatCompletions {
    async fn complete(&self, api_key: &str, prompt: &str) -> Result<String> {
        let response = self.send_completion_request(api_key, prompt).await?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(CapsuleError::EmptyCompletion)
    }

    fn name(&self) -> &str {
        self.provider.name()
    }
}
