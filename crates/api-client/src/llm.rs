use crate::error::ClientError;
use crate::responses::{ApiErrorResponse, GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use configuration::LlmConfig;
use std::time::Duration;

/// The generic interface for a text-generation backend.
///
/// The analysis pipeline only needs "prompt in, text out", which keeps the
/// live model swappable for a canned stub in tests.
#[async_trait]
pub trait InsightProvider: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ClientError>;
}

/// A concrete implementation of `InsightProvider` for the Gemini
/// `generateContent` REST endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    /// Builds a client from configuration. An empty API key is rejected here
    /// so the failure surfaces before any feed is fetched.
    pub fn new(config: &LlmConfig, timeout: Duration) -> Result<Self, ClientError> {
        if config.api_key.trim().is_empty() {
            return Err(ClientError::Configuration(
                "llm.api_key is not set (use FUNDLENS__LLM__API_KEY)".to_string(),
            ));
        }

        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.trim_start_matches("models/").to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// The endpoint URL without the key query parameter.
    pub fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl InsightProvider for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, ClientError> {
        tracing::debug!(model = %self.model, prompt_len = prompt.len(), "Requesting model insight");

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            // Prefer the structured message when the body is a JSON error.
            let body = serde_json::from_str::<ApiErrorResponse>(&text)
                .map(|e| e.error.message)
                .unwrap_or(text);
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&text)
            .map_err(|e| ClientError::Deserialization(e.to_string()))?;
        parsed.into_text()
    }
}
