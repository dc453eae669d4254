//! HTTP transport for the `generateContent` endpoint.

use std::time::Duration;

use async_trait::async_trait;
use brain_core::BrainError;
use reqwest::Client;
use tracing::debug;

use crate::api_types::{ApiError, GenerateContentRequest, GenerateContentResponse};
use crate::config::GeminiConfig;

/// Issues one `generateContent` call.
///
/// [`GeminiClient`] is the HTTP implementation; the function-calling loop in
/// [`GeminiBrain`](crate::GeminiBrain) only depends on this trait.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, BrainError>;
}

/// Gemini REST client.
pub struct GeminiClient {
    http: Client,
    api_url: String,
    api_key: String,
}

impl GeminiClient {
    /// Create a client from configuration.
    pub fn new(config: &GeminiConfig) -> Result<Self, BrainError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                BrainError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Endpoint URL for a model.
    pub fn generate_url(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.api_url, model)
    }
}

#[async_trait]
impl ContentGenerator for GeminiClient {
    async fn generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, BrainError> {
        let url = self.generate_url(model);

        debug!("Sending request to Gemini API: {:?}", request);

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| BrainError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            if let Ok(api_error) = serde_json::from_str::<ApiError>(&error_text) {
                return Err(BrainError::ProcessingFailed(format!(
                    "API error ({}): {}",
                    status.as_u16(),
                    api_error.error.message
                )));
            }

            return Err(BrainError::ProcessingFailed(format!(
                "API error ({}): {}",
                status.as_u16(),
                error_text
            )));
        }

        let completion: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| BrainError::ProcessingFailed(format!("Failed to parse response: {}", e)))?;

        debug!("Received response from Gemini API: {:?}", completion);

        Ok(completion)
    }
}
