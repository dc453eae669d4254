//! Telegram Bot API HTTP client.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info};

use crate::config::TelegramConfig;
use crate::error::TelegramError;
use crate::types::{ApiResponse, SendParams, SendResult};

/// Client for the Telegram Bot API.
#[derive(Clone)]
pub struct TelegramClient {
    http: Client,
    config: TelegramConfig,
}

impl TelegramClient {
    /// Create a client. No request is made until the first send.
    pub fn new(config: TelegramConfig) -> Result<Self, TelegramError> {
        if config.bot_token.is_empty() {
            return Err(TelegramError::Config("bot token is empty".to_string()));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(TelegramError::Http)?;

        debug!("Telegram client ready for {}", config.api_url);

        Ok(Self { http, config })
    }

    /// Create a client from environment variables.
    pub fn from_env() -> Result<Self, TelegramError> {
        Self::new(TelegramConfig::from_env()?)
    }

    /// Send a message using the full SendParams structure.
    ///
    /// A non-2xx status or an `ok: false` body is an error.
    pub async fn send(&self, params: SendParams) -> Result<SendResult, TelegramError> {
        let url = self.config.send_message_url();

        debug!(
            "sendMessage to chat {} ({} chars, parse_mode={:?})",
            params.chat_id,
            params.text.chars().count(),
            params.parse_mode
        );

        let response = self
            .http
            .post(&url)
            .json(&params)
            .send()
            .await
            .map_err(|e| TelegramError::Http(e.without_url()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TelegramError::Http(e.without_url()))?;

        if !status.is_success() {
            let description = serde_json::from_str::<ApiResponse<serde_json::Value>>(&body)
                .ok()
                .and_then(|r| r.description)
                .unwrap_or(body);
            return Err(TelegramError::Api {
                status: status.as_u16(),
                description,
            });
        }

        let api_response: ApiResponse<SendResult> = serde_json::from_str(&body)?;

        if !api_response.ok {
            return Err(TelegramError::Api {
                status: api_response.error_code.unwrap_or(status.as_u16()),
                description: api_response
                    .description
                    .unwrap_or_else(|| "request was not ok".to_string()),
            });
        }

        let result = api_response.result.unwrap_or_default();
        info!(
            "Message delivered to chat {} (message_id={:?})",
            params.chat_id, result.message_id
        );
        Ok(result)
    }

    /// Send a plain text message to a chat.
    pub async fn send_text(&self, chat_id: &str, text: &str) -> Result<SendResult, TelegramError> {
        self.send(SendParams::text(chat_id, text)).await
    }

    /// Send a Markdown formatted message to a chat.
    pub async fn send_markdown(
        &self,
        chat_id: &str,
        text: &str,
    ) -> Result<SendResult, TelegramError> {
        self.send(SendParams::markdown(chat_id, text)).await
    }

    /// Get the configuration.
    pub fn config(&self) -> &TelegramConfig {
        &self.config
    }
}

impl std::fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramClient")
            .field("config", &self.config)
            .finish()
    }
}
