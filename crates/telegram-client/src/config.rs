//! Configuration types for telegram-client.

use std::env;
use std::fmt;

use crate::error::TelegramError;

/// Default Bot API base URL.
pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

/// Default HTTP timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the Bot API client.
#[derive(Clone)]
pub struct TelegramConfig {
    /// Base URL of the Bot API (e.g., "https://api.telegram.org").
    pub api_url: String,
    /// Bot token issued by BotFather.
    pub bot_token: String,
    /// HTTP timeout per request, in seconds.
    pub timeout_secs: u64,
}

impl TelegramConfig {
    /// Create a new configuration for the given bot token.
    pub fn new(bot_token: impl Into<String>) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            bot_token: bot_token.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Point the client at a different API host.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Create configuration from environment variables.
    ///
    /// Required: `TELEGRAM_BOT_TOKEN`.
    /// Optional: `TELEGRAM_API_URL`, `TELEGRAM_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, TelegramError> {
        let bot_token = env::var("TELEGRAM_BOT_TOKEN")
            .ok()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| TelegramError::Config("TELEGRAM_BOT_TOKEN not set".to_string()))?;

        Ok(Self::from_env_with_token(bot_token))
    }

    /// Like [`from_env`](Self::from_env), with the token supplied by the caller.
    pub fn from_env_with_token(bot_token: impl Into<String>) -> Self {
        let mut config = Self::new(bot_token);
        if let Ok(url) = env::var("TELEGRAM_API_URL") {
            if !url.is_empty() {
                config.api_url = url;
            }
        }
        if let Some(secs) = env::var("TELEGRAM_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.timeout_secs = secs;
        }
        config
    }

    /// Get the URL of a Bot API method.
    pub fn method_url(&self, method: &str) -> String {
        format!(
            "{}/bot{}/{}",
            self.api_url.trim_end_matches('/'),
            self.bot_token,
            method
        )
    }

    /// Get the `sendMessage` endpoint URL.
    pub fn send_message_url(&self) -> String {
        self.method_url("sendMessage")
    }
}

// The token is part of every request URL, so keep it out of logs.
impl fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("api_url", &self.api_url)
            .field("bot_token", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
