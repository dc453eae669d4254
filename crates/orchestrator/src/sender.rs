//! Message sender trait and the Telegram implementation.

use async_trait::async_trait;
use telegram_client::{SendParams, TelegramClient};

use crate::error::DeliveryError;

/// How the messaging provider should interpret the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Literal text.
    Plain,
    /// Markdown formatting.
    Rich,
}

/// One outbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryMessage {
    pub channel: String,
    pub text: String,
    pub render_mode: RenderMode,
}

/// Trait for delivering messages.
///
/// Abstracted to support different transports (Telegram, tests, etc.)
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Send a message. Any failure, including a non-2xx response, is an error.
    async fn send(&self, message: &DeliveryMessage) -> Result<(), DeliveryError>;
}

#[async_trait]
impl MessageSender for TelegramClient {
    async fn send(&self, message: &DeliveryMessage) -> Result<(), DeliveryError> {
        let params = match message.render_mode {
            RenderMode::Rich => SendParams::markdown(&message.channel, &message.text),
            RenderMode::Plain => SendParams::text(&message.channel, &message.text),
        };

        TelegramClient::send(self, params).await?;
        Ok(())
    }
}
