//! Outbound delivery: the primary answer and the best-effort error notice.

use tracing::{info, warn};

use crate::error::DeliveryError;
use crate::sender::{DeliveryMessage, MessageSender, RenderMode};

/// Sent when the model produced no text.
pub const FALLBACK_TEXT: &str = "I couldn't process that request properly. Please try again.";

/// Prefix of the error notification.
pub const ERROR_PREFIX: &str = "Sorry, I encountered an error: ";

/// Maximum notification length in characters.
pub const NOTIFICATION_LIMIT: usize = 4000;

/// The first `limit` characters of `text`.
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Delivers messages to a single channel.
pub struct MessageDispatcher {
    sender: Box<dyn MessageSender>,
    channel: String,
}

impl MessageDispatcher {
    pub fn new(sender: Box<dyn MessageSender>, channel: impl Into<String>) -> Self {
        Self {
            sender,
            channel: channel.into(),
        }
    }

    /// Send the full text with Markdown rendering.
    pub async fn send_primary(&self, text: &str) -> Result<(), DeliveryError> {
        let message = DeliveryMessage {
            channel: self.channel.clone(),
            text: text.to_string(),
            render_mode: RenderMode::Rich,
        };

        self.sender.send(&message).await?;
        info!("Message sent to chat {}", self.channel);
        Ok(())
    }

    /// Send plain text cut to [`NOTIFICATION_LIMIT`] characters. Never fails.
    pub async fn notify(&self, text: &str) {
        let message = DeliveryMessage {
            channel: self.channel.clone(),
            text: truncate_chars(text, NOTIFICATION_LIMIT).to_string(),
            render_mode: RenderMode::Plain,
        };

        if let Err(e) = self.sender.send(&message).await {
            warn!("Could not deliver error notification: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Outbox {
        sent: Arc<Mutex<Vec<DeliveryMessage>>>,
        fail: bool,
    }

    #[async_trait]
    impl MessageSender for Outbox {
        async fn send(&self, message: &DeliveryMessage) -> Result<(), DeliveryError> {
            self.sent.lock().unwrap().push(message.clone());
            if self.fail {
                Err(DeliveryError::SendFailed("HTTP 502".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello", 2), "he");
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("", 0), "");

        let long = "ü".repeat(5000);
        assert_eq!(truncate_chars(&long, NOTIFICATION_LIMIT).chars().count(), 4000);
    }

    #[tokio::test]
    async fn test_primary_is_rich() {
        let outbox = Outbox::default();
        let dispatcher = MessageDispatcher::new(Box::new(outbox.clone()), "42");

        dispatcher.send_primary("*It will be sunny.*").await.unwrap();

        let sent = outbox.sent.lock().unwrap();
        assert_eq!(
            sent[0],
            DeliveryMessage {
                channel: "42".to_string(),
                text: "*It will be sunny.*".to_string(),
                render_mode: RenderMode::Rich,
            }
        );
    }

    #[tokio::test]
    async fn test_primary_failure_is_returned() {
        let outbox = Outbox {
            fail: true,
            ..Default::default()
        };
        let dispatcher = MessageDispatcher::new(Box::new(outbox), "42");

        assert!(dispatcher.send_primary("hi").await.is_err());
    }

    #[tokio::test]
    async fn test_notify_truncates_and_swallows() {
        let outbox = Outbox {
            fail: true,
            ..Default::default()
        };
        let dispatcher = MessageDispatcher::new(Box::new(outbox.clone()), "42");

        dispatcher.notify(&"x".repeat(4500)).await;

        let sent = outbox.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].text.chars().count(), NOTIFICATION_LIMIT);
        assert_eq!(sent[0].render_mode, RenderMode::Plain);
    }
}
