//! Types for the `sendMessage` method.

use serde::{Deserialize, Serialize};

/// How Telegram should interpret formatting markers in the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseMode {
    /// Legacy Markdown.
    Markdown,
    MarkdownV2,
    #[serde(rename = "HTML")]
    Html,
}

/// Parameters for sending a message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SendParams {
    /// Target chat identifier.
    pub chat_id: String,

    /// The message text.
    pub text: String,

    /// Formatting mode. Omitted for plain text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
}

impl SendParams {
    /// Create send params for a plain text message.
    pub fn text(chat_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            text: text.into(),
            parse_mode: None,
        }
    }

    /// Create send params for a Markdown formatted message.
    pub fn markdown(chat_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::text(chat_id, text).with_parse_mode(ParseMode::Markdown)
    }

    /// Set the parse mode.
    pub fn with_parse_mode(mut self, parse_mode: ParseMode) -> Self {
        self.parse_mode = Some(parse_mode);
        self
    }
}

/// Envelope returned by every Bot API method.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub error_code: Option<u16>,
}

/// Result of sending a message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SendResult {
    /// Identifier of the sent message.
    #[serde(default)]
    pub message_id: Option<i64>,

    /// Unix timestamp of the sent message.
    #[serde(default)]
    pub date: Option<i64>,
}
