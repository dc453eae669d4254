//! Telegram Bot API client library.
//!
//! This crate provides a small client for delivering messages through the
//! Telegram Bot API `sendMessage` method. It supports:
//!
//! - Plain text and Markdown formatted messages
//! - Configurable API endpoint and request timeout
//! - Surfacing both HTTP failures and `ok: false` API responses as errors
//!
//! # Example
//!
//! ```no_run
//! use telegram_client::{SendParams, TelegramClient, TelegramConfig};
//!
//! # async fn example() -> Result<(), telegram_client::TelegramError> {
//! let config = TelegramConfig::new("123456:ABC-DEF");
//! let client = TelegramClient::new(config)?;
//!
//! let result = client.send(SendParams::markdown("42", "*Hello!*")).await?;
//! println!("Sent message id: {:?}", result.message_id);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::TelegramClient;
pub use config::TelegramConfig;
pub use error::TelegramError;
pub use types::*;
