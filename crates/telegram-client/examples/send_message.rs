//! Send a message through the Bot API.
//!
//! Run with: cargo run -p telegram-client --example send_message -- "Hello *world*"
//!
//! Make sure to set environment variables in .env:
//!   TELEGRAM_BOT_TOKEN - bot token
//!   TELEGRAM_CHAT_ID - target chat

use std::env;
use telegram_client::{SendParams, TelegramClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    let chat_id = env::var("TELEGRAM_CHAT_ID")?;
    let args: Vec<String> = env::args().collect();
    let text = if args.len() > 1 {
        args[1..].join(" ")
    } else {
        "Hello from telegram-client!".to_string()
    };

    let client = TelegramClient::from_env()?;
    println!("Sending to chat {} via {}", chat_id, client.config().api_url);

    let result = client.send(SendParams::markdown(&chat_id, &text)).await?;
    println!("Sent message id: {:?}", result.message_id);

    Ok(())
}
