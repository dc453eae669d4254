//! Send one message through GeminiBrain with the built-in tools.
//!
//! Run with: cargo run -p gemini-brain --example test_completion
//! Or with a custom message: cargo run -p gemini-brain --example test_completion -- "What's the weather in Lisbon?"
//!
//! Make sure to set environment variables in .env:
//!   GOOGLE_API_KEY - Gemini API key
//!   GEMINI_MODEL - optional, defaults to gemini-2.5-flash

use agent_tools::{default_registry, SchemaSanitizer};
use gemini_brain::{CompletionProvider, CompletionRequest, GeminiBrain};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    let message_text = if args.len() > 1 {
        args[1..].join(" ")
    } else {
        "What's the weather in Paris, and what is 17 * 23?".to_string()
    };
    let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-2.5-flash".to_string());

    println!("Initializing GeminiBrain...");
    let brain = GeminiBrain::from_env()?;

    println!("Brain initialized: {}", brain.name());
    println!("API URL: {}", brain.config().api_url);
    println!("Model: {}", model);

    let tools = SchemaSanitizer::default().sanitize(&default_registry().descriptors());
    println!("Tools: {}", tools.len());
    println!();

    println!("Sending: \"{}\"", message_text);
    println!("Waiting for response...\n");

    let result = brain
        .complete(CompletionRequest::new(model, message_text, tools))
        .await?;

    println!("=== Response ===");
    println!("{}", result.text.as_deref().unwrap_or("(no text)"));
    println!("================");

    Ok(())
}
