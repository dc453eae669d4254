//! Answer one Telegram message with Gemini and the built-in tools.
//!
//! Reads GOOGLE_API_KEY, TELEGRAM_BOT_TOKEN, TELEGRAM_CHAT_ID and
//! TELEGRAM_MESSAGE from the environment (or .env). Failures are reported to
//! the chat, not through the exit code.

use std::sync::Arc;

use orchestrator::{init_logging, AgentOrchestrator, InitError};
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), InitError> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    init_logging()?;

    let registry = Arc::new(agent_tools::default_registry());
    info!("Registered tools: {:?}", registry.tool_names());

    let orchestrator = AgentOrchestrator::from_env(registry);
    let outcome = orchestrator.run().await;
    info!("Run finished: {:?}", outcome);

    Ok(())
}
