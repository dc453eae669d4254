//! One-shot agent run for a single Telegram message.
//!
//! This crate provides the [`AgentOrchestrator`] type which takes one inbound
//! message, lets a Gemini model answer it with the registered tools, and
//! relays the answer to a Telegram chat.
//!
//! # Architecture
//!
//! ```text
//! TELEGRAM_MESSAGE (env)
//!          ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      ORCHESTRATOR                           │
//! │                                                             │
//! │  1. Validate the four required inputs                       │
//! │         ↓ (missing → Aborted, nothing contacted)            │
//! │  2. List tools from the registry                            │
//! │         ↓                                                   │
//! │  3. Sanitize untyped parameters with null defaults          │
//! │         ↓                                                   │
//! │  4. Complete with automatic tool execution                  │
//! │         ↓ (no text → fallback message)                      │
//! │  5. Send the answer with Markdown rendering                 │
//! │                                                             │
//! │  Any failure in 2-5 → one plain-text error notification     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use orchestrator::{AgentOrchestrator, RunOutcome};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let registry = Arc::new(agent_tools::default_registry());
//!     let orchestrator = AgentOrchestrator::from_env(registry);
//!
//!     match orchestrator.run().await {
//!         RunOutcome::Delivered => println!("answered"),
//!         outcome => println!("finished: {:?}", outcome),
//!     }
//! }
//! ```

mod completion;
mod config;
mod dispatcher;
mod error;
mod logging;
mod orchestrator;
mod sender;

// Public exports
pub use completion::CompletionClient;
pub use config::{
    AgentConfig, AgentInputs, ValidatedInputs, DEFAULT_MODEL, GOOGLE_API_KEY, REQUIRED_VARS,
    TELEGRAM_BOT_TOKEN, TELEGRAM_CHAT_ID, TELEGRAM_MESSAGE,
};
pub use dispatcher::{
    truncate_chars, MessageDispatcher, ERROR_PREFIX, FALLBACK_TEXT, NOTIFICATION_LIMIT,
};
pub use error::{DeliveryError, OrchestratorError};
pub use logging::{init_logging, InitError};
pub use orchestrator::{AgentOrchestrator, Backends, LiveBackends, RunOutcome};
pub use sender::{DeliveryMessage, MessageSender, RenderMode};

// Re-export commonly used types from dependencies
pub use brain_core::{CompletionProvider, ToolProvider};
