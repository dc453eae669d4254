//! The one-shot agent run.

use std::sync::Arc;

use agent_tools::SchemaSanitizer;
use brain_core::{BrainError, CompletionProvider, ToolProvider};
use gemini_brain::{GeminiBrain, GeminiConfig};
use telegram_client::{TelegramClient, TelegramConfig};
use tracing::{error, info};

use crate::completion::CompletionClient;
use crate::config::{AgentConfig, ValidatedInputs};
use crate::dispatcher::{truncate_chars, MessageDispatcher, ERROR_PREFIX, FALLBACK_TEXT};
use crate::error::{DeliveryError, OrchestratorError};
use crate::sender::MessageSender;

/// Terminal state of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Inputs were missing; nothing was contacted.
    Aborted,
    /// The answer (or the fallback) was sent.
    Delivered,
    /// Something failed and one error notification was attempted.
    RecoveryAttempted,
    /// The messaging client could not be built, so nothing could be sent.
    Undeliverable,
}

/// Builds the network clients for a run, once inputs are known to be valid.
pub trait Backends: Send + Sync {
    /// The messaging client.
    fn messaging(&self, inputs: &ValidatedInputs) -> Result<Box<dyn MessageSender>, DeliveryError>;

    /// The completion provider.
    fn completion(&self, inputs: &ValidatedInputs)
        -> Result<Box<dyn CompletionProvider>, BrainError>;
}

/// Gemini for completions and Telegram for delivery.
///
/// Optional settings come from the environment, see [`GeminiConfig::from_env`]
/// and [`TelegramConfig::from_env`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LiveBackends;

impl Backends for LiveBackends {
    fn messaging(&self, inputs: &ValidatedInputs) -> Result<Box<dyn MessageSender>, DeliveryError> {
        let config = TelegramConfig::from_env_with_token(&inputs.telegram_bot_token);
        Ok(Box::new(TelegramClient::new(config)?))
    }

    fn completion(
        &self,
        inputs: &ValidatedInputs,
    ) -> Result<Box<dyn CompletionProvider>, BrainError> {
        let config = GeminiConfig::from_env_with_key(&inputs.google_api_key)?;
        Ok(Box::new(GeminiBrain::new(config)?))
    }
}

/// Runs one inbound message through tools, the model and delivery.
///
/// Flow: validate inputs, list and sanitize tools, complete, deliver. Once a
/// messaging client exists, any failure produces exactly one plain-text error
/// notification to the same chat.
pub struct AgentOrchestrator<B: Backends = LiveBackends> {
    config: AgentConfig,
    tools: Arc<dyn ToolProvider>,
    backends: B,
    sanitizer: SchemaSanitizer,
}

impl AgentOrchestrator<LiveBackends> {
    /// Create an orchestrator from environment variables with live backends.
    pub fn from_env(tools: Arc<dyn ToolProvider>) -> Self {
        Self::new(AgentConfig::from_env(), tools, LiveBackends)
    }
}

impl<B: Backends> AgentOrchestrator<B> {
    pub fn new(config: AgentConfig, tools: Arc<dyn ToolProvider>, backends: B) -> Self {
        let sanitizer = SchemaSanitizer::with_fallback(config.untyped_default);
        Self {
            config,
            tools,
            backends,
            sanitizer,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Run once. Never returns an error: failures end in a [`RunOutcome`].
    pub async fn run(&self) -> RunOutcome {
        let inputs = match self.config.inputs.validate() {
            Ok(inputs) => inputs,
            Err(e) => {
                error!("{}", e);
                return RunOutcome::Aborted;
            }
        };

        info!(
            "Processing message for chat {}: {}",
            inputs.chat_id, inputs.message
        );

        let sender = match self.backends.messaging(&inputs) {
            Ok(sender) => sender,
            Err(e) => {
                error!("Could not create messaging client, no reply possible: {}", e);
                return RunOutcome::Undeliverable;
            }
        };
        let dispatcher = MessageDispatcher::new(sender, inputs.chat_id.clone());

        match self.process(&inputs, &dispatcher).await {
            Ok(()) => RunOutcome::Delivered,
            Err(e) => {
                error!("Error in agent processing: {}", e);
                dispatcher.notify(&format!("{}{}", ERROR_PREFIX, e)).await;
                RunOutcome::RecoveryAttempted
            }
        }
    }

    async fn process(
        &self,
        inputs: &ValidatedInputs,
        dispatcher: &MessageDispatcher,
    ) -> Result<(), OrchestratorError> {
        let client = CompletionClient::new(self.backends.completion(inputs)?);

        let descriptors = self.tools.list_tools().await?;
        let tools = self.sanitizer.sanitize(&descriptors);
        info!("Loaded and sanitized {} tools", tools.len());

        let result = client
            .complete(&self.config.model, &inputs.message, tools)
            .await?;

        let text = result.non_empty_text().unwrap_or(FALLBACK_TEXT);
        info!("AI Response truncated: {}...", truncate_chars(text, 100));

        dispatcher.send_primary(text).await?;
        Ok(())
    }
}
