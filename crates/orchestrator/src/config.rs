//! Run inputs read from the environment.

use std::env;
use std::fmt;

use brain_core::TypeTag;
use tracing::warn;

use crate::error::OrchestratorError;

/// Environment variable holding the Gemini API key.
pub const GOOGLE_API_KEY: &str = "GOOGLE_API_KEY";
/// Environment variable holding the Telegram bot token.
pub const TELEGRAM_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";
/// Environment variable holding the target chat.
pub const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";
/// Environment variable holding the inbound message.
pub const TELEGRAM_MESSAGE: &str = "TELEGRAM_MESSAGE";

/// The four inputs every run needs, in reporting order.
pub const REQUIRED_VARS: [&str; 4] = [
    GOOGLE_API_KEY,
    TELEGRAM_BOT_TOKEN,
    TELEGRAM_CHAT_ID,
    TELEGRAM_MESSAGE,
];

/// Default completion model.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Raw run inputs. Any of them may be missing until validated.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AgentInputs {
    pub google_api_key: Option<String>,
    pub telegram_bot_token: Option<String>,
    pub telegram_chat_id: Option<String>,
    pub telegram_message: Option<String>,
}

/// Inputs that passed validation: all present and non-empty.
#[derive(Clone, PartialEq, Eq)]
pub struct ValidatedInputs {
    pub google_api_key: String,
    pub telegram_bot_token: String,
    pub chat_id: String,
    pub message: String,
}

impl AgentInputs {
    /// Read the four inputs. Empty values count as missing.
    pub fn from_env() -> Self {
        let read = |name: &str| env::var(name).ok().filter(|v| !v.is_empty());
        Self {
            google_api_key: read(GOOGLE_API_KEY),
            telegram_bot_token: read(TELEGRAM_BOT_TOKEN),
            telegram_chat_id: read(TELEGRAM_CHAT_ID),
            telegram_message: read(TELEGRAM_MESSAGE),
        }
    }

    /// Names of the inputs that are absent or empty.
    pub fn missing(&self) -> Vec<&'static str> {
        let values = [
            &self.google_api_key,
            &self.telegram_bot_token,
            &self.telegram_chat_id,
            &self.telegram_message,
        ];
        REQUIRED_VARS
            .iter()
            .zip(values)
            .filter(|(_, value)| value.as_deref().map_or(true, str::is_empty))
            .map(|(name, _)| *name)
            .collect()
    }

    /// Check that every input is present.
    pub fn validate(&self) -> Result<ValidatedInputs, OrchestratorError> {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(OrchestratorError::Configuration(
                missing.into_iter().map(String::from).collect(),
            ));
        }

        let take = |value: &Option<String>| value.clone().unwrap_or_default();
        Ok(ValidatedInputs {
            google_api_key: take(&self.google_api_key),
            telegram_bot_token: take(&self.telegram_bot_token),
            chat_id: take(&self.telegram_chat_id),
            message: take(&self.telegram_message),
        })
    }
}

fn redact(value: &Option<String>) -> &'static str {
    match value {
        Some(_) => "<set>",
        None => "<missing>",
    }
}

impl fmt::Debug for AgentInputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgentInputs")
            .field("google_api_key", &redact(&self.google_api_key))
            .field("telegram_bot_token", &redact(&self.telegram_bot_token))
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("telegram_message", &self.telegram_message)
            .finish()
    }
}

impl fmt::Debug for ValidatedInputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedInputs")
            .field("google_api_key", &"<redacted>")
            .field("telegram_bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .field("message", &self.message)
            .finish()
    }
}

/// Everything a run needs besides its collaborators.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentConfig {
    pub inputs: AgentInputs,
    /// Completion model identifier.
    pub model: String,
    /// Type given to untyped parameters with a null default.
    pub untyped_default: TypeTag,
}

impl AgentConfig {
    /// A config with default model and repair type.
    pub fn new(inputs: AgentInputs) -> Self {
        Self {
            inputs,
            model: DEFAULT_MODEL.to_string(),
            untyped_default: TypeTag::Text,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Reads the four required inputs plus:
    /// - `GEMINI_MODEL` - completion model (default: gemini-2.5-flash)
    /// - `AGENT_UNTYPED_DEFAULT_TYPE` - repair type for untyped parameters (default: string)
    pub fn from_env() -> Self {
        let model = env::var("GEMINI_MODEL")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let untyped_default = match env::var("AGENT_UNTYPED_DEFAULT_TYPE") {
            Ok(value) if !value.is_empty() => value.parse().unwrap_or_else(|e| {
                warn!("Ignoring AGENT_UNTYPED_DEFAULT_TYPE: {}", e);
                TypeTag::Text
            }),
            _ => TypeTag::Text,
        };

        Self {
            inputs: AgentInputs::from_env(),
            model,
            untyped_default,
        }
    }
}
