//! Error types for orchestrator operations.

use brain_core::BrainError;
use telegram_client::TelegramError;
use thiserror::Error;

/// Failure to deliver an outbound message.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The Telegram transport failed.
    #[error("{0}")]
    Telegram(#[from] TelegramError),

    /// Any other sender failure.
    #[error("send failed: {0}")]
    SendFailed(String),
}

/// Errors that can occur during one agent run.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// Required inputs are missing. Holds the environment variable names.
    #[error("Missing environment variables: {}", .0.join(", "))]
    Configuration(Vec<String>),

    /// Tool listing, client setup or the completion call failed.
    #[error("{0}")]
    Processing(#[from] BrainError),

    /// The primary send failed.
    #[error("{0}")]
    Delivery(#[from] DeliveryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_lists_names() {
        let err = OrchestratorError::Configuration(vec![
            "TELEGRAM_BOT_TOKEN".to_string(),
            "TELEGRAM_MESSAGE".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "Missing environment variables: TELEGRAM_BOT_TOKEN, TELEGRAM_MESSAGE"
        );
    }

    #[test]
    fn test_processing_is_transparent() {
        let err: OrchestratorError = BrainError::Network("connection refused".to_string()).into();
        assert_eq!(err.to_string(), "network error: connection refused");
    }

    #[test]
    fn test_delivery_from_telegram() {
        let err: OrchestratorError = DeliveryError::from(TelegramError::Api {
            status: 400,
            description: "Bad Request".to_string(),
        })
        .into();
        assert_eq!(err.to_string(), "Telegram API error (HTTP 400): Bad Request");
    }
}
