//! Error types for tool operations.

use brain_core::BrainError;
use thiserror::Error;

/// Errors that can occur during tool execution.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Missing required parameter.
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    /// Invalid parameter value.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Expression evaluation failed (calculator).
    #[error("Evaluation error: {0}")]
    EvalError(String),

    /// General execution error.
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),
}

impl ToolError {
    /// Convert into a [`BrainError`] scoped to the named tool.
    pub fn into_brain_error(self, tool: &str) -> BrainError {
        BrainError::Tool {
            name: tool.to_string(),
            reason: self.to_string(),
        }
    }
}
