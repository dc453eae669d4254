//! Error types for completion and tool adaptation.

use thiserror::Error;

/// Errors that can occur while talking to a completion provider.
#[derive(Debug, Error)]
pub enum BrainError {
    /// The provider could not be configured.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The request never reached the provider or the connection dropped.
    #[error("network error: {0}")]
    Network(String),

    /// The provider answered with an error or an unreadable body.
    #[error("processing failed: {0}")]
    ProcessingFailed(String),

    /// A tool descriptor could not be turned into a provider schema.
    #[error("schema generation failed: {0}")]
    Schema(String),

    /// A tool invoked during automatic execution failed.
    #[error("tool '{name}' failed: {reason}")]
    Tool { name: String, reason: String },
}

/// A single tool descriptor could not be inspected or rewritten.
///
/// Scoped to one tool; never aborts a batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolAdaptationError {
    /// A parameter has an empty name.
    #[error("tool '{tool}' has a parameter with an empty name at position {index}")]
    EmptyParameterName { tool: String, index: usize },

    /// Two parameters share a name.
    #[error("tool '{tool}' declares parameter '{parameter}' more than once")]
    DuplicateParameter { tool: String, parameter: String },
}
