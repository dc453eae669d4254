//! Completion request/response contract.

use async_trait::async_trait;

use crate::error::BrainError;
use crate::tools::ToolDescriptor;

/// A single completion call.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Model identifier.
    pub model: String,
    /// The inbound message.
    pub content: String,
    /// Tools the model may call.
    pub tools: Vec<ToolDescriptor>,
    /// Let the provider invoke tools and fold their results back in.
    pub auto_tool_execution: bool,
}

impl CompletionRequest {
    /// Create a request with automatic tool execution enabled.
    pub fn new(model: impl Into<String>, content: impl Into<String>, tools: Vec<ToolDescriptor>) -> Self {
        Self {
            model: model.into(),
            content: content.into(),
            tools,
            auto_tool_execution: true,
        }
    }
}

/// Final answer of a completion call.
///
/// Absent or empty text is a valid outcome, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionResult {
    pub text: Option<String>,
}

impl CompletionResult {
    /// A result carrying text.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    /// A result with no text.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The text if present and non-empty.
    pub fn non_empty_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }
}

/// A model endpoint.
///
/// When `auto_tool_execution` is set, the provider is responsible for
/// invoking tool callables and feeding their results back into the
/// generation before returning the final text.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Run a completion.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResult, BrainError>;

    /// Get a human-readable name for this provider.
    fn name(&self) -> &str;
}
