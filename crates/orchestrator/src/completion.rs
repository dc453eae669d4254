//! Thin wrapper over the completion provider.

use brain_core::{BrainError, CompletionProvider, CompletionRequest, CompletionResult, ToolDescriptor};
use tracing::debug;

/// Issues one completion with automatic tool execution enabled.
///
/// Tool calls are the provider's business; this client never dispatches them.
pub struct CompletionClient {
    provider: Box<dyn CompletionProvider>,
}

impl CompletionClient {
    pub fn new(provider: Box<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    /// Run the completion. Errors propagate unchanged.
    pub async fn complete(
        &self,
        model: &str,
        content: &str,
        tools: Vec<ToolDescriptor>,
    ) -> Result<CompletionResult, BrainError> {
        debug!(
            "Requesting completion from {} (model: {}, tools: {})",
            self.provider.name(),
            model,
            tools.len()
        );

        self.provider
            .complete(CompletionRequest::new(model, content, tools))
            .await
    }
}
