//! Tool-calling brain - one automatic function call, then an answer.

use std::sync::atomic::{AtomicUsize, Ordering};

use brain_core::{async_trait, BrainError, CompletionProvider, CompletionRequest, CompletionResult};
use serde_json::{Map, Value};

/// A provider that behaves like a model which always calls one tool.
///
/// With automatic tool execution enabled it looks the tool up among the
/// request's descriptors, invokes it with fixed arguments and answers with
/// the result. A missing tool or a failing call is a processing error.
#[derive(Debug)]
pub struct ToolCallingBrain {
    tool: String,
    arguments: Map<String, Value>,
    invocations: AtomicUsize,
}

impl ToolCallingBrain {
    /// Call `tool` with no arguments.
    pub fn new(tool: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            arguments: Map::new(),
            invocations: AtomicUsize::new(0),
        }
    }

    /// Add an argument to the call.
    pub fn with_argument(mut self, name: impl Into<String>, value: Value) -> Self {
        self.arguments.insert(name.into(), value);
        self
    }

    /// How many times the tool was invoked.
    pub fn invocations(&self) -> usize {
        self.invocations.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionProvider for ToolCallingBrain {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResult, BrainError> {
        if !request.auto_tool_execution {
            return Ok(CompletionResult::empty());
        }

        let descriptor = request
            .tools
            .iter()
            .find(|tool| tool.name == self.tool)
            .ok_or_else(|| {
                BrainError::ProcessingFailed(format!("tool '{}' was not offered", self.tool))
            })?;

        self.invocations.fetch_add(1, Ordering::SeqCst);
        let result = descriptor.call(self.arguments.clone()).await?;

        let text = match result {
            Value::String(s) => s,
            other => other.to_string(),
        };
        Ok(CompletionResult::text(text))
    }

    fn name(&self) -> &str {
        "ToolCallingBrain"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedCallable;
    use brain_core::{Parameter, ToolDescriptor, TypeTag};
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_calls_offered_tool() {
        let callable = Arc::new(FixedCallable::new(json!("Sunny in Paris")));
        let tool = ToolDescriptor::new("get_weather", "Weather", callable.clone())
            .with_parameter(Parameter::required("city", TypeTag::Text));
        let brain = ToolCallingBrain::new("get_weather").with_argument("city", json!("Paris"));

        let result = brain
            .complete(CompletionRequest::new("m", "Weather?", vec![tool]))
            .await
            .unwrap();

        assert_eq!(result.text.as_deref(), Some("Sunny in Paris"));
        assert_eq!(brain.invocations(), 1);
        assert_eq!(callable.last_arguments().unwrap()["city"], json!("Paris"));
    }

    #[tokio::test]
    async fn test_missing_tool_fails() {
        let brain = ToolCallingBrain::new("get_weather");
        let err = brain
            .complete(CompletionRequest::new("m", "q", Vec::new()))
            .await
            .unwrap_err();
        assert!(matches!(err, BrainError::ProcessingFailed(_)));
        assert_eq!(brain.invocations(), 0);
    }
}
