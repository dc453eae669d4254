//! Tool trait definition and types.

use std::collections::HashMap;

use async_trait::async_trait;
use brain_core::Parameter;
use serde_json::{Map, Value};

use crate::error::ToolError;

/// Arguments passed to a tool for execution.
#[derive(Debug, Clone, Default)]
pub struct ToolArgs {
    /// Parameters as key-value pairs.
    pub params: HashMap<String, Value>,
}

impl ToolArgs {
    /// Create new tool arguments with the given parameters.
    pub fn new(params: HashMap<String, Value>) -> Self {
        Self { params }
    }

    /// Create tool arguments from a JSON object, as sent by a model.
    pub fn from_json_object(object: Map<String, Value>) -> Self {
        Self {
            params: object.into_iter().collect(),
        }
    }

    /// Get a string parameter, returning an error if missing, null, or not a string.
    pub fn get_string(&self, key: &str) -> Result<String, ToolError> {
        match self.params.get(key) {
            None | Some(Value::Null) => Err(ToolError::MissingParameter(key.to_string())),
            Some(value) => value
                .as_str()
                .map(|s| s.to_string())
                .ok_or_else(|| ToolError::InvalidParameter {
                    name: key.to_string(),
                    reason: "expected string".to_string(),
                }),
        }
    }

    /// Get an optional string parameter.
    pub fn get_string_opt(&self, key: &str) -> Option<String> {
        self.params.get(key)?.as_str().map(|s| s.to_string())
    }
}

/// Output from a tool execution.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolOutput {
    /// The result content (text or JSON).
    pub content: String,
    /// Whether the execution was successful.
    pub success: bool,
}

impl ToolOutput {
    /// Create a successful output.
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            success: true,
        }
    }

    /// Create a failed output.
    pub fn failure(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            success: false,
        }
    }
}

/// Trait for tools held by the [`ToolRegistry`](crate::ToolRegistry).
///
/// A tool publishes its name, description and parameter list; the registry
/// turns that into a [`ToolDescriptor`](brain_core::ToolDescriptor) whose
/// callable dispatches back into [`Tool::execute`].
#[async_trait]
pub trait Tool: Send + Sync {
    /// The tool's unique name (used for dispatch).
    fn name(&self) -> &str;

    /// Human-readable description of what the tool does.
    fn description(&self) -> &str;

    /// Ordered parameter list as published to the model.
    fn parameters(&self) -> Vec<Parameter>;

    /// Execute the tool with the given arguments.
    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError>;
}
