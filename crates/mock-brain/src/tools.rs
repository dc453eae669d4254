//! Tool sources and callables for tests.

use std::sync::Mutex;

use brain_core::{async_trait, BrainError, ToolCallable, ToolDescriptor, ToolProvider};
use serde_json::{Map, Value};

/// A tool provider that serves a fixed list of descriptors.
#[derive(Debug, Clone, Default)]
pub struct StaticToolProvider {
    tools: Vec<ToolDescriptor>,
}

impl StaticToolProvider {
    pub fn new(tools: Vec<ToolDescriptor>) -> Self {
        Self { tools }
    }
}

#[async_trait]
impl ToolProvider for StaticToolProvider {
    async fn list_tools(&self) -> Result<Vec<ToolDescriptor>, BrainError> {
        Ok(self.tools.clone())
    }
}

/// A tool provider whose listing always fails.
#[derive(Debug, Clone)]
pub struct FailingToolProvider {
    message: String,
}

impl FailingToolProvider {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl ToolProvider for FailingToolProvider {
    async fn list_tools(&self) -> Result<Vec<ToolDescriptor>, BrainError> {
        Err(BrainError::ProcessingFailed(self.message.clone()))
    }
}

/// A callable that returns the same value every time and remembers its arguments.
#[derive(Debug)]
pub struct FixedCallable {
    value: Value,
    calls: Mutex<Vec<Map<String, Value>>>,
}

impl FixedCallable {
    pub fn new(value: Value) -> Self {
        Self {
            value,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Number of invocations so far.
    pub fn calls(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or(0)
    }

    /// Arguments of the latest invocation.
    pub fn last_arguments(&self) -> Option<Map<String, Value>> {
        self.calls.lock().ok().and_then(|c| c.last().cloned())
    }
}

#[async_trait]
impl ToolCallable for FixedCallable {
    async fn call(&self, arguments: Map<String, Value>) -> Result<Value, BrainError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(arguments);
        }
        Ok(self.value.clone())
    }
}
