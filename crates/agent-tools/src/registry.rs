//! Tool registry for managing and executing tools.

use std::sync::Arc;

use async_trait::async_trait;
use brain_core::{BrainError, ToolCallable, ToolDescriptor, ToolProvider};
use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::tool::{Tool, ToolArgs};

/// A registered tool together with the callable handle handed out in descriptors.
struct Entry {
    tool: Arc<dyn Tool>,
    callable: Arc<dyn ToolCallable>,
}

/// Callable handle that dispatches a model's tool call into a [`Tool`].
struct RegistryCallable {
    tool: Arc<dyn Tool>,
}

#[async_trait]
impl ToolCallable for RegistryCallable {
    async fn call(&self, arguments: Map<String, Value>) -> Result<Value, BrainError> {
        let name = self.tool.name();
        debug!("Executing tool '{}' with {} params", name, arguments.len());

        let output = self
            .tool
            .execute(ToolArgs::from_json_object(arguments))
            .await
            .map_err(|e| e.into_brain_error(name))?;

        debug!(
            "Tool '{}' completed: success={}, content_len={}",
            name,
            output.success,
            output.content.len()
        );

        if output.success {
            Ok(Value::String(output.content))
        } else {
            Err(BrainError::Tool {
                name: name.to_string(),
                reason: output.content,
            })
        }
    }
}

/// Registry for managing tools.
///
/// Tools keep their registration order, which is the order descriptors are
/// listed in. The registry owns every tool and its callable; listings are
/// snapshots that share the callables by reference.
pub struct ToolRegistry {
    tools: IndexMap<String, Entry>,
}

impl ToolRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            tools: IndexMap::new(),
        }
    }

    /// Register a tool.
    ///
    /// If a tool with the same name already exists, it will be replaced in place.
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        self.register_shared(Arc::new(tool));
    }

    /// Register a shared tool.
    pub fn register_shared(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.name().to_string();
        info!("Registering tool: {}", name);
        let callable: Arc<dyn ToolCallable> = Arc::new(RegistryCallable {
            tool: Arc::clone(&tool),
        });
        self.tools.insert(name, Entry { tool, callable });
    }

    /// Get a list of registered tool names, in registration order.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.keys().map(|s| s.as_str()).collect()
    }

    /// Check if a tool is registered.
    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Snapshot every registered tool as a descriptor.
    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        self.tools
            .values()
            .map(|entry| ToolDescriptor {
                name: entry.tool.name().to_string(),
                description: entry.tool.description().to_string(),
                parameters: entry.tool.parameters(),
                callable: Arc::clone(&entry.callable),
            })
            .collect()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ToolProvider for ToolRegistry {
    async fn list_tools(&self) -> Result<Vec<ToolDescriptor>, BrainError> {
        Ok(self.descriptors())
    }
}
