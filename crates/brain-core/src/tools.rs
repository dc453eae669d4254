//! Tool metadata shared between the registry and completion providers.
//!
//! A [`ToolDescriptor`] is a value snapshot: it carries the tool's name,
//! description and typed parameter list, plus a shared handle to the
//! registry-owned [`ToolCallable`]. Cloning a descriptor never copies the
//! callable, and rewriting a descriptor's parameters never touches the
//! registry's original.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{BrainError, ToolAdaptationError};

/// Declared type of a tool parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeTag {
    Text,
    Integer,
    Number,
    Boolean,
    Object,
    List,
}

impl TypeTag {
    /// JSON-schema style type name for this tag.
    pub fn schema_name(&self) -> &'static str {
        match self {
            TypeTag::Text => "string",
            TypeTag::Integer => "integer",
            TypeTag::Number => "number",
            TypeTag::Boolean => "boolean",
            TypeTag::Object => "object",
            TypeTag::List => "array",
        }
    }

    /// Infer a tag from a concrete default value.
    ///
    /// Returns `None` for `null`, which carries no type information.
    pub fn infer(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Bool(_) => Some(TypeTag::Boolean),
            Value::Number(n) if n.is_i64() || n.is_u64() => Some(TypeTag::Integer),
            Value::Number(_) => Some(TypeTag::Number),
            Value::String(_) => Some(TypeTag::Text),
            Value::Array(_) => Some(TypeTag::List),
            Value::Object(_) => Some(TypeTag::Object),
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.schema_name())
    }
}

impl FromStr for TypeTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "string" | "text" | "str" => Ok(TypeTag::Text),
            "integer" | "int" => Ok(TypeTag::Integer),
            "number" | "float" => Ok(TypeTag::Number),
            "boolean" | "bool" => Ok(TypeTag::Boolean),
            "object" | "dict" => Ok(TypeTag::Object),
            "array" | "list" => Ok(TypeTag::List),
            other => Err(format!("unknown parameter type: {}", other)),
        }
    }
}

/// A single tool parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name as the model will see it.
    pub name: String,

    /// Optional human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Declared type, if the registry knows it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declared_type: Option<TypeTag>,

    /// Default value. `None` means the parameter is required;
    /// `Some(Value::Null)` is the null-sentinel ("no value provided").
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_value"
    )]
    pub default: Option<Value>,
}

/// A field that is present is `Some`, even when it holds `null`.
fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl Parameter {
    /// A required, typed parameter.
    pub fn required(name: impl Into<String>, declared_type: TypeTag) -> Self {
        Self {
            name: name.into(),
            description: None,
            declared_type: Some(declared_type),
            default: None,
        }
    }

    /// An optional, typed parameter with a concrete default.
    pub fn optional(name: impl Into<String>, declared_type: TypeTag, default: Value) -> Self {
        Self {
            name: name.into(),
            description: None,
            declared_type: Some(declared_type),
            default: Some(default),
        }
    }

    /// A parameter with no type information at all.
    pub fn untyped(name: impl Into<String>, default: Option<Value>) -> Self {
        Self {
            name: name.into(),
            description: None,
            declared_type: None,
            default,
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Whether the default is the null-sentinel.
    pub fn has_null_default(&self) -> bool {
        matches!(self.default, Some(Value::Null))
    }

    /// Whether the parameter must be supplied by the caller.
    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }

    /// Untyped with a null-sentinel default: a provider cannot derive a schema for it.
    pub fn is_schema_ambiguous(&self) -> bool {
        self.declared_type.is_none() && self.has_null_default()
    }
}

/// The invocable side of a tool.
///
/// Owned by the tool registry; descriptors only hold a shared handle.
#[async_trait]
pub trait ToolCallable: Send + Sync {
    /// Invoke the tool with JSON-object arguments.
    async fn call(&self, arguments: Map<String, Value>) -> Result<Value, BrainError>;
}

/// Metadata describing a tool the model may call.
#[derive(Clone)]
pub struct ToolDescriptor {
    /// Unique tool name within a request.
    pub name: String,
    /// What the tool does, for the model.
    pub description: String,
    /// Ordered parameter list.
    pub parameters: Vec<Parameter>,
    /// Shared handle to the registry-owned callable.
    pub callable: Arc<dyn ToolCallable>,
}

impl ToolDescriptor {
    /// Create a descriptor with no parameters.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        callable: Arc<dyn ToolCallable>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
            callable,
        }
    }

    /// Append a parameter.
    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// A new descriptor sharing this one's identity and callable, with a different parameter list.
    pub fn with_parameters(&self, parameters: Vec<Parameter>) -> Self {
        Self {
            name: self.name.clone(),
            description: self.description.clone(),
            parameters,
            callable: Arc::clone(&self.callable),
        }
    }

    /// Look up a parameter by name.
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Check that the signature is well formed.
    pub fn validate(&self) -> Result<(), ToolAdaptationError> {
        let mut seen = HashSet::new();
        for (index, parameter) in self.parameters.iter().enumerate() {
            if parameter.name.trim().is_empty() {
                return Err(ToolAdaptationError::EmptyParameterName {
                    tool: self.name.clone(),
                    index,
                });
            }
            if !seen.insert(parameter.name.as_str()) {
                return Err(ToolAdaptationError::DuplicateParameter {
                    tool: self.name.clone(),
                    parameter: parameter.name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Invoke the underlying callable.
    pub async fn call(&self, arguments: Map<String, Value>) -> Result<Value, BrainError> {
        self.callable.call(arguments).await
    }
}

impl PartialEq for ToolDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.description == other.description
            && self.parameters == other.parameters
            && Arc::ptr_eq(&self.callable, &other.callable)
    }
}

impl fmt::Debug for ToolDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolDescriptor")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

/// Read-only source of tool descriptors.
///
/// Implementations return fresh snapshots; callers may rewrite them freely.
#[async_trait]
pub trait ToolProvider: Send + Sync {
    /// List the available tools in a stable order.
    async fn list_tools(&self) -> Result<Vec<ToolDescriptor>, BrainError>;
}
