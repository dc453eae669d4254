//! Schema repair for tool descriptors.
//!
//! Completion providers derive a JSON schema for every tool parameter. A
//! parameter published with no type and a null default gives them nothing
//! to derive from, and schema generation for the whole request fails. The
//! sanitizer fills in a type for exactly those parameters and leaves
//! everything else alone.
//!
//! The repair is a heuristic: a parameter that is really an integer but
//! published untyped with a null default will be described as a string
//! unless a different fallback is configured.

use brain_core::{Parameter, ToolAdaptationError, ToolDescriptor, TypeTag};
use tracing::{debug, warn};

/// Fills missing type tags on untyped, null-defaulted parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaSanitizer {
    fallback: TypeTag,
}

impl Default for SchemaSanitizer {
    fn default() -> Self {
        Self {
            fallback: TypeTag::Text,
        }
    }
}

impl SchemaSanitizer {
    /// A sanitizer that repairs to [`TypeTag::Text`].
    pub fn new() -> Self {
        Self::default()
    }

    /// A sanitizer that repairs to the given type instead.
    pub fn with_fallback(fallback: TypeTag) -> Self {
        Self { fallback }
    }

    /// The type assigned to repaired parameters.
    pub fn fallback(&self) -> TypeTag {
        self.fallback
    }

    /// Sanitize a batch of descriptors.
    ///
    /// The output has the same length and order as the input. A descriptor
    /// that cannot be adapted is logged and passed through unchanged.
    pub fn sanitize(&self, descriptors: &[ToolDescriptor]) -> Vec<ToolDescriptor> {
        descriptors
            .iter()
            .map(|descriptor| match self.sanitize_one(descriptor) {
                Ok(sanitized) => sanitized,
                Err(e) => {
                    warn!("Could not patch tool {}: {}", descriptor.name, e);
                    descriptor.clone()
                }
            })
            .collect()
    }

    /// Sanitize a single descriptor, returning a new value.
    pub fn sanitize_one(
        &self,
        descriptor: &ToolDescriptor,
    ) -> Result<ToolDescriptor, ToolAdaptationError> {
        descriptor.validate()?;

        let mut changed = false;
        let parameters: Vec<Parameter> = descriptor
            .parameters
            .iter()
            .map(|parameter| {
                if parameter.is_schema_ambiguous() {
                    changed = true;
                    Parameter {
                        declared_type: Some(self.fallback),
                        ..parameter.clone()
                    }
                } else {
                    parameter.clone()
                }
            })
            .collect();

        if changed {
            debug!("Patched type hints for tool: {}", descriptor.name);
        }

        Ok(descriptor.with_parameters(parameters))
    }
}

/// Sanitize with the default [`TypeTag::Text`] fallback.
pub fn sanitize(descriptors: &[ToolDescriptor]) -> Vec<ToolDescriptor> {
    SchemaSanitizer::default().sanitize(descriptors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use brain_core::{BrainError, ToolCallable};
    use serde_json::{json, Map, Value};
    use std::sync::Arc;

    struct Noop;

    #[async_trait]
    impl ToolCallable for Noop {
        async fn call(&self, _arguments: Map<String, Value>) -> Result<Value, BrainError> {
            Ok(Value::Null)
        }
    }

    fn weather() -> ToolDescriptor {
        ToolDescriptor::new("get_weather", "Weather for a city", Arc::new(Noop))
            .with_parameter(Parameter::untyped("city", Some(Value::Null)))
            .with_parameter(Parameter::optional("units", TypeTag::Text, json!("metric")))
            .with_parameter(Parameter::untyped("days", Some(json!(1))))
            .with_parameter(Parameter::untyped("country", None))
    }

    fn fully_typed() -> ToolDescriptor {
        ToolDescriptor::new("calculator", "Math", Arc::new(Noop))
            .with_parameter(Parameter::required("expression", TypeTag::Text))
            .with_parameter(Parameter::optional("precision", TypeTag::Integer, Value::Null))
    }

    fn malformed() -> ToolDescriptor {
        ToolDescriptor::new("broken", "Duplicated parameter", Arc::new(Noop))
            .with_parameter(Parameter::untyped("x", Some(Value::Null)))
            .with_parameter(Parameter::untyped("x", Some(Value::Null)))
    }

    #[test]
    fn test_targeted_repair() {
        let original = weather();
        let sanitized = sanitize(std::slice::from_ref(&original));

        assert_eq!(sanitized.len(), 1);
        let params = &sanitized[0].parameters;
        assert_eq!(params.len(), original.parameters.len());

        assert_eq!(params[0].name, "city");
        assert_eq!(params[0].declared_type, Some(TypeTag::Text));
        assert_eq!(params[0].default, Some(Value::Null));

        // Only the untyped + null-default parameter changes.
        assert_eq!(params[1], original.parameters[1]);
        assert_eq!(params[2], original.parameters[2]);
        assert_eq!(params[3], original.parameters[3]);
    }

    #[test]
    fn test_original_is_not_mutated() {
        let original = weather();
        let _ = sanitize(std::slice::from_ref(&original));

        assert!(original.parameters[0].declared_type.is_none());
        assert!(original.parameters[0].is_schema_ambiguous());
    }

    #[test]
    fn test_idempotent() {
        let input = vec![weather(), fully_typed(), malformed()];
        let once = sanitize(&input);
        let twice = sanitize(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_noop_on_fully_typed() {
        let input = vec![fully_typed()];
        assert_eq!(sanitize(&input), input);
    }

    #[test]
    fn test_fault_isolation() {
        let input = vec![weather(), malformed(), fully_typed()];
        let output = sanitize(&input);

        assert_eq!(output.len(), input.len());
        assert_eq!(output[0].name, "get_weather");
        assert_eq!(output[1], input[1]);
        assert!(output[1].parameters[0].is_schema_ambiguous());
        assert_eq!(output[2], input[2]);
    }

    #[test]
    fn test_sanitize_one_reports_adaptation_error() {
        let err = SchemaSanitizer::new().sanitize_one(&malformed()).unwrap_err();
        assert!(matches!(err, ToolAdaptationError::DuplicateParameter { .. }));
    }

    #[test]
    fn test_custom_fallback() {
        let sanitizer = SchemaSanitizer::with_fallback(TypeTag::Integer);
        assert_eq!(sanitizer.fallback(), TypeTag::Integer);

        let output = sanitizer.sanitize(&[weather()]);
        assert_eq!(output[0].parameters[0].declared_type, Some(TypeTag::Integer));
        // Trigger condition is unchanged.
        assert!(output[0].parameters[3].declared_type.is_none());
    }

    #[test]
    fn test_empty_batch() {
        assert!(sanitize(&[]).is_empty());
    }
}
