//! Function declarations derived from tool descriptors.

use brain_core::{BrainError, Parameter, ToolDescriptor, TypeTag};

use crate::api_types::{FunctionDeclaration, Schema, Tool};

/// Gemini type name for a tag.
fn gemini_type(tag: TypeTag) -> &'static str {
    match tag {
        TypeTag::Text => "STRING",
        TypeTag::Integer => "INTEGER",
        TypeTag::Number => "NUMBER",
        TypeTag::Boolean => "BOOLEAN",
        TypeTag::Object => "OBJECT",
        TypeTag::List => "ARRAY",
    }
}

fn parameter_schema(tool: &str, parameter: &Parameter) -> Result<Schema, BrainError> {
    // Without a declared type the only other source is a concrete default.
    let tag = parameter
        .declared_type
        .or_else(|| parameter.default.as_ref().and_then(TypeTag::infer))
        .ok_or_else(|| {
            BrainError::Schema(format!(
                "parameter '{}' of tool '{}' has no type and no default to infer one from",
                parameter.name, tool
            ))
        })?;

    let mut schema = Schema::of(gemini_type(tag));
    schema.description = parameter.description.clone();
    if parameter.has_null_default() {
        schema.nullable = Some(true);
    }
    if tag == TypeTag::List {
        schema.items = Some(Box::new(Schema::of(gemini_type(TypeTag::Text))));
    }
    Ok(schema)
}

/// Build the function declaration for one descriptor.
pub fn function_declaration(descriptor: &ToolDescriptor) -> Result<FunctionDeclaration, BrainError> {
    let parameters = if descriptor.parameters.is_empty() {
        None
    } else {
        let mut object = Schema::of(gemini_type(TypeTag::Object));
        for parameter in &descriptor.parameters {
            let schema = parameter_schema(&descriptor.name, parameter)?;
            object.properties.insert(parameter.name.clone(), schema);
            if parameter.is_required() {
                object.required.push(parameter.name.clone());
            }
        }
        Some(object)
    };

    Ok(FunctionDeclaration {
        name: descriptor.name.clone(),
        description: descriptor.description.clone(),
        parameters,
    })
}

/// Build the request's tool list. Empty when there are no descriptors.
///
/// Fails on the first descriptor whose schema cannot be generated.
pub fn request_tools(descriptors: &[ToolDescriptor]) -> Result<Vec<Tool>, BrainError> {
    if descriptors.is_empty() {
        return Ok(Vec::new());
    }

    let function_declarations = descriptors
        .iter()
        .map(function_declaration)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(vec![Tool {
        function_declarations,
    }])
}
