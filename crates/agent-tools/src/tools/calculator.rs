//! Calculator tool for safe math expression evaluation.

use async_trait::async_trait;
use brain_core::{Parameter, TypeTag};
use serde_json::Value;
use tracing::debug;

use crate::error::ToolError;
use crate::tool::{Tool, ToolArgs, ToolOutput};

/// Largest number of decimal places `precision` may request.
const MAX_PRECISION: u64 = 12;

/// Evaluates mathematical expressions with `meval` (no code execution).
///
/// # Parameters
///
/// - `expression` (required): The expression to evaluate.
/// - `precision` (optional): Decimal places to round to. Published without a type.
pub struct Calculator;

impl Calculator {
    /// Create a new calculator tool.
    pub fn new() -> Self {
        Self
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

fn format_result(result: f64, precision: Option<u64>) -> String {
    match precision {
        Some(places) => format!("{:.*}", places as usize, result),
        None if result.fract() == 0.0 && result.abs() < 1e15 => format!("{:.0}", result),
        None => format!("{}", result),
    }
}

fn parse_precision(args: &ToolArgs) -> Result<Option<u64>, ToolError> {
    let invalid = |reason: &str| ToolError::InvalidParameter {
        name: "precision".to_string(),
        reason: reason.to_string(),
    };

    let places = match args.params.get("precision") {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Number(n)) => n.as_u64().ok_or_else(|| invalid("expected a non-negative integer"))?,
        Some(Value::String(s)) => s
            .trim()
            .parse::<u64>()
            .map_err(|_| invalid("expected a non-negative integer"))?,
        Some(_) => return Err(invalid("expected a non-negative integer")),
    };

    if places > MAX_PRECISION {
        return Err(invalid("at most 12 decimal places"));
    }
    Ok(Some(places))
}

#[async_trait]
impl Tool for Calculator {
    fn name(&self) -> &str {
        "calculator"
    }

    fn description(&self) -> &str {
        "Evaluates mathematical expressions safely. Supports basic arithmetic, \
         trigonometric functions (sin, cos, tan), logarithms (ln, log), \
         powers (^), roots (sqrt), and constants (pi, e)."
    }

    fn parameters(&self) -> Vec<Parameter> {
        vec![
            Parameter::required("expression", TypeTag::Text)
                .with_description("The expression to evaluate, e.g. \"2 + 2 * 3\""),
            Parameter::untyped("precision", Some(Value::Null))
                .with_description("Number of decimal places to round the result to"),
        ]
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let expression = args.get_string("expression")?;
        let precision = parse_precision(&args)?;

        debug!("Evaluating expression: {}", expression);

        let result = meval::eval_str(&expression).map_err(|e| {
            ToolError::EvalError(format!("Failed to evaluate '{}': {}", expression, e))
        })?;

        let formatted = format_result(result, precision);
        debug!("Result: {}", formatted);
        Ok(ToolOutput::success(format!("{} = {}", expression, formatted)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn make_args(expr: &str) -> ToolArgs {
        let mut params = HashMap::new();
        params.insert("expression".to_string(), Value::String(expr.to_string()));
        ToolArgs::new(params)
    }

    fn make_args_with_precision(expr: &str, precision: Value) -> ToolArgs {
        let mut args = make_args(expr);
        args.params.insert("precision".to_string(), precision);
        args
    }

    #[tokio::test]
    async fn test_basic_arithmetic() {
        let calc = Calculator::new();

        let result = calc.execute(make_args("2 + 2")).await.unwrap();
        assert!(result.success);
        assert_eq!(result.content, "2 + 2 = 4");

        let result = calc.execute(make_args("2 + 3 * 4")).await.unwrap();
        assert_eq!(result.content, "2 + 3 * 4 = 14");

        let result = calc.execute(make_args("sqrt(16)")).await.unwrap();
        assert_eq!(result.content, "sqrt(16) = 4");
    }

    #[tokio::test]
    async fn test_precision() {
        let calc = Calculator::new();

        let result = calc
            .execute(make_args_with_precision("pi", serde_json::json!(2)))
            .await
            .unwrap();
        assert_eq!(result.content, "pi = 3.14");

        let result = calc
            .execute(make_args_with_precision("10 / 4", Value::String("1".into())))
            .await
            .unwrap();
        assert_eq!(result.content, "10 / 4 = 2.5");

        let result = calc
            .execute(make_args_with_precision("1 / 3", Value::Null))
            .await
            .unwrap();
        assert!(result.content.starts_with("1 / 3 = 0.333"));
    }

    #[tokio::test]
    async fn test_invalid_precision() {
        let calc = Calculator::new();

        let result = calc
            .execute(make_args_with_precision("pi", serde_json::json!(-1)))
            .await;
        assert!(matches!(result, Err(ToolError::InvalidParameter { .. })));

        let result = calc
            .execute(make_args_with_precision("pi", serde_json::json!(40)))
            .await;
        assert!(matches!(result, Err(ToolError::InvalidParameter { .. })));
    }

    #[tokio::test]
    async fn test_invalid_expression() {
        let calc = Calculator::new();

        let result = calc.execute(make_args("2 +")).await;
        assert!(matches!(result, Err(ToolError::EvalError(_))));

        let result = calc.execute(make_args("undefined_var")).await;
        assert!(matches!(result, Err(ToolError::EvalError(_))));
    }

    #[tokio::test]
    async fn test_missing_expression() {
        let calc = Calculator::new();
        let result = calc.execute(ToolArgs::new(HashMap::new())).await;
        assert!(matches!(result, Err(ToolError::MissingParameter(_))));
    }

    #[test]
    fn test_published_parameters() {
        let params = Calculator::new().parameters();
        assert_eq!(params.len(), 2);
        assert!(params[0].is_required());
        assert!(params[1].is_schema_ambiguous());
    }
}
