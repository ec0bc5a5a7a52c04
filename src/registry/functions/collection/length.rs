//! length() function implementation

use crate::ast::ExpressionNode;
use crate::evaluator::{EvaluationContext, EvaluationError, EvaluationResult};
use crate::model::Value;
use crate::registry::function::BuiltinFunction;
use bigdecimal::BigDecimal;

/// length(x) - character count of a string or element count of an array
pub struct LengthFunction;

impl BuiltinFunction for LengthFunction {
    fn name(&self) -> &str {
        "length"
    }

    fn arity(&self) -> usize {
        1
    }

    fn documentation(&self) -> &str {
        "Returns the number of characters in a string or the number of elements in an array."
    }

    fn evaluate(
        &self,
        args: &[ExpressionNode],
        context: &EvaluationContext<'_>,
    ) -> EvaluationResult<Value> {
        let count = match args[0].evaluate(context)? {
            Value::String(s) => s.chars().count(),
            Value::Array(items) => items.len(),
            other => {
                return Err(EvaluationError::UnsupportedType {
                    function: self.name().to_string(),
                    actual: other.type_name(),
                });
            }
        };
        Ok(Value::Number(BigDecimal::from(count as u64)))
    }
}
