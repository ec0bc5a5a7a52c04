//! equals() function implementation

use crate::ast::ExpressionNode;
use crate::evaluator::operations::values_equal;
use crate::evaluator::{EvaluationContext, EvaluationResult};
use crate::model::Value;
use crate::registry::function::BuiltinFunction;

/// equals(a, b) - value equality of two expressions
pub struct EqualsFunction;

impl BuiltinFunction for EqualsFunction {
    fn name(&self) -> &str {
        "equals"
    }

    fn arity(&self) -> usize {
        2
    }

    fn documentation(&self) -> &str {
        "Evaluates both arguments and returns true when they are equal. Numbers compare by decimal value; values of different types are never equal."
    }

    fn evaluate(
        &self,
        args: &[ExpressionNode],
        context: &EvaluationContext<'_>,
    ) -> EvaluationResult<Value> {
        let left = args[0].evaluate(context)?;
        let right = args[1].evaluate(context)?;
        Ok(Value::Boolean(values_equal(&left, &right)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::create_standard_registry;
    use rstest::rstest;

    #[rstest]
    #[case(r#"equals(name, "Project Hail Mary 🌌")"#, true)]
    #[case(r#"equals(name, "Project Hail Mary")"#, false)]
    #[case("equals(price, 12.50)", true)]
    #[case("equals(price, 12.5)", true)]
    #[case(r#"equals(price, "12.5")"#, false)]
    #[case("equals(tags, tags)", true)]
    fn test_equals(#[case] expression: &str, #[case] expected: bool) {
        let doc = Value::from_json_str(
            r#"{"name": "Project Hail Mary 🌌", "price": 12.5, "tags": ["a", "b"]}"#,
        )
        .unwrap();
        let registry = create_standard_registry();
        let ctx = EvaluationContext::new(&doc, &registry);
        let node = crate::parser::parse_expression(expression).unwrap();
        assert_eq!(node.evaluate(&ctx).unwrap(), Value::Boolean(expected));
    }
}
