//! where() function implementation
//!
//! Filters an array with a condition evaluated once per element. The element
//! is bound to `@` by evaluating the condition against the single-key document
//! `{"@": element}`, so `@` and `@.field` resolve through ordinary key lookup.

use crate::ast::ExpressionNode;
use crate::evaluator::{EvaluationContext, EvaluationError, EvaluationResult};
use crate::model::{Object, Value};
use crate::registry::function::BuiltinFunction;

/// Key the current element is bound to
const ELEMENT_KEY: &str = "@";

/// where(array, condition) - elements for which the condition is true
pub struct WhereFunction;

impl BuiltinFunction for WhereFunction {
    fn name(&self) -> &str {
        "where"
    }

    fn arity(&self) -> usize {
        2
    }

    fn documentation(&self) -> &str {
        "Returns the elements of the array for which the condition evaluates to true, in their original order. The condition must be a comparison and refers to the current element as `@`."
    }

    fn evaluate(
        &self,
        args: &[ExpressionNode],
        context: &EvaluationContext<'_>,
    ) -> EvaluationResult<Value> {
        let items = match args[0].evaluate(context)? {
            Value::Array(items) => items,
            other => {
                return Err(EvaluationError::InvalidArgumentType {
                    function: self.name().to_string(),
                    index: 0,
                    expected: "array",
                    actual: other.type_name(),
                });
            }
        };

        let predicate = &args[1];
        if predicate.as_binary_op().is_none() {
            return Err(EvaluationError::InvalidPredicate {
                function: self.name().to_string(),
                actual: predicate.kind_name(),
            });
        }

        let mut filtered = Vec::with_capacity(items.len());
        for item in items {
            let mut scope = Object::with_capacity(1);
            scope.insert(ELEMENT_KEY.to_string(), item.clone());
            let scope = Value::Object(scope);

            if predicate_holds(predicate.evaluate(&context.with_document(&scope))?)? {
                filtered.push(item);
            }
        }

        log::trace!("where kept {} elements", filtered.len());
        Ok(Value::Array(filtered))
    }
}

/// Condition result for one element; anything but a boolean is an error
fn predicate_holds(result: Value) -> EvaluationResult<bool> {
    match result {
        Value::Boolean(keep) => Ok(keep),
        other => Err(EvaluationError::NonBooleanPredicate {
            actual: other.type_name(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathError;
    use crate::registry::create_standard_registry;
    use pretty_assertions::assert_eq;

    fn run(expression: &str) -> EvaluationResult<Value> {
        let doc = Value::from_json_str(
            r#"{
                "numbers": [1, 2, 3, 4, 5, 6, 7, 8, 9, 10],
                "books": [
                    {"name": "Dune", "price": 9.99},
                    {"name": "Emma", "price": 15},
                    {"name": "Ulysses", "price": 22.5}
                ],
                "word": "text"
            }"#,
        )
        .unwrap();
        let registry = create_standard_registry();
        let ctx = EvaluationContext::new(&doc, &registry);
        crate::parser::parse_expression(expression)
            .unwrap()
            .evaluate(&ctx)
    }

    #[test]
    fn test_where_keeps_order() {
        assert_eq!(
            run("where($.numbers, @ > 5)").unwrap(),
            Value::from_json_str("[6, 7, 8, 9, 10]").unwrap()
        );
    }

    #[test]
    fn test_where_with_field_access() {
        let result = run("where($.books, @.price >= 15)").unwrap();
        let names: Vec<_> = result
            .as_array()
            .unwrap()
            .iter()
            .map(|b| b.as_object().unwrap()["name"].clone())
            .collect();
        assert_eq!(names, vec![Value::from("Emma"), Value::from("Ulysses")]);
    }

    #[test]
    fn test_where_nothing_matches() {
        assert_eq!(run("where($.numbers, @ > 100)").unwrap(), Value::Array(vec![]));
    }

    #[test]
    fn test_where_predicate_may_call_functions() {
        assert_eq!(
            run(r#"where($.books, equals(length(@.name), 4) == equals(1, 1))"#).unwrap(),
            run("where($.books, @.price < 20)").unwrap()
        );
    }

    #[test]
    fn test_where_requires_array() {
        assert_eq!(
            run("where(word, @ > 1)").unwrap_err(),
            EvaluationError::InvalidArgumentType {
                function: "where".into(),
                index: 0,
                expected: "array",
                actual: "string"
            }
        );
    }

    #[test]
    fn test_where_requires_condition() {
        assert_eq!(
            run("where($.numbers, @)").unwrap_err(),
            EvaluationError::InvalidPredicate {
                function: "where".into(),
                actual: "identifier"
            }
        );
        assert!(matches!(
            run("where($.numbers, equals(@, 1))"),
            Err(EvaluationError::InvalidPredicate { .. })
        ));
    }

    #[test]
    fn test_predicate_result_must_be_boolean() {
        assert_eq!(predicate_holds(Value::Boolean(true)), Ok(true));
        assert_eq!(predicate_holds(Value::Boolean(false)), Ok(false));
        assert_eq!(
            predicate_holds(Value::from(1i64)).unwrap_err(),
            EvaluationError::NonBooleanPredicate { actual: "number" }
        );
        assert_eq!(
            predicate_holds(Value::Null).unwrap_err(),
            EvaluationError::NonBooleanPredicate { actual: "null" }
        );
    }

    #[test]
    fn test_where_root_is_not_visible() {
        assert_eq!(
            run("where($.numbers, numbers == @)").unwrap_err(),
            EvaluationError::Path(PathError::MissingKey {
                key: "numbers".into()
            })
        );
    }
}
