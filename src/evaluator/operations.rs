// Copyright 2025 yap contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Binary operator semantics
//!
//! Equality never fails: two numbers compare by decimal value, anything else
//! compares structurally and values of different types are simply unequal.
//! Relational operators require two numbers.

use super::error::{EvaluationError, EvaluationResult};
use crate::ast::BinaryOperator;
use crate::model::Value;
use bigdecimal::BigDecimal;
use std::cmp::Ordering;

/// Value equality shared by `==`, `!=` and `equals`
pub fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => l.cmp(r) == Ordering::Equal,
        // BigDecimal equality ignores scale, so nested numbers compare by value too
        _ => left == right,
    }
}

/// Apply a binary operator to two evaluated operands
pub fn apply_binary(op: BinaryOperator, left: &Value, right: &Value) -> EvaluationResult<Value> {
    let result = match op {
        BinaryOperator::Equal => values_equal(left, right),
        BinaryOperator::NotEqual => !values_equal(left, right),
        BinaryOperator::LessThan => compare(op, left, right)? == Ordering::Less,
        BinaryOperator::GreaterThan => compare(op, left, right)? == Ordering::Greater,
        BinaryOperator::LessThanOrEqual => compare(op, left, right)? != Ordering::Greater,
        BinaryOperator::GreaterThanOrEqual => compare(op, left, right)? != Ordering::Less,
        BinaryOperator::Add
        | BinaryOperator::Subtract
        | BinaryOperator::Multiply
        | BinaryOperator::Divide => {
            return Err(EvaluationError::UnsupportedOperator {
                operator: op.symbol(),
            });
        }
    };
    Ok(Value::Boolean(result))
}

fn compare(op: BinaryOperator, left: &Value, right: &Value) -> EvaluationResult<Ordering> {
    let left = as_decimal(op, left)?;
    let right = as_decimal(op, right)?;
    Ok(left.cmp(right))
}

fn as_decimal(op: BinaryOperator, value: &Value) -> EvaluationResult<&BigDecimal> {
    value.as_number().ok_or(EvaluationError::NotANumber {
        operator: op.symbol(),
        actual: value.type_name(),
    })
}
