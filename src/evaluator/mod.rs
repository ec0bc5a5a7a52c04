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

//! Expression evaluator
//!
//! Each [`ExpressionNode`] variant evaluates against an [`EvaluationContext`]:
//! identifiers resolve as paths, literals return their value, binary operations
//! evaluate both sides first, and function calls hand their unevaluated
//! arguments to the registered builtin.

mod error;
pub mod operations;

pub use error::{EvaluationError, EvaluationResult};

use crate::ast::{ExpressionNode, LiteralValue};
use crate::model::Value;
use crate::path::parse_path;
use crate::registry::FunctionRegistry;

/// Document and function table an expression is evaluated against
#[derive(Clone, Copy)]
pub struct EvaluationContext<'a> {
    document: &'a Value,
    functions: &'a FunctionRegistry,
}

impl<'a> EvaluationContext<'a> {
    /// Create a new evaluation context
    pub fn new(document: &'a Value, functions: &'a FunctionRegistry) -> Self {
        Self {
            document,
            functions,
        }
    }

    /// Document identifiers resolve against
    pub fn document(&self) -> &'a Value {
        self.document
    }

    /// Builtins available to function calls
    pub fn functions(&self) -> &'a FunctionRegistry {
        self.functions
    }

    /// Same function table, different document
    pub fn with_document<'b>(&self, document: &'b Value) -> EvaluationContext<'b>
    where
        'a: 'b,
    {
        EvaluationContext {
            document,
            functions: self.functions,
        }
    }
}

impl std::fmt::Debug for EvaluationContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvaluationContext")
            .field("document", self.document)
            .field("functions", &self.functions.names())
            .finish()
    }
}

impl ExpressionNode {
    /// Evaluate this node against a context
    pub fn evaluate(&self, ctx: &EvaluationContext<'_>) -> EvaluationResult<Value> {
        match self {
            ExpressionNode::Identifier(accessor) => {
                let path = parse_path(accessor)?;
                Ok(path.resolve(ctx.document())?.clone())
            }
            ExpressionNode::Literal(literal) => Ok(match literal {
                LiteralValue::String(s) => Value::String(s.clone()),
                LiteralValue::Decimal(d) => Value::Number(d.clone()),
            }),
            ExpressionNode::BinaryOp(data) => {
                let left = data.left.evaluate(ctx)?;
                let right = data.right.evaluate(ctx)?;
                operations::apply_binary(data.op, &left, &right)
            }
            ExpressionNode::FunctionCall(data) => {
                let function = ctx.functions().get(&data.name).ok_or_else(|| {
                    EvaluationError::UndefinedFunction {
                        name: data.name.clone(),
                    }
                })?;
                function.validate_args(&data.args)?;
                log::debug!("calling {}() with {} arguments", data.name, data.args.len());
                function.evaluate(&data.args, ctx)
            }
        }
    }
}
