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

//! Expression AST node definitions

use super::operator::BinaryOperator;
use bigdecimal::BigDecimal;
use smallvec::SmallVec;
use std::fmt;

/// AST representation of yap expressions
///
/// Nodes are built once by the parser and never mutated; each node owns its
/// children.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExpressionNode {
    /// Accessor string resolved against the document (`$.books[0].name`, `title`, `@`)
    Identifier(String),

    /// Literal value fixed at parse time
    Literal(LiteralValue),

    /// Binary operation (boxed for size optimization)
    BinaryOp(Box<BinaryOpData>),

    /// Function call with name and unevaluated arguments (boxed for size optimization)
    FunctionCall(Box<FunctionCallData>),
}

/// Literal values
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LiteralValue {
    /// String literal
    String(String),
    /// Numeric literal with arbitrary precision
    Decimal(BigDecimal),
}

/// Binary operation data (separate struct to optimize enum size)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BinaryOpData {
    /// Left operand
    pub left: ExpressionNode,
    /// The operator
    pub op: BinaryOperator,
    /// Right operand
    pub right: ExpressionNode,
}

/// Function call data (separate struct to optimize enum size)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionCallData {
    /// Function name
    pub name: String,
    /// Arguments in call order
    pub args: SmallVec<[ExpressionNode; 4]>,
}

impl ExpressionNode {
    /// Create an identifier node
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::Identifier(name.into())
    }

    /// Create a string literal node
    pub fn string(value: impl Into<String>) -> Self {
        Self::Literal(LiteralValue::String(value.into()))
    }

    /// Create a numeric literal node
    pub fn decimal(value: impl Into<BigDecimal>) -> Self {
        Self::Literal(LiteralValue::Decimal(value.into()))
    }

    /// Create a binary operation node
    pub fn binary_op(left: ExpressionNode, op: BinaryOperator, right: ExpressionNode) -> Self {
        Self::BinaryOp(Box::new(BinaryOpData { left, op, right }))
    }

    /// Create a function call node
    pub fn function_call(
        name: impl Into<String>,
        args: impl Into<SmallVec<[ExpressionNode; 4]>>,
    ) -> Self {
        Self::FunctionCall(Box::new(FunctionCallData {
            name: name.into(),
            args: args.into(),
        }))
    }

    /// Get binary operation data if this is a binary operation
    pub fn as_binary_op(&self) -> Option<&BinaryOpData> {
        match self {
            Self::BinaryOp(data) => Some(data),
            _ => None,
        }
    }

    /// Short name of the node variant, used in error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Identifier(_) => "identifier",
            Self::Literal(_) => "literal",
            Self::BinaryOp(_) => "binary operation",
            Self::FunctionCall(_) => "function call",
        }
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => {
                f.write_str("\"")?;
                for ch in s.chars() {
                    match ch {
                        '\n' => f.write_str("\\n")?,
                        '\r' => f.write_str("\\r")?,
                        '"' => f.write_str("\\\"")?,
                        '\\' => f.write_str("\\\\")?,
                        c => write!(f, "{c}")?,
                    }
                }
                f.write_str("\"")
            }
            Self::Decimal(d) => write!(f, "{d}"),
        }
    }
}

/// Canonical text form; binary operations are parenthesized so the
/// right-leaning grouping is visible.
impl fmt::Display for ExpressionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(name) => f.write_str(name),
            Self::Literal(literal) => write!(f, "{literal}"),
            Self::BinaryOp(data) => write!(f, "({} {} {})", data.left, data.op, data.right),
            Self::FunctionCall(data) => {
                write!(f, "{}(", data.name)?;
                for (i, arg) in data.args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(")")
            }
        }
    }
}
