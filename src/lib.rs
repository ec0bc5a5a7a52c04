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

//! yap: a small embeddable expression language over JSON documents
//!
//! An expression is a JSONPath-style accessor, a comparison, or a call to a
//! builtin such as `equals`, `length` or `where`:
//!
//! ```
//! let document = r#"{"numbers": [1, 2, 3, 4, 5, 6, 7]}"#;
//! assert_eq!(yap::evaluate("where($.numbers, @ > 5)", document).unwrap(), "[6,7]");
//! assert_eq!(yap::evaluate("length($.numbers) >= 2", document).unwrap(), "true");
//! ```
//!
//! Numbers are arbitrary-precision decimals from the document text through to
//! the encoded result.

#![warn(missing_docs)]

pub mod ast;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod model;
pub mod parser;
pub mod path;
pub mod registry;

pub use ast::{BinaryOperator, ExpressionNode, LiteralValue};
pub use engine::{CompiledExpression, EngineConfig, YapEngine};
pub use error::{Result, YapError};
pub use evaluator::{EvaluationContext, EvaluationError};
pub use model::Value;
pub use parser::{LexError, ParseError, Token, TokenKind, tokenize};
pub use path::{Path, PathError, parse_path};
pub use registry::{BuiltinFunction, FunctionRegistry, create_standard_registry};

/// Parse an expression into an AST
pub fn parse(expression: &str) -> Result<ExpressionNode> {
    Ok(parser::parse_expression(expression)?)
}

/// Compile an expression with the standard builtins
pub fn compile(expression: &str) -> Result<CompiledExpression> {
    YapEngine::new().compile(expression)
}

/// Evaluate an expression against JSON document text and return the result
/// encoded as JSON
pub fn evaluate(expression: &str, document: &str) -> Result<String> {
    YapEngine::new().evaluate(expression, document)
}
