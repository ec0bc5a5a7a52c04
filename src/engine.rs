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

//! yap engine - the main entry point for compiling and evaluating expressions

use crate::ast::ExpressionNode;
use crate::error::{Result, YapError};
use crate::evaluator::EvaluationContext;
use crate::model::Value;
use crate::parser::{DEFAULT_MAX_DEPTH, parse_with_max_depth};
use crate::registry::{FunctionRegistry, create_standard_registry};
use std::sync::Arc;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum nesting of operands and call arguments accepted by the parser
    pub max_depth: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Compiles expressions against a fixed function table
#[derive(Debug, Clone)]
pub struct YapEngine {
    functions: Arc<FunctionRegistry>,
    config: EngineConfig,
}

impl Default for YapEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl YapEngine {
    /// Create an engine with the standard builtins
    pub fn new() -> Self {
        Self::with_registry(create_standard_registry())
    }

    /// Create an engine with a caller-supplied function table
    pub fn with_registry(functions: FunctionRegistry) -> Self {
        Self {
            functions: Arc::new(functions),
            config: EngineConfig::default(),
        }
    }

    /// Replace the engine configuration
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Current configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Function table shared by every compiled expression
    pub fn functions(&self) -> &FunctionRegistry {
        &self.functions
    }

    /// Tokenize and parse an expression
    pub fn compile(&self, expression: &str) -> Result<CompiledExpression> {
        log::debug!("compiling expression: {expression}");
        let root = parse_with_max_depth(expression, self.config.max_depth)?;
        log::debug!("compiled to {root}");

        Ok(CompiledExpression {
            source: expression.to_string(),
            root,
            functions: Arc::clone(&self.functions),
        })
    }

    /// Compile an expression and evaluate it against JSON document text,
    /// returning the JSON-encoded result
    pub fn evaluate(&self, expression: &str, document: &str) -> Result<String> {
        let compiled = self.compile(expression)?;
        let result = compiled.evaluate(document)?;
        serde_json::to_string(&result).map_err(YapError::Encode)
    }
}

/// Parsed expression ready to be evaluated any number of times
#[derive(Debug, Clone)]
pub struct CompiledExpression {
    source: String,
    root: ExpressionNode,
    functions: Arc<FunctionRegistry>,
}

impl CompiledExpression {
    /// Expression text this was compiled from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Root of the AST
    pub fn root(&self) -> &ExpressionNode {
        &self.root
    }

    /// Evaluate against JSON document text
    pub fn evaluate(&self, document: &str) -> Result<serde_json::Value> {
        let document = Value::from_json_str(document)?;
        self.evaluate_value(&document)?
            .to_json()
            .map_err(YapError::Encode)
    }

    /// Evaluate against an already decoded `serde_json` document
    pub fn evaluate_json(&self, document: &serde_json::Value) -> Result<serde_json::Value> {
        let document = Value::try_from(document.clone())?;
        self.evaluate_value(&document)?
            .to_json()
            .map_err(YapError::Encode)
    }

    /// Evaluate against a decoded document
    pub fn evaluate_value(&self, document: &Value) -> Result<Value> {
        log::debug!("evaluating {}", self.source);
        let ctx = EvaluationContext::new(document, &self.functions);
        let result = self.root.evaluate(&ctx)?;
        log::debug!("{} evaluated to {result}", self.source);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::{EvaluationError, EvaluationResult};
    use crate::parser::ParseError;
    use crate::registry::BuiltinFunction;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_compile_keeps_source_and_root() {
        let engine = YapEngine::new();
        let compiled = engine.compile("length($.books) >= 2").unwrap();
        assert_eq!(compiled.source(), "length($.books) >= 2");
        assert_eq!(compiled.root().to_string(), "(length($.books) >= 2)");
    }

    #[test]
    fn test_compiled_expression_is_reusable() {
        let compiled = YapEngine::new().compile("$.a").unwrap();
        assert_eq!(compiled.evaluate(r#"{"a": 1}"#).unwrap(), serde_json::json!(1));
        assert_eq!(compiled.evaluate(r#"{"a": "x"}"#).unwrap(), serde_json::json!("x"));
    }

    #[test]
    fn test_evaluate_json_and_value() {
        let compiled = YapEngine::new().compile("equals(a, 2)").unwrap();
        assert_eq!(
            compiled.evaluate_json(&serde_json::json!({"a": 2})).unwrap(),
            serde_json::json!(true)
        );
        let doc = Value::from_json_str(r#"{"a": 3}"#).unwrap();
        assert_eq!(compiled.evaluate_value(&doc).unwrap(), Value::Boolean(false));
    }

    #[test]
    fn test_max_depth_config() {
        let engine = YapEngine::new().with_config(EngineConfig { max_depth: 2 });
        assert!(engine.compile("length(x)").is_ok());
        assert!(matches!(
            engine.compile("length(length(length(x)))"),
            Err(YapError::Parse(ParseError::NestingTooDeep { limit: 2 }))
        ));
    }

    #[test]
    fn test_decode_error() {
        let compiled = YapEngine::new().compile("a").unwrap();
        assert!(matches!(compiled.evaluate("{"), Err(YapError::Decode(_))));
    }

    struct Upper;

    impl BuiltinFunction for Upper {
        fn name(&self) -> &str {
            "upper"
        }

        fn arity(&self) -> usize {
            1
        }

        fn evaluate(
            &self,
            args: &[ExpressionNode],
            context: &EvaluationContext<'_>,
        ) -> EvaluationResult<Value> {
            match args[0].evaluate(context)? {
                Value::String(s) => Ok(Value::String(s.to_uppercase())),
                other => Err(EvaluationError::UnsupportedType {
                    function: "upper".into(),
                    actual: other.type_name(),
                }),
            }
        }
    }

    #[test]
    fn test_custom_registry() {
        let mut registry = create_standard_registry();
        registry.register(Upper);
        let engine = YapEngine::with_registry(registry);
        assert_eq!(
            engine.evaluate("upper(name)", r#"{"name": "dune"}"#).unwrap(),
            r#""DUNE""#
        );

        let standard = YapEngine::new();
        assert!(matches!(
            standard.evaluate("upper(name)", r#"{"name": "dune"}"#),
            Err(YapError::Evaluation(EvaluationError::UndefinedFunction { .. }))
        ));
    }
}
