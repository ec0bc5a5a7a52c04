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

//! Builtin function trait and registry

use crate::ast::ExpressionNode;
use crate::evaluator::{EvaluationContext, EvaluationError, EvaluationResult};
use crate::model::Value;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// A named function callable from an expression
///
/// Builtins receive their arguments unevaluated and decide themselves when,
/// and against which document, to evaluate each one.
pub trait BuiltinFunction: Send + Sync {
    /// Get the function name
    fn name(&self) -> &str;

    /// Exact number of arguments accepted
    fn arity(&self) -> usize;

    /// Evaluate the function with the given argument expressions
    ///
    /// The evaluator calls this only after `validate_args` accepted `args`.
    fn evaluate(
        &self,
        args: &[ExpressionNode],
        context: &EvaluationContext<'_>,
    ) -> EvaluationResult<Value>;

    /// Get function documentation
    fn documentation(&self) -> &str {
        ""
    }

    /// Check the argument count before any argument is evaluated
    fn validate_args(&self, args: &[ExpressionNode]) -> EvaluationResult<()> {
        if args.len() != self.arity() {
            return Err(EvaluationError::InvalidArity {
                name: self.name().to_string(),
                expected: self.arity(),
                actual: args.len(),
            });
        }
        Ok(())
    }
}

/// Name to builtin mapping, immutable once handed to an engine
#[derive(Clone, Default)]
pub struct FunctionRegistry {
    functions: FxHashMap<String, Arc<dyn BuiltinFunction>>,
}

impl std::fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionRegistry")
            .field("functions", &self.names())
            .finish()
    }
}

impl FunctionRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a function under its own name, replacing any previous entry
    pub fn register<F: BuiltinFunction + 'static>(&mut self, function: F) {
        let name = function.name().to_string();
        log::trace!("registering function {name}");
        self.functions.insert(name, Arc::new(function));
    }

    /// Look up a function by name
    pub fn get(&self, name: &str) -> Option<&Arc<dyn BuiltinFunction>> {
        self.functions.get(name)
    }

    /// Check if a function is registered
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered functions
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// True when nothing is registered
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}
