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

// Error types for expression evaluation

use crate::path::PathError;
use thiserror::Error;

/// Result type for evaluation operations
pub type EvaluationResult<T> = Result<T, EvaluationError>;

/// Errors that can occur while evaluating an expression
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    /// No builtin registered under the called name
    #[error("undefined function: {name}")]
    UndefinedFunction {
        /// Called name
        name: String,
    },

    /// Wrong number of arguments
    #[error("function '{name}' expects {expected} arguments, got {actual}")]
    InvalidArity {
        /// Function name
        name: String,
        /// Required argument count
        expected: usize,
        /// Arguments supplied
        actual: usize,
    },

    /// Relational operand that is not a number
    #[error("operand is not a number: '{operator}' got {actual}")]
    NotANumber {
        /// Operator symbol
        operator: &'static str,
        /// Type of the offending operand
        actual: &'static str,
    },

    /// Operator with no evaluation rule
    #[error("unsupported operator: {operator}")]
    UnsupportedOperator {
        /// Operator symbol
        operator: &'static str,
    },

    /// Builtin applied to a value of the wrong type
    #[error("{function} not supported for type {actual}")]
    UnsupportedType {
        /// Function name
        function: String,
        /// Type of the offending value
        actual: &'static str,
    },

    /// Argument evaluated to the wrong type
    #[error("function '{function}' argument {index} expects {expected}, got {actual}")]
    InvalidArgumentType {
        /// Function name
        function: String,
        /// Zero-based argument index
        index: usize,
        /// Expected type
        expected: &'static str,
        /// Actual type
        actual: &'static str,
    },

    /// Filter predicate that is not a binary operation
    #[error("function '{function}' expects a condition as predicate, got {actual}")]
    InvalidPredicate {
        /// Function name
        function: String,
        /// Kind of the supplied expression
        actual: &'static str,
    },

    /// Filter predicate that produced something other than a boolean
    ///
    /// Every comparison operator yields a boolean today, so this only fires if
    /// an operator with a non-boolean result is added.
    #[error("predicate must evaluate to a boolean, got {actual}")]
    NonBooleanPredicate {
        /// Type of the predicate result
        actual: &'static str,
    },

    /// Accessor failed to parse or resolve
    #[error(transparent)]
    Path(#[from] PathError),
}
