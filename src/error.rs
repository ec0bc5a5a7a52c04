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

//! Error types for yap
//!
//! Every stage has its own error enum; [`YapError`] wraps them for the public
//! entry points. A path failure keeps its own variant whether it happens while
//! resolving an identifier directly or inside a builtin.

use crate::evaluator::EvaluationError;
use crate::model::DecodeError;
use crate::parser::{LexError, ParseError};
use crate::path::PathError;
use thiserror::Error;

/// Result type alias for yap operations
pub type Result<T> = std::result::Result<T, YapError>;

/// Error type for compiling and evaluating expressions
#[derive(Error, Debug)]
pub enum YapError {
    /// Tokenizing or parsing the expression failed
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The document is not valid JSON
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// An accessor failed to parse or resolve
    #[error("path error: {0}")]
    Path(#[from] PathError),

    /// Evaluating the expression failed
    #[error("evaluation error: {0}")]
    Evaluation(EvaluationError),

    /// Encoding the result as JSON failed
    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),
}

impl From<LexError> for YapError {
    fn from(error: LexError) -> Self {
        YapError::Parse(ParseError::Lex(error))
    }
}

impl From<EvaluationError> for YapError {
    fn from(error: EvaluationError) -> Self {
        match error {
            EvaluationError::Path(path) => YapError::Path(path),
            other => YapError::Evaluation(other),
        }
    }
}
