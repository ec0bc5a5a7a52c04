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

//! Tokenizer and parser error types

use thiserror::Error;

/// Result type for tokenizer operations
pub type LexResult<T> = Result<T, LexError>;

/// Result type for parser operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Malformed token encountered while tokenizing an expression
///
/// Positions are character offsets into the expression text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// Backslash escape other than `\n`, `\r`, `\"` or `\\`
    #[error("unsupported escape sequence '\\{escape}' at position {position}")]
    UnsupportedEscape {
        /// Character following the backslash
        escape: char,
        /// Position of the backslash
        position: usize,
    },

    /// End of input reached inside a quoted string
    #[error("unterminated string starting at position {position}")]
    UnterminatedString {
        /// Position of the opening quote
        position: usize,
    },

    /// `=` or `!` not followed by `=`
    #[error("incomplete operator '{operator}' at position {position}")]
    IncompleteOperator {
        /// Operator text read so far
        operator: String,
        /// Position of the operator
        position: usize,
    },

    /// Third consecutive `=` such as `===` or `>==`
    #[error("unsupported equality operation '{operator}' at position {position}")]
    UnsupportedEquality {
        /// Operator text including the offending `=`
        operator: String,
        /// Position of the operator
        position: usize,
    },

    /// Second decimal point inside a numeric literal
    #[error("already a decimal: '{literal}' at position {position}")]
    AlreadyDecimal {
        /// Numeric text read so far, including the second point
        literal: String,
        /// Position of the numeric literal
        position: usize,
    },

    /// Numeric literal that does not parse as a decimal
    #[error("invalid numeric literal '{literal}' at position {position}")]
    InvalidNumber {
        /// Numeric literal as written
        literal: String,
        /// Position of the numeric literal
        position: usize,
    },

    /// Character that starts no token
    #[error("unrecognized character '{character}' at position {position}")]
    UnrecognizedCharacter {
        /// The offending character
        character: char,
        /// Position of the character
        position: usize,
    },
}

/// Token sequence that does not form an expression
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The expression text could not be tokenized
    #[error("lex error: {0}")]
    Lex(#[from] LexError),

    /// Input ended where a primary, `,` or `)` was expected
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,

    /// A token of the wrong kind where an operator or primary was expected
    #[error("unexpected token: {literal} at position {position}")]
    UnexpectedToken {
        /// Literal text of the offending token
        literal: String,
        /// Position of the offending token
        position: usize,
    },

    /// Nesting deeper than the configured limit
    #[error("expression nesting exceeds the limit of {limit}")]
    NestingTooDeep {
        /// Configured maximum depth
        limit: usize,
    },
}
