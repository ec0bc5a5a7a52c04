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

//! Tokenizer for yap expressions
//!
//! Streams the expression one character at a time and emits a flat sequence of
//! typed tokens. Whitespace never leaves the tokenizer. Accessor strings such as
//! `$.books[0].name` are captured whole as a single identifier token and split
//! later by the path resolver.

use super::error::{LexError, LexResult};
use bigdecimal::BigDecimal;
use std::fmt;
use std::str::FromStr;

/// Kind of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Accessor or function name (`$.a[0].b`, `title`, `@`, `length`)
    Identifier,
    /// Double-quoted string literal, escapes already applied
    String,
    /// Numeric literal
    Numeric,
    /// Reserved for prefix operators; never produced by the tokenizer
    UnaryOperator,
    /// Comparison or arithmetic operator
    BinaryOperator,
    /// `(`, `)` or `,`
    Punctuation,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Identifier => "identifier",
            TokenKind::String => "string",
            TokenKind::Numeric => "numeric",
            TokenKind::UnaryOperator => "unary operator",
            TokenKind::BinaryOperator => "binary operator",
            TokenKind::Punctuation => "punctuation",
        };
        f.write_str(name)
    }
}

/// A single token produced by the [`Tokenizer`]
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Token kind
    pub kind: TokenKind,
    /// Display text. For strings this is the unescaped content; for numbers it
    /// keeps any `_` and `,` separators exactly as written.
    pub literal: String,
    /// Parsed value of a numeric token
    pub numeric: Option<BigDecimal>,
    /// Whether a numeric token contained a decimal point
    pub is_decimal: bool,
    /// Character offset of the first character of the token
    pub position: usize,
}

impl Token {
    fn new(kind: TokenKind, literal: impl Into<String>, position: usize) -> Self {
        Self {
            kind,
            literal: literal.into(),
            numeric: None,
            is_decimal: false,
            position,
        }
    }

    /// True for a punctuation token with the given text
    pub fn is_punctuation(&self, text: &str) -> bool {
        self.kind == TokenKind::Punctuation && self.literal == text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::String => write!(f, "\"{}\"", self.literal),
            _ => f.write_str(&self.literal),
        }
    }
}

/// Character-at-a-time tokenizer with one character of pushback
pub struct Tokenizer<'input> {
    input: &'input str,
    /// Byte offset of the next unread character
    offset: usize,
    /// Character offset of the next unread character
    position: usize,
    /// Width in bytes of the last character read, for `unread_char`
    last_width: Option<usize>,
}

impl<'input> Tokenizer<'input> {
    /// Create a tokenizer over an expression
    pub fn new(input: &'input str) -> Self {
        Self {
            input,
            offset: 0,
            position: 0,
            last_width: None,
        }
    }

    fn read_char(&mut self) -> Option<char> {
        let ch = self.input[self.offset..].chars().next()?;
        self.offset += ch.len_utf8();
        self.position += 1;
        self.last_width = Some(ch.len_utf8());
        Some(ch)
    }

    /// Push the last character read back onto the input. Only one level of
    /// pushback is kept.
    fn unread_char(&mut self) {
        if let Some(width) = self.last_width.take() {
            self.offset -= width;
            self.position -= 1;
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.offset..].chars().next()
    }

    /// Read the next token, or `None` at end of input
    pub fn next_token(&mut self) -> LexResult<Option<Token>> {
        loop {
            let start = self.position;
            let Some(ch) = self.read_char() else {
                return Ok(None);
            };

            let token = match ch {
                c if c.is_whitespace() => continue,
                '(' | ')' | ',' => Token::new(TokenKind::Punctuation, ch, start),
                '"' => self.read_string(start)?,
                '=' | '!' | '<' | '>' => self.read_comparison(ch, start)?,
                '*' | '+' | '-' | '/' => Token::new(TokenKind::BinaryOperator, ch, start),
                c if c.is_ascii_digit() => self.read_number(c, start)?,
                c if is_identifier_start(c) => self.read_identifier(c, start),
                c => {
                    return Err(LexError::UnrecognizedCharacter {
                        character: c,
                        position: start,
                    });
                }
            };

            log::trace!("token {:?} '{}' at {}", token.kind, token.literal, start);
            return Ok(Some(token));
        }
    }

    /// Tokenize the whole input
    pub fn tokenize_all(&mut self) -> LexResult<Vec<Token>> {
        let mut tokens = Vec::with_capacity(16);
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Quoted string; the opening quote is already consumed
    fn read_string(&mut self, start: usize) -> LexResult<Token> {
        let mut text = String::new();

        loop {
            let escape_position = self.position;
            match self.read_char() {
                None => return Err(LexError::UnterminatedString { position: start }),
                Some('"') => break,
                Some('\\') => {
                    let escaped = match self.read_char() {
                        Some('n') => '\n',
                        Some('r') => '\r',
                        Some('"') => '"',
                        Some('\\') => '\\',
                        Some(other) => {
                            return Err(LexError::UnsupportedEscape {
                                escape: other,
                                position: escape_position,
                            });
                        }
                        None => return Err(LexError::UnterminatedString { position: start }),
                    };
                    text.push(escaped);
                }
                Some(c) => text.push(c),
            }
        }

        Ok(Token::new(TokenKind::String, text, start))
    }

    /// `<`, `>`, `<=`, `>=`, `==`, `!=`
    fn read_comparison(&mut self, first: char, start: usize) -> LexResult<Token> {
        let mut operator = String::from(first);

        match self.read_char() {
            Some('=') => operator.push('='),
            next => {
                if next.is_some() {
                    self.unread_char();
                }
                if matches!(first, '<' | '>') {
                    return Ok(Token::new(TokenKind::BinaryOperator, operator, start));
                }
                return Err(LexError::IncompleteOperator {
                    operator,
                    position: start,
                });
            }
        }

        if self.peek_char() == Some('=') {
            operator.push('=');
            return Err(LexError::UnsupportedEquality {
                operator,
                position: start,
            });
        }

        Ok(Token::new(TokenKind::BinaryOperator, operator, start))
    }

    /// Digits with at most one `.`; `_` and `,` between digits are kept in the
    /// literal and dropped from the value
    fn read_number(&mut self, first: char, start: usize) -> LexResult<Token> {
        let mut literal = String::from(first);
        let mut digits = String::from(first);
        let mut is_decimal = false;

        while let Some(ch) = self.read_char() {
            match ch {
                c if c.is_ascii_digit() => {
                    literal.push(c);
                    digits.push(c);
                }
                '.' => {
                    literal.push('.');
                    if is_decimal {
                        return Err(LexError::AlreadyDecimal {
                            literal,
                            position: start,
                        });
                    }
                    is_decimal = true;
                    digits.push('.');
                }
                '_' | ',' if self.peek_char().is_some_and(|c| c.is_ascii_digit()) => {
                    literal.push(ch);
                }
                _ => {
                    self.unread_char();
                    break;
                }
            }
        }

        let value = BigDecimal::from_str(&digits).map_err(|_| LexError::InvalidNumber {
            literal: literal.clone(),
            position: start,
        })?;

        Ok(Token {
            kind: TokenKind::Numeric,
            literal,
            numeric: Some(value),
            is_decimal,
            position: start,
        })
    }

    fn read_identifier(&mut self, first: char, start: usize) -> Token {
        let mut literal = String::from(first);

        while let Some(ch) = self.read_char() {
            if is_identifier_continue(ch) {
                literal.push(ch);
            } else {
                self.unread_char();
                break;
            }
        }

        Token::new(TokenKind::Identifier, literal, start)
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

#[inline]
fn is_identifier_start(ch: char) -> bool {
    matches!(ch, '$' | '@' | '_') || ch.is_alphanumeric()
}

#[inline]
fn is_identifier_continue(ch: char) -> bool {
    matches!(ch, '_' | '.' | '$' | '[' | ']') || ch.is_alphanumeric()
}

/// Tokenize an expression
pub fn tokenize(input: &str) -> LexResult<Vec<Token>> {
    Tokenizer::new(input).tokenize_all()
}
