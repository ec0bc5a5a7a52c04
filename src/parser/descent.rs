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

//! Recursive-descent parser
//!
//! Single pass, one token of lookahead, no backtracking and no precedence
//! table. After a left operand, a binary operator makes the parser recurse
//! into the rest of the input for the right operand, so `a == b == c` groups
//! as `a == (b == c)`.
//!
//! ```text
//! expression := primary ( BinaryOperator expression )?
//! primary    := Identifier ( "(" arguments? ")" )? | String | Numeric
//! arguments  := expression ( "," expression )*
//! ```

use super::error::{ParseError, ParseResult};
use super::tokenizer::{Token, TokenKind};
use crate::ast::{BinaryOperator, ExpressionNode};
use smallvec::SmallVec;

/// Default limit on recursive nesting of operands and call arguments
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Parser over a token sequence
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a parser with the default nesting limit
    pub fn new(tokens: &'a [Token]) -> Self {
        Self::with_max_depth(tokens, DEFAULT_MAX_DEPTH)
    }

    /// Create a parser with a custom nesting limit
    pub fn with_max_depth(tokens: &'a [Token], max_depth: usize) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
            max_depth,
        }
    }

    /// Parse the whole token sequence into a single expression
    pub fn parse(mut self) -> ParseResult<ExpressionNode> {
        let root = self.parse_expression()?;

        if let Some(token) = self.current() {
            return Err(unexpected(token));
        }

        Ok(root)
    }

    #[inline]
    fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    #[inline]
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos + 1)
    }

    #[inline]
    fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    fn parse_expression(&mut self) -> ParseResult<ExpressionNode> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(ParseError::NestingTooDeep {
                limit: self.max_depth,
            });
        }

        let left = self.parse_primary()?;
        let result = self.parse_operator(left);

        self.depth -= 1;
        result
    }

    /// Binary operator after a complete left operand, if any
    fn parse_operator(&mut self, left: ExpressionNode) -> ParseResult<ExpressionNode> {
        let Some(token) = self.current() else {
            return Ok(left);
        };
        if token.kind != TokenKind::BinaryOperator {
            return Ok(left);
        }

        let op = BinaryOperator::from_symbol(&token.literal).ok_or_else(|| unexpected(token))?;
        self.advance();

        let right = self.parse_expression()?;
        Ok(ExpressionNode::binary_op(left, op, right))
    }

    fn parse_primary(&mut self) -> ParseResult<ExpressionNode> {
        let token = self.current().ok_or(ParseError::UnexpectedEndOfInput)?;

        match token.kind {
            TokenKind::Identifier => {
                if self.peek().is_some_and(|next| next.is_punctuation("(")) {
                    return self.parse_function_call(token);
                }
                self.advance();
                Ok(ExpressionNode::identifier(token.literal.as_str()))
            }
            TokenKind::String => {
                self.advance();
                Ok(ExpressionNode::string(token.literal.as_str()))
            }
            TokenKind::Numeric => {
                let value = token.numeric.clone().ok_or_else(|| unexpected(token))?;
                self.advance();
                Ok(ExpressionNode::decimal(value))
            }
            TokenKind::UnaryOperator | TokenKind::BinaryOperator | TokenKind::Punctuation => {
                Err(unexpected(token))
            }
        }
    }

    /// `name(arg, ...)`; the current token is the name
    fn parse_function_call(&mut self, name: &Token) -> ParseResult<ExpressionNode> {
        self.advance(); // name
        self.advance(); // '('

        let mut args: SmallVec<[ExpressionNode; 4]> = SmallVec::new();

        if self.current().is_some_and(|t| t.is_punctuation(")")) {
            self.advance();
            return Ok(ExpressionNode::function_call(name.literal.as_str(), args));
        }

        loop {
            args.push(self.parse_expression()?);

            let token = self.current().ok_or(ParseError::UnexpectedEndOfInput)?;
            if token.is_punctuation(",") {
                self.advance();
            } else if token.is_punctuation(")") {
                self.advance();
                break;
            } else {
                return Err(unexpected(token));
            }
        }

        Ok(ExpressionNode::function_call(name.literal.as_str(), args))
    }
}

fn unexpected(token: &Token) -> ParseError {
    ParseError::UnexpectedToken {
        literal: token.literal.clone(),
        position: token.position,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::tokenizer::tokenize;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn parse(input: &str) -> ParseResult<ExpressionNode> {
        let tokens = tokenize(input)?;
        Parser::new(&tokens).parse()
    }

    #[test]
    fn test_identifier() {
        assert_eq!(
            parse("$.books[0].name").unwrap(),
            ExpressionNode::identifier("$.books[0].name")
        );
    }

    #[test]
    fn test_literals() {
        assert_eq!(parse(r#""hello""#).unwrap(), ExpressionNode::string("hello"));
        assert_eq!(parse("1_000").unwrap(), ExpressionNode::decimal(1000));
    }

    #[test]
    fn test_function_call_with_predicate() {
        let expected = ExpressionNode::function_call(
            "where",
            vec![
                ExpressionNode::identifier("$.numbers"),
                ExpressionNode::binary_op(
                    ExpressionNode::identifier("@"),
                    BinaryOperator::GreaterThan,
                    ExpressionNode::decimal(5),
                ),
            ],
        );
        assert_eq!(parse("where($.numbers, @ > 5)").unwrap(), expected);
    }

    #[test]
    fn test_nested_calls() {
        let node = parse(r#"equals(length($.books), 3)"#).unwrap();
        assert_eq!(node.to_string(), "equals(length($.books), 3)");
    }

    #[test]
    fn test_empty_argument_list() {
        assert_eq!(
            parse("now()").unwrap(),
            ExpressionNode::function_call("now", Vec::<ExpressionNode>::new())
        );
    }

    #[test]
    fn test_operator_after_function_call() {
        let node = parse("length($.books) >= 2").unwrap();
        assert_eq!(node.to_string(), "(length($.books) >= 2)");
    }

    #[test]
    fn test_operator_after_literal() {
        let node = parse("5 < $.x").unwrap();
        assert_eq!(node.to_string(), "(5 < $.x)");
    }

    #[test]
    fn test_chains_lean_right() {
        let node = parse("a == b == c").unwrap();
        assert_eq!(node.to_string(), "(a == (b == c))");

        let node = parse("a < b + c * d").unwrap();
        assert_eq!(node.to_string(), "(a < (b + (c * d)))");
    }

    #[rstest]
    #[case("")]
    #[case("a ==")]
    #[case("length(")]
    #[case("equals(a,")]
    #[case("equals(a, b")]
    fn test_unexpected_end_of_input(#[case] input: &str) {
        assert_eq!(parse(input).unwrap_err(), ParseError::UnexpectedEndOfInput);
    }

    #[rstest]
    #[case(")", ")")]
    #[case("== a", "==")]
    #[case("a b", "b")]
    #[case("equals(a b)", "b")]
    #[case("f(,)", ",")]
    #[case("a == )", ")")]
    fn test_unexpected_token(#[case] input: &str, #[case] literal: &str) {
        match parse(input).unwrap_err() {
            ParseError::UnexpectedToken { literal: found, .. } => assert_eq!(found, literal),
            other => panic!("expected unexpected token, got {other:?}"),
        }
    }

    #[test]
    fn test_lex_errors_pass_through() {
        assert!(matches!(parse("a = b"), Err(ParseError::Lex(_))));
    }

    #[test]
    fn test_nesting_limit() {
        let input = "f(".repeat(10) + "x" + &")".repeat(10);
        let tokens = tokenize(&input).unwrap();

        assert!(Parser::with_max_depth(&tokens, 11).parse().is_ok());
        assert_eq!(
            Parser::with_max_depth(&tokens, 5).parse().unwrap_err(),
            ParseError::NestingTooDeep { limit: 5 }
        );
    }
}
