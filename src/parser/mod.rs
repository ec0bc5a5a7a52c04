//! yap expression parser
//!
//! Turns expression text into an AST in two steps: the [`tokenizer`] produces
//! a flat token sequence and the recursive-descent [`descent`] parser builds
//! the tree.

pub mod descent;
pub mod error;
pub mod tokenizer;

pub use descent::{DEFAULT_MAX_DEPTH, Parser};
pub use error::{LexError, LexResult, ParseError, ParseResult};
pub use tokenizer::{Token, TokenKind, Tokenizer, tokenize};

use crate::ast::ExpressionNode;

/// Parse an expression string into an AST
pub fn parse_expression(input: &str) -> ParseResult<ExpressionNode> {
    parse_with_max_depth(input, DEFAULT_MAX_DEPTH)
}

/// Parse an expression string with a custom nesting limit
pub fn parse_with_max_depth(input: &str, max_depth: usize) -> ParseResult<ExpressionNode> {
    let tokens = tokenize(input)?;
    log::trace!("tokenized {} tokens from {:?}", tokens.len(), input);
    Parser::with_max_depth(&tokens, max_depth).parse()
}
