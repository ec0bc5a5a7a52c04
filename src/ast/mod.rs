//! Abstract Syntax Tree (AST) definitions for yap expressions
//!
//! A closed sum type over identifiers, literals, binary operations and
//! function calls. Evaluation lives in [`crate::evaluator`].

mod expression;
mod operator;

pub use expression::*;
pub use operator::*;
