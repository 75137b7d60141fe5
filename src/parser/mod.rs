//! Expression parsing.
//!
//! [`parse_expression`] drives a [`crate::Tokenizer`] and builds an
//! [`ast::Expr`] by precedence climbing. Tokens are pulled on demand; the
//! parser never sees more than the current token.

pub mod ast;
mod expression;

pub use expression::{Parser, parse_expression};

#[cfg(test)]
mod tests;
