//! Core precedence-climbing parser and entry point.
//!
//! This module defines the [`Parser`] struct and the public
//! [`parse_expression`] function which tokenises the source and builds the
//! expression tree.

use log::debug;

use crate::error::ParseError;
use crate::parser::ast::{Expr, SENTINEL_BINDING_POWER};
use crate::position::LineColumnResolver;
use crate::tables::Grammar;
use crate::tokenizer::{DEFAULT_FILE, Tokenizer};

/// Builds one [`Expr`] from the tokens of a single expression.
pub struct Parser<'a> {
    pub(super) tokens: Tokenizer<'a>,
}

/// Parse `src` with `grammar`, using the default file marker and
/// line/column resolver.
///
/// # Errors
/// Returns a [`ParseError`] when the source is empty, contains an
/// unrecognised token, places an operator where a literal is required, or
/// has tokens left over after a complete expression.
///
/// # Examples
///
/// ```rust
/// use c1expr::{parse_expression, Grammar};
///
/// let expr = parse_expression("1 + 2 * 3", &Grammar::standard());
/// assert_eq!(expr.map(|e| e.to_sexpr()).ok().as_deref(), Some("(+ 1 (* 2 3))"));
/// ```
#[must_use = "discarding the Result will ignore parse errors"]
pub fn parse_expression(src: &str, grammar: &Grammar) -> Result<Expr, ParseError> {
    let parser = Parser::new(Tokenizer::new(
        src,
        DEFAULT_FILE,
        grammar,
        &LineColumnResolver,
    ));
    parser.parse()
}

impl<'a> Parser<'a> {
    #[must_use]
    pub fn new(tokens: Tokenizer<'a>) -> Self {
        Self { tokens }
    }

    /// Prime the tokenizer and parse the whole input as one expression.
    ///
    /// # Errors
    /// See [`parse_expression`].
    pub fn parse(mut self) -> Result<Expr, ParseError> {
        let result = self.parse_all();
        if let Err(err) = &result {
            debug!("parse of {:?} failed: {err}", self.tokens.source());
        }
        result
    }

    fn parse_all(&mut self) -> Result<Expr, ParseError> {
        self.tokens.advance()?;
        let expr = self.parse_binary_expression(SENTINEL_BINDING_POWER)?;
        if !self.tokens.at_end() {
            let token = self.tokens.current();
            return Err(ParseError::TrailingInput {
                found: token.kind.describe(),
                location: token.location.clone(),
            });
        }
        Ok(expr)
    }

    /// Parse everything that binds tighter than `min_bp`.
    pub(super) fn parse_binary_expression(&mut self, min_bp: u8) -> Result<Expr, ParseError> {
        let lhs = self.parse_terminal()?;
        if self.tokens.at_end() {
            return Ok(lhs);
        }
        self.parse_infix(lhs, min_bp)
    }
}
