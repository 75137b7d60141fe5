//! Library crate for c1expr.
//!
//! Tokenizes a single arithmetic expression, parses it into a binary tree by
//! precedence climbing and evaluates it to an integer or floating-point
//! number. The [`Engine`] bundles the tables and settings needed to run the
//! whole pipeline; the individual stages are exposed for callers that want
//! only part of it.

#![forbid(unsafe_code)]

pub mod error;
pub mod eval;
pub mod language;
pub mod parser;
pub mod position;
pub mod tables;
pub mod tokenizer;

// Only expose test utilities to tests and opt-in consumers.
#[cfg(any(test, feature = "test-support"))]
#[doc(hidden)]
pub mod test_util;

use std::sync::Arc;

use log::debug;

pub use error::{ArithmeticError, Error, LexError, OperationFault, ParseError};
pub use eval::{DivisionMode, EvalOptions, Evaluator};
pub use language::{BinaryOp, Number, TokenKind};
pub use parser::ast::{Expr, Literal, PrecedenceTable};
pub use parser::{Parser, parse_expression};
pub use position::{LineColumnResolver, Location, PositionResolver};
pub use tables::{Grammar, LexicalTables, OperatorTable, TableError};
pub use tokenizer::{DEFAULT_FILE, Span, Token, Tokenizer, WordShape, tokenize};

/// Tables, position resolver and evaluation settings for running
/// expressions.
///
/// Build one at start-up and reuse it; it is never mutated by parsing or
/// evaluation.
#[derive(Debug, Clone)]
pub struct Engine<R: PositionResolver = LineColumnResolver> {
    grammar: Grammar,
    resolver: R,
    evaluator: Evaluator,
}

impl Engine {
    /// Engine over `grammar` with the line/column resolver.
    #[must_use]
    pub fn new(grammar: Grammar, options: EvalOptions) -> Self {
        Self {
            grammar,
            resolver: LineColumnResolver,
            evaluator: Evaluator::new(options),
        }
    }

    /// Standard grammar with default evaluation options.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(Grammar::standard(), EvalOptions::default())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::standard()
    }
}

impl<R: PositionResolver> Engine<R> {
    /// Replace the position resolver.
    #[must_use]
    pub fn with_resolver<S: PositionResolver>(self, resolver: S) -> Engine<S> {
        Engine {
            grammar: self.grammar,
            resolver,
            evaluator: self.evaluator,
        }
    }

    #[must_use]
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    #[must_use]
    pub fn options(&self) -> EvalOptions {
        self.evaluator.options()
    }

    /// Parse `src`, stamping locations with `file`.
    ///
    /// # Errors
    /// Returns a [`ParseError`] when `src` is not a single well-formed
    /// expression.
    pub fn parse(&self, file: impl Into<Arc<str>>, src: &str) -> Result<Expr, ParseError> {
        Parser::new(Tokenizer::new(src, file, &self.grammar, &self.resolver)).parse()
    }

    /// Parse and evaluate `src`.
    ///
    /// # Errors
    /// Returns [`Error::Parse`] for malformed input and
    /// [`Error::Arithmetic`] when an operation is undefined.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use c1expr::{Engine, Number};
    ///
    /// let engine = Engine::standard();
    /// assert_eq!(engine.evaluate("calc", "1+2*3"), Ok(Number::Int(7)));
    /// assert!(engine.evaluate("calc", "1/0").is_err());
    /// ```
    pub fn evaluate(&self, file: impl Into<Arc<str>>, src: &str) -> Result<Number, Error> {
        let expr = self.parse(file, src)?;
        let value = self.evaluator.evaluate(&expr)?;
        debug!("{src:?} evaluated to {value}");
        Ok(value)
    }
}

/// Evaluate `src` with the standard grammar and default options.
///
/// # Errors
/// See [`Engine::evaluate`].
pub fn evaluate(src: &str) -> Result<Number, Error> {
    Engine::standard().evaluate(DEFAULT_FILE, src)
}
