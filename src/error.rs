//! Error types for every stage of the pipeline.
//!
//! Each stage has its own error: [`LexError`] from the tokenizer,
//! [`ParseError`] from the parser (wrapping lexical failures met while
//! pulling tokens), and [`ArithmeticError`] from the evaluator. [`Error`]
//! joins them for callers that run the whole pipeline.

use std::fmt;

use thiserror::Error;

use crate::language::{BinaryOp, Number};
use crate::position::Location;
use crate::tokenizer::WordShape;

/// Failure to turn a raw token into a [`crate::Token`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    /// A digit run could not be converted to a number.
    #[error("{location}: literal `{text}` cannot be represented")]
    UnsetLiteral { text: String, location: Location },
    /// A raw token is neither an operator spelling nor a numeric literal.
    #[error("{location}: unrecognized {shape} `{text}`")]
    UnrecognizedToken {
        text: String,
        shape: WordShape,
        location: Location,
    },
}

impl LexError {
    #[must_use]
    pub fn location(&self) -> &Location {
        match self {
            Self::UnsetLiteral { location, .. } | Self::UnrecognizedToken { location, .. } => {
                location
            }
        }
    }
}

/// Failure to build an expression tree.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),
    /// A literal was required but something else was found.
    #[error("{location}: expected a literal, found {found}")]
    ExpectedLiteral { found: String, location: Location },
    /// A complete expression was followed by more tokens.
    #[error("{location}: unexpected {found} after complete expression")]
    TrailingInput { found: String, location: Location },
}

impl ParseError {
    #[must_use]
    pub fn location(&self) -> &Location {
        match self {
            Self::Lex(err) => err.location(),
            Self::ExpectedLiteral { location, .. } | Self::TrailingInput { location, .. } => {
                location
            }
        }
    }
}

/// Why an arithmetic operation has no defined result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationFault {
    DivisionByZero,
    Overflow,
    NonFinite,
}

impl fmt::Display for OperationFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::DivisionByZero => "division by zero",
            Self::Overflow => "integer overflow",
            Self::NonFinite => "result is not a finite number",
        })
    }
}

/// An operator applied to operands for which it is undefined.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{location}: invalid operation `{lhs} {op} {rhs}`: {fault}")]
pub struct ArithmeticError {
    pub op: BinaryOp,
    pub lhs: Number,
    pub rhs: Number,
    pub fault: OperationFault,
    /// Location of the operator token.
    pub location: Location,
}

/// Any failure while parsing or evaluating one expression.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

impl From<LexError> for Error {
    fn from(err: LexError) -> Self {
        Self::Parse(err.into())
    }
}
