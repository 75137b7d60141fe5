//! Helpers for running the pipeline and asserting over its results in
//! tests.
//!
//! These functions reduce boilerplate when checking token kinds, tree shapes
//! and evaluated values for a source string.

mod assertions;

pub use assertions::{assert_evaluates_to, assert_fault, assert_float_near};

use crate::{Error, Grammar, Number, TokenKind, evaluate, parse_expression, tokenize};

/// Token kinds of `src` under the standard grammar.
///
/// # Panics
/// Panics if `src` does not tokenize.
#[must_use]
#[track_caller]
pub fn kinds(src: &str) -> Vec<TokenKind> {
    tokenize(src, &Grammar::standard())
        .unwrap_or_else(|e| panic!("tokenize {src:?}: {e}"))
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

/// Parse `src` with the standard grammar and render it as an S-expression.
///
/// # Examples
///
/// ```rust,no_run
/// # #[cfg(feature = "test-support")]
/// # {
/// use c1expr::test_util::sexpr;
/// assert_eq!(sexpr("1 + 2 * 3"), "(+ 1 (* 2 3))");
/// # }
/// ```
///
/// # Panics
/// Panics if `src` does not parse.
#[must_use]
#[track_caller]
pub fn sexpr(src: &str) -> String {
    parse_expression(src, &Grammar::standard())
        .unwrap_or_else(|e| panic!("parse {src:?}: {e}"))
        .to_sexpr()
}

/// Evaluate `src` with the standard engine.
///
/// # Panics
/// Panics if evaluation fails.
#[must_use]
#[track_caller]
pub fn eval(src: &str) -> Number {
    evaluate(src).unwrap_or_else(|e| panic!("evaluate {src:?}: {e}"))
}

/// Evaluate `src` and return the error it must produce.
///
/// # Panics
/// Panics if evaluation succeeds.
#[must_use]
#[track_caller]
pub fn eval_err(src: &str) -> Error {
    match evaluate(src) {
        Ok(value) => panic!("expected {src:?} to fail, got {value}"),
        Err(err) => err,
    }
}
