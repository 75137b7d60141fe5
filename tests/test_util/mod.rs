//! Shared test utilities for integration tests.
//!
//! These helpers mirror a subset of the `c1expr::test_util` module without
//! requiring the `test-support` feature, so integration tests compile against
//! the published library.

#![expect(
    dead_code,
    reason = "helpers are reused across multiple tests so some may be unused"
)]

use c1expr::{Error, Grammar, Number, TokenKind, evaluate, parse_expression, tokenize};

/// Token kinds of `src`, end-of-input marker included.
#[must_use]
#[track_caller]
pub fn kinds(src: &str) -> Vec<TokenKind> {
    tokenize(src, &Grammar::standard())
        .unwrap_or_else(|e| panic!("tokenize {src:?}: {e}"))
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

/// S-expression rendering of the tree parsed from `src`.
#[must_use]
#[track_caller]
pub fn sexpr(src: &str) -> String {
    parse_expression(src, &Grammar::standard())
        .unwrap_or_else(|e| panic!("parse {src:?}: {e}"))
        .to_sexpr()
}

#[must_use]
#[track_caller]
pub fn eval(src: &str) -> Number {
    evaluate(src).unwrap_or_else(|e| panic!("evaluate {src:?}: {e}"))
}

/// Error produced by evaluating `src`.
#[must_use]
#[track_caller]
pub fn eval_err(src: &str) -> Error {
    match evaluate(src) {
        Ok(value) => panic!("expected {src:?} to fail, got {value}"),
        Err(err) => err,
    }
}
