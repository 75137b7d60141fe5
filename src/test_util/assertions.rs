//! Assertion helpers for evaluated values and arithmetic failures.

use super::{eval, eval_err};
use crate::{Error, Number, OperationFault};

/// Assert that `src` evaluates to exactly `expected`.
///
/// # Panics
/// Panics if evaluation fails or yields another value.
#[track_caller]
pub fn assert_evaluates_to(src: &str, expected: Number) {
    assert_eq!(eval(src), expected, "evaluating {src:?}");
}

/// Assert that `src` evaluates to a float within `1e-9` of `expected`.
///
/// # Panics
/// Panics if the result is an integer or too far from `expected`.
#[track_caller]
#[expect(clippy::float_arithmetic, reason = "tolerance comparison")]
pub fn assert_float_near(src: &str, expected: f64) {
    match eval(src) {
        Number::Float(v) => assert!(
            (v - expected).abs() < 1e-9,
            "{src:?} evaluated to {v}, expected {expected}"
        ),
        other @ Number::Int(_) => panic!("{src:?} evaluated to integer {other}"),
    }
}

/// Assert that `src` fails during evaluation with `fault`.
///
/// # Panics
/// Panics if `src` evaluates, fails to parse, or fails with another fault.
#[track_caller]
pub fn assert_fault(src: &str, fault: OperationFault) {
    match eval_err(src) {
        Error::Arithmetic(err) => assert_eq!(err.fault, fault, "evaluating {src:?}"),
        Error::Parse(err) => panic!("{src:?} failed to parse: {err}"),
    }
}
