//! Tests for parser components and error reporting.


use super::parse_expression;
use crate::Grammar;
use rstest::rstest;

#[rstest]
#[case("42", "42")]
#[case("  7  ", "7")]
#[case("2.5", "2.5")]
fn single_literal_is_a_leaf(#[case] src: &str, #[case] expected: &str) {
    let expr = parse_expression(src, &Grammar::standard())
        .unwrap_or_else(|e| panic!("parse {src:?}: {e}"));
    assert_eq!(expr.to_sexpr(), expected);
    assert_eq!(expr.leaf_count(), 1);
}

#[rstest]
fn parsing_is_repeatable() {
    let grammar = Grammar::standard();
    let first = parse_expression("1 - 2 * 3 ** 2 % 4", &grammar);
    let second = parse_expression("1 - 2 * 3 ** 2 % 4", &grammar);
    assert_eq!(first, second);
}

#[rstest]
fn long_chains_keep_every_leaf() {
    let src = vec!["1"; 500].join(" + ");
    let expr = parse_expression(&src, &Grammar::standard())
        .unwrap_or_else(|e| panic!("parse: {e}"));
    assert_eq!(expr.leaf_count(), 500);
}

#[rstest]
fn million_term_chain_parses_evaluates_and_drops() {
    let src = vec!["1"; 1_000_000].join("+");
    let expr = parse_expression(&src, &Grammar::standard())
        .unwrap_or_else(|e| panic!("parse: {e}"));
    assert_eq!(expr.leaf_count(), 1_000_000);
    assert_eq!(
        crate::Evaluator::default().evaluate(&expr),
        Ok(crate::Number::Int(1_000_000))
    );
    drop(expr);
}

#[rstest]
fn deep_chain_fault_is_an_error_value() {
    let src = format!("{}-1/0", vec!["1"; 200_000].join("*"));
    let err = crate::evaluate(&src);
    assert!(matches!(
        err,
        Err(crate::Error::Arithmetic(crate::ArithmeticError {
            fault: crate::OperationFault::DivisionByZero,
            ..
        }))
    ));
}
