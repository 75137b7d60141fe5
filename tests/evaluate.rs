use c1expr::{
    ArithmeticError, BinaryOp, Error, LexError, Number, OperationFault, ParseError, evaluate,
};
use rstest::rstest;

mod test_util;
use test_util::{eval, eval_err, sexpr};

#[rstest]
#[case("42", Number::Int(42))]
#[case("1 + 2 * 3", Number::Int(7))]
#[case("8 - 3 - 2", Number::Int(3))]
#[case("2 * 3 + 4", Number::Int(10))]
#[case("1 - 8 / 3", Number::Int(-1))]
#[case("7 / 2", Number::Int(3))]
#[case("17 % 5 * 2", Number::Int(4))]
#[case("2 ** 3 ** 2", Number::Int(64))]
#[case("3 * 2 ** 3", Number::Int(24))]
#[case("1.5 + 1", Number::Float(2.5))]
fn evaluates_standard_expressions(#[case] src: &str, #[case] expected: Number) {
    assert_eq!(eval(src), expected);
}

#[rstest]
fn trees_match_values() {
    assert_eq!(sexpr("8 - 3 - 2"), "(- (- 8 3) 2)");
    assert_eq!(sexpr("1 - 8 / 3"), "(- 1 (/ 8 3))");
}

#[rstest]
fn float_results_keep_a_fraction() {
    assert_eq!(eval("0.5 * 4").to_string(), "2.0");
    assert_eq!(eval("3.14").to_string(), "3.14");
}

#[rstest]
#[case("1 / 0", BinaryOp::Div, OperationFault::DivisionByZero)]
#[case("1 % 0", BinaryOp::Rem, OperationFault::DivisionByZero)]
#[case("1.0 / 0", BinaryOp::Div, OperationFault::DivisionByZero)]
#[case("9223372036854775807 + 1", BinaryOp::Add, OperationFault::Overflow)]
#[case("3037000500 * 3037000500", BinaryOp::Mul, OperationFault::Overflow)]
fn undefined_operations_are_errors(
    #[case] src: &str,
    #[case] op: BinaryOp,
    #[case] fault: OperationFault,
) {
    match eval_err(src) {
        Error::Arithmetic(ArithmeticError {
            op: found_op,
            fault: found_fault,
            ..
        }) => {
            assert_eq!(found_op, op);
            assert_eq!(found_fault, fault);
        }
        other => panic!("expected an arithmetic error, got {other}"),
    }
}

#[rstest]
fn unrepresentable_literal_is_a_lex_error() {
    assert!(matches!(
        eval_err("99999999999999999999"),
        Error::Parse(ParseError::Lex(LexError::UnsetLiteral { .. }))
    ));
}

#[rstest]
#[case("", "<input>:1:1: expected a literal, found end of input")]
#[case("1 +", "<input>:1:4: expected a literal, found end of input")]
#[case("* 2", "<input>:1:1: expected a literal, found operator `*`")]
#[case("1 2", "<input>:1:3: unexpected literal `2` after complete expression")]
#[case("6 / 0", "<input>:1:3: invalid operation `6 / 0`: division by zero")]
fn error_messages_name_the_location(#[case] src: &str, #[case] message: &str) {
    assert_eq!(eval_err(src).to_string(), message);
}

#[rstest]
fn evaluation_is_deterministic() {
    let src = "2 ** 10 - 3 * 7 % 4 + 1.25";
    let first = evaluate(src);
    for _ in 0..10 {
        assert_eq!(evaluate(src), first);
    }
}

#[rstest]
fn long_flat_chains_evaluate() {
    let src = vec!["3"; 300_000].join(" - ");
    assert_eq!(eval(&src), Number::Int(3 - 3 * 299_999));
}

#[rstest]
#[case("1 ** 5000000000", Number::Int(1))]
#[case("0 ** 5000000000", Number::Int(0))]
#[case("3 - 1 ** 5000000001", Number::Int(2))]
fn huge_exponents_with_defined_results(#[case] src: &str, #[case] expected: Number) {
    assert_eq!(eval(src), expected);
}
