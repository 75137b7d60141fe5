//! Evaluation of expression trees.
//!
//! Integer arithmetic is checked; any operation with a float operand
//! promotes both sides and produces a float. Operations without a defined
//! result (division by zero, overflow, non-finite floats) are reported as
//! [`ArithmeticError`] rather than producing a sentinel value.

use log::debug;

use crate::error::{ArithmeticError, OperationFault};
use crate::language::{BinaryOp, Number};
use crate::parser::ast::Expr;
use crate::position::Location;

/// How `/` treats two integer operands.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DivisionMode {
    /// Integer quotient rounded toward zero.
    #[default]
    Truncating,
    /// Promote to floating point and divide exactly.
    Exact,
}

/// Evaluation settings.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EvalOptions {
    pub division: DivisionMode,
}

/// Operator waiting on one of its operands.
enum Frame<'e> {
    Right {
        op: BinaryOp,
        location: &'e Location,
        rhs: &'e Expr,
    },
    Combine {
        op: BinaryOp,
        location: &'e Location,
        lhs: Number,
    },
}

/// Reduces an [`Expr`] to a [`Number`].
///
/// Evaluation walks the tree with an explicit stack, left operand first, so
/// tree depth does not consume call stack.
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator {
    options: EvalOptions,
}

impl Evaluator {
    #[must_use]
    pub const fn new(options: EvalOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> EvalOptions {
        self.options
    }

    /// Evaluate `expr`.
    ///
    /// # Errors
    /// Returns an [`ArithmeticError`] when an operator is applied to values
    /// for which it is undefined.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use c1expr::{parse_expression, Evaluator, Grammar, Number};
    ///
    /// let expr = parse_expression("8 - 3 - 2", &Grammar::standard());
    /// let value = expr.ok().map(|e| Evaluator::default().evaluate(&e));
    /// assert_eq!(value, Some(Ok(Number::Int(3))));
    /// ```
    pub fn evaluate(&self, expr: &Expr) -> Result<Number, ArithmeticError> {
        let mut pending = Vec::new();
        let mut node = expr;
        loop {
            let mut value = loop {
                match node {
                    Expr::Literal(lit) => break lit.value,
                    Expr::Binary {
                        op,
                        location,
                        lhs,
                        rhs,
                    } => {
                        pending.push(Frame::Right {
                            op: *op,
                            location,
                            rhs: &**rhs,
                        });
                        node = &**lhs;
                    }
                }
            };
            loop {
                match pending.pop() {
                    None => return Ok(value),
                    Some(Frame::Right { op, location, rhs }) => {
                        pending.push(Frame::Combine {
                            op,
                            location,
                            lhs: value,
                        });
                        node = rhs;
                        break;
                    }
                    Some(Frame::Combine { op, location, lhs }) => {
                        value = self.combine(op, location, lhs, value)?;
                    }
                }
            }
        }
    }

    fn combine(
        &self,
        op: BinaryOp,
        location: &Location,
        lhs: Number,
        rhs: Number,
    ) -> Result<Number, ArithmeticError> {
        self.apply(op, lhs, rhs).map_err(|fault| {
            let err = ArithmeticError {
                op,
                lhs,
                rhs,
                fault,
                location: location.clone(),
            };
            debug!("evaluation failed: {err}");
            err
        })
    }

    /// Apply one operator to two values.
    ///
    /// # Errors
    /// Returns the [`OperationFault`] describing why the result is undefined.
    pub fn apply(&self, op: BinaryOp, lhs: Number, rhs: Number) -> Result<Number, OperationFault> {
        match (lhs, rhs) {
            (Number::Int(a), Number::Int(b)) => self.apply_int(op, a, b),
            _ => apply_float(op, lhs.to_f64(), rhs.to_f64()).map(Number::Float),
        }
    }

    fn apply_int(&self, op: BinaryOp, a: i64, b: i64) -> Result<Number, OperationFault> {
        let result = match op {
            BinaryOp::Add => a.checked_add(b),
            BinaryOp::Sub => a.checked_sub(b),
            BinaryOp::Mul => a.checked_mul(b),
            BinaryOp::Div if b == 0 => return Err(OperationFault::DivisionByZero),
            BinaryOp::Div => match self.options.division {
                DivisionMode::Truncating => truncating_div(a, b),
                DivisionMode::Exact => {
                    return apply_float(op, Number::Int(a).to_f64(), Number::Int(b).to_f64())
                        .map(Number::Float);
                }
            },
            BinaryOp::Rem if b == 0 => return Err(OperationFault::DivisionByZero),
            BinaryOp::Rem => truncating_rem(a, b),
            BinaryOp::Pow if b < 0 => {
                return apply_float(op, Number::Int(a).to_f64(), Number::Int(b).to_f64())
                    .map(Number::Float);
            }
            BinaryOp::Pow => int_pow(a, b),
        };
        result.map(Number::Int).ok_or(OperationFault::Overflow)
    }
}

/// `base ** exp` for `exp >= 0`. Bases 0, 1 and -1 stay defined for any
/// exponent; other bases overflow long before `exp` leaves `u32`.
fn int_pow(base: i64, exp: i64) -> Option<i64> {
    match (base, u32::try_from(exp)) {
        (_, Ok(exp)) => base.checked_pow(exp),
        (0 | 1, Err(_)) => Some(base),
        (-1, Err(_)) if exp & 1 == 0 => Some(1),
        (-1, Err(_)) => Some(-1),
        (_, Err(_)) => None,
    }
}

#[expect(
    clippy::integer_division,
    reason = "truncating division is the configured integer semantics"
)]
fn truncating_div(a: i64, b: i64) -> Option<i64> {
    a.checked_div(b)
}

#[expect(
    clippy::integer_division_remainder_used,
    reason = "remainder operator semantics"
)]
fn truncating_rem(a: i64, b: i64) -> Option<i64> {
    a.checked_rem(b)
}

#[expect(clippy::float_arithmetic, reason = "evaluating float expressions")]
fn apply_float(op: BinaryOp, a: f64, b: f64) -> Result<f64, OperationFault> {
    let value = match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div | BinaryOp::Rem if b == 0.0 => return Err(OperationFault::DivisionByZero),
        BinaryOp::Div => a / b,
        BinaryOp::Rem => a % b,
        BinaryOp::Pow => a.powf(b),
    };
    if value.is_finite() {
        Ok(value)
    } else {
        Err(OperationFault::NonFinite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn truncating() -> Evaluator {
        Evaluator::default()
    }

    #[fixture]
    fn exact() -> Evaluator {
        Evaluator::new(EvalOptions {
            division: DivisionMode::Exact,
        })
    }

    #[rstest]
    #[case(BinaryOp::Add, 2, 3, 5)]
    #[case(BinaryOp::Sub, 2, 3, -1)]
    #[case(BinaryOp::Mul, -4, 3, -12)]
    #[case(BinaryOp::Div, 7, 2, 3)]
    #[case(BinaryOp::Div, -7, 2, -3)]
    #[case(BinaryOp::Rem, 7, 3, 1)]
    #[case(BinaryOp::Rem, -7, 3, -1)]
    #[case(BinaryOp::Pow, 2, 10, 1024)]
    #[case(BinaryOp::Pow, 5, 0, 1)]
    #[case(BinaryOp::Pow, 1, 5_000_000_000, 1)]
    #[case(BinaryOp::Pow, 0, 5_000_000_000, 0)]
    #[case(BinaryOp::Pow, -1, 5_000_000_000, 1)]
    #[case(BinaryOp::Pow, -1, 5_000_000_001, -1)]
    #[case(BinaryOp::Pow, -1, i64::MAX, -1)]
    fn integer_operations(
        truncating: Evaluator,
        #[case] op: BinaryOp,
        #[case] a: i64,
        #[case] b: i64,
        #[case] expected: i64,
    ) {
        assert_eq!(
            truncating.apply(op, Number::Int(a), Number::Int(b)),
            Ok(Number::Int(expected))
        );
    }

    #[rstest]
    fn exact_division_promotes(exact: Evaluator) {
        assert_eq!(
            exact.apply(BinaryOp::Div, Number::Int(7), Number::Int(2)),
            Ok(Number::Float(3.5))
        );
        assert_eq!(
            exact.apply(BinaryOp::Mul, Number::Int(7), Number::Int(2)),
            Ok(Number::Int(14))
        );
    }

    #[rstest]
    #[case(Number::Int(1), Number::Float(0.5), Number::Float(1.5))]
    #[case(Number::Float(0.5), Number::Int(1), Number::Float(1.5))]
    #[case(Number::Float(2.0), Number::Float(2.0), Number::Float(4.0))]
    fn float_operands_promote(
        truncating: Evaluator,
        #[case] a: Number,
        #[case] b: Number,
        #[case] expected: Number,
    ) {
        assert_eq!(truncating.apply(BinaryOp::Add, a, b), Ok(expected));
    }

    #[rstest]
    fn negative_exponent_promotes(truncating: Evaluator) {
        assert_eq!(
            truncating.apply(BinaryOp::Pow, Number::Int(2), Number::Int(-1)),
            Ok(Number::Float(0.5))
        );
    }

    #[rstest]
    #[case(BinaryOp::Div, Number::Int(1), Number::Int(0), OperationFault::DivisionByZero)]
    #[case(BinaryOp::Rem, Number::Int(1), Number::Int(0), OperationFault::DivisionByZero)]
    #[case(BinaryOp::Div, Number::Float(1.0), Number::Int(0), OperationFault::DivisionByZero)]
    #[case(BinaryOp::Rem, Number::Int(1), Number::Float(0.0), OperationFault::DivisionByZero)]
    #[case(BinaryOp::Add, Number::Int(i64::MAX), Number::Int(1), OperationFault::Overflow)]
    #[case(BinaryOp::Sub, Number::Int(i64::MIN), Number::Int(1), OperationFault::Overflow)]
    #[case(BinaryOp::Div, Number::Int(i64::MIN), Number::Int(-1), OperationFault::Overflow)]
    #[case(BinaryOp::Pow, Number::Int(10), Number::Int(19), OperationFault::Overflow)]
    #[case(BinaryOp::Pow, Number::Int(2), Number::Int(i64::from(u32::MAX) + 1), OperationFault::Overflow)]
    #[case(BinaryOp::Pow, Number::Float(10.0), Number::Int(400), OperationFault::NonFinite)]
    fn undefined_operations_fail(
        truncating: Evaluator,
        #[case] op: BinaryOp,
        #[case] a: Number,
        #[case] b: Number,
        #[case] fault: OperationFault,
    ) {
        assert_eq!(truncating.apply(op, a, b), Err(fault));
    }

    #[rstest]
    #[case("2 ** 3 * 4 - 10 % 3", Number::Int(31))]
    #[case("100 / 7 / 2", Number::Int(7))]
    fn source_expressions_evaluate(#[case] src: &str, #[case] expected: Number) {
        crate::test_util::assert_evaluates_to(src, expected);
    }

    #[rstest]
    #[case("0.1 + 0.2", 0.3)]
    #[case("2.5 ** 2", 6.25)]
    #[case("7 % 2.5", 2.0)]
    fn float_expressions_evaluate(#[case] src: &str, #[case] expected: f64) {
        crate::test_util::assert_float_near(src, expected);
    }

    #[rstest]
    #[case("5 - 5 % 0", OperationFault::DivisionByZero)]
    #[case("2 ** 63", OperationFault::Overflow)]
    #[case("10.0 ** 308 * 10", OperationFault::NonFinite)]
    fn source_faults_are_reported(#[case] src: &str, #[case] fault: OperationFault) {
        crate::test_util::assert_fault(src, fault);
    }

    #[rstest]
    fn fault_location_comes_from_operator(truncating: Evaluator) {
        let expr = crate::parse_expression("6 /\n 0", &crate::Grammar::standard())
            .unwrap_or_else(|e| panic!("{e}"));
        let err = truncating.evaluate(&expr);
        let location = Location {
            file: std::sync::Arc::from(crate::tokenizer::DEFAULT_FILE),
            line: 1,
            column: 3,
        };
        assert_eq!(
            err,
            Err(ArithmeticError {
                op: BinaryOp::Div,
                lhs: Number::Int(6),
                rhs: Number::Int(0),
                fault: OperationFault::DivisionByZero,
                location,
            })
        );
    }
}
