//! Token kinds, operators and numeric values shared across the pipeline.
//!
//! `BinaryOp` discriminants double as indices into the operator spelling
//! list held by [`crate::tables::OperatorTable`]; the conversions are derived
//! with `num_derive` so the index mapping cannot drift from the enum.

use std::fmt;

use num_derive::{FromPrimitive as FromPrimitiveDerive, ToPrimitive as ToPrimitiveDerive};
use num_traits::{FromPrimitive, ToPrimitive};

/// Every binary operator the engine can apply.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, FromPrimitiveDerive, ToPrimitiveDerive,
)]
#[repr(u8)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}

impl BinaryOp {
    /// Number of operator kinds, and so the length of every spelling list.
    pub const COUNT: usize = 6;

    /// All operators in discriminant order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Rem,
        Self::Pow,
    ];

    /// Operator for a position in the spelling list.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::from_usize(index)
    }

    /// Position of this operator in the spelling list.
    #[must_use]
    pub fn index(self) -> usize {
        self.to_usize()
            .unwrap_or_else(|| unreachable!("all BinaryOp variants map to usize"))
    }

    /// Short name used by `Expr::to_sexpr` and error messages.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
            Self::Pow => "**",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A numeric value: either an integer or a floating-point number, never both.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// True for the floating-point variant.
    #[must_use]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float(_))
    }

    /// Widen to `f64`. Integers beyond 2^53 lose precision.
    #[must_use]
    pub fn to_f64(self) -> f64 {
        match self {
            Self::Int(i) => i
                .to_f64()
                .unwrap_or_else(|| unreachable!("i64 always converts to f64")),
            Self::Float(f) => f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            // Keep a fractional digit so floats never read as integers.
            Self::Float(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{v:.1}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

/// Classification of a scanned token.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TokenKind {
    /// A numeric literal; the value is always present.
    Primitive(Number),
    /// One of the registered operators.
    Operator(BinaryOp),
    /// End of the input.
    EndOfField,
}

impl TokenKind {
    /// Human-readable description for diagnostics.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Primitive(n) => format!("literal `{n}`"),
            Self::Operator(op) => format!("operator `{op}`"),
            Self::EndOfField => "end of input".to_string(),
        }
    }
}
