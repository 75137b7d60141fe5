//! Expression AST.
//!
//! Provides the structured representation of a parsed expression. Leaves are
//! built only from literal tokens, so every leaf is guaranteed to hold a
//! value; binary nodes own their children outright.

use crate::error::ParseError;
use crate::language::{BinaryOp, Number, TokenKind};
use crate::position::Location;
use crate::tokenizer::{Span, Token};

/// A numeric literal taken from one primitive token.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub value: Number,
    pub span: Span,
    pub location: Location,
}

/// Parsed expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Literal),
    Binary {
        op: BinaryOp,
        /// Location of the operator token.
        location: Location,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    /// Build a leaf from a primitive token.
    ///
    /// # Errors
    /// Returns [`ParseError::ExpectedLiteral`] when `token` is an operator
    /// or the end of input.
    pub fn leaf(token: Token) -> Result<Self, ParseError> {
        match token.kind {
            TokenKind::Primitive(value) => Ok(Self::Literal(Literal {
                value,
                span: token.span,
                location: token.location,
            })),
            other => Err(ParseError::ExpectedLiteral {
                found: other.describe(),
                location: token.location,
            }),
        }
    }

    /// Join two subtrees under `op`.
    #[must_use]
    pub fn binary(op: BinaryOp, location: Location, lhs: Self, rhs: Self) -> Self {
        Self::Binary {
            op,
            location,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// Display the expression as a simple S-expression for tests.
    #[must_use]
    pub fn to_sexpr(&self) -> String {
        let mut out = String::new();
        let mut pending = vec![Piece::Node(self)];
        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Text(text) => out.push_str(text),
                Piece::Node(Self::Literal(lit)) => out.push_str(&lit.value.to_string()),
                Piece::Node(Self::Binary { op, lhs, rhs, .. }) => {
                    out.push('(');
                    out.push_str(op.symbol());
                    out.push(' ');
                    pending.extend([
                        Piece::Text(")"),
                        Piece::Node(&**rhs),
                        Piece::Text(" "),
                        Piece::Node(&**lhs),
                    ]);
                }
            }
        }
        out
    }

    /// Number of literal leaves in the tree.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            match node {
                Self::Literal(_) => count += 1,
                Self::Binary { lhs, rhs, .. } => pending.extend([&**lhs, &**rhs]),
            }
        }
        count
    }
}

/// Pending output of [`Expr::to_sexpr`].
enum Piece<'e> {
    Node(&'e Expr),
    Text(&'static str),
}

// Tree depth grows with input length, so teardown walks an explicit stack
// instead of recursing through `Box` drops.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_branches(self, &mut pending);
        while let Some(mut node) = pending.pop() {
            detach_branches(&mut node, &mut pending);
        }
    }
}

/// Move the binary children of `node` into `out`, leaving leaf stubs behind.
fn detach_branches(node: &mut Expr, out: &mut Vec<Expr>) {
    let Expr::Binary {
        location, lhs, rhs, ..
    } = node
    else {
        return;
    };
    for child in [lhs, rhs] {
        if matches!(**child, Expr::Binary { .. }) {
            let stub = Expr::Literal(Literal {
                value: Number::Int(0),
                span: 0..0,
                location: location.clone(),
            });
            out.push(std::mem::replace(&mut **child, stub));
        }
    }
}
