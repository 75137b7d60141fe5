//! Expression tree produced by the parser and consumed by the evaluator.
//!
//! The tree has two shapes: a literal leaf and a binary operator node that
//! owns exactly two children. Operator binding powers live in
//! [`precedence`] next to the tree they shape.

mod expr;
pub mod precedence;

pub use expr::{Expr, Literal};
pub use precedence::{PrecedenceTable, SENTINEL_BINDING_POWER};
