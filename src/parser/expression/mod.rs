//! Precedence-climbing parser for arithmetic expressions.
//!
//! Provides [`parse_expression`] and the [`Parser`] it drives. The
//! implementation is split across submodules: [`climb`] hosts the parser and
//! its entry points, [`terminal`] turns literal tokens into leaves, and
//! [`infix`] folds binary operators by binding power.

mod climb;
mod infix;
mod terminal;

pub use climb::{Parser, parse_expression};
