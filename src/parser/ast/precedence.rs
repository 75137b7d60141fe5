//! Operator precedence table for expressions.
//!
//! This module centralizes binding power definitions for the infix
//! operators. Every operator is left-associative; the parser derives the
//! right-hand floor from the operator's own binding power.

use crate::language::{BinaryOp, TokenKind};

/// Binding power of the end-of-input sentinel and of literals. Lower than
/// any operator so precedence climbing always terminates on them.
pub const SENTINEL_BINDING_POWER: u8 = 0;

const STANDARD_TABLE: &[(BinaryOp, u8)] = &[
    (BinaryOp::Add, 10),
    (BinaryOp::Sub, 10),
    (BinaryOp::Mul, 20),
    (BinaryOp::Div, 20),
    (BinaryOp::Rem, 20),
    (BinaryOp::Pow, 30),
];

/// Binding power for every token kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrecedenceTable {
    powers: [u8; BinaryOp::COUNT],
}

impl PrecedenceTable {
    /// Build a table from per-operator binding powers indexed by
    /// [`BinaryOp::index`]. Validation happens in
    /// [`crate::tables::Grammar::new`].
    #[must_use]
    pub const fn new(powers: [u8; BinaryOp::COUNT]) -> Self {
        Self { powers }
    }

    /// `+ -` bind at 10, `* / %` at 20 and `**` at 30.
    #[must_use]
    pub fn standard() -> Self {
        let mut powers = [SENTINEL_BINDING_POWER; BinaryOp::COUNT];
        for (op, bp) in STANDARD_TABLE {
            if let Some(slot) = powers.get_mut(op.index()) {
                *slot = *bp;
            }
        }
        Self { powers }
    }

    /// Binding power of an operator.
    #[must_use]
    pub fn operator_power(&self, op: BinaryOp) -> u8 {
        self.powers
            .get(op.index())
            .copied()
            .unwrap_or(SENTINEL_BINDING_POWER)
    }

    /// Binding power of any token kind. Literals and the end marker share
    /// the sentinel power.
    #[must_use]
    pub fn binding_power(&self, kind: &TokenKind) -> u8 {
        match kind {
            TokenKind::Operator(op) => self.operator_power(*op),
            TokenKind::Primitive(_) | TokenKind::EndOfField => SENTINEL_BINDING_POWER,
        }
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (BinaryOp, u8)> + '_ {
        BinaryOp::ALL
            .iter()
            .map(|op| (*op, self.operator_power(*op)))
    }
}

impl Default for PrecedenceTable {
    fn default() -> Self {
        Self::standard()
    }
}
