//! Infix operator handling for the precedence-climbing parser.

use crate::error::ParseError;
use crate::language::TokenKind;
use crate::parser::ast::Expr;

use super::Parser;

impl Parser<'_> {
    /// Fold operators binding tighter than `min_bp` into `lhs`.
    ///
    /// The right-hand side is parsed with the operator's own binding power as
    /// its floor, so an operator of equal power to the right ends that call
    /// and chains group to the left.
    pub(super) fn parse_infix(&mut self, mut lhs: Expr, min_bp: u8) -> Result<Expr, ParseError> {
        let precedence = self.tokens.grammar().precedence();
        loop {
            let token = self.tokens.current();
            let bp = precedence.binding_power(&token.kind);
            if bp <= min_bp {
                break;
            }
            let TokenKind::Operator(op) = token.kind else {
                break;
            };
            let location = token.location.clone();
            self.tokens.advance()?;
            let rhs = self.parse_binary_expression(bp)?;
            lhs = Expr::binary(op, location, lhs, rhs);
            if self.tokens.at_end() {
                break;
            }
        }
        Ok(lhs)
    }
}
