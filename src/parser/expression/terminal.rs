//! Parsing of literal terminals.

use crate::error::ParseError;
use crate::parser::ast::Expr;

use super::Parser;

impl Parser<'_> {
    /// Turn the current token into a leaf and move past it.
    ///
    /// Anything but a literal is an [`ParseError::ExpectedLiteral`].
    pub(super) fn parse_terminal(&mut self) -> Result<Expr, ParseError> {
        let leaf = Expr::leaf(self.tokens.current().clone())?;
        self.tokens.advance()?;
        Ok(leaf)
    }
}
