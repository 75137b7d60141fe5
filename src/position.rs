//! Mapping token spans to human-readable source locations.

use std::fmt;
use std::sync::Arc;

use crate::Span;

/// File, line and column of a token, for diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Caller-supplied marker for where the expression came from.
    pub file: Arc<str>,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, counted in characters.
    pub column: usize,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Resolves a span of `text` into a [`Location`].
///
/// Implementations must be pure: the same inputs always give the same
/// location.
pub trait PositionResolver {
    fn resolve(&self, file: &Arc<str>, text: &str, span: &Span) -> Location;

    /// Resolve `span` given that byte `anchor.0` of `text` is at `anchor.1`.
    ///
    /// The tokenizer passes the start of the previously located token, so
    /// an implementation can scan only the text in between. The result must
    /// equal [`PositionResolver::resolve`] for the same span.
    fn resolve_from(
        &self,
        file: &Arc<str>,
        text: &str,
        span: &Span,
        anchor: (usize, &Location),
    ) -> Location {
        let _ = anchor;
        self.resolve(file, text, span)
    }
}

/// Counts newlines before the span start.
#[derive(Debug, Default, Clone, Copy)]
pub struct LineColumnResolver;

impl PositionResolver for LineColumnResolver {
    fn resolve(&self, file: &Arc<str>, text: &str, span: &Span) -> Location {
        let before = text.get(..span.start).unwrap_or(text);
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before.get(line_start..).map_or(0, |s| s.chars().count()) + 1;
        Location {
            file: Arc::clone(file),
            line,
            column,
        }
    }

    fn resolve_from(
        &self,
        file: &Arc<str>,
        text: &str,
        span: &Span,
        (offset, at): (usize, &Location),
    ) -> Location {
        let Some(between) = text.get(offset..span.start) else {
            return self.resolve(file, text, span);
        };
        let column = match between.rfind('\n') {
            Some(i) => between.get(i + 1..).map_or(0, |s| s.chars().count()) + 1,
            None => at.column + between.chars().count(),
        };
        Location {
            file: Arc::clone(file),
            line: at.line + between.matches('\n').count(),
            column,
        }
    }
}
