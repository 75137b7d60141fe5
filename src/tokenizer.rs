//! Lexical analysis for arithmetic expressions.
//!
//! The [`Tokenizer`] walks a cursor over the source, splitting it into raw
//! tokens (maximal runs of operator symbols or of word characters) and
//! classifying each one as an operator, a numeric literal or the end of
//! input. Character classes and operator spellings come from the
//! [`Grammar`] it borrows.
//!
//! A digit run may be the whole part of a float. The tokenizer takes a
//! save point, looks at the next two raw tokens, and rewinds when they do
//! not spell `.digits`.

use std::sync::Arc;

use log::trace;
use logos::Logos;

use crate::error::LexError;
use crate::language::{Number, TokenKind};
use crate::position::{LineColumnResolver, Location, PositionResolver};
use crate::tables::{Grammar, LexicalTables};

/// Byte range for a token within the source.
pub type Span = std::ops::Range<usize>;

/// File marker used when the caller does not supply one.
pub const DEFAULT_FILE: &str = "<input>";

/// One classified lexical unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub location: Location,
}

/// How a raw token continues once its first character is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanMode {
    OperatorRun,
    WordRun,
}

impl ScanMode {
    fn of(first: char, lexical: &LexicalTables) -> Self {
        if lexical.is_operator_symbol(first) {
            Self::OperatorRun
        } else {
            Self::WordRun
        }
    }

    fn continues(self, c: char, lexical: &LexicalTables) -> bool {
        match self {
            Self::OperatorRun => lexical.is_operator_symbol(c),
            Self::WordRun => !lexical.is_whitespace(c) && !lexical.is_operator_symbol(c),
        }
    }
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum ShapeToken {
    #[regex(r"0[xX][0-9a-fA-F]+")]
    Hex,
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
}

/// Coarse description of a raw token that matched nothing, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordShape {
    Identifier,
    HexLiteral,
    OperatorRun,
    Other,
}

impl WordShape {
    fn classify(text: &str, lexical: &LexicalTables) -> Self {
        if text
            .chars()
            .next()
            .is_some_and(|c| ScanMode::of(c, lexical) == ScanMode::OperatorRun)
        {
            return Self::OperatorRun;
        }
        let mut lexer = ShapeToken::lexer(text);
        let first = lexer.next();
        let whole = lexer.span() == (0..text.len());
        match (first, whole, lexer.next()) {
            (Some(Ok(ShapeToken::Hex)), true, None) => Self::HexLiteral,
            (Some(Ok(ShapeToken::Ident)), true, None) => Self::Identifier,
            _ => Self::Other,
        }
    }
}

impl std::fmt::Display for WordShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Identifier => "identifier",
            Self::HexLiteral => "hexadecimal literal",
            Self::OperatorRun => "operator",
            Self::Other => "token",
        })
    }
}

/// Saved cursor position for speculative scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SavePoint(usize);

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Cursor over one expression, producing a token per call to
/// [`Tokenizer::advance`].
pub struct Tokenizer<'a> {
    src: &'a str,
    file: Arc<str>,
    grammar: &'a Grammar,
    resolver: &'a dyn PositionResolver,
    cursor: usize,
    current: Token,
    /// Start and location of the last located span.
    anchor: (usize, Location),
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer positioned at the start of `src`.
    ///
    /// The current token is an end marker until [`Tokenizer::advance`] is
    /// first called.
    #[must_use]
    pub fn new(
        src: &'a str,
        file: impl Into<Arc<str>>,
        grammar: &'a Grammar,
        resolver: &'a dyn PositionResolver,
    ) -> Self {
        let file = file.into();
        let location = resolver.resolve(&file, src, &(0..0));
        Self {
            src,
            file,
            grammar,
            resolver,
            cursor: 0,
            current: Token {
                kind: TokenKind::EndOfField,
                span: 0..0,
                location: location.clone(),
            },
            anchor: (0, location),
        }
    }

    /// The most recently scanned token.
    #[must_use]
    pub fn current(&self) -> &Token {
        &self.current
    }

    /// Byte offset of the read cursor.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True once the current token is the end marker.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.current.kind == TokenKind::EndOfField
    }

    #[must_use]
    pub fn source(&self) -> &'a str {
        self.src
    }

    #[must_use]
    pub fn grammar(&self) -> &'a Grammar {
        self.grammar
    }

    /// Scan the next token and make it current.
    ///
    /// At end of input this keeps returning the end marker without moving
    /// the cursor.
    ///
    /// # Errors
    /// Returns a [`LexError`] when the next raw token is not an operator
    /// spelling or a representable numeric literal.
    pub fn advance(&mut self) -> Result<&Token, LexError> {
        let token = self.scan_token()?;
        trace!("scanned {:?} at {:?}", token.kind, token.span);
        self.current = token;
        Ok(&self.current)
    }

    fn scan_token(&mut self) -> Result<Token, LexError> {
        let grammar = self.grammar;
        let span = self.consume_raw();
        let text = self.slice(&span);
        if text.is_empty() {
            return Ok(self.token(TokenKind::EndOfField, span));
        }
        if let Some(op) = grammar.operators().lookup(text) {
            return Ok(self.token(TokenKind::Operator(op), span));
        }
        if is_digits(text) {
            return self.scan_literal(span);
        }
        Err(LexError::UnrecognizedToken {
            text: text.to_string(),
            shape: WordShape::classify(text, grammar.lexical()),
            location: self.locate(&span),
        })
    }

    /// Resolve a digit run into an integer or, when followed directly by
    /// `.digits`, a float.
    fn scan_literal(&mut self, whole: Span) -> Result<Token, LexError> {
        let save = self.save_point();
        let period = self.consume_raw();
        let decimal = self.consume_raw();
        if self.is_fraction(&whole, &period, &decimal) {
            let span = whole.start..decimal.end;
            return match self.slice(&span).parse::<f64>() {
                Ok(value) if value.is_finite() => {
                    Ok(self.token(TokenKind::Primitive(Number::Float(value)), span))
                }
                _ => Err(self.unset_literal(span)),
            };
        }
        self.rewind(save);
        match self.slice(&whole).parse::<i64>() {
            Ok(value) => Ok(self.token(TokenKind::Primitive(Number::Int(value)), whole)),
            Err(_) => Err(self.unset_literal(whole)),
        }
    }

    fn is_fraction(&self, whole: &Span, period: &Span, decimal: &Span) -> bool {
        period.start == whole.end
            && decimal.start == period.end
            && self.slice(period) == "."
            && is_digits(self.slice(decimal))
    }

    /// Skip whitespace, then consume one raw token and return its span.
    /// The span is empty only at end of input.
    fn consume_raw(&mut self) -> Span {
        let lexical = self.grammar.lexical();
        let rest = self.rest();
        let skipped = rest
            .char_indices()
            .find(|(_, c)| !lexical.is_whitespace(*c))
            .map_or(rest.len(), |(i, _)| i);
        let word = rest.get(skipped..).unwrap_or("");
        let mut chars = word.char_indices();
        let len = chars.next().map_or(0, |(_, first)| {
            let mode = ScanMode::of(first, lexical);
            chars
                .find(|(_, c)| !mode.continues(*c, lexical))
                .map_or(word.len(), |(i, _)| i)
        });
        let start = self.cursor + skipped;
        self.cursor = start + len;
        start..self.cursor
    }

    fn save_point(&self) -> SavePoint {
        SavePoint(self.cursor)
    }

    fn rewind(&mut self, save: SavePoint) {
        if save.0 != self.cursor {
            trace!("rewinding speculative scan from {} to {}", self.cursor, save.0);
        }
        self.cursor = save.0;
    }

    fn rest(&self) -> &'a str {
        self.src.get(self.cursor..).unwrap_or("")
    }

    fn slice(&self, span: &Span) -> &'a str {
        self.src.get(span.clone()).unwrap_or("")
    }

    fn locate(&mut self, span: &Span) -> Location {
        let (offset, at) = &self.anchor;
        let location = self
            .resolver
            .resolve_from(&self.file, self.src, span, (*offset, at));
        self.anchor = (span.start, location.clone());
        location
    }

    fn token(&mut self, kind: TokenKind, span: Span) -> Token {
        Token {
            kind,
            location: self.locate(&span),
            span,
        }
    }

    fn unset_literal(&mut self, span: Span) -> LexError {
        LexError::UnsetLiteral {
            text: self.slice(&span).to_string(),
            location: self.locate(&span),
        }
    }
}

/// Tokenize `src` completely, ending with the end marker.
///
/// # Errors
/// Returns the first [`LexError`] encountered.
///
/// # Examples
///
/// ```rust
/// use c1expr::{tokenize, Grammar, TokenKind};
///
/// let tokens = tokenize("1 + 2", &Grammar::standard()).unwrap_or_default();
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::EndOfField));
/// ```
pub fn tokenize(src: &str, grammar: &Grammar) -> Result<Vec<Token>, LexError> {
    let mut tokenizer = Tokenizer::new(src, DEFAULT_FILE, grammar, &LineColumnResolver);
    let mut out = Vec::new();
    loop {
        let token = tokenizer.advance()?.clone();
        let done = token.kind == TokenKind::EndOfField;
        out.push(token);
        if done {
            return Ok(out);
        }
    }
}
