//! Lexical and operator tables, bundled into a validated [`Grammar`].
//!
//! The tables are plain values built once and borrowed by every tokenizer
//! and parser. Nothing here is global or mutable after construction, so a
//! single `Grammar` can serve any number of concurrent parses.

use phf::phf_ordered_map;
use thiserror::Error;

use crate::language::BinaryOp;
use crate::parser::ast::precedence::{PrecedenceTable, SENTINEL_BINDING_POWER};

/// Standard operator spellings, in [`BinaryOp`] discriminant order.
static STANDARD_SPELLINGS: phf::OrderedMap<&'static str, BinaryOp> = phf_ordered_map! {
    "+" => BinaryOp::Add,
    "-" => BinaryOp::Sub,
    "*" => BinaryOp::Mul,
    "/" => BinaryOp::Div,
    "%" => BinaryOp::Rem,
    "**" => BinaryOp::Pow,
};

const STANDARD_WHITESPACE: &[char] = &[' ', '\n', '\t', '\r'];
const STANDARD_OPERATOR_SYMBOLS: &[char] = &['+', '-', '*', '/', '%', '.'];

/// Errors raised when a set of tables is inconsistent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("character {0:?} is both whitespace and an operator symbol")]
    OverlappingClasses(char),
    #[error("operator {0} has an empty spelling")]
    EmptySpelling(BinaryOp),
    #[error("spelling `{spelling}` is used by both {first} and {second}")]
    DuplicateSpelling {
        spelling: String,
        first: BinaryOp,
        second: BinaryOp,
    },
    #[error("spelling `{spelling}` for {op} contains {symbol:?}, which is not an operator symbol")]
    SpellingOutsideOperatorSymbols {
        spelling: String,
        op: BinaryOp,
        symbol: char,
    },
    #[error("expected {expected} operator spellings, found {found}")]
    SpellingCount { expected: usize, found: usize },
    #[error("operator {0} must bind tighter than the end of input")]
    ZeroBindingPower(BinaryOp),
}

/// Character classes used to split raw tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalTables {
    whitespace: Vec<char>,
    operator_symbols: Vec<char>,
}

impl LexicalTables {
    #[must_use]
    pub fn new(whitespace: impl Into<Vec<char>>, operator_symbols: impl Into<Vec<char>>) -> Self {
        Self {
            whitespace: whitespace.into(),
            operator_symbols: operator_symbols.into(),
        }
    }

    /// Space, newline, tab and carriage return as whitespace; `+ - * / % .`
    /// as operator symbols.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(STANDARD_WHITESPACE, STANDARD_OPERATOR_SYMBOLS)
    }

    #[must_use]
    pub fn is_whitespace(&self, c: char) -> bool {
        self.whitespace.contains(&c)
    }

    #[must_use]
    pub fn is_operator_symbol(&self, c: char) -> bool {
        self.operator_symbols.contains(&c)
    }
}

impl Default for LexicalTables {
    fn default() -> Self {
        Self::standard()
    }
}

/// Ordered operator spellings. Position `i` spells
/// `BinaryOp::from_index(i)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorTable {
    spellings: Vec<String>,
}

impl OperatorTable {
    /// Build a table from spellings listed in [`BinaryOp`] discriminant
    /// order.
    #[must_use]
    pub fn new<S: Into<String>>(spellings: impl IntoIterator<Item = S>) -> Self {
        Self {
            spellings: spellings.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn standard() -> Self {
        Self::new(STANDARD_SPELLINGS.keys().copied())
    }

    /// Operator whose spelling equals `raw` exactly.
    #[must_use]
    pub fn lookup(&self, raw: &str) -> Option<BinaryOp> {
        self.spellings
            .iter()
            .position(|s| s == raw)
            .and_then(BinaryOp::from_index)
    }

    /// Spelling of `op`, if the table covers it.
    #[must_use]
    pub fn spelling(&self, op: BinaryOp) -> Option<&str> {
        self.spellings.get(op.index()).map(String::as_str)
    }

    fn entries(&self) -> impl Iterator<Item = (BinaryOp, &str)> {
        self.spellings
            .iter()
            .enumerate()
            .filter_map(|(i, s)| BinaryOp::from_index(i).map(|op| (op, s.as_str())))
    }
}

impl Default for OperatorTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Validated bundle of every table the tokenizer and parser consult.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar {
    lexical: LexicalTables,
    operators: OperatorTable,
    precedence: PrecedenceTable,
}

impl Grammar {
    /// Bundle and validate a set of tables.
    ///
    /// # Errors
    /// Returns a [`TableError`] when the character classes overlap, when a
    /// spelling is empty, duplicated, or could never be scanned as a single
    /// operator run, when the spelling list does not cover every operator,
    /// or when an operator binds no tighter than the end of input.
    pub fn new(
        lexical: LexicalTables,
        operators: OperatorTable,
        precedence: PrecedenceTable,
    ) -> Result<Self, TableError> {
        if let Some(c) = lexical
            .whitespace
            .iter()
            .find(|c| lexical.is_operator_symbol(**c))
        {
            return Err(TableError::OverlappingClasses(*c));
        }
        if operators.spellings.len() != BinaryOp::COUNT {
            return Err(TableError::SpellingCount {
                expected: BinaryOp::COUNT,
                found: operators.spellings.len(),
            });
        }
        for (op, spelling) in operators.entries() {
            if spelling.is_empty() {
                return Err(TableError::EmptySpelling(op));
            }
            if let Some(symbol) = spelling.chars().find(|c| !lexical.is_operator_symbol(*c)) {
                return Err(TableError::SpellingOutsideOperatorSymbols {
                    spelling: spelling.to_string(),
                    op,
                    symbol,
                });
            }
            if let Some(first) = operators.lookup(spelling).filter(|first| *first != op) {
                return Err(TableError::DuplicateSpelling {
                    spelling: spelling.to_string(),
                    first,
                    second: op,
                });
            }
        }
        if let Some((op, _)) = precedence
            .iter()
            .find(|(_, bp)| *bp <= SENTINEL_BINDING_POWER)
        {
            return Err(TableError::ZeroBindingPower(op));
        }
        Ok(Self {
            lexical,
            operators,
            precedence,
        })
    }

    /// The standard arithmetic grammar.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            lexical: LexicalTables::standard(),
            operators: OperatorTable::standard(),
            precedence: PrecedenceTable::standard(),
        }
    }

    #[must_use]
    pub fn lexical(&self) -> &LexicalTables {
        &self.lexical
    }

    #[must_use]
    pub fn operators(&self) -> &OperatorTable {
        &self.operators
    }

    #[must_use]
    pub fn precedence(&self) -> &PrecedenceTable {
        &self.precedence
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::standard()
    }
}
