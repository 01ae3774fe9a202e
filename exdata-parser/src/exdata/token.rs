//! Token types shared by the tokenizer, the parser and the token dump format.
//!
//!     The token set is small and flat: every token is a kind plus the exact source text it
//!     matched. There is no token tree, no synthetic indentation tokens; the only synthetic
//!     token is the trailing [`TokenKind::Eof`] appended once the source is exhausted.
//!
//! Kind Order
//!
//!     [`TokenKind::ALL`] lists the kinds in declaration order, and that order is part of the
//!     grammar: the tokenizer tries the patterns in this order and the first one that matches
//!     wins. See [lexing](crate::exdata::lexing).

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::Range;

/// Lexeme used for the synthetic end-of-input token.
pub const EOF_LEXEME: &str = "<EOF>";

/// Kinds of tokens, in the order the tokenizer tries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    Integer,
    Atom,
    Comma,
    Colon,
    Key,
    Value,
    Boolean,
    LeftSquareBracket,
    RightSquareBracket,
    LeftCurlyBrace,
    RightCurlyBrace,
    PercentageLeftCurlyBrace,
    RightArrow,
    Underscore,
    Eof,
}

impl TokenKind {
    pub const ALL: [TokenKind; 15] = [
        TokenKind::Integer,
        TokenKind::Atom,
        TokenKind::Comma,
        TokenKind::Colon,
        TokenKind::Key,
        TokenKind::Value,
        TokenKind::Boolean,
        TokenKind::LeftSquareBracket,
        TokenKind::RightSquareBracket,
        TokenKind::LeftCurlyBrace,
        TokenKind::RightCurlyBrace,
        TokenKind::PercentageLeftCurlyBrace,
        TokenKind::RightArrow,
        TokenKind::Underscore,
        TokenKind::Eof,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Integer => "INTEGER",
            TokenKind::Atom => "ATOM",
            TokenKind::Comma => "COMMA",
            TokenKind::Colon => "COLON",
            TokenKind::Key => "KEY",
            TokenKind::Value => "VALUE",
            TokenKind::Boolean => "BOOLEAN",
            TokenKind::LeftSquareBracket => "LEFT_SQUARE_BRACKET",
            TokenKind::RightSquareBracket => "RIGHT_SQUARE_BRACKET",
            TokenKind::LeftCurlyBrace => "LEFT_CURLY_BRACE",
            TokenKind::RightCurlyBrace => "RIGHT_CURLY_BRACE",
            TokenKind::PercentageLeftCurlyBrace => "PERCENTAGE_LEFT_CURLY_BRACE",
            TokenKind::RightArrow => "RIGHT_ARROW",
            TokenKind::Underscore => "UNDERSCORE",
            TokenKind::Eof => "EOF",
        }
    }

    /// True for the kinds that open a data literal.
    pub fn starts_literal(self) -> bool {
        matches!(
            self,
            TokenKind::LeftSquareBracket
                | TokenKind::LeftCurlyBrace
                | TokenKind::PercentageLeftCurlyBrace
                | TokenKind::Atom
                | TokenKind::Key
                | TokenKind::Value
                | TokenKind::Integer
                | TokenKind::Boolean
        )
    }

    /// Kinds the parser swallows in literal position without producing a node.
    ///
    /// A lone `:`, `=>` or end-of-input where a literal is expected is consumed and yields
    /// nothing, unless the very next token repeats it.
    pub fn is_degenerate_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Colon | TokenKind::RightArrow | TokenKind::Eof
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token and the exact text it matched.
///
/// `span` is the byte range of the lexeme in the source. The synthetic end-of-input token
/// spans one byte past the end of the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub span: Range<usize>,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    /// The end-of-input token for a source of `source_len` bytes.
    pub fn eof(source_len: usize) -> Self {
        Self::new(TokenKind::Eof, EOF_LEXEME, source_len..source_len + 1)
    }

    /// Offset immediately after the lexeme, as reported in diagnostics and token dumps.
    pub fn position(&self) -> usize {
        self.span.end
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})@{}", self.kind, self.lexeme, self.position())
    }
}

impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Token", 3)?;
        state.serialize_field("kind", &self.kind)?;
        state.serialize_field("lexeme", &self.lexeme)?;
        state.serialize_field("position", &self.position())?;
        state.end()
    }
}
