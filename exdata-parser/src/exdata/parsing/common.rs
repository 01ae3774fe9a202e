//! Parser error types

use crate::exdata::token::{Token, TokenKind};
use std::fmt;
use thiserror::Error;

/// The three bracketed literal kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    List,
    Tuple,
    Map,
}

impl ContainerKind {
    pub fn opening(self) -> TokenKind {
        match self {
            ContainerKind::List => TokenKind::LeftSquareBracket,
            ContainerKind::Tuple => TokenKind::LeftCurlyBrace,
            ContainerKind::Map => TokenKind::PercentageLeftCurlyBrace,
        }
    }

    pub fn closing(self) -> TokenKind {
        match self {
            ContainerKind::List => TokenKind::RightSquareBracket,
            ContainerKind::Tuple | ContainerKind::Map => TokenKind::RightCurlyBrace,
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContainerKind::List => "list",
            ContainerKind::Tuple => "tuple",
            ContainerKind::Map => "map",
        };
        f.write_str(name)
    }
}

/// Errors that abort parsing.
///
/// The `Display` text is the short diagnostic shown to users; the fields carry the detail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A literal was required but the next token cannot start one (`None` at end of input).
    #[error("Unexpected token error")]
    UnexpectedToken {
        found: Option<TokenKind>,
        lexeme: String,
        position: usize,
    },
    /// A container was never closed, or a comma sits right before its closing bracket.
    ///
    /// Reported to users with the same text as [`ParseError::UnexpectedToken`].
    #[error("Unexpected token error")]
    UnterminatedContainer {
        container: ContainerKind,
        trailing_comma: bool,
        position: usize,
    },
    /// A map entry has no literal to use as its key or its value.
    #[error("Invalid key-pair")]
    InvalidKeyPair { position: usize },
}

impl ParseError {
    pub fn unexpected(token: &Token) -> Self {
        ParseError::UnexpectedToken {
            found: Some(token.kind),
            lexeme: token.lexeme.clone(),
            position: token.position(),
        }
    }

    pub fn unexpected_end(position: usize) -> Self {
        ParseError::UnexpectedToken {
            found: None,
            lexeme: String::new(),
            position,
        }
    }

    /// Offset the error was detected at.
    pub fn position(&self) -> usize {
        match self {
            ParseError::UnexpectedToken { position, .. }
            | ParseError::UnterminatedContainer { position, .. }
            | ParseError::InvalidKeyPair { position } => *position,
        }
    }
}

impl From<ParseError> for String {
    fn from(err: ParseError) -> Self {
        err.to_string()
    }
}
