//! Common lexer types

use thiserror::Error;

/// No token pattern matches at `offset`, counted in characters from the start of the source.
///
/// The message is the one-line diagnostic printed by the command line tool; the unconsumed
/// remainder is kept for callers that want to show more.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid token at Position {offset}")]
pub struct LexError {
    pub offset: usize,
    pub remainder: String,
}

impl LexError {
    pub fn new(offset: usize, remainder: impl Into<String>) -> Self {
        Self {
            offset,
            remainder: remainder.into(),
        }
    }
}

impl From<LexError> for String {
    fn from(err: LexError) -> Self {
        err.to_string()
    }
}
