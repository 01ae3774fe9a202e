//! Token factories for tests

use crate::exdata::token::{Token, TokenKind};

/// Build a token stream from `(kind, lexeme, start)` triples.
///
/// Spans are derived from the lexeme length, except for EOF entries, where `start` is the
/// source length and the span is the synthetic one-past-the-end span.
pub fn mk_tokens(specs: &[(TokenKind, &str, usize)]) -> Vec<Token> {
    specs
        .iter()
        .map(|&(kind, lexeme, start)| match kind {
            TokenKind::Eof => Token::eof(start),
            _ => Token::new(kind, lexeme, start..start + lexeme.len()),
        })
        .collect()
}
