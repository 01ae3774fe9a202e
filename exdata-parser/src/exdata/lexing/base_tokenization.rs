//! Base tokenization implementation for the exdata lexer
//!
//! This is the entry point where source strings become token streams.

use super::common::LexError;
use super::patterns::{first_match, skip_len};
use crate::exdata::token::Token;

/// Tokenize source text.
///
/// Skips whitespace and comments, then emits the token of the first pattern that matches at
/// each offset. The returned stream always ends with a single EOF token. Fails on the first
/// offset where no pattern matches; the error reports that offset in characters, while token
/// spans stay byte ranges.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut offset = 0;

    while offset < source.len() {
        offset += skip_len(source, offset);
        if offset >= source.len() {
            break;
        }

        let (kind, len) = first_match(source, offset).ok_or_else(|| {
            LexError::new(source[..offset].chars().count(), &source[offset..])
        })?;
        let end = offset + len;
        let token = Token::new(kind, &source[offset..end], offset..end);
        log::trace!("lexed {}", token);
        tokens.push(token);
        offset = end;
    }

    tokens.push(Token::eof(source.len()));
    log::debug!("tokenized {} bytes into {} tokens", source.len(), tokens.len());
    Ok(tokens)
}
