//! Lexer
//!
//!     This module turns exdata source text into a flat stream of [`Token`]s.
//!
//! First Match, Not Longest Match
//!
//!     The tokenizer is an ordered table of anchored patterns (see [patterns]). At every
//!     offset the patterns are tried in [`TokenKind::ALL`](crate::exdata::token::TokenKind::ALL)
//!     order and the first one that matches wins, even if a later pattern would have matched
//!     more text. This keeps the precedence rules visible and testable: `1_000` is an INTEGER
//!     before anything else can look at it, and `name:` is claimed by KEY because KEY is
//!     tried before BOOLEAN or any symbol.
//!
//! Skipping
//!
//!     Before each token, runs of spaces, tabs, newlines and `#` comments (to end of line) are
//!     skipped. Carriage returns are not whitespace here.
//!
//! End Of Input
//!
//!     A synthetic EOF token with lexeme `<EOF>` is appended after the last real token.

pub mod base_tokenization;
pub mod common;
pub mod patterns;

pub use base_tokenization::tokenize;
pub use common::LexError;
// Re-export token types for consumers that import them from `lexing`
pub use crate::exdata::token::{Token, TokenKind};
