//! Token patterns
//!
//! The table below is the lexical grammar. Order matters: patterns are tried in declaration
//! order and the first match wins. Every pattern is anchored at the current offset.
//!
//! Two entries share the VALUE kind because the regex engine has no backreferences: the
//! closing quote must be the opening one, so each quote character gets its own pattern.

use crate::exdata::token::TokenKind;
use once_cell::sync::Lazy;
use regex::Regex;

/// Whitespace (space, tab, newline) and `#` line comments, skipped before every token.
pub(super) static SKIP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[ \t\n]|#.*)+").unwrap());

/// Token patterns as (kind, regex) rules, in the order they are tried.
pub(super) const TOKEN_PATTERNS: &[(TokenKind, &str)] = &[
    // 1_000, 007
    (TokenKind::Integer, r"^[0-9]+(?:_[0-9]+)*"),
    // :ok
    (TokenKind::Atom, r"^:[a-zA-Z_][a-zA-Z0-9_]*"),
    (TokenKind::Comma, r"^,"),
    (TokenKind::Colon, r"^:"),
    // name: (the colon belongs to the lexeme)
    (TokenKind::Key, r"^[a-zA-Z_][a-zA-Z0-9_]*:"),
    // '12_3', "x4_5"
    (TokenKind::Value, r"^'.?[0-9]+_[0-9]+'"),
    (TokenKind::Value, r#"^".?[0-9]+_[0-9]+""#),
    // Must also start on a word boundary, see `WORD_BOUNDARY_BEFORE`
    (TokenKind::Boolean, r"^(?:true|false)\b"),
    (TokenKind::LeftSquareBracket, r"^\["),
    (TokenKind::RightSquareBracket, r"^\]"),
    (TokenKind::LeftCurlyBrace, r"^\{"),
    (TokenKind::RightCurlyBrace, r"^\}"),
    (TokenKind::PercentageLeftCurlyBrace, r"^%\{"),
    (TokenKind::RightArrow, r"^=>"),
    (TokenKind::Underscore, r"^_"),
    (TokenKind::Eof, r"^<EOF>"),
];

/// Kinds whose pattern needs a word boundary *before* the match.
///
/// Patterns only ever see the text from the current offset on, so a leading `\b` cannot be
/// expressed in the regex itself: `1true` must not lex `true` as a BOOLEAN.
const WORD_BOUNDARY_BEFORE: &[TokenKind] = &[TokenKind::Boolean];

/// A compiled token pattern.
pub struct TokenMatcher {
    pub kind: TokenKind,
    regex: Regex,
    boundary_before: bool,
}

impl TokenMatcher {
    /// Length in bytes of the lexeme matched at `offset`, if any.
    pub fn match_at(&self, source: &str, offset: usize) -> Option<usize> {
        if self.boundary_before && ends_with_word_char(&source[..offset]) {
            return None;
        }
        self.regex
            .find(&source[offset..])
            .map(|m| m.end())
            .filter(|&len| len > 0)
    }
}

/// The compiled pattern table, built once.
pub static TOKEN_MATCHERS: Lazy<Vec<TokenMatcher>> = Lazy::new(|| {
    TOKEN_PATTERNS
        .iter()
        .map(|(kind, pattern)| TokenMatcher {
            kind: *kind,
            regex: Regex::new(pattern).unwrap(),
            boundary_before: WORD_BOUNDARY_BEFORE.contains(kind),
        })
        .collect()
});

/// Length in bytes of the skippable run at `offset` (zero when there is none).
pub fn skip_len(source: &str, offset: usize) -> usize {
    SKIP_REGEX
        .find(&source[offset..])
        .map(|m| m.end())
        .unwrap_or(0)
}

/// First pattern that matches at `offset`, with the lexeme length in bytes.
pub fn first_match(source: &str, offset: usize) -> Option<(TokenKind, usize)> {
    TOKEN_MATCHERS
        .iter()
        .find_map(|matcher| matcher.match_at(source, offset).map(|len| (matcher.kind, len)))
}

fn ends_with_word_char(text: &str) -> bool {
    text.chars()
        .next_back()
        .is_some_and(|c| c.is_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_pattern_compiles() {
        assert_eq!(TOKEN_MATCHERS.len(), TOKEN_PATTERNS.len());
    }

    #[test]
    fn test_table_follows_kind_order() {
        // Kinds appear in TokenKind::ALL order (VALUE twice, once per quote).
        let mut kinds: Vec<TokenKind> = TOKEN_PATTERNS.iter().map(|(k, _)| *k).collect();
        kinds.dedup();
        assert_eq!(kinds, TokenKind::ALL.to_vec());
    }

    #[test]
    fn test_first_match_wins_over_longer() {
        // INTEGER claims "1" before UNDERSCORE gets a chance, even though "1_" is longer text.
        assert_eq!(first_match("1_", 0), Some((TokenKind::Integer, 1)));
        // KEY beats BOOLEAN for "true:".
        assert_eq!(first_match("true:", 0), Some((TokenKind::Key, 5)));
    }

    #[test]
    fn test_boolean_needs_boundary_before() {
        assert_eq!(first_match("true", 0), Some((TokenKind::Boolean, 4)));
        assert_eq!(first_match(" true", 1), Some((TokenKind::Boolean, 4)));
        assert_eq!(first_match("1true", 1), None);
        assert_eq!(first_match("_false", 1), None);
    }

    #[test]
    fn test_skip_len() {
        assert_eq!(skip_len("  \t\n# note\n  x", 0), 13);
        assert_eq!(skip_len("x", 0), 0);
        assert_eq!(skip_len("\r\n", 0), 0);
    }

    #[test]
    fn test_value_quotes_must_agree() {
        assert_eq!(first_match("'12_3'", 0), Some((TokenKind::Value, 6)));
        assert_eq!(first_match("\"a1_2\"", 0), Some((TokenKind::Value, 6)));
        assert_eq!(first_match("'12_3\"", 0), None);
        assert_eq!(first_match("\"hello\"", 0), None);
    }
}
