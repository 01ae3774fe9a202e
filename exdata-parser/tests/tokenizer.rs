//! Integration tests for the tokenizer.

use exdata_parser::exdata::lexing::{tokenize, LexError, TokenKind};
use exdata_parser::exdata::testing::factories::mk_tokens;
use rstest::rstest;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source)
        .expect("source to tokenize")
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

#[rstest]
#[case::integer("42", TokenKind::Integer)]
#[case::integer_with_separators("1_000_000", TokenKind::Integer)]
#[case::leading_zeros("007", TokenKind::Integer)]
#[case::atom(":ok", TokenKind::Atom)]
#[case::atom_with_underscore(":_private_1", TokenKind::Atom)]
#[case::key("name:", TokenKind::Key)]
#[case::key_from_boolean_word("true:", TokenKind::Key)]
#[case::single_quoted_value("'12_3'", TokenKind::Value)]
#[case::double_quoted_value("\"x4_5\"", TokenKind::Value)]
#[case::boolean_true("true", TokenKind::Boolean)]
#[case::boolean_false("false", TokenKind::Boolean)]
#[case::comma(",", TokenKind::Comma)]
#[case::colon(":", TokenKind::Colon)]
#[case::arrow("=>", TokenKind::RightArrow)]
#[case::underscore("_", TokenKind::Underscore)]
#[case::open_map("%{", TokenKind::PercentageLeftCurlyBrace)]
fn test_single_token(#[case] source: &str, #[case] expected: TokenKind) {
    let tokens = tokenize(source).expect("source to tokenize");

    assert_eq!(tokens.len(), 2, "{source}: {tokens:?}");
    assert_eq!(tokens[0].kind, expected);
    assert_eq!(tokens[0].lexeme, source);
    assert_eq!(tokens[0].position(), source.len());
    assert_eq!(tokens[1].kind, TokenKind::Eof);
}

#[rstest]
#[case::bare_identifier("age", 0)]
#[case::plain_string("\"hello\"", 0)]
#[case::mismatched_quotes("'12_3\"", 0)]
#[case::dash("[1, -2]", 4)]
#[case::carriage_return("1\r\n", 1)]
#[case::glued_boolean("1true", 1)]
#[case::lone_percent("%", 0)]
#[case::bare_equals("a = 1", 0)]
fn test_invalid_input(#[case] source: &str, #[case] offset: usize) {
    let err = tokenize(source).unwrap_err();

    assert_eq!(err.offset, offset);
    assert_eq!(err.remainder, &source[offset..]);
    assert_eq!(err.to_string(), format!("Invalid token at Position {offset}"));
}

#[test]
fn test_first_match_splits_what_longest_match_would_join() {
    // The INTEGER rule is tried first, so `1_` is an integer and an underscore.
    assert_eq!(
        kinds("1_"),
        vec![TokenKind::Integer, TokenKind::Underscore, TokenKind::Eof]
    );
    // A colon that does not start an atom is a COLON on its own.
    assert_eq!(
        kinds(": 1"),
        vec![TokenKind::Colon, TokenKind::Integer, TokenKind::Eof]
    );
}

#[test]
fn test_map_with_both_connectors() {
    let tokens = tokenize("%{a: 1, :b => [true, '1_2']}").unwrap();

    assert_eq!(
        tokens,
        mk_tokens(&[
            (TokenKind::PercentageLeftCurlyBrace, "%{", 0),
            (TokenKind::Key, "a:", 2),
            (TokenKind::Integer, "1", 5),
            (TokenKind::Comma, ",", 6),
            (TokenKind::Atom, ":b", 8),
            (TokenKind::RightArrow, "=>", 11),
            (TokenKind::LeftSquareBracket, "[", 14),
            (TokenKind::Boolean, "true", 15),
            (TokenKind::Comma, ",", 19),
            (TokenKind::Value, "'1_2'", 21),
            (TokenKind::RightSquareBracket, "]", 26),
            (TokenKind::RightCurlyBrace, "}", 27),
            (TokenKind::Eof, "<EOF>", 28),
        ])
    );
}

#[test]
fn test_multiline_source_with_comments() {
    let source = "# header\n[1, # first\n 2]\n# trailer";

    assert_eq!(
        kinds(source),
        vec![
            TokenKind::LeftSquareBracket,
            TokenKind::Integer,
            TokenKind::Comma,
            TokenKind::Integer,
            TokenKind::RightSquareBracket,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_eof_position_is_past_the_end() {
    let tokens = tokenize("[1]").unwrap();
    let eof = tokens.last().unwrap();

    assert_eq!(eof.kind, TokenKind::Eof);
    assert_eq!(eof.lexeme, "<EOF>");
    assert_eq!(eof.position(), 4);
}

#[test]
fn test_error_stops_at_first_bad_offset() {
    let err: LexError = tokenize("[1] age [2]").unwrap_err();
    assert_eq!(err.offset, 4);
    assert_eq!(String::from(err), "Invalid token at Position 4");
}

#[test]
fn test_error_offset_counts_characters() {
    // `é` is one character but two bytes in UTF-8
    let err = tokenize("# é\n[1] é").unwrap_err();
    assert_eq!(err.offset, 8);
    assert_eq!(err.remainder, "é");
    assert_eq!(err.to_string(), "Invalid token at Position 8");

    let err = tokenize("['é1_2' age]").unwrap_err();
    assert_eq!(err.offset, 8);
}
