//! Property-based tests for the tokenizer and parser
//!
//! Sources are generated from the lexical forms the grammar accepts, so every generated
//! document is valid and its shape is known up front.

use exdata_parser::exdata::ast::DataLiteral;
use exdata_parser::exdata::lexing::{tokenize, Token, TokenKind};
use exdata_parser::parse_document;
use proptest::prelude::*;

/// Scalar literals, one per leaf kind
fn scalar_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{1,3}(_[0-9]{1,3}){0,3}",
        ":[a-z_][a-zA-Z0-9_]{0,8}",
        "'[a-z]?[0-9]{1,3}_[0-9]{1,3}'",
        Just("true".to_string()),
        Just("false".to_string()),
    ]
}

/// Nested lists and tuples of scalars
fn literal_strategy() -> impl Strategy<Value = String> {
    scalar_strategy().prop_recursive(4, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6)
                .prop_map(|items| format!("[{}]", items.join(", "))),
            prop::collection::vec(inner, 0..6)
                .prop_map(|items| format!("{{{}}}", items.join(" "))),
        ]
    })
}

/// Whitespace and comments allowed between tokens
fn separator_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(" ".to_string()),
        Just("\n".to_string()),
        Just("\t".to_string()),
        Just(" # comment\n".to_string()),
    ]
}

proptest! {
    #[test]
    fn tokenize_is_deterministic(source in literal_strategy()) {
        let first = tokenize(&source).unwrap();
        let second = tokenize(&source).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn tokens_cover_source_in_order(source in literal_strategy()) {
        let tokens = tokenize(&source).unwrap();
        let (eof, lexed) = tokens.split_last().unwrap();

        prop_assert_eq!(eof.kind, TokenKind::Eof);
        prop_assert_eq!(eof.position(), source.len() + 1);

        let mut previous_end = 0;
        for token in lexed {
            prop_assert!(token.span.start >= previous_end);
            prop_assert_eq!(&source[token.span.clone()], token.lexeme.as_str());
            previous_end = token.span.end;
        }
    }

    #[test]
    fn separators_do_not_change_tokens(
        items in prop::collection::vec(scalar_strategy(), 1..8),
        separator in separator_strategy(),
    ) {
        let spaced = tokenize(&items.join(" ")).unwrap();
        let separated = tokenize(&items.join(&separator)).unwrap();

        let lexemes = |tokens: &[Token]| {
            tokens.iter().map(|t| (t.kind, t.lexeme.clone())).collect::<Vec<_>>()
        };
        prop_assert_eq!(lexemes(&spaced), lexemes(&separated));
    }

    #[test]
    fn list_length_is_preserved(items in prop::collection::vec(scalar_strategy(), 0..12)) {
        let source = format!("[{}]", items.join(", "));
        let sentence = parse_document(&source).unwrap();

        prop_assert_eq!(sentence.items.len(), 1);
        match &sentence.items[0] {
            DataLiteral::List(parsed) => prop_assert_eq!(parsed.len(), items.len()),
            other => prop_assert!(false, "expected a list, got {:?}", other),
        }
    }

    #[test]
    fn nested_literals_parse(source in literal_strategy()) {
        let sentence = parse_document(&source).unwrap();
        prop_assert_eq!(sentence.items.len(), 1);
    }

    #[test]
    fn trailing_comma_always_fails(items in prop::collection::vec(scalar_strategy(), 1..6)) {
        let source = format!("[{},]", items.join(", "));
        prop_assert!(parse_document(&source).is_err());
    }
}
