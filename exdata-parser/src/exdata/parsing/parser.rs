//! Recursive descent parser
//!
//! The parser owns the token stream and consumes it front to back with one token of
//! lookahead. Each grammar production is one method.

use super::common::{ContainerKind, ParseError};
use crate::exdata::ast::{DataLiteral, KeyPair, Sentence};
use crate::exdata::token::{Token, TokenKind};
use std::iter::Peekable;
use std::vec::IntoIter;

pub struct Parser {
    tokens: Peekable<IntoIter<Token>>,
    /// Position of the last consumed token, for errors raised at end of input.
    position: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens: tokens.into_iter().peekable(),
            position: 0,
        }
    }

    /// Parse the whole token stream into a sentence.
    pub fn parse(mut self) -> Result<Sentence, ParseError> {
        let sentence = self.sentence()?;
        log::debug!("parsed sentence with {} items", sentence.items.len());
        Ok(sentence)
    }

    // sentence := { data-literal }
    fn sentence(&mut self) -> Result<Sentence, ParseError> {
        let mut items = Vec::new();
        while self.tokens.peek().is_some() {
            if let Some(literal) = self.data_literal()? {
                items.push(literal);
            }
        }
        Ok(Sentence::new(items))
    }

    /// data-literal, dispatched on the next token's kind.
    ///
    /// Returns `Ok(None)` for the degenerate connector path, see the
    /// [module docs](crate::exdata::parsing).
    fn data_literal(&mut self) -> Result<Option<DataLiteral>, ParseError> {
        let token = self
            .advance()
            .ok_or_else(|| ParseError::unexpected_end(self.position))?;

        let literal = match token.kind {
            TokenKind::LeftSquareBracket => {
                DataLiteral::List(self.delimited(ContainerKind::List, Self::data_literal)?)
            }
            TokenKind::LeftCurlyBrace => {
                DataLiteral::Tuple(self.delimited(ContainerKind::Tuple, Self::data_literal)?)
            }
            TokenKind::PercentageLeftCurlyBrace => DataLiteral::Map(
                self.delimited(ContainerKind::Map, |parser| parser.key_pair().map(Some))?,
            ),
            TokenKind::Atom => DataLiteral::Atom(token.lexeme),
            TokenKind::Key => DataLiteral::Key(token.lexeme),
            TokenKind::Value => DataLiteral::Value(token.lexeme),
            TokenKind::Integer => DataLiteral::Integer(token.lexeme),
            TokenKind::Boolean => DataLiteral::Boolean(token.lexeme),
            kind if kind.is_degenerate_literal() => return self.degenerate_literal(&token),
            _ => return Err(ParseError::unexpected(&token)),
        };
        Ok(Some(literal))
    }

    /// A connector in literal position: swallow it, fail if it is immediately repeated.
    fn degenerate_literal(&mut self, connector: &Token) -> Result<Option<DataLiteral>, ParseError> {
        match self.check_token(connector.kind) {
            Some(repeated) => Err(ParseError::unexpected(&repeated)),
            None => {
                log::trace!("skipped {} in literal position", connector);
                Ok(None)
            }
        }
    }

    /// Shared body of list, tuple and map: elements, optional commas, then the closing
    /// bracket. The opening bracket has already been consumed.
    ///
    /// Reaching the synthetic EOF ends the elements; an `<EOF>` written in the source is
    /// still an ordinary degenerate literal.
    fn delimited<T>(
        &mut self,
        container: ContainerKind,
        mut element: impl FnMut(&mut Self) -> Result<Option<T>, ParseError>,
    ) -> Result<Vec<T>, ParseError> {
        let closing = container.closing();
        let mut items = Vec::new();

        while self.peek_kind().is_some_and(|kind| kind != closing) && !self.at_end_of_input() {
            if let Some(item) = element(self)? {
                items.push(item);
            }
            if self.check_token(TokenKind::Comma).is_some() && self.peek_kind() == Some(closing) {
                return Err(ParseError::UnterminatedContainer {
                    container,
                    trailing_comma: true,
                    position: self.position,
                });
            }
        }

        if self.check_token(closing).is_none() {
            return Err(ParseError::UnterminatedContainer {
                container,
                trailing_comma: false,
                position: self.position,
            });
        }
        Ok(items)
    }

    // key-pair := data-literal ('=>' | ':')? data-literal
    fn key_pair(&mut self) -> Result<KeyPair, ParseError> {
        let key = self.data_literal()?;

        let value = match self.peek_kind() {
            Some(TokenKind::RightArrow) | Some(TokenKind::Colon) => {
                self.advance();
                self.data_literal()?
            }
            // `name: value`: the colon is already part of the KEY lexeme
            Some(kind) if kind.starts_literal() => self.data_literal()?,
            _ => None,
        };

        match (key, value) {
            (Some(key), Some(value)) => Ok(KeyPair::new(key, value)),
            _ => Err(ParseError::InvalidKeyPair {
                position: self.position,
            }),
        }
    }

    fn peek_kind(&mut self) -> Option<TokenKind> {
        self.tokens.peek().map(|token| token.kind)
    }

    /// Only the synthetic EOF token is left.
    fn at_end_of_input(&mut self) -> bool {
        self.tokens.len() == 1 && self.peek_kind() == Some(TokenKind::Eof)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.next()?;
        self.position = token.position();
        Some(token)
    }

    /// Consume the next token if it is of `kind`.
    fn check_token(&mut self, kind: TokenKind) -> Option<Token> {
        if self.peek_kind() == Some(kind) {
            self.advance()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exdata::lexing::tokenize;

    fn parse_source(source: &str) -> Result<Sentence, ParseError> {
        Parser::new(tokenize(source).expect("source to tokenize")).parse()
    }

    fn int(text: &str) -> DataLiteral {
        DataLiteral::Integer(text.to_string())
    }

    #[test]
    fn test_empty_sentence() {
        assert_eq!(parse_source("").unwrap(), Sentence::default());
    }

    #[test]
    fn test_sentence_keeps_order() {
        let sentence = parse_source("1 :a true").unwrap();
        assert_eq!(
            sentence.items,
            vec![
                int("1"),
                DataLiteral::Atom(":a".into()),
                DataLiteral::Boolean("true".into()),
            ]
        );
    }

    #[test]
    fn test_nested_containers() {
        let sentence = parse_source("[1, {2, [3]}]").unwrap();
        assert_eq!(
            sentence.items,
            vec![DataLiteral::List(vec![
                int("1"),
                DataLiteral::Tuple(vec![int("2"), DataLiteral::List(vec![int("3")])]),
            ])]
        );
    }

    #[test]
    fn test_commas_are_optional() {
        let sentence = parse_source("[1 2]").unwrap();
        assert_eq!(sentence.items, vec![DataLiteral::List(vec![int("1"), int("2")])]);
    }

    #[test]
    fn test_map_connectors() {
        let sentence = parse_source("%{:a => 1, :b : 2, c: 3}").unwrap();
        assert_eq!(
            sentence.items,
            vec![DataLiteral::Map(vec![
                KeyPair::new(DataLiteral::Atom(":a".into()), int("1")),
                KeyPair::new(DataLiteral::Atom(":b".into()), int("2")),
                KeyPair::new(DataLiteral::Key("c:".into()), int("3")),
            ])]
        );
    }

    #[test]
    fn test_trailing_comma_is_rejected() {
        for source in ["[1,]", "{1,}", "%{a: 1,}"] {
            match parse_source(source) {
                Err(ParseError::UnterminatedContainer { trailing_comma, .. }) => {
                    assert!(trailing_comma, "{source}")
                }
                other => panic!("{source}: expected trailing comma error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_missing_close_is_rejected() {
        assert!(matches!(
            parse_source("[1, 2"),
            Err(ParseError::UnterminatedContainer {
                container: ContainerKind::List,
                trailing_comma: false,
                ..
            })
        ));
        assert!(matches!(
            parse_source("%{a: 1"),
            Err(ParseError::UnterminatedContainer {
                container: ContainerKind::Map,
                ..
            })
        ));
    }

    #[test]
    fn test_key_pair_without_value_at_end_of_input() {
        assert!(matches!(
            parse_source("%{a: "),
            Err(ParseError::InvalidKeyPair { .. })
        ));
        assert!(matches!(
            parse_source("%{:a =>"),
            Err(ParseError::InvalidKeyPair { .. })
        ));
    }

    #[test]
    fn test_written_eof_inside_list_is_skipped() {
        assert_eq!(
            parse_source("[1 <EOF> 2]").unwrap().items,
            vec![DataLiteral::List(vec![int("1"), int("2")])]
        );
    }

    #[test]
    fn test_stray_tokens_are_rejected() {
        for source in [",", "]", "1 }", "_", "[,]"] {
            assert!(
                matches!(parse_source(source), Err(ParseError::UnexpectedToken { .. })),
                "{source}"
            );
        }
    }

    #[test]
    fn test_degenerate_connector_is_skipped() {
        assert_eq!(
            parse_source("[1 : 2]").unwrap().items,
            vec![DataLiteral::List(vec![int("1"), int("2")])]
        );
        assert_eq!(parse_source("=> 1").unwrap().items, vec![int("1")]);
    }

    #[test]
    fn test_doubled_connector_is_rejected() {
        assert!(matches!(
            parse_source("[: :]"),
            Err(ParseError::UnexpectedToken {
                found: Some(TokenKind::Colon),
                ..
            })
        ));
    }

    #[test]
    fn test_key_pair_without_value() {
        assert!(matches!(
            parse_source("%{a: }"),
            Err(ParseError::InvalidKeyPair { .. })
        ));
        assert!(matches!(
            parse_source("%{=> 1}"),
            Err(ParseError::InvalidKeyPair { .. })
        ));
    }
}
