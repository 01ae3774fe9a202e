//! Element definitions

use super::traits::{AstNode, Visitor};

/// The root of a parsed document: the top level literals, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sentence {
    pub items: Vec<DataLiteral>,
}

impl Sentence {
    pub fn new(items: Vec<DataLiteral>) -> Self {
        Self { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Any literal that can appear in a sentence, a container or a key-pair.
///
/// Leaf variants hold the lexeme exactly as matched, e.g. `Integer("1_000")`,
/// `Atom(":ok")`, `Key("name:")`, `Value("'12_3'")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataLiteral {
    List(Vec<DataLiteral>),
    Tuple(Vec<DataLiteral>),
    Map(Vec<KeyPair>),
    Integer(String),
    Atom(String),
    Key(String),
    Boolean(String),
    Value(String),
}

impl DataLiteral {
    /// Lexeme of a leaf literal, `None` for containers.
    pub fn text(&self) -> Option<&str> {
        match self {
            DataLiteral::Integer(text)
            | DataLiteral::Atom(text)
            | DataLiteral::Key(text)
            | DataLiteral::Boolean(text)
            | DataLiteral::Value(text) => Some(text),
            DataLiteral::List(_) | DataLiteral::Tuple(_) | DataLiteral::Map(_) => None,
        }
    }

    pub fn is_container(&self) -> bool {
        self.text().is_none()
    }
}

/// One `key => value`, `key : value` or `key: value` entry of a map literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    pub key: DataLiteral,
    pub value: DataLiteral,
}

impl KeyPair {
    pub fn new(key: DataLiteral, value: DataLiteral) -> Self {
        Self { key, value }
    }
}

impl AstNode for Sentence {
    fn node_type(&self) -> &'static str {
        "Sentence"
    }

    fn display_label(&self) -> String {
        item_count_label(self.items.len())
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_sentence(self);
        for item in &self.items {
            item.accept(visitor);
        }
        visitor.leave_sentence(self);
    }
}

impl AstNode for DataLiteral {
    fn node_type(&self) -> &'static str {
        match self {
            DataLiteral::List(_) => "List",
            DataLiteral::Tuple(_) => "Tuple",
            DataLiteral::Map(_) => "Map",
            DataLiteral::Integer(_) => "Integer",
            DataLiteral::Atom(_) => "Atom",
            DataLiteral::Key(_) => "Key",
            DataLiteral::Boolean(_) => "Boolean",
            DataLiteral::Value(_) => "Value",
        }
    }

    fn display_label(&self) -> String {
        match self {
            DataLiteral::List(items) | DataLiteral::Tuple(items) => item_count_label(items.len()),
            DataLiteral::Map(pairs) => match pairs.len() {
                1 => "1 pair".to_string(),
                n => format!("{} pairs", n),
            },
            DataLiteral::Integer(text)
            | DataLiteral::Atom(text)
            | DataLiteral::Key(text)
            | DataLiteral::Boolean(text)
            | DataLiteral::Value(text) => text.clone(),
        }
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_literal(self);
        match self {
            DataLiteral::List(items) | DataLiteral::Tuple(items) => {
                for item in items {
                    item.accept(visitor);
                }
            }
            DataLiteral::Map(pairs) => {
                for pair in pairs {
                    pair.accept(visitor);
                }
            }
            _ => {}
        }
        visitor.leave_literal(self);
    }
}

impl AstNode for KeyPair {
    fn node_type(&self) -> &'static str {
        "KeyPair"
    }

    fn display_label(&self) -> String {
        format!("{} => {}", self.key.display_label(), self.value.display_label())
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_key_pair(self);
        self.key.accept(visitor);
        self.value.accept(visitor);
        visitor.leave_key_pair(self);
    }
}

fn item_count_label(count: usize) -> String {
    match count {
        1 => "1 item".to_string(),
        n => format!("{} items", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_text() {
        assert_eq!(DataLiteral::Key("name:".into()).text(), Some("name:"));
        assert_eq!(DataLiteral::List(vec![]).text(), None);
        assert!(DataLiteral::Map(vec![]).is_container());
    }

    #[test]
    fn test_display_labels() {
        let map = DataLiteral::Map(vec![KeyPair::new(
            DataLiteral::Key("a:".into()),
            DataLiteral::Integer("1".into()),
        )]);
        assert_eq!(map.display_label(), "1 pair");
        assert_eq!(
            DataLiteral::Tuple(vec![map.clone(), map]).display_label(),
            "2 items"
        );
        assert_eq!(Sentence::default().display_label(), "0 items");
    }
}
