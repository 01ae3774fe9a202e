//! Fluent assertion API for AST nodes

use crate::exdata::ast::{AstNode, DataLiteral, KeyPair, Sentence};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a sentence
pub fn assert_ast(sentence: &Sentence) -> ContainerAssertion<'_> {
    ContainerAssertion {
        items: &sentence.items,
        context: "sentence".to_string(),
    }
}

// ============================================================================
// Literal Assertions
// ============================================================================

pub struct LiteralAssertion<'a> {
    pub(crate) literal: &'a DataLiteral,
    pub(crate) context: String,
}

impl<'a> LiteralAssertion<'a> {
    /// Assert this literal is a list and return container assertions over its items
    pub fn assert_list(self) -> ContainerAssertion<'a> {
        match self.literal {
            DataLiteral::List(items) => ContainerAssertion {
                items,
                context: self.context,
            },
            _ => self.wrong_kind("List"),
        }
    }

    /// Assert this literal is a tuple and return container assertions over its items
    pub fn assert_tuple(self) -> ContainerAssertion<'a> {
        match self.literal {
            DataLiteral::Tuple(items) => ContainerAssertion {
                items,
                context: self.context,
            },
            _ => self.wrong_kind("Tuple"),
        }
    }

    /// Assert this literal is a map and return map assertions over its pairs
    pub fn assert_map(self) -> MapAssertion<'a> {
        match self.literal {
            DataLiteral::Map(pairs) => MapAssertion {
                pairs,
                context: self.context,
            },
            _ => self.wrong_kind("Map"),
        }
    }

    pub fn assert_integer(self, text: &str) {
        self.assert_leaf("Integer", text);
    }

    pub fn assert_atom(self, text: &str) {
        self.assert_leaf("Atom", text);
    }

    pub fn assert_key(self, text: &str) {
        self.assert_leaf("Key", text);
    }

    pub fn assert_boolean(self, text: &str) {
        self.assert_leaf("Boolean", text);
    }

    pub fn assert_value(self, text: &str) {
        self.assert_leaf("Value", text);
    }

    fn assert_leaf(&self, expected_type: &str, text: &str) {
        assert_eq!(
            self.literal.node_type(),
            expected_type,
            "{}: Expected {}, found {}",
            self.context,
            expected_type,
            self.literal.node_type()
        );
        assert_eq!(
            self.literal.text(),
            Some(text),
            "{}: {} text mismatch",
            self.context,
            expected_type
        );
    }

    fn wrong_kind(&self, expected_type: &str) -> ! {
        panic!(
            "{}: Expected {}, found {}",
            self.context,
            expected_type,
            self.literal.node_type()
        )
    }
}

// ============================================================================
// Container Assertions (sentence, list, tuple)
// ============================================================================

pub struct ContainerAssertion<'a> {
    pub(crate) items: &'a [DataLiteral],
    pub(crate) context: String,
}

impl<'a> ContainerAssertion<'a> {
    pub fn item_count(self, expected: usize) -> Self {
        assert_eq!(
            self.items.len(),
            expected,
            "{}: Expected {} items, found {}",
            self.context,
            expected,
            self.items.len()
        );
        self
    }

    pub fn is_empty(self) -> Self {
        self.item_count(0)
    }

    pub fn item<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(LiteralAssertion<'a>),
    {
        let literal = self.items.get(index).unwrap_or_else(|| {
            panic!(
                "{}: Item index {} out of bounds ({} items)",
                self.context,
                index,
                self.items.len()
            )
        });
        assertion(LiteralAssertion {
            literal,
            context: format!("{}[{}]", self.context, index),
        });
        self
    }
}

// ============================================================================
// Map Assertions
// ============================================================================

pub struct MapAssertion<'a> {
    pub(crate) pairs: &'a [KeyPair],
    pub(crate) context: String,
}

impl<'a> MapAssertion<'a> {
    pub fn pair_count(self, expected: usize) -> Self {
        assert_eq!(
            self.pairs.len(),
            expected,
            "{}: Expected {} pairs, found {}",
            self.context,
            expected,
            self.pairs.len()
        );
        self
    }

    /// Run `assertion` on the key and the value of pair `index`
    pub fn pair<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(LiteralAssertion<'a>, LiteralAssertion<'a>),
    {
        let pair = self.pairs.get(index).unwrap_or_else(|| {
            panic!(
                "{}: Pair index {} out of bounds ({} pairs)",
                self.context,
                index,
                self.pairs.len()
            )
        });
        assertion(
            LiteralAssertion {
                literal: &pair.key,
                context: format!("{}[{}].key", self.context, index),
            },
            LiteralAssertion {
                literal: &pair.value,
                context: format!("{}[{}].value", self.context, index),
            },
        );
        self
    }
}
