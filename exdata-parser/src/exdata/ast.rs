//! AST for exdata documents
//!
//!     The tree is small: a [`Sentence`] holds the top level literals, a
//!     [`DataLiteral`] is one closed enum over every literal kind, and a [`KeyPair`] is one
//!     entry of a map literal. Nodes own their children outright; there is no sharing and no
//!     parent links.
//!
//!     Leaves keep the exact lexeme they were parsed from. Interpreting that text (numeric
//!     value of an integer, reversal of a key) is the serializer's job, see
//!     [tag](crate::exdata::formats::tag).

pub mod elements;
pub mod traits;

pub use elements::{DataLiteral, KeyPair, Sentence};
pub use traits::{AstNode, Visitor};
