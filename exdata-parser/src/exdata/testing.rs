//! Testing utilities for exdata
//!
//!     Parser tests should check the structure they care about, not just counts. The fluent
//!     [`assert_ast`] API walks a parsed [`Sentence`](crate::exdata::ast::Sentence) and panics
//!     with a path to the offending node:
//!
//!         assert_ast(&sentence).item_count(1).item(0, |item| {
//!             item.assert_map().pair_count(1).pair(0, |key, value| {
//!                 key.assert_key("name:");
//!                 value.assert_atom(":bob");
//!             });
//!         });
//!
//!     [factories] builds expected token streams for tokenizer tests.

pub mod ast_assertions;
pub mod factories;

pub use ast_assertions::{assert_ast, ContainerAssertion, LiteralAssertion, MapAssertion};
