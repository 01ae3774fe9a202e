//! Parsing module for exdata
//!
//!     Recursive descent over the token stream produced by [lexing](crate::exdata::lexing),
//!     one function per production:
//!
//!         language     := sentence
//!         sentence     := { data-literal }
//!         data-literal := list | tuple | map | atom | key | value | integer | boolean
//!         list         := '[' [ data-literal { ',' data-literal } ] ']'
//!         tuple        := '{' [ data-literal { ',' data-literal } ] '}'
//!         map          := '%{' [ key-pair { ',' key-pair } ] '}'
//!         key-pair     := data-literal '=>' data-literal
//!                       | data-literal ':' data-literal
//!                       | data-literal data-literal
//!
//!     The parser looks at one token to decide which production to take and never backtracks.
//!     Every failure aborts the whole parse: there is no recovery and no partial tree.
//!
//! Degenerate Literals
//!
//!     A bare `:`, `=>` or EOF token found where a literal is expected is consumed and
//!     produces no node, as long as the next token is not the same kind again. This is how the
//!     trailing EOF token closes a sentence, and it also means `[1 : 2]` parses as `[1, 2]`.
//!     A doubled connector (`[: :]`) is an error.
//!
//! Separators
//!
//!     Commas between container elements are optional (`[1 2]` is a two element list), but a
//!     comma directly before the closing bracket is rejected.

pub mod common;
pub mod parser;

pub use common::{ContainerKind, ParseError};
pub use parser::Parser;

use crate::exdata::ast::Sentence;
use crate::exdata::token::Token;

/// Parse a token stream (as returned by [`tokenize`](crate::exdata::lexing::tokenize)).
pub fn parse(tokens: Vec<Token>) -> Result<Sentence, ParseError> {
    Parser::new(tokens).parse()
}
