//! # exdata
//!
//! A parser for exdata literal documents: integers, atoms, booleans, lists, tuples and maps,
//! translated into a self-describing tagged tree.
//!
//! File Layout
//!
//! The crate follows the pipeline stages, each module only depending on the ones before it:
//! src/exdata
//!   ├── token        Token kinds and the token type
//!   ├── lexing       Ordered first-match tokenizer
//!   ├── ast          Sentence / DataLiteral / KeyPair nodes
//!   ├── parsing      Recursive descent parser
//!   ├── formats      Tagged tree serializer and the treeviz view
//!   └── pipeline     Source text to rendered output, in one call
//!
//! For testing helpers (fluent AST assertions, token factories) see the
//! [testing module](exdata::testing).

pub mod exdata;

pub use exdata::pipeline::{parse_document, OutputFormat, Pipeline, PipelineError};
