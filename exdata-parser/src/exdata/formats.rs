//! Output formats for parsed documents
//!
//!     [tag] is the primary format: the AST as a tagged tree of `serde_json::Value`s, rendered
//!     as JSON. [treeviz] is a one-line-per-node view meant for people reading the structure.

pub mod tag;
pub mod treeviz;

pub use tag::{render_tagged, to_tagged_tree, KIND_KEY, VALUE_KEY};
pub use treeviz::to_treeviz_str;
