//! AST traits - Common interfaces for uniform node access

use super::elements::{DataLiteral, KeyPair, Sentence};

/// Visitor trait for traversing the AST
///
/// Every literal, container or leaf, is announced with [`Visitor::visit_literal`] before its
/// children and [`Visitor::leave_literal`] after them. Default implementations are empty, so
/// you only need to override the methods you care about.
///
/// # Example
///
/// ```ignore
/// struct LeafCounter(usize);
///
/// impl Visitor for LeafCounter {
///     fn visit_literal(&mut self, literal: &DataLiteral) {
///         if !literal.is_container() {
///             self.0 += 1;
///         }
///     }
/// }
///
/// let mut counter = LeafCounter(0);
/// sentence.accept(&mut counter);
/// ```
pub trait Visitor {
    fn visit_sentence(&mut self, _sentence: &Sentence) {}
    fn leave_sentence(&mut self, _sentence: &Sentence) {}

    fn visit_literal(&mut self, _literal: &DataLiteral) {}
    fn leave_literal(&mut self, _literal: &DataLiteral) {}

    fn visit_key_pair(&mut self, _pair: &KeyPair) {}
    fn leave_key_pair(&mut self, _pair: &KeyPair) {}
}

/// Common interface for all AST nodes
pub trait AstNode {
    fn node_type(&self) -> &'static str;
    fn display_label(&self) -> String;

    /// Accept a visitor for traversing this node and its children
    fn accept(&self, visitor: &mut dyn Visitor);
}
